//! Star brightness (độ sáng) per branch.
//!
//! Five grades from strongest to weakest: Miếu, Vượng, Đắc, Bình, Hãm.
//! Stars without a traditional table are Bình everywhere.

use serde::{Serialize, Serializer};
use tuvi_calendar::DiaChi;

use super::types::Star;

/// Brightness grade of a star on a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Brightness {
    /// Miếu: strongest.
    Mieu,
    /// Vượng: prosperous.
    Vuong,
    /// Đắc: favourable.
    Dac,
    /// Bình: neutral.
    Binh,
    /// Hãm: weakened.
    Ham,
}

impl Brightness {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mieu => "Miếu",
            Self::Vuong => "Vượng",
            Self::Dac => "Đắc",
            Self::Binh => "Bình",
            Self::Ham => "Hãm",
        }
    }

    /// One-letter chart symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mieu => "M",
            Self::Vuong => "V",
            Self::Dac => "Đ",
            Self::Binh => "B",
            Self::Ham => "H",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Mieu => "MIEU",
            Self::Vuong => "VUONG",
            Self::Dac => "DAC",
            Self::Binh => "BINH",
            Self::Ham => "HAM",
        }
    }
}

impl Serialize for Brightness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

use Brightness::{Binh as B, Dac as D, Ham as H, Mieu as M, Vuong as V};

/// Per-branch grades, indexed Tý..Hợi.
type Table = [Brightness; 12];

const NEUTRAL: Table = [B; 12];

const TU_VI: Table = [B, D, M, B, V, M, M, D, M, B, V, B];
const THIEN_CO: Table = [D, D, H, M, M, V, D, D, V, M, M, H];
const THAI_DUONG: Table = [H, D, V, V, V, M, M, D, H, H, H, H];
const VU_KHUC: Table = [V, M, V, D, M, H, V, M, V, D, M, H];
const THIEN_DONG: Table = [V, H, M, D, H, D, H, H, M, H, H, D];
const LIEM_TRINH: Table = [V, D, V, H, M, H, V, D, V, H, M, H];
const THIEN_PHU: Table = [M, B, M, B, V, D, M, D, M, B, V, D];
const THAI_AM: Table = [V, D, H, H, H, H, H, D, V, M, M, M];
const THAM_LANG: Table = [H, M, D, H, V, H, H, M, D, H, V, H];
const CU_MON: Table = [V, H, V, M, H, H, V, H, D, M, H, D];
const THIEN_TUONG: Table = [V, D, M, H, V, D, V, D, M, H, V, D];
const THIEN_LUONG: Table = [V, D, V, V, M, H, M, D, V, H, M, H];
const THAT_SAT: Table = [M, D, M, H, H, V, M, D, M, H, H, V];
const PHA_QUAN: Table = [M, V, H, H, D, H, M, V, H, H, D, H];
const XUONG_KHUC: Table = [V, M, H, D, V, M, H, D, V, M, H, D];
const KINH_DUONG: Table = [H, M, B, H, M, B, H, M, B, H, M, B];
const DA_LA: Table = [B, M, H, B, M, H, B, M, H, B, M, H];
const HOA_LINH: Table = [H, B, M, M, B, M, M, B, H, H, B, H];
const KHONG_KIEP: Table = [H, H, D, H, H, D, H, H, D, H, H, D];
const THIEN_MA: Table = [B, B, D, B, B, D, B, B, B, B, B, B];

fn table(star: Star) -> &'static Table {
    match star {
        Star::TuVi => &TU_VI,
        Star::ThienCo => &THIEN_CO,
        Star::ThaiDuong => &THAI_DUONG,
        Star::VuKhuc => &VU_KHUC,
        Star::ThienDong => &THIEN_DONG,
        Star::LiemTrinh => &LIEM_TRINH,
        Star::ThienPhu => &THIEN_PHU,
        Star::ThaiAm => &THAI_AM,
        Star::ThamLang => &THAM_LANG,
        Star::CuMon => &CU_MON,
        Star::ThienTuong => &THIEN_TUONG,
        Star::ThienLuong => &THIEN_LUONG,
        Star::ThatSat => &THAT_SAT,
        Star::PhaQuan => &PHA_QUAN,
        Star::VanXuong => &XUONG_KHUC,
        Star::VanKhuc => &XUONG_KHUC,
        Star::KinhDuong => &KINH_DUONG,
        Star::DaLa => &DA_LA,
        Star::HoaTinh => &HOA_LINH,
        Star::LinhTinh => &HOA_LINH,
        Star::DiaKhong => &KHONG_KIEP,
        Star::DiaKiep => &KHONG_KIEP,
        Star::ThienMa => &THIEN_MA,
        _ => &NEUTRAL,
    }
}

/// Brightness of `star` when placed on `branch`.
pub fn brightness(star: Star, branch: DiaChi) -> Brightness {
    table(star)[branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tu_vi_row() {
        assert_eq!(brightness(Star::TuVi, DiaChi::Ty), Brightness::Binh);
        assert_eq!(brightness(Star::TuVi, DiaChi::Dan), Brightness::Mieu);
        assert_eq!(brightness(Star::TuVi, DiaChi::Mao), Brightness::Binh);
        assert_eq!(brightness(Star::TuVi, DiaChi::Thin), Brightness::Vuong);
    }

    #[test]
    fn sun_and_moon_mirror() {
        assert_eq!(brightness(Star::ThaiDuong, DiaChi::Ngo), Brightness::Mieu);
        assert_eq!(brightness(Star::ThaiDuong, DiaChi::Ty), Brightness::Ham);
        assert_eq!(brightness(Star::ThaiAm, DiaChi::Hoi), Brightness::Mieu);
        assert_eq!(brightness(Star::ThaiAm, DiaChi::Ngo), Brightness::Ham);
    }

    #[test]
    fn unlisted_stars_are_neutral() {
        for b in DiaChi::all() {
            assert_eq!(brightness(Star::ThaiTue, *b), Brightness::Binh);
            assert_eq!(brightness(Star::TruongSinh, *b), Brightness::Binh);
            assert_eq!(brightness(Star::HoaLoc, *b), Brightness::Binh);
        }
    }

    #[test]
    fn kinh_and_da_share_earth_branches() {
        for b in [DiaChi::Thin, DiaChi::Tuat, DiaChi::Suu, DiaChi::Mui] {
            assert_eq!(brightness(Star::KinhDuong, b), Brightness::Mieu);
            assert_eq!(brightness(Star::DaLa, b), Brightness::Mieu);
        }
        assert_eq!(brightness(Star::KinhDuong, DiaChi::Ngo), Brightness::Ham);
        assert_eq!(brightness(Star::DaLa, DiaChi::Dan), Brightness::Ham);
    }

    #[test]
    fn thien_ma_favoured_at_dan_and_ti() {
        assert_eq!(brightness(Star::ThienMa, DiaChi::Dan), Brightness::Dac);
        assert_eq!(brightness(Star::ThienMa, DiaChi::Ti), Brightness::Dac);
        assert_eq!(brightness(Star::ThienMa, DiaChi::Than), Brightness::Binh);
    }

    #[test]
    fn grades_ordered_strongest_first() {
        assert!(Brightness::Mieu < Brightness::Vuong);
        assert!(Brightness::Binh < Brightness::Ham);
    }
}
