//! Nạp Âm: the element assigned to each sexagenary Can-Chi pair.
//!
//! The 60 pairs fall into 30 consecutive couples; both members of a couple
//! share one named sound-element (e.g. Giáp Tý and Ất Sửu are Hải Trung Kim).
//!
//! Clean-room: traditional Nạp Âm table, public domain.

use serde::{Serialize, Serializer};
use tuvi_calendar::{CanChi, DiaChi, NguHanh, ThienCan};

/// The 30 Nạp Âm sound-elements in sexagenary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NapAm {
    HaiTrungKim,
    LoTrungHoa,
    DaiLamMoc,
    LoBangTho,
    KiemPhongKim,
    SonDauHoa,
    GianHaThuy,
    ThanhDauTho,
    BachLapKim,
    DuongLieuMoc,
    TuyenTrungThuy,
    OcThuongTho,
    TichLichHoa,
    TungBachMoc,
    TruongLuuThuy,
    SaTrungKim,
    SonHaHoa,
    BinhDiaMoc,
    BichThuongTho,
    KimBachKim,
    PhucDangHoa,
    ThienHaThuy,
    DaiDichTho,
    ThoaXuyenKim,
    TangDoMoc,
    DaiKheThuy,
    SaTrungTho,
    ThienThuongHoa,
    ThachLuuMoc,
    DaiHaiThuy,
}

/// All 30 Nạp Âm in order (index 0 = Hải Trung Kim, covering Giáp Tý and Ất Sửu).
pub const ALL_NAP_AM: [NapAm; 30] = [
    NapAm::HaiTrungKim,
    NapAm::LoTrungHoa,
    NapAm::DaiLamMoc,
    NapAm::LoBangTho,
    NapAm::KiemPhongKim,
    NapAm::SonDauHoa,
    NapAm::GianHaThuy,
    NapAm::ThanhDauTho,
    NapAm::BachLapKim,
    NapAm::DuongLieuMoc,
    NapAm::TuyenTrungThuy,
    NapAm::OcThuongTho,
    NapAm::TichLichHoa,
    NapAm::TungBachMoc,
    NapAm::TruongLuuThuy,
    NapAm::SaTrungKim,
    NapAm::SonHaHoa,
    NapAm::BinhDiaMoc,
    NapAm::BichThuongTho,
    NapAm::KimBachKim,
    NapAm::PhucDangHoa,
    NapAm::ThienHaThuy,
    NapAm::DaiDichTho,
    NapAm::ThoaXuyenKim,
    NapAm::TangDoMoc,
    NapAm::DaiKheThuy,
    NapAm::SaTrungTho,
    NapAm::ThienThuongHoa,
    NapAm::ThachLuuMoc,
    NapAm::DaiHaiThuy,
];

impl NapAm {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HaiTrungKim => "Hải Trung Kim",
            Self::LoTrungHoa => "Lô Trung Hỏa",
            Self::DaiLamMoc => "Đại Lâm Mộc",
            Self::LoBangTho => "Lộ Bàng Thổ",
            Self::KiemPhongKim => "Kiếm Phong Kim",
            Self::SonDauHoa => "Sơn Đầu Hỏa",
            Self::GianHaThuy => "Giản Hạ Thủy",
            Self::ThanhDauTho => "Thành Đầu Thổ",
            Self::BachLapKim => "Bạch Lạp Kim",
            Self::DuongLieuMoc => "Dương Liễu Mộc",
            Self::TuyenTrungThuy => "Tuyền Trung Thủy",
            Self::OcThuongTho => "Ốc Thượng Thổ",
            Self::TichLichHoa => "Tích Lịch Hỏa",
            Self::TungBachMoc => "Tùng Bách Mộc",
            Self::TruongLuuThuy => "Trường Lưu Thủy",
            Self::SaTrungKim => "Sa Trung Kim",
            Self::SonHaHoa => "Sơn Hạ Hỏa",
            Self::BinhDiaMoc => "Bình Địa Mộc",
            Self::BichThuongTho => "Bích Thượng Thổ",
            Self::KimBachKim => "Kim Bạch Kim",
            Self::PhucDangHoa => "Phúc Đăng Hỏa",
            Self::ThienHaThuy => "Thiên Hà Thủy",
            Self::DaiDichTho => "Đại Dịch Thổ",
            Self::ThoaXuyenKim => "Thoa Xuyến Kim",
            Self::TangDoMoc => "Tang Đố Mộc",
            Self::DaiKheThuy => "Đại Khê Thủy",
            Self::SaTrungTho => "Sa Trung Thổ",
            Self::ThienThuongHoa => "Thiên Thượng Hỏa",
            Self::ThachLuuMoc => "Thạch Lựu Mộc",
            Self::DaiHaiThuy => "Đại Hải Thủy",
        }
    }

    /// Short plain-language meaning.
    pub const fn description(self) -> &'static str {
        match self {
            Self::HaiTrungKim => "Vàng trong biển",
            Self::LoTrungHoa => "Lửa trong lò",
            Self::DaiLamMoc => "Gỗ rừng lớn",
            Self::LoBangTho => "Đất bên đường",
            Self::KiemPhongKim => "Vàng mũi kiếm",
            Self::SonDauHoa => "Lửa trên núi",
            Self::GianHaThuy => "Nước dưới khe",
            Self::ThanhDauTho => "Đất đầu thành",
            Self::BachLapKim => "Vàng trong nến",
            Self::DuongLieuMoc => "Gỗ cây liễu",
            Self::TuyenTrungThuy => "Nước trong suối",
            Self::OcThuongTho => "Đất trên mái",
            Self::TichLichHoa => "Lửa sấm sét",
            Self::TungBachMoc => "Gỗ tùng bách",
            Self::TruongLuuThuy => "Nước chảy dài",
            Self::SaTrungKim => "Vàng trong cát",
            Self::SonHaHoa => "Lửa chân núi",
            Self::BinhDiaMoc => "Gỗ đồng bằng",
            Self::BichThuongTho => "Đất trên tường",
            Self::KimBachKim => "Vàng pha bạch kim",
            Self::PhucDangHoa => "Lửa ngọn đèn",
            Self::ThienHaThuy => "Nước sông Ngân",
            Self::DaiDichTho => "Đất trạm lớn",
            Self::ThoaXuyenKim => "Vàng trang sức",
            Self::TangDoMoc => "Gỗ cây dâu",
            Self::DaiKheThuy => "Nước khe lớn",
            Self::SaTrungTho => "Đất trong cát",
            Self::ThienThuongHoa => "Lửa trên trời",
            Self::ThachLuuMoc => "Gỗ cây lựu đá",
            Self::DaiHaiThuy => "Nước biển lớn",
        }
    }

    /// Element carried by the sound.
    pub const fn element(self) -> NguHanh {
        match self {
            Self::HaiTrungKim
            | Self::KiemPhongKim
            | Self::BachLapKim
            | Self::SaTrungKim
            | Self::KimBachKim
            | Self::ThoaXuyenKim => NguHanh::Kim,
            Self::DaiLamMoc
            | Self::DuongLieuMoc
            | Self::TungBachMoc
            | Self::BinhDiaMoc
            | Self::TangDoMoc
            | Self::ThachLuuMoc => NguHanh::Moc,
            Self::GianHaThuy
            | Self::TuyenTrungThuy
            | Self::TruongLuuThuy
            | Self::ThienHaThuy
            | Self::DaiKheThuy
            | Self::DaiHaiThuy => NguHanh::Thuy,
            Self::LoTrungHoa
            | Self::SonDauHoa
            | Self::TichLichHoa
            | Self::SonHaHoa
            | Self::PhucDangHoa
            | Self::ThienThuongHoa => NguHanh::Hoa,
            Self::LoBangTho
            | Self::ThanhDauTho
            | Self::OcThuongTho
            | Self::BichThuongTho
            | Self::DaiDichTho
            | Self::SaTrungTho => NguHanh::Tho,
        }
    }

    /// 0-based index (Hải Trung Kim=0 .. Đại Hải Thủy=29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nạp Âm of a Can-Chi pair.
    pub const fn of(pair: CanChi) -> NapAm {
        ALL_NAP_AM[(pair.sexagenary_index() / 2) as usize]
    }

    /// Nạp Âm of a stem and branch.
    pub const fn from_can_chi(can: ThienCan, chi: DiaChi) -> NapAm {
        Self::of(CanChi { can, chi })
    }

    /// All 30 Nạp Âm in order.
    pub const fn all() -> &'static [NapAm; 30] {
        &ALL_NAP_AM
    }
}

impl Serialize for NapAm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuvi_calendar::year_can_chi;

    #[test]
    fn all_nap_am_count() {
        assert_eq!(ALL_NAP_AM.len(), 30);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAP_AM.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn six_of_each_element() {
        for e in NguHanh::all() {
            let count = ALL_NAP_AM.iter().filter(|n| n.element() == *e).count();
            assert_eq!(count, 6, "{}", e.name());
        }
    }

    #[test]
    fn couples_share_sound() {
        for i in (0..60).step_by(2) {
            let a = NapAm::of(CanChi::from_sexagenary(i));
            let b = NapAm::of(CanChi::from_sexagenary(i + 1));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn known_years() {
        assert_eq!(NapAm::of(year_can_chi(1984)), NapAm::HaiTrungKim);
        assert_eq!(NapAm::of(year_can_chi(1995)), NapAm::SonDauHoa);
        assert_eq!(NapAm::of(year_can_chi(2024)), NapAm::PhucDangHoa);
        assert_eq!(NapAm::of(year_can_chi(2043)), NapAm::DaiHaiThuy);
    }

    #[test]
    fn known_pairs() {
        assert_eq!(
            NapAm::from_can_chi(ThienCan::Dinh, DiaChi::Hoi),
            NapAm::OcThuongTho
        );
        assert_eq!(
            NapAm::from_can_chi(ThienCan::Binh, DiaChi::Dan),
            NapAm::LoTrungHoa
        );
    }
}
