//! The twelve palaces (cung), their placement and the chart direction.
//!
//! Mệnh and Thân are anchored on Dần for lunar month 1 and walk with the
//! month and the birth hour. The twelve roles are then laid out from Mệnh
//! in decreasing branch order. Direction (Thuận/Nghịch) never changes the
//! role↔branch mapping; it only steers stars and cycles that walk.

use std::str::FromStr;

use serde::{Serialize, Serializer};
use tuvi_calendar::{AmDuong, DiaChi, ThienCan};

/// The 12 palace roles, in layout order from Mệnh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CungName {
    Menh,
    PhuMau,
    PhucDuc,
    DienTrach,
    QuanLoc,
    NoBoc,
    ThienDi,
    TatAch,
    TaiBach,
    TuTuc,
    PhuThe,
    HuynhDe,
}

/// All 12 palace roles in layout order (index 0 = Mệnh).
pub const ALL_CUNG: [CungName; 12] = [
    CungName::Menh,
    CungName::PhuMau,
    CungName::PhucDuc,
    CungName::DienTrach,
    CungName::QuanLoc,
    CungName::NoBoc,
    CungName::ThienDi,
    CungName::TatAch,
    CungName::TaiBach,
    CungName::TuTuc,
    CungName::PhuThe,
    CungName::HuynhDe,
];

impl CungName {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Menh => "Mệnh",
            Self::PhuMau => "Phụ Mẫu",
            Self::PhucDuc => "Phúc Đức",
            Self::DienTrach => "Điền Trạch",
            Self::QuanLoc => "Quan Lộc",
            Self::NoBoc => "Nô Bộc",
            Self::ThienDi => "Thiên Di",
            Self::TatAch => "Tật Ách",
            Self::TaiBach => "Tài Bạch",
            Self::TuTuc => "Tử Tức",
            Self::PhuThe => "Phu Thê",
            Self::HuynhDe => "Huynh Đệ",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Menh => "Destiny",
            Self::PhuMau => "Parents",
            Self::PhucDuc => "Fortune",
            Self::DienTrach => "Property",
            Self::QuanLoc => "Career",
            Self::NoBoc => "Servants",
            Self::ThienDi => "Travel",
            Self::TatAch => "Health",
            Self::TaiBach => "Wealth",
            Self::TuTuc => "Children",
            Self::PhuThe => "Spouse",
            Self::HuynhDe => "Siblings",
        }
    }

    /// ASCII code used in canonical records.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Menh => "MENH",
            Self::PhuMau => "PHU_MAU",
            Self::PhucDuc => "PHUC_DUC",
            Self::DienTrach => "DIEN_TRACH",
            Self::QuanLoc => "QUAN_LOC",
            Self::NoBoc => "NO_BOC",
            Self::ThienDi => "THIEN_DI",
            Self::TatAch => "TAT_ACH",
            Self::TaiBach => "TAI_BACH",
            Self::TuTuc => "TU_TUC",
            Self::PhuThe => "PHU_THE",
            Self::HuynhDe => "HUYNH_DE",
        }
    }

    /// 0-based index (Mệnh=0 .. Huynh Đệ=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Menh => 0,
            Self::PhuMau => 1,
            Self::PhucDuc => 2,
            Self::DienTrach => 3,
            Self::QuanLoc => 4,
            Self::NoBoc => 5,
            Self::ThienDi => 6,
            Self::TatAch => 7,
            Self::TaiBach => 8,
            Self::TuTuc => 9,
            Self::PhuThe => 10,
            Self::HuynhDe => 11,
        }
    }

    /// All 12 palace roles in order.
    pub const fn all() -> &'static [CungName; 12] {
        &ALL_CUNG
    }
}

impl Serialize for CungName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Gender of the chart's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Nam",
            Self::Female => "Nữ",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Accepts "male"/"female" and the Vietnamese "nam"/"nu"/"nữ".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "nam" => Ok(Self::Male),
            "female" | "f" | "nu" | "nữ" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Direction in which walking stars and cycles advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward (increasing branch).
    Thuan,
    /// Backward (decreasing branch).
    Nghich,
}

impl Direction {
    /// Thuận for a Dương-stem male or an Âm-stem female, Nghịch otherwise.
    pub const fn of(year_stem: ThienCan, gender: Gender) -> Direction {
        match (year_stem.polarity(), gender) {
            (AmDuong::Duong, Gender::Male) | (AmDuong::Am, Gender::Female) => Self::Thuan,
            _ => Self::Nghich,
        }
    }

    /// Branch step: +1 for Thuận, -1 for Nghịch.
    pub const fn step(self) -> i64 {
        match self {
            Self::Thuan => 1,
            Self::Nghich => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Thuan => "Thuận",
            Self::Nghich => "Nghịch",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Thuan => "THUAN",
            Self::Nghich => "NGHICH",
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Mệnh branch: Dần + (month − 1) − hour, floor-mod 12.
pub const fn menh_branch(lunar_month: u32, hour: DiaChi) -> DiaChi {
    DiaChi::Dan.offset(lunar_month as i64 - 1 - hour.index() as i64)
}

/// Thân branch: Dần + (month − 1) + hour, floor-mod 12.
pub const fn than_branch(lunar_month: u32, hour: DiaChi) -> DiaChi {
    DiaChi::Dan.offset(lunar_month as i64 - 1 + hour.index() as i64)
}

/// Stem sitting on Dần for a year stem (ngũ hổ độn).
pub const fn dan_stem(year_stem: ThienCan) -> ThienCan {
    match year_stem.index() % 5 {
        0 => ThienCan::Binh,
        1 => ThienCan::Mau,
        2 => ThienCan::Canh,
        3 => ThienCan::Nham,
        _ => ThienCan::Giap,
    }
}

/// Stem of the palace on `branch`, counting forward from Dần.
pub const fn palace_stem(year_stem: ThienCan, branch: DiaChi) -> ThienCan {
    let steps = (branch.index() as i64 - 2).rem_euclid(12);
    dan_stem(year_stem).offset(steps)
}

/// Role↔branch binding of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalaceLayout {
    /// Branch of the Mệnh palace.
    pub menh: DiaChi,
    /// Branch of the Thân position.
    pub than: DiaChi,
}

impl PalaceLayout {
    pub const fn new(lunar_month: u32, hour: DiaChi) -> Self {
        Self {
            menh: menh_branch(lunar_month, hour),
            than: than_branch(lunar_month, hour),
        }
    }

    /// Branch hosting a palace role.
    pub const fn branch_of(&self, cung: CungName) -> DiaChi {
        self.menh.offset(-(cung.index() as i64))
    }

    /// Palace role sitting on a branch.
    pub const fn cung_at(&self, branch: DiaChi) -> CungName {
        let i = (self.menh.index() as i64 - branch.index() as i64).rem_euclid(12);
        ALL_CUNG[i as usize]
    }

    /// Role of the palace hosting Thân (Thân cư).
    pub const fn than_cu(&self) -> CungName {
        self.cung_at(self.than)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cung_count() {
        assert_eq!(ALL_CUNG.len(), 12);
    }

    #[test]
    fn cung_indices_sequential() {
        for (i, c) in ALL_CUNG.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
    }

    #[test]
    fn menh_known_positions() {
        assert_eq!(menh_branch(1, DiaChi::Ty), DiaChi::Dan);
        assert_eq!(menh_branch(1, DiaChi::Suu), DiaChi::Suu);
        assert_eq!(menh_branch(12, DiaChi::Hoi), DiaChi::Dan);
        assert_eq!(menh_branch(2, DiaChi::Thin), DiaChi::Hoi);
    }

    #[test]
    fn than_known_positions() {
        assert_eq!(than_branch(1, DiaChi::Ty), DiaChi::Dan);
        assert_eq!(than_branch(2, DiaChi::Thin), DiaChi::Mui);
    }

    #[test]
    fn menh_and_than_meet_at_ty_and_ngo_hours() {
        for m in 1..=12 {
            for h in [DiaChi::Ty, DiaChi::Ngo] {
                assert_eq!(menh_branch(m, h), than_branch(m, h));
            }
        }
    }

    #[test]
    fn direction_rules() {
        assert_eq!(Direction::of(ThienCan::Giap, Gender::Male), Direction::Thuan);
        assert_eq!(Direction::of(ThienCan::Giap, Gender::Female), Direction::Nghich);
        assert_eq!(Direction::of(ThienCan::At, Gender::Female), Direction::Thuan);
        assert_eq!(Direction::of(ThienCan::At, Gender::Male), Direction::Nghich);
    }

    #[test]
    fn stems_on_dan() {
        assert_eq!(dan_stem(ThienCan::Giap), ThienCan::Binh);
        assert_eq!(dan_stem(ThienCan::Ky), ThienCan::Binh);
        assert_eq!(dan_stem(ThienCan::At), ThienCan::Mau);
        assert_eq!(dan_stem(ThienCan::Quy), ThienCan::Giap);
    }

    #[test]
    fn palace_stem_wraps_past_hoi() {
        // Ất year: Dần = Mậu, ..., Hợi = Đinh, Tý = Mậu, Sửu = Kỷ
        assert_eq!(palace_stem(ThienCan::At, DiaChi::Hoi), ThienCan::Dinh);
        assert_eq!(palace_stem(ThienCan::At, DiaChi::Ty), ThienCan::Mau);
        assert_eq!(palace_stem(ThienCan::At, DiaChi::Suu), ThienCan::Ky);
    }

    #[test]
    fn layout_is_a_permutation() {
        let layout = PalaceLayout::new(2, DiaChi::Thin);
        let mut seen = [false; 12];
        for c in ALL_CUNG {
            let b = layout.branch_of(c);
            assert!(!seen[b.index() as usize]);
            seen[b.index() as usize] = true;
            assert_eq!(layout.cung_at(b), c);
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn layout_runs_counter_clockwise() {
        let layout = PalaceLayout::new(2, DiaChi::Thin);
        assert_eq!(layout.branch_of(CungName::Menh), DiaChi::Hoi);
        assert_eq!(layout.branch_of(CungName::PhuMau), DiaChi::Tuat);
        assert_eq!(layout.branch_of(CungName::HuynhDe), DiaChi::Ty);
        assert_eq!(layout.than_cu(), CungName::QuanLoc);
    }

    #[test]
    fn gender_parse() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("Nam".parse::<Gender>(), Ok(Gender::Male));
        assert!("x".parse::<Gender>().is_err());
    }
}
