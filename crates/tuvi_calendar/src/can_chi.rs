//! Heavenly Stems, Earthly Branches and sexagenary (Can-Chi) designations.
//!
//! Stem and branch arithmetic is floor-mod throughout, so negative offsets
//! wrap instead of truncating. Only stem/branch pairs of equal parity exist;
//! there are 60 of them.
//!
//! Clean-room implementation from the traditional sexagenary cycle
//! (Giáp Tý = index 0) and the Vietnamese day/month/hour stem rules.

use serde::{Serialize, Serializer};

use crate::julian::jd_from_date;
use crate::ngu_hanh::{AmDuong, NguHanh};

/// The 10 Heavenly Stems (Thiên Can).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThienCan {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All 10 stems in order (0 = Giáp).
pub const ALL_THIEN_CAN: [ThienCan; 10] = [
    ThienCan::Giap,
    ThienCan::At,
    ThienCan::Binh,
    ThienCan::Dinh,
    ThienCan::Mau,
    ThienCan::Ky,
    ThienCan::Canh,
    ThienCan::Tan,
    ThienCan::Nham,
    ThienCan::Quy,
];

impl ThienCan {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// Short ASCII code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Giap => "giap",
            Self::At => "at",
            Self::Binh => "binh",
            Self::Dinh => "dinh",
            Self::Mau => "mau",
            Self::Ky => "ky",
            Self::Canh => "canh",
            Self::Tan => "tan",
            Self::Nham => "nham",
            Self::Quy => "quy",
        }
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Giap => 0,
            Self::At => 1,
            Self::Binh => 2,
            Self::Dinh => 3,
            Self::Mau => 4,
            Self::Ky => 5,
            Self::Canh => 6,
            Self::Tan => 7,
            Self::Nham => 8,
            Self::Quy => 9,
        }
    }

    /// Stem for any integer, wrapped floor-mod 10.
    pub const fn from_index(i: i64) -> ThienCan {
        ALL_THIEN_CAN[i.rem_euclid(10) as usize]
    }

    /// Element of the stem: each consecutive pair shares one element.
    pub const fn element(self) -> NguHanh {
        match self {
            Self::Giap | Self::At => NguHanh::Moc,
            Self::Binh | Self::Dinh => NguHanh::Hoa,
            Self::Mau | Self::Ky => NguHanh::Tho,
            Self::Canh | Self::Tan => NguHanh::Kim,
            Self::Nham | Self::Quy => NguHanh::Thuy,
        }
    }

    /// Even stems are Dương, odd stems Âm.
    pub const fn polarity(self) -> AmDuong {
        if self.index() % 2 == 0 {
            AmDuong::Duong
        } else {
            AmDuong::Am
        }
    }

    /// Stem `n` steps later (negative steps go backwards).
    pub const fn offset(self, n: i64) -> ThienCan {
        Self::from_index(self.index() as i64 + n)
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [ThienCan; 10] {
        &ALL_THIEN_CAN
    }
}

impl Serialize for ThienCan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The 12 Earthly Branches (Địa Chi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiaChi {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 12 branches in order (0 = Tý).
pub const ALL_DIA_CHI: [DiaChi; 12] = [
    DiaChi::Ty,
    DiaChi::Suu,
    DiaChi::Dan,
    DiaChi::Mao,
    DiaChi::Thin,
    DiaChi::Ti,
    DiaChi::Ngo,
    DiaChi::Mui,
    DiaChi::Than,
    DiaChi::Dau,
    DiaChi::Tuat,
    DiaChi::Hoi,
];

impl DiaChi {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// Short ASCII code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ty => "ti",
            Self::Suu => "suu",
            Self::Dan => "dan",
            Self::Mao => "mao",
            Self::Thin => "thin",
            Self::Ti => "ty",
            Self::Ngo => "ngo",
            Self::Mui => "mui",
            Self::Than => "than",
            Self::Dau => "dau",
            Self::Tuat => "tuat",
            Self::Hoi => "hoi",
        }
    }

    /// 0-based index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ty => 0,
            Self::Suu => 1,
            Self::Dan => 2,
            Self::Mao => 3,
            Self::Thin => 4,
            Self::Ti => 5,
            Self::Ngo => 6,
            Self::Mui => 7,
            Self::Than => 8,
            Self::Dau => 9,
            Self::Tuat => 10,
            Self::Hoi => 11,
        }
    }

    /// Branch for any integer, wrapped floor-mod 12.
    pub const fn from_index(i: i64) -> DiaChi {
        ALL_DIA_CHI[i.rem_euclid(12) as usize]
    }

    /// Branch `n` steps forward (negative steps go backwards).
    pub const fn offset(self, n: i64) -> DiaChi {
        Self::from_index(self.index() as i64 + n)
    }

    /// The opposite branch (six steps away).
    pub const fn opposite(self) -> DiaChi {
        self.offset(6)
    }

    /// Even branches are Dương, odd branches Âm.
    pub const fn polarity(self) -> AmDuong {
        if self.index() % 2 == 0 {
            AmDuong::Duong
        } else {
            AmDuong::Am
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [DiaChi; 12] {
        &ALL_DIA_CHI
    }
}

impl Serialize for DiaChi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A stem/branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanChi {
    pub can: ThienCan,
    pub chi: DiaChi,
}

impl CanChi {
    /// Pair at position `i` of the 60-cycle (0 = Giáp Tý), wrapped floor-mod 60.
    pub const fn from_sexagenary(i: i64) -> CanChi {
        let i = i.rem_euclid(60);
        CanChi {
            can: ThienCan::from_index(i),
            chi: DiaChi::from_index(i),
        }
    }

    /// Position in the 60-cycle (0 = Giáp Tý .. 59 = Quý Hợi).
    ///
    /// For mismatched parity (not a real pair) the result is still the
    /// unique index whose stem agrees, which keeps lookups total.
    pub const fn sexagenary_index(self) -> u8 {
        (6 * self.can.index() as i64 - 5 * self.chi.index() as i64).rem_euclid(60) as u8
    }

    /// "Ất Hợi" style label.
    pub fn label(self) -> String {
        format!("{} {}", self.can.name(), self.chi.name())
    }
}

impl std::fmt::Display for CanChi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.can.name(), self.chi.name())
    }
}

impl Serialize for CanChi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Can-Chi of a lunar year.
pub const fn year_can_chi(lunar_year: i32) -> CanChi {
    let y = lunar_year as i64;
    CanChi {
        can: ThienCan::from_index(y + 6),
        chi: DiaChi::from_index(y + 8),
    }
}

/// Can-Chi of a lunar month (month 1 sits on Dần).
pub const fn month_can_chi(lunar_year: i32, lunar_month: u32) -> CanChi {
    let y = lunar_year as i64;
    let m = lunar_month as i64;
    CanChi {
        can: ThienCan::from_index(y * 12 + m + 3),
        chi: DiaChi::from_index(m + 1),
    }
}

/// Can-Chi of a day from its Julian Day Number.
pub const fn day_can_chi_from_jdn(jdn: i64) -> CanChi {
    CanChi {
        can: ThienCan::from_index(jdn + 9),
        chi: DiaChi::from_index(jdn + 1),
    }
}

/// Can-Chi of a solar calendar day.
pub fn day_can_chi(day: u32, month: u32, year: i32) -> CanChi {
    day_can_chi_from_jdn(jd_from_date(day, month, year))
}

/// Branch of a clock hour: 23:00–00:59 is Tý, then one branch per two hours.
///
/// `hour` must be 0..=23; debug builds assert it. Minutes never matter.
pub const fn hour_branch(hour: u32) -> DiaChi {
    debug_assert!(hour < 24, "hour outside 0..=23");
    let hour = hour % 24;
    if hour == 23 {
        DiaChi::Ty
    } else {
        DiaChi::from_index(((hour + 1) / 2) as i64)
    }
}

/// Can-Chi of an hour, with the stem keyed on the day stem (ngũ thử độn).
pub const fn hour_can_chi(day_stem: ThienCan, hour_branch: DiaChi) -> CanChi {
    let base = (day_stem.index() % 5) as i64 * 2;
    CanChi {
        can: ThienCan::from_index(base + hour_branch.index() as i64),
        chi: hour_branch,
    }
}
