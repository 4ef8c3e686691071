//! Five Elements (Ngũ Hành) and Yin/Yang polarity.
//!
//! The generating cycle runs Kim → Thủy → Mộc → Hỏa → Thổ → Kim and the
//! overcoming cycle Kim → Mộc → Thổ → Thủy → Hỏa → Kim. Each element
//! generates exactly one element and overcomes exactly one element.

use serde::{Serialize, Serializer};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NguHanh {
    Kim,
    Moc,
    Thuy,
    Hoa,
    Tho,
}

/// All five elements in canonical order (0 = Kim).
pub const ALL_NGU_HANH: [NguHanh; 5] = [
    NguHanh::Kim,
    NguHanh::Moc,
    NguHanh::Thuy,
    NguHanh::Hoa,
    NguHanh::Tho,
];

impl NguHanh {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kim => "Kim",
            Self::Moc => "Mộc",
            Self::Thuy => "Thủy",
            Self::Hoa => "Hỏa",
            Self::Tho => "Thổ",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Kim => "Metal",
            Self::Moc => "Wood",
            Self::Thuy => "Water",
            Self::Hoa => "Fire",
            Self::Tho => "Earth",
        }
    }

    /// ASCII code used in canonical records.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Kim => "KIM",
            Self::Moc => "MOC",
            Self::Thuy => "THUY",
            Self::Hoa => "HOA",
            Self::Tho => "THO",
        }
    }

    /// 0-based index (Kim=0 .. Thổ=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Kim => 0,
            Self::Moc => 1,
            Self::Thuy => 2,
            Self::Hoa => 3,
            Self::Tho => 4,
        }
    }

    /// All five elements in order.
    pub const fn all() -> &'static [NguHanh; 5] {
        &ALL_NGU_HANH
    }

    /// The element this one generates (tương sinh).
    pub const fn generates(self) -> NguHanh {
        match self {
            Self::Kim => Self::Thuy,
            Self::Thuy => Self::Moc,
            Self::Moc => Self::Hoa,
            Self::Hoa => Self::Tho,
            Self::Tho => Self::Kim,
        }
    }

    /// The element this one overcomes (tương khắc).
    pub const fn overcomes(self) -> NguHanh {
        match self {
            Self::Kim => Self::Moc,
            Self::Moc => Self::Tho,
            Self::Tho => Self::Thuy,
            Self::Thuy => Self::Hoa,
            Self::Hoa => Self::Kim,
        }
    }

    /// How `self` stands towards `other`.
    pub fn relation_to(self, other: NguHanh) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == self {
            ElementRelation::GeneratedBy
        } else if self.overcomes() == other {
            ElementRelation::Overcomes
        } else {
            ElementRelation::OvercomeBy
        }
    }
}

impl Serialize for NguHanh {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Relation between two elements, read from the first element's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// First generates second.
    Generates,
    /// Second generates first.
    GeneratedBy,
    /// First overcomes second.
    Overcomes,
    /// Second overcomes first.
    OvercomeBy,
}

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmDuong {
    Duong,
    Am,
}

impl AmDuong {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Duong => "Dương",
            Self::Am => "Âm",
        }
    }

    pub const fn is_duong(self) -> bool {
        matches!(self, Self::Duong)
    }
}

impl Serialize for AmDuong {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
