//! Ngũ Hành Cục: the bureau number that seeds the Tử Vi placement and
//! the starting age of the ten-year cycles.

use serde::{Serialize, Serializer};
use tuvi_calendar::{DiaChi, NguHanh, ThienCan};

use crate::nap_am::NapAm;
use crate::palace::palace_stem;

/// The five bureaus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cuc {
    /// Thủy nhị cục (2).
    Thuy2,
    /// Mộc tam cục (3).
    Moc3,
    /// Kim tứ cục (4).
    Kim4,
    /// Thổ ngũ cục (5).
    Tho5,
    /// Hỏa lục cục (6).
    Hoa6,
}

/// All bureaus in increasing value.
pub const ALL_CUC: [Cuc; 5] = [Cuc::Thuy2, Cuc::Moc3, Cuc::Kim4, Cuc::Tho5, Cuc::Hoa6];

impl Cuc {
    /// Bureau number (2..=6).
    pub const fn value(self) -> u32 {
        match self {
            Self::Thuy2 => 2,
            Self::Moc3 => 3,
            Self::Kim4 => 4,
            Self::Tho5 => 5,
            Self::Hoa6 => 6,
        }
    }

    pub const fn element(self) -> NguHanh {
        match self {
            Self::Thuy2 => NguHanh::Thuy,
            Self::Moc3 => NguHanh::Moc,
            Self::Kim4 => NguHanh::Kim,
            Self::Tho5 => NguHanh::Tho,
            Self::Hoa6 => NguHanh::Hoa,
        }
    }

    /// Bureau of an element.
    pub const fn from_element(element: NguHanh) -> Cuc {
        match element {
            NguHanh::Thuy => Self::Thuy2,
            NguHanh::Moc => Self::Moc3,
            NguHanh::Kim => Self::Kim4,
            NguHanh::Tho => Self::Tho5,
            NguHanh::Hoa => Self::Hoa6,
        }
    }

    /// Vietnamese name, e.g. "Thổ ngũ cục".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thuy2 => "Thủy nhị cục",
            Self::Moc3 => "Mộc tam cục",
            Self::Kim4 => "Kim tứ cục",
            Self::Tho5 => "Thổ ngũ cục",
            Self::Hoa6 => "Hỏa lục cục",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Thuy2 => "THUY_NHI_CUC",
            Self::Moc3 => "MOC_TAM_CUC",
            Self::Kim4 => "KIM_TU_CUC",
            Self::Tho5 => "THO_NGU_CUC",
            Self::Hoa6 => "HOA_LUC_CUC",
        }
    }
}

impl Serialize for Cuc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Bureau of a chart: the Nạp Âm element of the Mệnh palace's stem and branch.
pub const fn cuc_for(year_stem: ThienCan, menh: DiaChi) -> Cuc {
    let stem = palace_stem(year_stem, menh);
    Cuc::from_element(NapAm::from_can_chi(stem, menh).element())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_increase() {
        for (i, c) in ALL_CUC.iter().enumerate() {
            assert_eq!(c.value() as usize, i + 2);
            assert_eq!(Cuc::from_element(c.element()), *c);
        }
    }

    #[test]
    fn at_year_menh_hoi() {
        // Đinh Hợi = Ốc Thượng Thổ
        assert_eq!(cuc_for(ThienCan::At, DiaChi::Hoi), Cuc::Tho5);
    }

    #[test]
    fn giap_year_menh_dan() {
        // Bính Dần = Lô Trung Hỏa
        assert_eq!(cuc_for(ThienCan::Giap, DiaChi::Dan), Cuc::Hoa6);
    }

    #[test]
    fn every_year_stem_covers_several_bureaus() {
        for stem in ThienCan::all() {
            let mut seen = [false; 5];
            for b in DiaChi::all() {
                seen[cuc_for(*stem, *b).value() as usize - 2] = true;
            }
            assert!(seen.iter().filter(|s| **s).count() >= 3);
        }
    }
}
