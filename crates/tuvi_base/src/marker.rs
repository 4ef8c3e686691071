//! Tuần and Triệt: the two void markers, each covering a pair of adjacent
//! branches.

use serde::Serialize;
use tuvi_calendar::{CanChi, DiaChi, ThienCan};

/// Triệt pair by year stem mod 5.
const TRIET: [(DiaChi, DiaChi); 5] = [
    (DiaChi::Than, DiaChi::Dau),
    (DiaChi::Ngo, DiaChi::Mui),
    (DiaChi::Thin, DiaChi::Ti),
    (DiaChi::Dan, DiaChi::Mao),
    (DiaChi::Ty, DiaChi::Suu),
];

/// Triệt branches for a year stem.
pub const fn triet_pair(year_stem: ThienCan) -> (DiaChi, DiaChi) {
    TRIET[(year_stem.index() % 5) as usize]
}

/// Tuần branches: the two branches the year's decade (tuần giáp) leaves out.
pub const fn tuan_pair(year: CanChi) -> (DiaChi, DiaChi) {
    // Branch paired with Giáp at the start of this decade
    let cycle_start = DiaChi::from_index(year.chi.index() as i64 - year.can.index() as i64);
    (cycle_start.offset(10), cycle_start.offset(11))
}

/// Both markers of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Markers {
    pub tuan: [DiaChi; 2],
    pub triet: [DiaChi; 2],
}

impl Markers {
    pub const fn new(year: CanChi) -> Self {
        let (t0, t1) = tuan_pair(year);
        let (r0, r1) = triet_pair(year.can);
        Self {
            tuan: [t0, t1],
            triet: [r0, r1],
        }
    }

    pub fn is_in_tuan(&self, branch: DiaChi) -> bool {
        self.tuan.contains(&branch)
    }

    pub fn is_in_triet(&self, branch: DiaChi) -> bool {
        self.triet.contains(&branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuvi_calendar::year_can_chi;

    #[test]
    fn triet_by_stem() {
        assert_eq!(triet_pair(ThienCan::Giap), (DiaChi::Than, DiaChi::Dau));
        assert_eq!(triet_pair(ThienCan::Ky), (DiaChi::Than, DiaChi::Dau));
        assert_eq!(triet_pair(ThienCan::At), (DiaChi::Ngo, DiaChi::Mui));
        assert_eq!(triet_pair(ThienCan::Quy), (DiaChi::Ty, DiaChi::Suu));
    }

    #[test]
    fn tuan_giap_ty_decade() {
        // Giáp Tý .. Quý Dậu leaves Tuất and Hợi
        let year = CanChi::from_sexagenary(0);
        assert_eq!(tuan_pair(year), (DiaChi::Tuat, DiaChi::Hoi));
        let year = CanChi::from_sexagenary(9);
        assert_eq!(tuan_pair(year), (DiaChi::Tuat, DiaChi::Hoi));
    }

    #[test]
    fn tuan_at_hoi_year() {
        // Ất Hợi is in the Giáp Tuất decade, leaving Thân and Dậu
        let markers = Markers::new(year_can_chi(1995));
        assert_eq!(markers.tuan, [DiaChi::Than, DiaChi::Dau]);
        assert_eq!(markers.triet, [DiaChi::Ngo, DiaChi::Mui]);
        assert!(markers.is_in_tuan(DiaChi::Dau));
        assert!(!markers.is_in_tuan(DiaChi::Tuat));
        assert!(markers.is_in_triet(DiaChi::Ngo));
    }

    #[test]
    fn tuan_never_covers_its_own_decade() {
        for i in 0..60 {
            let year = CanChi::from_sexagenary(i);
            let (a, b) = tuan_pair(year);
            assert_ne!(a, year.chi);
            assert_ne!(b, year.chi);
            assert_eq!(a.offset(1), b);
        }
    }
}
