//! Star catalogue and placement.
//!
//! Every star lands on exactly one branch. Placement is a pure function of
//! the year Can-Chi, lunar month and day, birth hour, bureau and direction.

pub mod auxiliary;
pub mod brightness;
pub mod main_stars;
pub mod minor;
pub mod truong_sinh;
pub mod types;

use tuvi_calendar::{CanChi, DiaChi};

use crate::cuc::Cuc;
use crate::palace::Direction;

pub use brightness::{Brightness, brightness};
pub use types::{ALL_STARS, MAIN_STARS, Star, StarKind};

/// Triad (tam hợp) group of a branch: Dần-Ngọ-Tuất, Thân-Tý-Thìn,
/// Tỵ-Dậu-Sửu, Hợi-Mão-Mùi.
pub(crate) const fn triad(branch: DiaChi) -> usize {
    match branch {
        DiaChi::Dan | DiaChi::Ngo | DiaChi::Tuat => 0,
        DiaChi::Than | DiaChi::Ty | DiaChi::Thin => 1,
        DiaChi::Ti | DiaChi::Dau | DiaChi::Suu => 2,
        DiaChi::Hoi | DiaChi::Mao | DiaChi::Mui => 3,
    }
}

/// Everything star placement depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarInputs {
    /// Can-Chi of the lunar birth year.
    pub year: CanChi,
    /// Lunar month (1..=12). A leap month counts as its base month.
    pub lunar_month: u32,
    /// Lunar day (1..=30).
    pub lunar_day: u32,
    /// Birth hour branch.
    pub hour: DiaChi,
    pub cuc: Cuc,
    pub direction: Direction,
}

/// Branch of every star in one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarPositions {
    branches: [DiaChi; 70],
}

impl StarPositions {
    fn set(&mut self, star: Star, branch: DiaChi) {
        self.branches[star.index() as usize] = branch;
    }

    /// Branch hosting `star`.
    pub fn branch_of(&self, star: Star) -> DiaChi {
        self.branches[star.index() as usize]
    }

    /// Stars on `branch`, main stars first, ties by identity.
    pub fn stars_at(&self, branch: DiaChi) -> Vec<Star> {
        let mut stars: Vec<Star> = ALL_STARS
            .iter()
            .copied()
            .filter(|s| self.branch_of(*s) == branch)
            .collect();
        stars.sort_by_key(|s| (s.kind().priority(), s.index()));
        stars
    }

    /// Iterator over `(star, branch)` in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (Star, DiaChi)> + '_ {
        ALL_STARS.iter().map(|s| (*s, self.branch_of(*s)))
    }
}

/// Place all 70 stars. `None` when the lunar month or day is out of range.
pub fn place_all_stars(inputs: &StarInputs) -> Option<StarPositions> {
    if !(1..=12).contains(&inputs.lunar_month) {
        return None;
    }
    let mut pos = StarPositions {
        branches: [DiaChi::Ty; 70],
    };
    for (star, branch) in main_stars::place(inputs.cuc, inputs.lunar_day)? {
        pos.set(star, branch);
    }
    let aux = auxiliary::place(
        inputs.year.can,
        inputs.year.chi,
        inputs.lunar_month,
        inputs.hour,
    );
    for (star, branch) in aux {
        pos.set(star, branch);
    }
    // Transformations follow their host, so hosts must be placed first
    for (hoa, host) in auxiliary::tu_hoa(inputs.year.can) {
        pos.set(hoa, pos.branch_of(host));
    }
    for (star, branch) in minor::place(inputs.year.chi, inputs.lunar_month, inputs.lunar_day) {
        pos.set(star, branch);
    }
    for (star, branch) in truong_sinh::place(inputs.cuc, inputs.direction) {
        pos.set(star, branch);
    }
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuvi_calendar::ThienCan;

    fn fixture() -> StarInputs {
        StarInputs {
            year: CanChi {
                can: ThienCan::At,
                chi: DiaChi::Hoi,
            },
            lunar_month: 2,
            lunar_day: 2,
            hour: DiaChi::Thin,
            cuc: Cuc::Tho5,
            direction: Direction::Thuan,
        }
    }

    #[test]
    fn out_of_range_lunar_fields_rejected() {
        let day_zero = StarInputs {
            lunar_day: 0,
            ..fixture()
        };
        assert_eq!(place_all_stars(&day_zero), None);
        let day_31 = StarInputs {
            lunar_day: 31,
            ..fixture()
        };
        assert_eq!(place_all_stars(&day_31), None);
        let month_13 = StarInputs {
            lunar_month: 13,
            ..fixture()
        };
        assert_eq!(place_all_stars(&month_13), None);
        let last_day = StarInputs {
            lunar_day: 30,
            ..fixture()
        };
        assert!(place_all_stars(&last_day).is_some());
    }

    #[test]
    fn triad_groups_are_four_apart() {
        for b in DiaChi::all() {
            assert_eq!(triad(*b), triad(b.offset(4)));
            assert_eq!(triad(*b), triad(b.offset(8)));
        }
    }

    #[test]
    fn every_star_listed_once() {
        let pos = place_all_stars(&fixture()).unwrap();
        let total: usize = DiaChi::all().iter().map(|b| pos.stars_at(*b).len()).sum();
        assert_eq!(total, 70);
    }

    #[test]
    fn transformations_follow_host() {
        let pos = place_all_stars(&fixture()).unwrap();
        // Ất: Lộc Thiên Cơ, Quyền Thiên Lương, Khoa Tử Vi, Kỵ Thái Âm
        assert_eq!(pos.branch_of(Star::HoaLoc), pos.branch_of(Star::ThienCo));
        assert_eq!(pos.branch_of(Star::HoaQuyen), pos.branch_of(Star::ThienLuong));
        assert_eq!(pos.branch_of(Star::HoaKhoa), pos.branch_of(Star::TuVi));
        assert_eq!(pos.branch_of(Star::HoaKy), pos.branch_of(Star::ThaiAm));
    }

    #[test]
    fn stars_at_orders_by_kind() {
        let pos = place_all_stars(&fixture()).unwrap();
        for b in DiaChi::all() {
            let stars = pos.stars_at(*b);
            for w in stars.windows(2) {
                assert!(
                    (w[0].kind().priority(), w[0].index())
                        < (w[1].kind().priority(), w[1].index())
                );
            }
        }
    }

    #[test]
    fn iter_matches_branch_of() {
        let pos = place_all_stars(&fixture()).unwrap();
        assert_eq!(pos.iter().count(), 70);
        for (s, b) in pos.iter() {
            assert_eq!(pos.branch_of(s), b);
        }
    }
}
