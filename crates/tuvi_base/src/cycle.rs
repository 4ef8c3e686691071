//! Life cycles: Đại Vận (ten-year), Tiểu Vận (yearly by age) and Lưu Niên
//! (yearly by calendar year).

use serde::Serialize;
use tuvi_calendar::DiaChi;

use crate::cuc::Cuc;
use crate::palace::{CungName, Direction, PalaceLayout};

/// Years covered by one Đại Vận.
pub const DAI_VAN_PERIOD: u32 = 10;

/// Number of Đại Vận cycles in a chart.
pub const DAI_VAN_COUNT: usize = 12;

/// One ten-year cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaiVan {
    /// 0-based cycle number.
    pub index: u8,
    pub branch: DiaChi,
    /// Palace role on `branch`.
    pub cung: CungName,
    pub start_age: u32,
    pub end_age: u32,
    /// Chart label (the start age).
    pub label: String,
}

/// First Đại Vận age: the bureau number.
pub const fn dai_van_start_age(cuc: Cuc) -> u32 {
    cuc.value()
}

/// The twelve Đại Vận, walked from Mệnh in the chart direction.
pub fn dai_van(cuc: Cuc, layout: &PalaceLayout, direction: Direction) -> Vec<DaiVan> {
    let start = dai_van_start_age(cuc);
    (0..DAI_VAN_COUNT as u32)
        .map(|i| {
            let branch = layout.menh.offset(i64::from(i) * direction.step());
            let start_age = start + i * DAI_VAN_PERIOD;
            DaiVan {
                index: i as u8,
                branch,
                cung: layout.cung_at(branch),
                start_age,
                end_age: start_age + DAI_VAN_PERIOD - 1,
                label: start_age.to_string(),
            }
        })
        .collect()
}

/// Index of the Đại Vận covering `age`, clamped to 0..=11.
pub const fn dai_van_index(cuc: Cuc, age: u32) -> usize {
    let start = dai_van_start_age(cuc);
    if age < start {
        return 0;
    }
    let i = ((age - start) / DAI_VAN_PERIOD) as usize;
    if i > DAI_VAN_COUNT - 1 {
        DAI_VAN_COUNT - 1
    } else {
        i
    }
}

/// Tiểu Vận branch: the hour branch at age 1, two branches per year after.
pub const fn tieu_van_branch(hour: DiaChi, age: u32, direction: Direction) -> DiaChi {
    hour.offset(2 * (age as i64 - 1) * direction.step())
}

/// Lưu Niên branch for a calendar year, always walking forward.
pub const fn luu_nien_branch(birth_year_branch: DiaChi, birth_year: i32, year: i32) -> DiaChi {
    birth_year_branch.offset(year as i64 - birth_year as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_age_is_bureau() {
        assert_eq!(dai_van_start_age(Cuc::Thuy2), 2);
        assert_eq!(dai_van_start_age(Cuc::Hoa6), 6);
    }

    #[test]
    fn dai_van_walk_thuan() {
        let layout = PalaceLayout::new(2, DiaChi::Thin);
        let cycles = dai_van(Cuc::Tho5, &layout, Direction::Thuan);
        assert_eq!(cycles.len(), 12);
        assert_eq!(cycles[0].branch, DiaChi::Hoi);
        assert_eq!(cycles[0].cung, CungName::Menh);
        assert_eq!(cycles[0].label, "5");
        assert_eq!((cycles[0].start_age, cycles[0].end_age), (5, 14));
        assert_eq!(cycles[1].branch, DiaChi::Ty);
        assert_eq!(cycles[1].cung, CungName::HuynhDe);
        assert_eq!(cycles[11].start_age, 115);
    }

    #[test]
    fn dai_van_walk_nghich() {
        let layout = PalaceLayout::new(2, DiaChi::Thin);
        let cycles = dai_van(Cuc::Tho5, &layout, Direction::Nghich);
        assert_eq!(cycles[1].branch, DiaChi::Tuat);
        assert_eq!(cycles[1].cung, CungName::PhuMau);
    }

    #[test]
    fn cycles_cover_every_branch() {
        let layout = PalaceLayout::new(7, DiaChi::Dau);
        let cycles = dai_van(Cuc::Moc3, &layout, Direction::Nghich);
        let mut seen = [false; 12];
        for c in &cycles {
            seen[c.branch.index() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn index_clamps() {
        assert_eq!(dai_van_index(Cuc::Tho5, 1), 0);
        assert_eq!(dai_van_index(Cuc::Tho5, 5), 0);
        assert_eq!(dai_van_index(Cuc::Tho5, 14), 0);
        assert_eq!(dai_van_index(Cuc::Tho5, 15), 1);
        assert_eq!(dai_van_index(Cuc::Tho5, 124), 11);
        assert_eq!(dai_van_index(Cuc::Tho5, 500), 11);
    }

    #[test]
    fn tieu_van_steps_two() {
        assert_eq!(tieu_van_branch(DiaChi::Thin, 1, Direction::Thuan), DiaChi::Thin);
        assert_eq!(tieu_van_branch(DiaChi::Thin, 2, Direction::Thuan), DiaChi::Ngo);
        assert_eq!(tieu_van_branch(DiaChi::Thin, 2, Direction::Nghich), DiaChi::Dan);
        assert_eq!(tieu_van_branch(DiaChi::Thin, 7, Direction::Thuan), DiaChi::Thin);
    }

    #[test]
    fn luu_nien_follows_calendar() {
        assert_eq!(luu_nien_branch(DiaChi::Hoi, 1995, 1995), DiaChi::Hoi);
        assert_eq!(luu_nien_branch(DiaChi::Hoi, 1995, 2024), DiaChi::Thin);
        assert_eq!(luu_nien_branch(DiaChi::Hoi, 1995, 1994), DiaChi::Tuat);
    }
}
