//! The 14 main stars: the Tử Vi group and the Thiên Phủ group.

use tuvi_calendar::DiaChi;

use super::types::Star;
use crate::cuc::Cuc;

/// Tử Vi branch index, `[bureau − 2][lunar day − 1]`.
const TU_VI_TABLE: [[u8; 30]; 5] = [
    // Thủy nhị cục
    [
        2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4,
    ],
    // Mộc tam cục
    [
        2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5,
    ],
    // Kim tứ cục
    [
        2, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5,
    ],
    // Thổ ngũ cục
    [
        2, 3, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6,
    ],
    // Hỏa lục cục
    [
        2, 3, 4, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6,
    ],
];

/// Offsets of the Tử Vi group from Tử Vi.
const TU_VI_GROUP: [(Star, i64); 6] = [
    (Star::TuVi, 0),
    (Star::LiemTrinh, -4),
    (Star::ThienDong, -3),
    (Star::VuKhuc, -2),
    (Star::ThaiDuong, -1),
    (Star::ThienCo, 1),
];

/// Offsets of the Thiên Phủ group from Thiên Phủ.
const THIEN_PHU_GROUP: [(Star, i64); 8] = [
    (Star::ThienPhu, 0),
    (Star::ThaiAm, 1),
    (Star::ThamLang, 2),
    (Star::CuMon, 3),
    (Star::ThienTuong, 4),
    (Star::ThienLuong, 5),
    (Star::ThatSat, 6),
    (Star::PhaQuan, 10),
];

/// Tử Vi branch for a bureau and lunar day, `None` outside 1..=30.
pub fn tu_vi_branch(cuc: Cuc, lunar_day: u32) -> Option<DiaChi> {
    let row = (cuc.value() - 2) as usize;
    let col = lunar_day.checked_sub(1)? as usize;
    TU_VI_TABLE[row]
        .get(col)
        .map(|b| DiaChi::from_index(i64::from(*b)))
}

/// Thiên Phủ mirrors Tử Vi about the Dần–Thân axis.
pub const fn thien_phu_branch(tu_vi: DiaChi) -> DiaChi {
    DiaChi::from_index(4 - tu_vi.index() as i64)
}

/// Branches of all 14 main stars.
pub fn place(cuc: Cuc, lunar_day: u32) -> Option<[(Star, DiaChi); 14]> {
    let tu_vi = tu_vi_branch(cuc, lunar_day)?;
    let thien_phu = thien_phu_branch(tu_vi);
    let mut out = [(Star::TuVi, tu_vi); 14];
    for (slot, (star, off)) in out.iter_mut().zip(TU_VI_GROUP) {
        *slot = (star, tu_vi.offset(off));
    }
    for (slot, (star, off)) in out[6..].iter_mut().zip(THIEN_PHU_GROUP) {
        *slot = (star, thien_phu.offset(off));
    }
    Some(out)
}
