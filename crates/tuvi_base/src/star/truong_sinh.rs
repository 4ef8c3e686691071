//! The twelve life-cycle stages (vòng Trường Sinh).
//!
//! Trường Sinh starts on a branch fixed by the bureau element and the
//! remaining stages follow one branch apart in the chart direction.

use tuvi_calendar::{DiaChi, NguHanh};

use super::types::Star;
use crate::cuc::Cuc;
use crate::palace::Direction;

/// Stages in walking order.
pub const STAGES: [Star; 12] = [
    Star::TruongSinh,
    Star::MocDuc,
    Star::QuanDoi,
    Star::LamQuan,
    Star::DeVuong,
    Star::Suy,
    Star::Benh,
    Star::Tu,
    Star::Mo,
    Star::Tuyet,
    Star::Thai,
    Star::Duong,
];

/// Branch of Trường Sinh for a bureau.
pub const fn start_branch(cuc: Cuc) -> DiaChi {
    match cuc.element() {
        NguHanh::Thuy | NguHanh::Tho => DiaChi::Than,
        NguHanh::Moc => DiaChi::Hoi,
        NguHanh::Kim => DiaChi::Ti,
        NguHanh::Hoa => DiaChi::Dan,
    }
}

/// Branches of all 12 stages.
pub fn place(cuc: Cuc, direction: Direction) -> [(Star, DiaChi); 12] {
    let start = start_branch(cuc);
    let step = direction.step();
    let mut out = [(Star::TruongSinh, start); 12];
    for (i, stage) in STAGES.iter().enumerate() {
        out[i] = (*stage, start.offset(i as i64 * step));
    }
    out
}
