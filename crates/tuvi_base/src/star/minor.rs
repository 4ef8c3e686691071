//! Minor stars (bàng tinh): the Thái Tuế ring and the year/month/day stars.

use tuvi_calendar::DiaChi;

use super::auxiliary::{huu_bat_branch, ta_phu_branch};
use super::triad;
use super::types::Star;

/// The Thái Tuế ring, walked forward from the year branch.
pub const THAI_TUE_RING: [Star; 12] = [
    Star::ThaiTue,
    Star::ThieuDuong,
    Star::TangMon,
    Star::ThieuAm,
    Star::QuanPhu,
    Star::TuPhu,
    Star::TuePha,
    Star::LongDuc,
    Star::BachHo,
    Star::PhucDuc,
    Star::DieuKhach,
    Star::TrucPhu,
];

/// Thiên Mã by year-branch triad.
const THIEN_MA: [u8; 4] = [8, 2, 11, 5];

/// Đào Hoa by year-branch triad.
const DAO_HOA: [u8; 4] = [3, 9, 6, 0];

/// Cô Thần by season group (Hợi-Tý-Sửu first).
const CO_THAN: [u8; 4] = [2, 5, 8, 11];

/// Quả Tú by season group.
const QUA_TU: [u8; 4] = [10, 1, 4, 7];

/// Season group of a year branch: Hợi-Tý-Sửu, Dần-Mão-Thìn, Tỵ-Ngọ-Mùi, Thân-Dậu-Tuất.
const fn season(year_branch: DiaChi) -> usize {
    ((year_branch.index() as usize + 1) % 12) / 3
}

/// Branches of all 26 minor stars.
pub fn place(year_branch: DiaChi, lunar_month: u32, lunar_day: u32) -> [(Star, DiaChi); 26] {
    let yb = year_branch.index() as i64;
    let m = i64::from(lunar_month) - 1;
    let d = i64::from(lunar_day) - 1;
    let g = triad(year_branch);
    let s = season(year_branch);
    let hong_loan = DiaChi::Mao.offset(-yb);

    let mut out = [(Star::ThaiTue, year_branch); 26];
    for (i, star) in THAI_TUE_RING.iter().enumerate() {
        out[i] = (*star, year_branch.offset(i as i64));
    }
    let rest = [
        (Star::ThienMa, DiaChi::from_index(i64::from(THIEN_MA[g]))),
        (Star::DaoHoa, DiaChi::from_index(i64::from(DAO_HOA[g]))),
        (Star::HongLoan, hong_loan),
        (Star::ThienHy, hong_loan.opposite()),
        (Star::ThienHinh, DiaChi::Dau.offset(m)),
        (Star::ThienRieu, DiaChi::Suu.offset(m)),
        (Star::LongTri, DiaChi::Thin.offset(yb)),
        (Star::PhuongCac, DiaChi::Tuat.offset(-yb)),
        (Star::TamThai, ta_phu_branch(lunar_month).offset(d)),
        (Star::BatToa, huu_bat_branch(lunar_month).offset(-d)),
        (Star::ThienKhoc, DiaChi::Ngo.offset(-yb)),
        (Star::ThienHu, DiaChi::Ngo.offset(yb)),
        (Star::CoThan, DiaChi::from_index(i64::from(CO_THAN[s]))),
        (Star::QuaTu, DiaChi::from_index(i64::from(QUA_TU[s]))),
    ];
    out[12..].copy_from_slice(&rest);
    out
}
