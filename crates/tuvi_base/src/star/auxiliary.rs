//! Auxiliary stars (phụ tinh) and the four transformations (Tứ Hóa).

use tuvi_calendar::{DiaChi, ThienCan};

use super::triad;
use super::types::Star;

/// Lộc Tồn branch index by year stem.
const LOC_TON: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// Văn Xương branch index by hour branch.
const VAN_XUONG: [u8; 12] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10];

/// Văn Khúc branch index by hour branch.
const VAN_KHUC: [u8; 12] = [5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4];

/// Thiên Khôi branch index by year stem.
const THIEN_KHOI: [u8; 10] = [1, 0, 11, 11, 1, 0, 7, 6, 3, 3];

/// Thiên Việt branch index by year stem.
const THIEN_VIET: [u8; 10] = [7, 8, 5, 6, 5, 6, 1, 2, 5, 5];

/// Hỏa Tinh start by year-branch triad, before adding the hour.
const HOA_TINH_START: [u8; 4] = [2, 2, 1, 10];

/// Linh Tinh start by year-branch triad, before adding the hour.
const LINH_TINH_START: [u8; 4] = [3, 10, 3, 10];

/// Host stars of Hóa Lộc, Hóa Quyền, Hóa Khoa, Hóa Kỵ by year stem.
const TU_HOA: [[Star; 4]; 10] = [
    [Star::LiemTrinh, Star::PhaQuan, Star::VuKhuc, Star::ThaiDuong],
    [Star::ThienCo, Star::ThienLuong, Star::TuVi, Star::ThaiAm],
    [Star::ThienDong, Star::ThienCo, Star::VanXuong, Star::LiemTrinh],
    [Star::ThaiAm, Star::ThienDong, Star::ThienCo, Star::CuMon],
    [Star::ThamLang, Star::ThaiAm, Star::HuuBat, Star::ThienCo],
    [Star::VuKhuc, Star::ThamLang, Star::ThienLuong, Star::VanKhuc],
    [Star::ThaiDuong, Star::VuKhuc, Star::ThaiAm, Star::ThienDong],
    [Star::CuMon, Star::ThaiDuong, Star::VanKhuc, Star::VanXuong],
    [Star::ThienLuong, Star::TuVi, Star::ThienPhu, Star::VuKhuc],
    [Star::PhaQuan, Star::CuMon, Star::ThaiAm, Star::ThamLang],
];

const TRANSFORMATIONS: [Star; 4] = [Star::HoaLoc, Star::HoaQuyen, Star::HoaKhoa, Star::HoaKy];

fn lookup<const N: usize>(table: &[u8; N], i: u8) -> DiaChi {
    DiaChi::from_index(i64::from(table[i as usize % N]))
}

pub fn loc_ton_branch(year_stem: ThienCan) -> DiaChi {
    lookup(&LOC_TON, year_stem.index())
}

/// Tả Phù: Thìn + (month − 1).
pub const fn ta_phu_branch(lunar_month: u32) -> DiaChi {
    DiaChi::Thin.offset(lunar_month as i64 - 1)
}

/// Hữu Bật: Tuất − (month − 1).
pub const fn huu_bat_branch(lunar_month: u32) -> DiaChi {
    DiaChi::Tuat.offset(-(lunar_month as i64 - 1))
}

/// Branches of the 14 auxiliary stars that do not depend on other stars.
pub fn place(
    year_stem: ThienCan,
    year_branch: DiaChi,
    lunar_month: u32,
    hour: DiaChi,
) -> [(Star, DiaChi); 14] {
    let loc_ton = loc_ton_branch(year_stem);
    let h = hour.index() as i64;
    let g = triad(year_branch);
    [
        (Star::LocTon, loc_ton),
        (Star::KinhDuong, loc_ton.offset(1)),
        (Star::DaLa, loc_ton.offset(-1)),
        (Star::VanXuong, lookup(&VAN_XUONG, hour.index())),
        (Star::VanKhuc, lookup(&VAN_KHUC, hour.index())),
        (Star::TaPhu, ta_phu_branch(lunar_month)),
        (Star::HuuBat, huu_bat_branch(lunar_month)),
        (Star::ThienKhoi, lookup(&THIEN_KHOI, year_stem.index())),
        (Star::ThienViet, lookup(&THIEN_VIET, year_stem.index())),
        (Star::HoaTinh, DiaChi::from_index(i64::from(HOA_TINH_START[g]) + h)),
        (Star::LinhTinh, DiaChi::from_index(i64::from(LINH_TINH_START[g]) + h)),
        (Star::DiaKhong, DiaChi::Hoi.offset(-h)),
        (Star::DiaKiep, DiaChi::Hoi.offset(h)),
        (Star::ThienKhong, year_branch.offset(1)),
    ]
}

/// Each transformation paired with the star it attaches to.
pub fn tu_hoa(year_stem: ThienCan) -> [(Star, Star); 4] {
    let hosts = TU_HOA[year_stem.index() as usize];
    [
        (TRANSFORMATIONS[0], hosts[0]),
        (TRANSFORMATIONS[1], hosts[1]),
        (TRANSFORMATIONS[2], hosts[2]),
        (TRANSFORMATIONS[3], hosts[3]),
    ]
}
