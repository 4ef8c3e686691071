//! Vietnamese lunisolar calendar and sexagenary (Can-Chi) arithmetic.
//!
//! This crate provides:
//! - Julian Day Number ↔ Gregorian calendar conversions
//! - Solar ⇄ lunar conversion for the Vietnamese calendar (UTC+7 by default)
//! - Heavenly Stems, Earthly Branches, the Five Elements and Can-Chi labels
//!   for year, month, day and hour
//!
//! All implementations are clean-room, derived from Meeus and the
//! published Vietnamese almanac algorithm.

pub mod astro;
pub mod can_chi;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod ngu_hanh;
pub mod solar;

pub use can_chi::{
    ALL_DIA_CHI, ALL_THIEN_CAN, CanChi, DiaChi, ThienCan, day_can_chi, day_can_chi_from_jdn,
    hour_branch, hour_can_chi, month_can_chi, year_can_chi,
};
pub use error::CalendarError;
pub use julian::{days_in_month, is_leap_year, jd_from_date, jd_to_date};
pub use lunar::{
    LEAP_OFFSET_OVERRIDES, LunarDate, MAX_YEAR, MIN_YEAR, VIETNAM_TZ_OFFSET_HOURS, leap_month,
    lunar_to_solar, solar_to_lunar,
};
pub use ngu_hanh::{ALL_NGU_HANH, AmDuong, ElementRelation, NguHanh};
pub use solar::SolarDate;
