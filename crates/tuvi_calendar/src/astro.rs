//! Truncated solar longitude and new-moon series.
//!
//! Both series are evaluated at local civil days, shifted by the time-zone
//! offset so that a new moon just after local midnight lands on the right day.
//!
//! Clean-room implementation from Meeus, "Astronomical Algorithms"
//! (ch. 25 solar coordinates, ch. 49 phases of the Moon), in the reduced
//! form used by Vietnamese almanac tables.

use std::f64::consts::{PI, TAU};

const DEG: f64 = PI / 180.0;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian Date of the mean new moon of 1900-Jan-01, origin of the lunation count.
pub const LUNATION_EPOCH_JD: f64 = 2_415_021.076998695;

/// Apparent solar longitude in radians, [0, 2π), at local midnight of `jdn`.
pub fn sun_longitude(jdn: i64, tz_offset_hours: f64) -> f64 {
    let t = (jdn as f64 - 2_451_545.5 - tz_offset_hours / 24.0) / 36525.0;
    let t2 = t * t;
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DEG * m).sin()
        + (0.019993 - 0.000101 * t) * (2.0 * DEG * m).sin()
        + 0.000290 * (3.0 * DEG * m).sin();
    ((l0 + dl) * DEG).rem_euclid(TAU)
}

/// Index 0..=11 of the 30-degree solar-term segment containing the Sun.
///
/// A lunar month whose two bounding new moons share a segment contains no
/// principal term; that is the leap-month test.
pub fn solar_term_segment(jdn: i64, tz_offset_hours: f64) -> i64 {
    (sun_longitude(jdn, tz_offset_hours) / PI * 6.0).floor() as i64
}

/// Local civil day number of the `k`-th new moon after the 1900 epoch.
pub fn new_moon_day(k: i64, tz_offset_hours: f64) -> i64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut jd1 = 2_415_020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DEG).sin();

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;

    let c1 = (0.1734 - 0.000393 * t) * (m * DEG).sin() + 0.0021 * (2.0 * DEG * m).sin()
        - 0.4068 * (mpr * DEG).sin()
        + 0.0161 * (2.0 * DEG * mpr).sin()
        - 0.0004 * (3.0 * DEG * mpr).sin()
        + 0.0104 * (2.0 * DEG * f).sin()
        - 0.0051 * ((m + mpr) * DEG).sin()
        - 0.0074 * ((m - mpr) * DEG).sin()
        + 0.0004 * ((2.0 * f + m) * DEG).sin()
        - 0.0004 * ((2.0 * f - m) * DEG).sin()
        - 0.0006 * ((2.0 * f + mpr) * DEG).sin()
        + 0.0010 * ((2.0 * f - mpr) * DEG).sin()
        + 0.0005 * ((2.0 * mpr + m) * DEG).sin();

    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };

    let jd_new = jd1 + c1 - delta_t;
    (jd_new + 0.5 + tz_offset_hours / 24.0).floor() as i64
}

/// Lunation number of the new moon nearest to `jdn`.
pub fn nearest_lunation(jdn: i64) -> i64 {
    (0.5 + (jdn as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH).floor() as i64
}
