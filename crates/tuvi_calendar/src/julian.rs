//! Julian Day Number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer day numbers only: the lunar calendar works on whole civil days,
//! so no fractional Julian Date is ever needed.
//!
//! Clean-room implementation from the Fliegel–Van Flandern integer algorithm
//! (Communications of the ACM, 1968).

/// Julian Day Number of a Gregorian calendar date.
///
/// Valid for every date after 4800 BCE; callers range-check the year first.
pub fn jd_from_date(day: u32, month: u32, year: i32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Gregorian calendar date `(year, month, day)` of a Julian Day Number.
pub fn jd_to_date(jd: i64) -> (i32, u32, u32) {
    let a = jd + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(jd_from_date(1, 1, 2000), 2_451_545);
    }

    #[test]
    fn lunation_epoch_day() {
        // 1900-01-01 is the origin of the new-moon series
        assert_eq!(jd_from_date(1, 1, 1900), 2_415_021);
    }

    #[test]
    fn inverse_known() {
        assert_eq!(jd_to_date(2_451_545), (2000, 1, 1));
        assert_eq!(jd_to_date(2_460_000), (2023, 2, 24));
    }

    #[test]
    fn round_trip_month_ends() {
        for (y, m) in [(1800, 2), (1900, 2), (2000, 2), (2024, 2), (2199, 12)] {
            let d = days_in_month(y, m);
            let jd = jd_from_date(d, m, y);
            assert_eq!(jd_to_date(jd), (y, m, d));
        }
    }

    #[test]
    fn consecutive_days() {
        assert_eq!(jd_from_date(1, 3, 2024) - jd_from_date(28, 2, 2024), 2);
        assert_eq!(jd_from_date(1, 3, 2023) - jd_from_date(28, 2, 2023), 1);
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 13), 0);
    }
}
