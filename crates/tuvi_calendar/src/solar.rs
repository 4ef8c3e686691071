//! Validated Gregorian calendar date.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CalendarError;
use crate::julian::{days_in_month, jd_from_date, jd_to_date};

/// Gregorian calendar date, guaranteed to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl SolarDate {
    /// Build a date, rejecting days that do not exist in the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidSolarDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub(crate) fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jd_to_date(jdn);
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        jd_from_date(self.day, self.month, self.year)
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parse "YYYY-MM-DD".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(CalendarError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("year: {e}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("month: {e}")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("day: {e}")))?;
        Self::new(year, month, day)
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for SolarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
