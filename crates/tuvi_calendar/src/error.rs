//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar/lunar conversion or date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year is outside the supported conversion span.
    DateOutOfRange { year: i32, min: i32, max: i32 },
    /// The solar calendar date does not exist (e.g. 2023-02-29).
    InvalidSolarDate { year: i32, month: u32, day: u32 },
    /// Lunar month number outside 1..=12.
    InvalidLunarMonth(u32),
    /// The requested month is not the leap month of that lunar year.
    InvalidLeapMonth { year: i32, month: u32 },
    /// Lunar day past the end of the lunar month.
    InvalidLunarDay { day: u32, month_length: u32 },
    /// Date string could not be parsed.
    Parse(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange { year, min, max } => {
                write!(f, "year {year} outside supported range {min}..={max}")
            }
            Self::InvalidSolarDate { year, month, day } => {
                write!(f, "invalid solar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidLunarMonth(month) => write!(f, "invalid lunar month: {month}"),
            Self::InvalidLeapMonth { year, month } => {
                write!(f, "lunar year {year} has no leap month {month}")
            }
            Self::InvalidLunarDay { day, month_length } => {
                write!(f, "lunar day {day} exceeds month length {month_length}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for CalendarError {}
