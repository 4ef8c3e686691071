//! Error type for chart construction.

use thiserror::Error;
use tuvi_calendar::CalendarError;

/// Errors from configuration, input validation and chart assembly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("lunar date {day}/{month} outside the star placement tables")]
    LunarOutOfRange { month: u32, day: u32 },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
