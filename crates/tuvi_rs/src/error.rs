//! Facade error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tuvi_calendar::CalendarError;
use tuvi_chart::ChartError;

/// Errors from the convenience API.
#[derive(Debug)]
#[non_exhaustive]
pub enum TuviError {
    /// `init()` has not been called.
    NotInitialized,
    /// `init()` was called more than once.
    AlreadyInitialized,
    /// Birth moment string could not be parsed.
    DateParse(String),
    /// Error from the chart engine.
    Chart(ChartError),
}

impl Display for TuviError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "engine not initialized; call tuvi_rs::init() first"),
            Self::AlreadyInitialized => write!(f, "engine already initialized"),
            Self::DateParse(msg) => write!(f, "date parse error: {msg}"),
            Self::Chart(e) => write!(f, "{e}"),
        }
    }
}

impl Error for TuviError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChartError> for TuviError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<CalendarError> for TuviError {
    fn from(e: CalendarError) -> Self {
        Self::Chart(ChartError::Calendar(e))
    }
}
