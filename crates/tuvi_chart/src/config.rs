//! Engine configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.
//!
//! ```toml
//! tz_offset_hours = 7.0
//! min_year = 1900
//! max_year = 2100
//! ```

use serde::{Deserialize, Serialize};
use tuvi_calendar::{MAX_YEAR, MIN_YEAR, VIETNAM_TZ_OFFSET_HOURS};

use crate::error::ChartError;

/// Largest civil time-zone offset accepted, in hours.
const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Engine configuration used at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Time zone the lunar calendar is evaluated in, hours east of UTC.
    pub tz_offset_hours: f64,
    /// First Gregorian year a chart may be computed for.
    pub min_year: i32,
    /// Last Gregorian year a chart may be computed for.
    pub max_year: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tz_offset_hours: VIETNAM_TZ_OFFSET_HOURS,
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.tz_offset_hours.is_finite() {
            return Err(ChartError::InvalidConfig("tz_offset_hours must be finite"));
        }
        if self.tz_offset_hours.abs() > MAX_TZ_OFFSET_HOURS {
            return Err(ChartError::InvalidConfig(
                "tz_offset_hours must be within -14..=14",
            ));
        }
        if self.min_year > self.max_year {
            return Err(ChartError::InvalidConfig(
                "min_year must not exceed max_year",
            ));
        }
        if self.min_year < MIN_YEAR || self.max_year > MAX_YEAR {
            return Err(ChartError::InvalidConfig(
                "year range must lie within 1800..=2199",
            ));
        }
        Ok(())
    }

    /// Whether `year` lies inside the configured span.
    pub fn contains_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}
