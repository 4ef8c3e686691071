//! Birth input of a chart.

use serde::Serialize;
use tuvi_base::Gender;
use tuvi_calendar::SolarDate;

use crate::error::ChartError;

/// Birth moment and subject, as given by the caller.
///
/// `year`/`month`/`day` are read as a lunar date when `is_lunar` is set and
/// as a Gregorian date otherwise. Minutes are carried but never change the
/// chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChartInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub gender: Gender,
    pub is_lunar: bool,
    pub is_leap_month: bool,
}

impl ChartInput {
    /// Input from a Gregorian birth date.
    pub fn solar(date: SolarDate, hour: u32, minute: u32, gender: Gender) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour,
            minute,
            gender,
            is_lunar: false,
            is_leap_month: false,
        }
    }

    /// Input from a lunar birth date.
    pub fn lunar(
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
        hour: u32,
        minute: u32,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            gender,
            is_lunar: true,
            is_leap_month,
        }
    }

    /// Reject out-of-range clock fields and impossible dates.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.hour > 23 {
            return Err(ChartError::InvalidInput(format!(
                "hour {} outside 0..=23",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(ChartError::InvalidInput(format!(
                "minute {} outside 0..=59",
                self.minute
            )));
        }
        if self.is_lunar {
            if !(1..=12).contains(&self.month) {
                return Err(ChartError::InvalidInput(format!(
                    "lunar month {} outside 1..=12",
                    self.month
                )));
            }
            if !(1..=30).contains(&self.day) {
                return Err(ChartError::InvalidInput(format!(
                    "lunar day {} outside 1..=30",
                    self.day
                )));
            }
        } else {
            if self.is_leap_month {
                return Err(ChartError::InvalidInput(
                    "leap month flag requires a lunar date".into(),
                ));
            }
            SolarDate::new(self.year, self.month, self.day)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ChartInput {
        ChartInput::solar(
            SolarDate::new(1995, 3, 2).unwrap(),
            8,
            30,
            Gender::Female,
        )
    }

    #[test]
    fn valid_solar_input() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn clock_bounds() {
        let mut i = base();
        i.hour = 24;
        assert!(matches!(i.validate(), Err(ChartError::InvalidInput(_))));
        let mut i = base();
        i.minute = 60;
        assert!(matches!(i.validate(), Err(ChartError::InvalidInput(_))));
        let mut i = base();
        i.hour = 23;
        i.minute = 59;
        assert!(i.validate().is_ok());
    }

    #[test]
    fn impossible_solar_date() {
        let mut i = base();
        i.month = 2;
        i.day = 30;
        assert!(matches!(i.validate(), Err(ChartError::Calendar(_))));
    }

    #[test]
    fn leap_flag_needs_lunar() {
        let mut i = base();
        i.is_leap_month = true;
        assert!(matches!(i.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn lunar_input_bounds() {
        let ok = ChartInput::lunar(2025, 10, 30, true, 0, 0, Gender::Male);
        assert!(ok.validate().is_ok());
        let bad = ChartInput::lunar(2025, 13, 1, false, 0, 0, Gender::Male);
        assert!(bad.validate().is_err());
        let bad = ChartInput::lunar(2025, 1, 31, false, 0, 0, Gender::Male);
        assert!(bad.validate().is_err());
    }
}
