//! Birth moment parsed from text.

use std::str::FromStr;

use crate::error::TuviError;

/// Calendar date with a wall-clock time, e.g. "1995-03-02 08:30".
///
/// The date may be read as solar or lunar depending on the call it is
/// passed to, so only field ranges are checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, TuviError> {
    s.parse()
        .map_err(|_| TuviError::DateParse(format!("invalid {what}: {s:?}")))
}

impl FromStr for BirthMoment {
    type Err = TuviError;

    /// Parse "YYYY-MM-DD", "YYYY-MM-DD HH:MM" or "YYYY-MM-DDTHH:MM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let parts: Vec<&str> = date.split('-').collect();
        if parts.len() != 3 {
            return Err(TuviError::DateParse(format!(
                "expected YYYY-MM-DD, got {s:?}"
            )));
        }
        let year = parse_field(parts[0], "year")?;
        let month: u32 = parse_field(parts[1], "month")?;
        let day: u32 = parse_field(parts[2], "day")?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TuviError::DateParse(format!("date out of range: {date}")));
        }

        let (hour, minute) = match time {
            None => (0, 0),
            Some(t) => {
                let (h, m) = t.split_once(':').unwrap_or((t, "0"));
                let hour: u32 = parse_field(h, "hour")?;
                let minute: u32 = parse_field(m, "minute")?;
                if hour > 23 || minute > 59 {
                    return Err(TuviError::DateParse(format!("time out of range: {t}")));
                }
                (hour, minute)
            }
        };

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_time() {
        let m: BirthMoment = "1995-03-02 08:30".parse().unwrap();
        assert_eq!(m, BirthMoment::new(1995, 3, 2, 8, 30));
        let m: BirthMoment = "1995-03-02T23:05".parse().unwrap();
        assert_eq!((m.hour, m.minute), (23, 5));
    }

    #[test]
    fn parse_date_only() {
        let m: BirthMoment = "2024-02-10".parse().unwrap();
        assert_eq!(m, BirthMoment::new(2024, 2, 10, 0, 0));
    }

    #[test]
    fn parse_hour_only() {
        let m: BirthMoment = "2024-02-10 7".parse().unwrap();
        assert_eq!((m.hour, m.minute), (7, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "2024/02/10", "2024-13-01", "2024-02-10 24:00", "2024-02-10 10:61"] {
            assert!(
                matches!(bad.parse::<BirthMoment>(), Err(TuviError::DateParse(_))),
                "{bad}"
            );
        }
    }
}
