use tuvi_base::Gender;
use tuvi_calendar::{LunarDate, SolarDate};
use tuvi_chart::{ChartInput, CycleSnapshot, NatalChart};

use crate::date::BirthMoment;
use crate::error::TuviError;
use crate::global::engine;

fn solar_input(moment: BirthMoment, gender: Gender) -> Result<ChartInput, TuviError> {
    let date = SolarDate::new(moment.year, moment.month, moment.day)?;
    Ok(ChartInput::solar(date, moment.hour, moment.minute, gender))
}

/// Chart for a solar birth moment, using the global engine.
pub fn chart(moment: BirthMoment, gender: Gender) -> Result<NatalChart, TuviError> {
    let input = solar_input(moment, gender)?;
    Ok(engine()?.compute(&input)?)
}

/// Chart for a lunar birth moment. `is_leap_month` selects the intercalary
/// month when the year has one at `moment.month`.
pub fn chart_lunar(
    moment: BirthMoment,
    is_leap_month: bool,
    gender: Gender,
) -> Result<NatalChart, TuviError> {
    let input = ChartInput::lunar(
        moment.year,
        moment.month,
        moment.day,
        is_leap_month,
        moment.hour,
        moment.minute,
        gender,
    );
    Ok(engine()?.compute(&input)?)
}

/// Canonical hash of the chart for a solar birth moment.
///
/// Shorthand for `chart(moment, gender)?.canonical_hash`.
pub fn chart_hash(moment: BirthMoment, gender: Gender) -> Result<String, TuviError> {
    Ok(chart(moment, gender)?.canonical_hash)
}

/// Solar date to lunar date.
pub fn to_lunar(date: SolarDate) -> Result<LunarDate, TuviError> {
    Ok(engine()?.to_lunar(date)?)
}

/// Lunar date to solar date.
pub fn to_solar(
    day: u32,
    month: u32,
    year: i32,
    is_leap_month: bool,
) -> Result<SolarDate, TuviError> {
    Ok(engine()?.to_solar(day, month, year, is_leap_month)?)
}

/// Leap month of a lunar year, or `None` for a regular year.
pub fn leap_month(lunar_year: i32) -> Result<Option<u32>, TuviError> {
    Ok(engine()?.leap_month(lunar_year)?)
}

/// Active Đại Vận, Tiểu Vận and Lưu Niên for a solar birth at a given
/// age and calendar year.
pub fn cycles(
    moment: BirthMoment,
    gender: Gender,
    age: u32,
    year: i32,
) -> Result<CycleSnapshot, TuviError> {
    let eng = engine()?;
    let natal = eng.compute(&solar_input(moment, gender)?)?;
    Ok(eng.cycles_at(&natal, age, year))
}
