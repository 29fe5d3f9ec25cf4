use crate::domain::model::Sex;
use crate::utils::error::{DeathClockError, Result};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

pub const FEMALE_LIFE_EXPECTANCY: f64 = 80.2;
pub const DEFAULT_LIFE_EXPECTANCY: f64 = 74.8;

pub fn life_expectancy_years(sex: Sex) -> f64 {
    match sex {
        Sex::Female => FEMALE_LIFE_EXPECTANCY,
        Sex::Male | Sex::Unspecified => DEFAULT_LIFE_EXPECTANCY,
    }
}

/// Birth date plus the whole years of the life expectancy constant, moved off
/// the weekend onto the following Monday.
///
/// The fractional part of the constant is dropped. 29 February clamps to
/// 28 February in non-leap target years.
pub fn compute_target_date(birth_date: NaiveDate, sex: Sex) -> Result<NaiveDate> {
    let whole_years = life_expectancy_years(sex).floor() as u32;

    let unadjusted = birth_date
        .checked_add_months(Months::new(whole_years * 12))
        .ok_or(DeathClockError::DateOutOfRange { date: birth_date })?;

    shift_off_weekend(unadjusted).ok_or(DeathClockError::DateOutOfRange { date: birth_date })
}

/// Saturday moves forward two days, Sunday one. Single pass, no re-check.
pub fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}
