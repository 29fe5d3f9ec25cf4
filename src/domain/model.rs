use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "not specified")]
    Unspecified,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unspecified => "not specified",
        };
        f.write_str(label)
    }
}

/// Everything collected from the user in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAnswer {
    pub name: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub target_date: NaiveDate,
}

impl UserAnswer {
    pub fn target_day_of_week(&self) -> String {
        day_of_week(self.target_date)
    }
}

/// English weekday name, e.g. `Monday`.
pub fn day_of_week(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Short date as `M/d/yyyy`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// How a countdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Completed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_serializes_like_record_file() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&Sex::Unspecified).unwrap(),
            "\"not specified\""
        );
        assert_eq!(Sex::Female.to_string(), "female");
    }

    #[test]
    fn test_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2070, 1, 6).unwrap();
        assert_eq!(short_date(date), "1/6/2070");
        assert_eq!(day_of_week(date), "Monday");
    }
}
