use crate::core::date_math::life_expectancy_years;
use crate::domain::model::{day_of_week, Sex, UserAnswer};
use crate::utils::error::{DeathClockError, Result};
use crate::utils::validation::BIRTHDAY_FORMAT;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of a [`UserAnswer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    pub name: String,
    pub sex: Sex,
    pub birthday: String,
    pub birth_day_of_week: String,
    pub raw_life_exp: f64,
    pub life_expectancy_date: NaiveDateTime,
    pub life_expectancy_day_of_week: String,
}

impl UserRecord {
    pub fn from_answer(answer: &UserAnswer) -> Self {
        Self {
            name: answer.name.clone(),
            sex: answer.sex,
            birthday: answer.birth_date.format(BIRTHDAY_FORMAT).to_string(),
            birth_day_of_week: day_of_week(answer.birth_date),
            raw_life_exp: life_expectancy_years(answer.sex),
            life_expectancy_date: answer.target_date.and_time(NaiveTime::MIN),
            life_expectancy_day_of_week: day_of_week(answer.target_date),
        }
    }

    pub fn birth_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.birthday, BIRTHDAY_FORMAT).map_err(|e| {
            DeathClockError::ValidationError {
                message: format!("Stored birthday '{}' is invalid: {}", self.birthday, e),
            }
        })
    }

    pub fn target_date(&self) -> NaiveDate {
        self.life_expectancy_date.date()
    }
}

/// Single overwritten JSON record.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, record: &UserRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved user record to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<UserRecord> {
        let content = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }
}
