use crate::domain::model::Sex;
use crate::utils::error::{DeathClockError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Accepted birthday layout, `MM/dd/yyyy`.
pub const BIRTHDAY_FORMAT: &str = "%m/%d/%Y";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn birthday_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("static birthday pattern"))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DeathClockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DeathClockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(DeathClockError::ConfigError {
            message: format!("'{}' must contain at least one message", field_name),
        });
    }

    if let Some(index) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(DeathClockError::ConfigError {
            message: format!("'{}' entry {} is empty", field_name, index),
        });
    }

    Ok(())
}

/// 解析性別選單 (1/2/3)
pub fn parse_sex_choice(input: &str) -> Result<Sex> {
    match input.trim().parse::<u8>() {
        Ok(1) => Ok(Sex::Male),
        Ok(2) => Ok(Sex::Female),
        Ok(3) => Ok(Sex::Unspecified),
        _ => Err(DeathClockError::ValidationError {
            message: format!("'{}' is not a menu choice", input.trim()),
        }),
    }
}

/// 解析生日，格式必須完全符合 MM/dd/yyyy
pub fn parse_birthday(input: &str) -> Result<NaiveDate> {
    if !birthday_pattern().is_match(input) {
        return Err(DeathClockError::ValidationError {
            message: format!("'{}' does not match mm/dd/yyyy", input),
        });
    }

    let date = NaiveDate::parse_from_str(input, BIRTHDAY_FORMAT).map_err(|e| {
        DeathClockError::ValidationError {
            message: format!("'{}' is not a calendar date: {}", input, e),
        }
    })?;

    // 年份必須介於 0001 與 9999
    if date.year() < 1 {
        return Err(DeathClockError::ValidationError {
            message: format!("'{}' has no year 0000", input),
        });
    }

    Ok(date)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Words that are already entirely upper-case are kept as acronyms.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word = String::new();

    let flush = |word: &mut String, out: &mut String| {
        if word.is_empty() {
            return;
        }
        let has_lower = word.chars().any(char::is_lowercase);
        let has_upper = word.chars().any(char::is_uppercase);
        if has_upper && !has_lower {
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
        word.clear();
    };

    for c in input.chars() {
        if c.is_whitespace() || c == '-' {
            flush(&mut word, &mut out);
            out.push(c);
        } else {
            word.push(c);
        }
    }
    flush(&mut word, &mut out);

    out
}
