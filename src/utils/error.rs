use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeathClockError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("Date out of range: {date}")]
    DateOutOfRange { date: NaiveDate },

    #[error("Background task failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),
}

impl DeathClockError {
    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DeathClockError::IoError(e) => format!("Could not read or write a file: {}", e),
            DeathClockError::SerializationError(e) => {
                format!("A JSON file is malformed: {}", e)
            }
            DeathClockError::ConfigError { message } => {
                format!("The message configuration is invalid: {}", message)
            }
            DeathClockError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            DeathClockError::ValidationError { message } => message.clone(),
            DeathClockError::InputClosed { prompt } => {
                format!("No more input while asking for {}", prompt)
            }
            DeathClockError::DateOutOfRange { date } => {
                format!("Cannot compute a life expectancy date from {}", date)
            }
            DeathClockError::TaskJoinError(_) => {
                "The key listener stopped unexpectedly".to_string()
            }
        }
    }

    /// 建議的修復方式
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeathClockError::IoError(_) => "Check that the working directory is writable",
            DeathClockError::SerializationError(_) | DeathClockError::ConfigError { .. } => {
                "Delete the strings file to regenerate the defaults"
            }
            DeathClockError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
            DeathClockError::ValidationError { .. } => "Check the values you entered",
            DeathClockError::InputClosed { .. } => "Run the program in an interactive terminal",
            DeathClockError::DateOutOfRange { .. } => "Enter a birthday between years 0001 and 9999",
            DeathClockError::TaskJoinError(_) => "Try again; press a key only once the countdown is running",
        }
    }
}

pub type Result<T> = std::result::Result<T, DeathClockError>;
