use super::{DEFAULT_RECORD_FILE, DEFAULT_STRINGS_FILE};
use crate::domain::ports::FileLocations;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "death-clock")]
#[command(about = "Estimate a life expectancy date and count down to it")]
pub struct CliConfig {
    /// JSON file with greeting and response templates
    #[arg(long, default_value = "strings.json")]
    pub strings_file: String,

    /// JSON file the answers are written to
    #[arg(long, default_value = "cust_data.json")]
    pub record_file: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            strings_file: DEFAULT_STRINGS_FILE.to_string(),
            record_file: DEFAULT_RECORD_FILE.to_string(),
            verbose: false,
        }
    }
}

impl FileLocations for CliConfig {
    fn strings_file(&self) -> &str {
        &self.strings_file
    }

    fn record_file(&self) -> &str {
        &self.record_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("strings_file", &self.strings_file)?;
        validate_path("record_file", &self.record_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_file_names() {
        let config = CliConfig::default();
        assert_eq!(config.strings_file(), "strings.json");
        assert_eq!(config.record_file(), "cust_data.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = CliConfig {
            record_file: String::new(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_without_flags() {
        let config = CliConfig::parse_from(["death-clock"]);
        assert_eq!(config.strings_file, DEFAULT_STRINGS_FILE);
        assert_eq!(config.record_file, DEFAULT_RECORD_FILE);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let config = CliConfig::parse_from([
            "death-clock",
            "--strings-file",
            "conf/messages.json",
            "--record-file",
            "out/record.json",
            "-v",
        ]);
        assert_eq!(config.strings_file, "conf/messages.json");
        assert_eq!(config.record_file, "out/record.json");
        assert!(config.verbose);
    }
}
