#[cfg(feature = "cli")]
pub mod cli;
pub mod strings;

pub const DEFAULT_STRINGS_FILE: &str = "strings.json";
pub const DEFAULT_RECORD_FILE: &str = "cust_data.json";

#[cfg(feature = "cli")]
pub use cli::CliConfig;
