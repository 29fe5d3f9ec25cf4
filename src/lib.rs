pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{run_session, SessionIo, SessionOutcome};
pub use config::strings::MessageTemplates;
pub use crate::core::countdown::{Countdown, CountdownState};
pub use crate::core::date_math::compute_target_date;
pub use crate::core::record::{RecordStore, UserRecord};
pub use domain::model::{CountdownOutcome, Sex, UserAnswer};
pub use utils::error::{DeathClockError, Result};
