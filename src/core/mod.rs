pub mod countdown;
pub mod date_math;
pub mod record;
pub mod templates;

pub use crate::domain::model::{CountdownOutcome, Sex, UserAnswer};
pub use crate::domain::ports::{CancelSignal, Clock, DisplaySurface, FileLocations, RandomSource};
pub use crate::utils::error::Result;
