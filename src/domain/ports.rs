use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use tokio_util::sync::CancellationToken;

/// Where the countdown is drawn.
pub trait DisplaySurface: Send {
    fn clear_current_line(&mut self) -> Result<()>;
    fn write_in_place(&mut self, text: &str) -> Result<()>;
    fn write_line(&mut self, text: &str) -> Result<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Something that can end a countdown early.
///
/// Implementations resolve once their trigger fires or `cancel` is cancelled
/// by the other side, whichever happens first. They must not cancel the token
/// themselves; the caller does that.
#[async_trait]
pub trait CancelSignal: Send + 'static {
    /// Returns `true` when the signal itself fired.
    async fn wait_for_cancel(&mut self, cancel: CancellationToken) -> Result<bool>;
}

pub trait FileLocations: Send + Sync {
    fn strings_file(&self) -> &str;
    fn record_file(&self) -> &str;
}
