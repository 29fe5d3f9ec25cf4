use crate::domain::ports::CancelSignal;
use crate::utils::error::Result;
use async_trait::async_trait;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Fires on the first key press.
///
/// The blocking crossterm poll runs on the blocking pool with raw mode enabled
/// so a single key is enough, no Enter needed.
#[derive(Debug, Clone)]
pub struct KeyPressSignal {
    poll_interval: Duration,
}

impl KeyPressSignal {
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Default for KeyPressSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CancelSignal for KeyPressSignal {
    async fn wait_for_cancel(&mut self, cancel: CancellationToken) -> Result<bool> {
        let poll_interval = self.poll_interval;
        let fired =
            tokio::task::spawn_blocking(move || wait_for_key(&cancel, poll_interval)).await??;
        Ok(fired)
    }
}

fn wait_for_key(cancel: &CancellationToken, poll_interval: Duration) -> Result<bool> {
    let _raw = RawModeGuard::enable()?;

    while !cancel.is_cancelled() {
        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal mode: {}", e);
        }
    }
}
