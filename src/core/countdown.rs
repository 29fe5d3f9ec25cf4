use crate::domain::model::CountdownOutcome;
use crate::domain::ports::{CancelSignal, Clock, DisplaySurface};
use crate::utils::error::{DeathClockError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const TICK: Duration = Duration::from_secs(1);
pub const REMAINING_PREFIX: &str = "Time Remaining: ";
pub const REACHED_MESSAGE: &str = "Life expectancy date reached!";
pub const STOPPED_MESSAGE: &str = "Countdown stopped by user.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Completed,
    Cancelled,
}

/// Live countdown to `target`, redrawn once per tick until the target passes
/// or the shared token is cancelled.
pub struct Countdown<D: DisplaySurface, C: Clock> {
    target: DateTime<Local>,
    display: D,
    clock: C,
    state: CountdownState,
    renders: usize,
}

impl<D: DisplaySurface, C: Clock> Countdown<D, C> {
    pub fn new(target: DateTime<Local>, display: D, clock: C) -> Self {
        Self {
            target,
            display,
            clock,
            state: CountdownState::Running,
            renders: 0,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Runs until a terminal state. Completion cancels `cancel` so a waiting
    /// listener can exit.
    pub async fn run(&mut self, cancel: &CancellationToken) -> Result<CountdownOutcome> {
        if self.state != CountdownState::Running {
            return Err(DeathClockError::ValidationError {
                message: format!("Countdown already finished ({:?})", self.state),
            });
        }

        tracing::debug!("Countdown started, target {}", self.target);

        loop {
            if cancel.is_cancelled() {
                return self.finish(CountdownOutcome::Cancelled);
            }

            let remaining = self.target.signed_duration_since(self.clock.now());
            if remaining <= TimeDelta::zero() {
                cancel.cancel();
                return self.finish(CountdownOutcome::Completed);
            }

            self.display.clear_current_line()?;
            self.display
                .write_in_place(&format!("{}{}", REMAINING_PREFIX, format_remaining(remaining)))?;
            self.renders += 1;

            // 取消優先，避免在取消後多畫一次
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    return self.finish(CountdownOutcome::Cancelled);
                }
                _ = tokio::time::sleep(TICK) => {}
            }
        }
    }

    fn finish(&mut self, outcome: CountdownOutcome) -> Result<CountdownOutcome> {
        let message = match outcome {
            CountdownOutcome::Completed => {
                self.state = CountdownState::Completed;
                REACHED_MESSAGE
            }
            CountdownOutcome::Cancelled => {
                self.state = CountdownState::Cancelled;
                STOPPED_MESSAGE
            }
        };

        if self.renders > 0 {
            self.display.write_line("")?;
        }
        self.display.write_line(message)?;

        tracing::info!("Countdown finished: {:?} after {} renders", outcome, self.renders);
        Ok(outcome)
    }
}

/// `"{d} days, {h} hours, {m} minutes, {s} seconds"` for a positive duration.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    format!(
        "{} days, {} hours, {} minutes, {} seconds",
        days, hours, minutes, seconds
    )
}

/// Local midnight at the start of `date`. Zones that skip midnight fall back to
/// the first valid instant an hour later.
pub fn local_midnight(date: NaiveDate) -> Result<DateTime<Local>> {
    let naive = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + TimeDelta::hours(1)))
                .earliest()
        })
        .ok_or(DeathClockError::DateOutOfRange { date })
}

/// Waits on `signal` in its own task and cancels the token if it fires.
pub fn spawn_cancel_listener<S: CancelSignal>(
    mut signal: S,
    cancel: CancellationToken,
) -> JoinHandle<Result<bool>> {
    tokio::spawn(async move {
        let fired = signal.wait_for_cancel(cancel.clone()).await?;
        if fired {
            tracing::debug!("Cancel signal received");
            cancel.cancel();
        }
        Ok(fired)
    })
}

/// Runs `countdown` against a freshly spawned listener for `signal`.
///
/// A failing listener is logged and leaves the countdown running to completion.
pub async fn run_with_signal<D, C, S>(
    countdown: &mut Countdown<D, C>,
    signal: S,
) -> Result<CountdownOutcome>
where
    D: DisplaySurface,
    C: Clock,
    S: CancelSignal,
{
    let cancel = CancellationToken::new();
    let listener = spawn_cancel_listener(signal, cancel.clone());

    let outcome = countdown.run(&cancel).await;
    cancel.cancel();

    if let Err(e) = listener.await? {
        tracing::warn!("Cancel listener failed: {}", e);
    }

    outcome
}
