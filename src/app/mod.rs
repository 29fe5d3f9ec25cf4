pub mod prompt;
pub mod session;

use crate::app::prompt::Prompter;
use crate::app::session::Session;
use crate::config::strings::MessageTemplates;
use crate::core::countdown::{local_midnight, run_with_signal, Countdown};
use crate::core::record::{RecordStore, UserRecord};
use crate::domain::model::{CountdownOutcome, UserAnswer};
use crate::domain::ports::{CancelSignal, Clock, DisplaySurface, FileLocations, RandomSource};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub answer: UserAnswer,
    /// The record as read back from disk after saving.
    pub record: UserRecord,
    pub countdown: CountdownOutcome,
}

/// Everything a run needs from the outside world.
pub struct SessionIo<R, W, G, D, C, S> {
    pub input: R,
    pub output: W,
    pub rng: G,
    pub display: D,
    pub clock: C,
    pub signal: S,
}

/// 完整流程：載入設定、詢問、存檔、倒數
pub async fn run_session<L, R, W, G, D, C, S>(
    locations: &L,
    io: SessionIo<R, W, G, D, C, S>,
) -> Result<SessionOutcome>
where
    L: FileLocations,
    R: BufRead,
    W: Write,
    G: RandomSource,
    D: DisplaySurface,
    C: Clock,
    S: CancelSignal,
{
    let templates = MessageTemplates::load_or_create(locations.strings_file())?;
    tracing::debug!("Loaded templates from {}", locations.strings_file());

    let (answer, record) = {
        let mut session = Session::new(Prompter::new(io.input, io.output), &templates, io.rng);
        let answer = session.collect_answer()?;

        let store = RecordStore::new(locations.record_file());
        store.save(&UserRecord::from_answer(&answer))?;
        tracing::info!("User record written to {}", store.path().display());
        let record = store.load()?;
        tracing::debug!("Read back record: {:?}", record);

        let prompter = session.prompter_mut();
        prompter.say("")?;
        prompter.say("Starting Countdown to Life Expectancy...")?;
        prompter.say("Press any key to stop the countdown.")?;
        (answer, record)
    };

    let target = local_midnight(answer.target_date)?;
    let mut countdown = Countdown::new(target, io.display, io.clock);
    let outcome = run_with_signal(&mut countdown, io.signal).await?;

    Ok(SessionOutcome {
        answer,
        record,
        countdown: outcome,
    })
}

/// Runs against the real terminal.
#[cfg(feature = "cli")]
pub async fn run(config: &crate::config::CliConfig) -> Result<SessionOutcome> {
    use crate::adapters::{KeyPressSignal, SystemClock, TerminalDisplay, ThreadRngSource};

    let io = SessionIo {
        input: std::io::stdin().lock(),
        output: std::io::stdout(),
        rng: ThreadRngSource,
        display: TerminalDisplay::stdout(),
        clock: SystemClock,
        signal: KeyPressSignal::new(),
    };
    run_session(config, io).await
}
