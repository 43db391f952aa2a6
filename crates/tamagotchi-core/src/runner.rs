//! Driver loop.
//!
//! [`run`] plays one session to completion. Each turn:
//!
//! 1. stop if the pet has died;
//! 2. apply passive decay at the current time;
//! 3. hand a status snapshot to the [`SessionObserver`];
//! 4. read the next [`Input`] from the [`InputSource`];
//! 5. dispatch it.
//!
//! Commands go through [`GameSession::execute`] and so trigger the stage
//! update and health check. Making a sound does not. Unrecognized input is
//! reported to the observer and never reaches the pet.

use std::collections::VecDeque;

use tamagotchi_pet::PetEvent;
use tamagotchi_types::{DeathCause, PetStatus};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::command::Command;
use crate::session::GameSession;

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Reading player input failed.
    #[error("failed to read input: {source}")]
    Input {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// One unit of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Run a command cycle.
    Command(Command),
    /// Ask the pet for its sound.
    MakeSound,
    /// End the game.
    Quit,
    /// Input that matched nothing; carries the raw text.
    Unrecognized(String),
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The pet died.
    Died(DeathCause),
    /// The player quit.
    Quit,
    /// The input source ran dry.
    InputExhausted,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the run ended.
    pub end_reason: EndReason,
    /// Number of inputs consumed.
    pub turns: u64,
}

/// Where player input comes from.
pub trait InputSource {
    /// Produce the next input, or `None` when no more input will come.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Input`] if the underlying reader fails.
    fn next_input(&mut self) -> Result<Option<Input>, RunnerError>;
}

/// Receives everything a driver might want to show.
pub trait SessionObserver {
    /// Called once per turn, after decay, before input is read.
    fn on_status(&mut self, status: &PetStatus);

    /// Called for every notice the pet produces.
    fn on_event(&mut self, pet_name: &str, event: &PetEvent);

    /// Called when input matched nothing.
    fn on_invalid(&mut self, raw: &str);

    /// Called once when the run ends.
    fn on_end(&mut self, _status: &PetStatus, _reason: EndReason) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl SessionObserver for NoOpObserver {
    fn on_status(&mut self, _status: &PetStatus) {}

    fn on_event(&mut self, _pet_name: &str, _event: &PetEvent) {}

    fn on_invalid(&mut self, _raw: &str) {}
}

/// Input replayed from a fixed list.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<Input>,
}

impl ScriptedInput {
    /// Replay `inputs` in order, then report end of input.
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> Result<Option<Input>, RunnerError> {
        Ok(self.inputs.pop_front())
    }
}

/// Play `session` until the pet dies, the player quits, or input ends.
///
/// The observer receives a final status via [`SessionObserver::on_end`].
///
/// # Errors
///
/// Returns [`RunnerError`] if reading input fails.
pub fn run(
    session: &mut GameSession,
    clock: &dyn Clock,
    input: &mut dyn InputSource,
    observer: &mut dyn SessionObserver,
) -> Result<RunSummary, RunnerError> {
    let name = session.pet().name().to_owned();
    let mut turns: u64 = 0;

    info!(pet_id = %session.pet().id(), pet = %name, "session starting");

    let end_reason = loop {
        if let Some(cause) = session.pet().cause_of_death() {
            break EndReason::Died(cause);
        }

        if let Some(event) = session.decay(clock.now()) {
            observer.on_event(&name, &event);
        }
        observer.on_status(&session.status());

        let Some(next) = input.next_input()? else {
            break EndReason::InputExhausted;
        };
        turns = turns.saturating_add(1);

        match next {
            Input::Command(command) => {
                let report = session.execute(command, clock.now());
                for event in &report.events {
                    observer.on_event(&name, event);
                }
            }
            Input::MakeSound => {
                observer.on_event(&name, &session.make_sound());
            }
            Input::Quit => break EndReason::Quit,
            Input::Unrecognized(raw) => {
                debug!(input = %raw, "unrecognized input");
                observer.on_invalid(&raw);
            }
        }
    };

    let status = session.status();
    observer.on_end(&status, end_reason);
    info!(
        pet_id = %status.id,
        pet = %name,
        ?end_reason,
        turns,
        stage = %status.stage,
        age = status.age,
        "session ended"
    );

    Ok(RunSummary { end_reason, turns })
}
