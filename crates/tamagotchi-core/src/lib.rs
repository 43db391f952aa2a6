//! Clock, configuration, game session and driver loop for the Tamagotchi
//! simulation.
//!
//! This crate sits between the pet logic in `tamagotchi-pet` and a concrete
//! front end. It owns the command cycle (action, stage update, health
//! check) and the turn loop that feeds it time and input.
//!
//! # Modules
//!
//! - [`clock`] -- [`Clock`](clock::Clock) trait with system and manual clocks
//! - [`command`] -- [`Command`](command::Command) enum and parsing
//! - [`config`] -- Configuration loading from `tamagotchi.yaml`
//! - [`runner`] -- The turn loop, input sources and observers
//! - [`session`] -- [`GameSession`](session::GameSession) command dispatch

pub mod clock;
pub mod command;
pub mod config;
pub mod runner;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::{Command, UnknownCommand};
pub use config::{ConfigError, GameConfig, LoggingConfig, SessionConfig};
pub use runner::{
    EndReason, Input, InputSource, NoOpObserver, RunSummary, RunnerError, ScriptedInput,
    SessionObserver, run,
};
pub use session::{CommandReport, GameSession};
