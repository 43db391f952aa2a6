//! Error types for the terminal driver.
//!
//! [`CliError`] wraps every failure the binary can hit so `main` can
//! propagate with `?`.

use tamagotchi_core::{ConfigError, RunnerError};
use tamagotchi_pet::PetError;

/// Top-level error for the `tamagotchi` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The pet could not be created (e.g. unknown species).
    #[error("pet error: {source}")]
    Pet {
        /// The underlying pet error.
        #[from]
        source: PetError,
    },

    /// The game loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: RunnerError,
    },

    /// Terminal I/O failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
