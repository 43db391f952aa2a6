//! Pet state, stats, species and life-stage mechanics for the Tamagotchi
//! simulation.
//!
//! This crate is the logic layer for a single pet -- everything that
//! operates on pet state without touching I/O or reading a clock. Drivers
//! pass the current time in seconds to every time-gated operation.
//!
//! # Modules
//!
//! - [`config`] -- Rule constants ([`PetConfig`])
//! - [`death`] -- Death conditions in priority order
//! - [`error`] -- Construction errors ([`PetError`])
//! - [`events`] -- Observable notices ([`PetEvent`])
//! - [`factory`] -- Species registry and pet construction ([`PetFactory`])
//! - [`pet`] -- The state machine ([`Pet`])
//! - [`species`] -- Species behavior ([`Species`], [`Dog`], [`Cat`])
//! - [`stats`] -- Bounded stats and clamping ([`Stat`], [`Vitals`])

pub mod config;
pub mod death;
pub mod error;
pub mod events;
pub mod factory;
pub mod pet;
pub mod species;
pub mod stats;

// Re-export primary types at crate root for convenience.
pub use config::PetConfig;
pub use death::check_death;
pub use error::PetError;
pub use events::PetEvent;
pub use factory::{PetFactory, SpeciesConstructor};
pub use pet::Pet;
pub use species::{Cat, Dog, Species};
pub use stats::{STAT_MAX, STAT_MIN, Stat, Vitals, clamp_down, clamp_up};
