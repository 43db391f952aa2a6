//! Shared type definitions for the Tamagotchi simulation.
//!
//! This crate holds the plain data that crosses crate boundaries: life
//! stages, causes of death, the pet identifier and the status snapshot
//! that drivers render.
//!
//! # Modules
//!
//! - [`enums`] -- [`LifeStage`] progression and [`DeathCause`]
//! - [`ids`] -- UUID wrapper for pet identity
//! - [`structs`] -- [`PetStatus`] snapshot

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::{DeathCause, LifeStage};
pub use ids::PetId;
pub use structs::PetStatus;
