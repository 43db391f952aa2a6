//! Read-only status snapshot handed to drivers for rendering.

use serde::{Deserialize, Serialize};

use crate::enums::{DeathCause, LifeStage};
use crate::ids::PetId;

/// Everything a driver needs to draw the pet.
///
/// A snapshot is a copy: mutating it has no effect on the pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetStatus {
    /// The pet's identifier.
    pub id: PetId,
    /// Player-chosen name.
    pub name: String,
    /// Species tag the pet was created with (e.g. `"Dog"`).
    pub species: String,
    /// Current life stage.
    pub stage: LifeStage,
    /// Number of times the pet has slept.
    pub age: u32,
    /// Body weight. Never negative, no upper bound.
    pub weight: u32,
    /// Hunger, 0 to 100. 100 is fatal.
    pub hunger: u8,
    /// Happiness, 0 to 100. 0 is fatal.
    pub happiness: u8,
    /// Training, 0 to 100.
    pub training: u8,
    /// Sickness, 0 to 100. 100 is fatal.
    pub sickness: u8,
    /// Whether the pet is still alive.
    pub alive: bool,
    /// Recorded cause of death, `None` while alive.
    pub cause_of_death: Option<DeathCause>,
}
