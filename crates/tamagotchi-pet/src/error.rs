//! Error types for the tamagotchi-pet crate.
//!
//! Operations on a dead pet are not errors (they report
//! [`PetEvent::NoLongerAlive`]). The only failures are in pet construction
//! and species registration.
//!
//! [`PetEvent::NoLongerAlive`]: crate::events::PetEvent::NoLongerAlive

/// Errors that can occur while creating pets or registering species.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetError {
    /// The requested species tag matches no registered species.
    #[error("unknown species: {tag:?}")]
    UnknownSpecies {
        /// The tag the caller asked for.
        tag: String,
    },

    /// A species with the same tag is already registered.
    #[error("species already registered: {tag:?}")]
    DuplicateSpecies {
        /// The tag that collided.
        tag: String,
    },

    /// The species tag is empty after trimming whitespace.
    #[error("species tag must not be empty")]
    EmptySpeciesTag,
}
