//! Notices produced by pet operations.
//!
//! Every state machine operation reports what happened as a [`PetEvent`].
//! Drivers turn events into text with [`PetEvent::describe`]; the state
//! machine itself never prints.

use tamagotchi_types::{DeathCause, LifeStage};

/// Something observable that happened to a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetEvent {
    /// The pet ate.
    Ate,
    /// The pet slept and aged by one.
    Slept,
    /// The pet played.
    Played,
    /// The pet exercised.
    Exercised,
    /// The pet was cleaned.
    Cleaned,
    /// A passive decay tick was applied.
    Decayed,
    /// The pet moved to a new life stage.
    Evolved {
        /// The stage the pet entered.
        stage: LifeStage,
    },
    /// The pet died.
    Died {
        /// Why it died.
        cause: DeathCause,
    },
    /// The pet made its species sound.
    Spoke {
        /// The sound, e.g. `"Woof!"`.
        sound: String,
    },
    /// The operation was refused because the pet is dead.
    NoLongerAlive,
}

impl PetEvent {
    /// Render the event as a sentence about the pet called `name`.
    pub fn describe(&self, name: &str) -> String {
        match self {
            Self::Ate => format!("{name} is eating."),
            Self::Slept => format!("{name} is sleeping."),
            Self::Played => format!("{name} is playing."),
            Self::Exercised => format!("{name} is exercising."),
            Self::Cleaned => format!("{name} has been cleaned."),
            Self::Decayed => format!("Time passes for {name}."),
            Self::Evolved { stage } => format!("{name} has evolved to the {stage} stage!"),
            Self::Died { cause } => format!("{name} died of {}.", cause.description()),
            Self::Spoke { sound } => format!("{name} says: {sound}"),
            Self::NoLongerAlive => format!("{name} is no longer alive."),
        }
    }

    /// The cause of death, if this event is a death.
    pub const fn death_cause(&self) -> Option<DeathCause> {
        match self {
            Self::Died { cause } => Some(*cause),
            _ => None,
        }
    }
}
