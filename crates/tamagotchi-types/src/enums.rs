//! Enumeration types for the Tamagotchi simulation.
//!
//! Life stages and causes of death. Both are plain `Copy` values that flow
//! from the pet state machine into status snapshots and driver output.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Life stages
// ---------------------------------------------------------------------------

/// A stage in the pet's life.
///
/// Stages are strictly ordered. A pet starts as a [`LifeStage::Baby`] and
/// moves forward one stage at a time. [`LifeStage::Special`] is terminal:
/// it has no successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    /// Newly hatched.
    Baby,
    /// First growth stage.
    Child,
    /// Adolescent.
    Teenager,
    /// Fully grown.
    Adult,
    /// Elderly. Old-age death can only happen in this stage.
    Senior,
    /// Reached after surviving the senior stage. Terminal.
    Special,
}

impl LifeStage {
    /// Every stage in progression order.
    pub const ALL: [Self; 6] = [
        Self::Baby,
        Self::Child,
        Self::Teenager,
        Self::Adult,
        Self::Senior,
        Self::Special,
    ];

    /// The stage that follows this one, or `None` if this stage is terminal.
    pub fn next(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|stage| *stage == self)?;
        Self::ALL.get(index.checked_add(1)?).copied()
    }

    /// Whether no further stage transitions are possible.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Special)
    }

    /// Display name of the stage.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baby => "Baby",
            Self::Child => "Child",
            Self::Teenager => "Teenager",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
            Self::Special => "Special",
        }
    }
}

impl core::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Death
// ---------------------------------------------------------------------------

/// Why a pet died.
///
/// Variants are listed in the priority order used by the health check:
/// when several conditions hold at once, the earliest one is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Hunger reached the maximum.
    Starvation,
    /// Happiness dropped to zero.
    Sadness,
    /// Sickness reached the maximum.
    Sickness,
    /// Stayed in the senior stage past the senior lifespan.
    OldAge,
}

impl DeathCause {
    /// Phrase completing "died of ...".
    pub const fn description(self) -> &'static str {
        match self {
            Self::Starvation => "hunger",
            Self::Sadness => "sadness",
            Self::Sickness => "sickness",
            Self::OldAge => "old age",
        }
    }
}

impl core::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Starvation => write!(f, "starvation"),
            Self::Sadness => write!(f, "sadness"),
            Self::Sickness => write!(f, "sickness"),
            Self::OldAge => write!(f, "old_age"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_in_order() {
        assert_eq!(LifeStage::Baby.next(), Some(LifeStage::Child));
        assert_eq!(LifeStage::Child.next(), Some(LifeStage::Teenager));
        assert_eq!(LifeStage::Teenager.next(), Some(LifeStage::Adult));
        assert_eq!(LifeStage::Adult.next(), Some(LifeStage::Senior));
        assert_eq!(LifeStage::Senior.next(), Some(LifeStage::Special));
    }

    #[test]
    fn special_is_terminal() {
        assert!(LifeStage::Special.is_terminal());
        assert_eq!(LifeStage::Special.next(), None);
        assert!(LifeStage::ALL.iter().filter(|s| s.is_terminal()).count() == 1);
    }

    #[test]
    fn next_is_always_greater() {
        for stage in LifeStage::ALL {
            if let Some(next) = stage.next() {
                assert!(next > stage);
            }
        }
    }

    #[test]
    fn death_cause_phrases() {
        assert_eq!(DeathCause::Starvation.description(), "hunger");
        assert_eq!(DeathCause::OldAge.description(), "old age");
        assert_eq!(DeathCause::OldAge.to_string(), "old_age");
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&DeathCause::OldAge).unwrap_or_default();
        assert_eq!(json, "\"old_age\"");
        let json = serde_json::to_string(&LifeStage::Teenager).unwrap_or_default();
        assert_eq!(json, "\"Teenager\"");
    }
}
