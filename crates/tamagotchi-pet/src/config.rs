//! Tunable rule constants for the pet state machine.
//!
//! [`PetConfig`] bundles every number the state machine uses: action
//! deltas, decay cadence, stage timing and starting stats. The defaults
//! reproduce the classic rules exactly. The `pet` section of the YAML game
//! config deserializes straight into this struct, so any subset of fields
//! can be overridden.

use serde::{Deserialize, Serialize};

/// Rule constants for one pet.
///
/// Durations are in seconds. Stat deltas are whole points and are always
/// clamped to `[0, 100]` when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    /// Hunger removed by eating (default: 10).
    pub eat_hunger_relief: u32,
    /// Happiness added by eating (default: 5).
    pub eat_happiness_gain: u32,
    /// Weight added by eating (default: 2).
    pub eat_weight_gain: u32,

    /// Happiness added by sleeping (default: 5).
    pub sleep_happiness_gain: u32,

    /// Happiness added by playing (default: 10).
    pub play_happiness_gain: u32,

    /// Hunger added by exercising (default: 5).
    pub exercise_hunger_cost: u32,
    /// Training added by exercising (default: 5).
    pub exercise_training_gain: u32,
    /// Happiness added by exercising (default: 5).
    pub exercise_happiness_gain: u32,
    /// Weight removed by exercising (default: 1).
    pub exercise_weight_loss: u32,

    /// Sickness removed by cleaning (default: 20).
    pub clean_sickness_relief: u32,

    /// Minimum seconds between two decay ticks (default: 10).
    pub decay_interval_secs: u64,
    /// Hunger added per decay tick (default: 5).
    pub decay_hunger: u32,
    /// Happiness removed per decay tick (default: 5).
    pub decay_happiness: u32,
    /// Sickness added per decay tick (default: 5).
    pub decay_sickness: u32,
    /// Training removed per decay tick (default: 2).
    pub decay_training: u32,

    /// Seconds a stage must be exceeded before the pet evolves (default: 60).
    pub stage_duration_secs: u64,
    /// Seconds a pet may spend in the senior stage before dying of old age
    /// (default: 180).
    pub senior_lifespan_secs: u64,

    /// Starting hunger (default: 50).
    pub initial_hunger: u32,
    /// Starting happiness (default: 50).
    pub initial_happiness: u32,
    /// Starting sickness (default: 0).
    pub initial_sickness: u32,
    /// Starting training (default: 0).
    pub initial_training: u32,
    /// Starting weight (default: 1).
    pub initial_weight: u32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            eat_hunger_relief: 10,
            eat_happiness_gain: 5,
            eat_weight_gain: 2,
            sleep_happiness_gain: 5,
            play_happiness_gain: 10,
            exercise_hunger_cost: 5,
            exercise_training_gain: 5,
            exercise_happiness_gain: 5,
            exercise_weight_loss: 1,
            clean_sickness_relief: 20,
            decay_interval_secs: 10,
            decay_hunger: 5,
            decay_happiness: 5,
            decay_sickness: 5,
            decay_training: 2,
            stage_duration_secs: 60,
            senior_lifespan_secs: 180,
            initial_hunger: 50,
            initial_happiness: 50,
            initial_sickness: 0,
            initial_training: 0,
            initial_weight: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = PetConfig::default();
        assert_eq!(config.decay_interval_secs, 10);
        assert_eq!(config.stage_duration_secs, 60);
        assert_eq!(config.senior_lifespan_secs, 180);
        assert_eq!(config.initial_hunger, 50);
        assert_eq!(config.initial_weight, 1);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PetConfig =
            serde_json::from_str(r#"{"stage_duration_secs": 5, "play_happiness_gain": 20}"#)
                .unwrap();
        assert_eq!(config.stage_duration_secs, 5);
        assert_eq!(config.play_happiness_gain, 20);
        assert_eq!(config.eat_hunger_relief, 10);
    }
}
