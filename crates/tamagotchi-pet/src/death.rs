//! Death conditions.
//!
//! A pet dies when any of these hold, checked in this order:
//!
//! 1. Hunger at maximum -- starvation
//! 2. Happiness at zero -- sadness
//! 3. Sickness at maximum -- sickness
//! 4. Senior stage held longer than the senior lifespan -- old age
//!
//! Only the first matching condition is reported.

use tamagotchi_types::{DeathCause, LifeStage};

use crate::config::PetConfig;
use crate::stats::Vitals;

/// Check whether a pet meets any death condition.
///
/// `stage_elapsed` is the number of seconds since the pet entered `stage`.
/// Returns `Some(cause)` for the highest-priority condition that holds.
/// This only inspects its inputs -- it does not mutate anything.
pub const fn check_death(
    vitals: &Vitals,
    stage: LifeStage,
    stage_elapsed: u64,
    config: &PetConfig,
) -> Option<DeathCause> {
    if vitals.hunger.is_max() {
        return Some(DeathCause::Starvation);
    }
    if vitals.happiness.is_min() {
        return Some(DeathCause::Sadness);
    }
    if vitals.sickness.is_max() {
        return Some(DeathCause::Sickness);
    }
    if matches!(stage, LifeStage::Senior) && stage_elapsed > config.senior_lifespan_secs {
        return Some(DeathCause::OldAge);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> Vitals {
        Vitals::new(50, 50, 0, 0)
    }

    #[test]
    fn healthy_pet_survives() {
        let config = PetConfig::default();
        assert_eq!(check_death(&healthy(), LifeStage::Adult, 1_000, &config), None);
    }

    #[test]
    fn starvation_outranks_sadness() {
        let config = PetConfig::default();
        let vitals = Vitals::new(100, 0, 100, 0);
        assert_eq!(
            check_death(&vitals, LifeStage::Senior, 10_000, &config),
            Some(DeathCause::Starvation)
        );
    }

    #[test]
    fn sadness_outranks_sickness() {
        let config = PetConfig::default();
        let vitals = Vitals::new(10, 0, 100, 0);
        assert_eq!(
            check_death(&vitals, LifeStage::Baby, 0, &config),
            Some(DeathCause::Sadness)
        );
    }

    #[test]
    fn sickness_alone() {
        let config = PetConfig::default();
        let vitals = Vitals::new(10, 40, 100, 0);
        assert_eq!(
            check_death(&vitals, LifeStage::Baby, 0, &config),
            Some(DeathCause::Sickness)
        );
    }

    #[test]
    fn old_age_only_for_seniors_past_lifespan() {
        let config = PetConfig::default();
        assert_eq!(check_death(&healthy(), LifeStage::Senior, 180, &config), None);
        assert_eq!(
            check_death(&healthy(), LifeStage::Senior, 181, &config),
            Some(DeathCause::OldAge)
        );
        assert_eq!(check_death(&healthy(), LifeStage::Adult, 181, &config), None);
        assert_eq!(check_death(&healthy(), LifeStage::Special, 10_000, &config), None);
    }
}
