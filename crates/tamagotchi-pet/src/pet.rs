//! The pet state machine.
//!
//! A [`Pet`] owns its stats, life stage and the two timestamps that gate
//! passive changes. It is mutated only through the methods here:
//!
//! - Actions ([`Pet::eat`], [`Pet::sleep`], [`Pet::play`], [`Pet::exercise`],
//!   [`Pet::clean`]) apply fixed, clamped deltas.
//! - [`Pet::decay_status`] applies at most one decay tick per call once the
//!   decay interval has elapsed. Missed intervals are not caught up.
//! - [`Pet::update_stage`] advances at most one stage per call once the
//!   stage duration has been exceeded.
//! - [`Pet::check_health`] evaluates death conditions and makes the pet
//!   permanently inert on the first match.
//!
//! Once dead, every method is a no-op that reports
//! [`PetEvent::NoLongerAlive`]. Time is passed in explicitly as seconds;
//! the pet never reads a clock.

use tamagotchi_types::{DeathCause, LifeStage, PetId, PetStatus};
use tracing::{debug, info};

use crate::config::PetConfig;
use crate::death::check_death;
use crate::events::PetEvent;
use crate::species::Species;
use crate::stats::Vitals;

/// A virtual pet.
#[derive(Debug)]
pub struct Pet {
    /// Identifier used in log output.
    id: PetId,
    /// Player-chosen name, fixed at creation.
    name: String,
    /// Registered tag of the species, e.g. `"Dog"`.
    species_tag: String,
    /// Species behavior (sound only).
    species: Box<dyn Species>,
    /// Rule constants.
    config: PetConfig,
    /// Incremented by sleeping.
    age: u32,
    /// Raised by eating, lowered by exercise, floored at zero.
    weight: u32,
    /// Hunger, happiness, sickness, training.
    vitals: Vitals,
    /// Current life stage.
    stage: LifeStage,
    /// When the current stage began, in seconds.
    last_stage_update: u64,
    /// When the last decay tick was applied, in seconds.
    last_decay_time: u64,
    /// Set exactly once, when the pet dies.
    cause_of_death: Option<DeathCause>,
}

impl Pet {
    /// Create a freshly hatched pet at time `now`.
    ///
    /// Use [`PetFactory::create_pet`] rather than calling this directly.
    ///
    /// [`PetFactory::create_pet`]: crate::factory::PetFactory::create_pet
    pub(crate) fn new(
        name: String,
        species_tag: String,
        species: Box<dyn Species>,
        config: PetConfig,
        now: u64,
    ) -> Self {
        let vitals = Vitals::new(
            config.initial_hunger,
            config.initial_happiness,
            config.initial_sickness,
            config.initial_training,
        );
        let weight = config.initial_weight;
        Self {
            id: PetId::new(),
            name,
            species_tag,
            species,
            config,
            age: 0,
            weight,
            vitals,
            stage: LifeStage::Baby,
            last_stage_update: now,
            last_decay_time: now,
            cause_of_death: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The pet's identifier.
    pub const fn id(&self) -> PetId {
        self.id
    }

    /// The pet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The species tag the pet was created with.
    pub fn species_tag(&self) -> &str {
        &self.species_tag
    }

    /// Current age.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Current weight.
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Current bounded stats.
    pub const fn vitals(&self) -> Vitals {
        self.vitals
    }

    /// Current life stage.
    pub const fn stage(&self) -> LifeStage {
        self.stage
    }

    /// When the current stage began.
    pub const fn last_stage_update(&self) -> u64 {
        self.last_stage_update
    }

    /// When the last decay tick was applied.
    pub const fn last_decay_time(&self) -> u64 {
        self.last_decay_time
    }

    /// Whether the pet is alive.
    pub const fn is_alive(&self) -> bool {
        self.cause_of_death.is_none()
    }

    /// Why the pet died, if it has.
    pub const fn cause_of_death(&self) -> Option<DeathCause> {
        self.cause_of_death
    }

    /// The rule constants this pet runs on.
    pub const fn config(&self) -> &PetConfig {
        &self.config
    }

    /// Take a read-only snapshot for rendering.
    pub fn status(&self) -> PetStatus {
        PetStatus {
            id: self.id,
            name: self.name.clone(),
            species: self.species_tag.clone(),
            stage: self.stage,
            age: self.age,
            weight: self.weight,
            hunger: self.vitals.hunger.value(),
            happiness: self.vitals.happiness.value(),
            training: self.vitals.training.value(),
            sickness: self.vitals.sickness.value(),
            alive: self.is_alive(),
            cause_of_death: self.cause_of_death,
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Feed the pet: less hungry, happier, heavier.
    pub fn eat(&mut self) -> PetEvent {
        if let Some(refused) = self.refuse_if_dead("eat") {
            return refused;
        }
        self.vitals.hunger.lower(self.config.eat_hunger_relief);
        self.vitals.happiness.raise(self.config.eat_happiness_gain);
        self.weight = self.weight.saturating_add(self.config.eat_weight_gain);
        self.acted(PetEvent::Ate)
    }

    /// Put the pet to sleep: happier and one year older.
    pub fn sleep(&mut self) -> PetEvent {
        if let Some(refused) = self.refuse_if_dead("sleep") {
            return refused;
        }
        self.vitals.happiness.raise(self.config.sleep_happiness_gain);
        self.age = self.age.saturating_add(1);
        self.acted(PetEvent::Slept)
    }

    /// Play with the pet.
    pub fn play(&mut self) -> PetEvent {
        if let Some(refused) = self.refuse_if_dead("play") {
            return refused;
        }
        self.vitals.happiness.raise(self.config.play_happiness_gain);
        self.acted(PetEvent::Played)
    }

    /// Exercise the pet: hungrier, better trained, happier, lighter.
    pub fn exercise(&mut self) -> PetEvent {
        if let Some(refused) = self.refuse_if_dead("exercise") {
            return refused;
        }
        self.vitals.hunger.raise(self.config.exercise_hunger_cost);
        self.vitals.training.raise(self.config.exercise_training_gain);
        self.vitals.happiness.raise(self.config.exercise_happiness_gain);
        self.weight = self.weight.saturating_sub(self.config.exercise_weight_loss);
        self.acted(PetEvent::Exercised)
    }

    /// Clean up after the pet, reducing sickness.
    pub fn clean(&mut self) -> PetEvent {
        if let Some(refused) = self.refuse_if_dead("clean") {
            return refused;
        }
        self.vitals.sickness.lower(self.config.clean_sickness_relief);
        self.acted(PetEvent::Cleaned)
    }

    /// Ask the pet for its species sound.
    pub fn make_sound(&self) -> PetEvent {
        if let Some(refused) = self.refuse_if_dead("make_sound") {
            return refused;
        }
        PetEvent::Spoke {
            sound: self.species.sound().to_owned(),
        }
    }

    /// Override the four bounded stats, clamping each into range.
    ///
    /// Intended for drivers that script a scenario and for tests. Returns
    /// `false` and changes nothing if the pet is dead.
    pub fn set_vitals(&mut self, vitals: Vitals) -> bool {
        if self.refuse_if_dead("set_vitals").is_some() {
            return false;
        }
        self.vitals = vitals;
        debug!(pet_id = %self.id, pet = %self.name, ?vitals, "vitals overridden");
        true
    }

    // -----------------------------------------------------------------------
    // Time-gated updates
    // -----------------------------------------------------------------------

    /// Apply one decay tick if the decay interval has elapsed since the last.
    ///
    /// Returns `None` when it is too early. A long gap still yields a single
    /// tick: missed intervals are not replayed.
    pub fn decay_status(&mut self, now: u64) -> Option<PetEvent> {
        if let Some(refused) = self.refuse_if_dead("decay_status") {
            return Some(refused);
        }
        let elapsed = now.saturating_sub(self.last_decay_time);
        if elapsed < self.config.decay_interval_secs {
            return None;
        }

        self.vitals.hunger.raise(self.config.decay_hunger);
        self.vitals.happiness.lower(self.config.decay_happiness);
        self.vitals.sickness.raise(self.config.decay_sickness);
        self.vitals.training.lower(self.config.decay_training);
        self.last_decay_time = now;

        debug!(
            pet_id = %self.id,
            pet = %self.name,
            elapsed,
            hunger = self.vitals.hunger.value(),
            happiness = self.vitals.happiness.value(),
            sickness = self.vitals.sickness.value(),
            training = self.vitals.training.value(),
            "decay tick applied"
        );
        Some(PetEvent::Decayed)
    }

    /// Advance one life stage if the current one has lasted long enough.
    ///
    /// Returns `None` when it is too early or the pet is already in the
    /// terminal stage.
    pub fn update_stage(&mut self, now: u64) -> Option<PetEvent> {
        if let Some(refused) = self.refuse_if_dead("update_stage") {
            return Some(refused);
        }
        let elapsed = now.saturating_sub(self.last_stage_update);
        if elapsed <= self.config.stage_duration_secs {
            return None;
        }
        let next = self.stage.next()?;

        self.stage = next;
        self.last_stage_update = now;
        info!(pet_id = %self.id, pet = %self.name, stage = %next, "pet evolved");
        Some(PetEvent::Evolved { stage: next })
    }

    /// Evaluate death conditions and kill the pet on the first match.
    ///
    /// Returns `None` if the pet is healthy.
    pub fn check_health(&mut self, now: u64) -> Option<PetEvent> {
        if let Some(refused) = self.refuse_if_dead("check_health") {
            return Some(refused);
        }
        let stage_elapsed = now.saturating_sub(self.last_stage_update);
        let cause = check_death(&self.vitals, self.stage, stage_elapsed, &self.config)?;

        self.cause_of_death = Some(cause);
        info!(
            pet_id = %self.id,
            pet = %self.name,
            %cause,
            stage = %self.stage,
            age = self.age,
            "pet died"
        );
        Some(PetEvent::Died { cause })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn refuse_if_dead(&self, operation: &'static str) -> Option<PetEvent> {
        if self.is_alive() {
            return None;
        }
        debug!(pet_id = %self.id, pet = %self.name, operation, "refused: pet is dead");
        Some(PetEvent::NoLongerAlive)
    }

    fn acted(&self, event: PetEvent) -> PetEvent {
        debug!(
            pet_id = %self.id,
            pet = %self.name,
            ?event,
            hunger = self.vitals.hunger.value(),
            happiness = self.vitals.happiness.value(),
            sickness = self.vitals.sickness.value(),
            training = self.vitals.training.value(),
            weight = self.weight,
            age = self.age,
            "action applied"
        );
        event
    }
}
