//! Game session: one pet bound to a command dispatcher.
//!
//! Every command cycle runs in a fixed order:
//!
//! 1. the requested action, if the command is recognized;
//! 2. [`Pet::update_stage`];
//! 3. [`Pet::check_health`].
//!
//! Steps 2 and 3 always run, so an action that pushes a stat to a fatal
//! extreme, or a command that arrives after the stage duration has
//! passed, is resolved before control returns to the driver.

use tamagotchi_pet::{Pet, PetEvent};
use tamagotchi_types::{DeathCause, LifeStage, PetStatus};
use tracing::debug;

use crate::command::Command;

/// Everything that happened during one command cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandReport {
    /// The command that was dispatched, or `None` if the input was not
    /// recognized.
    pub command: Option<Command>,
    /// Notices in the order they occurred.
    pub events: Vec<PetEvent>,
}

impl CommandReport {
    /// The cause of death, if the pet died during this cycle.
    pub fn death(&self) -> Option<DeathCause> {
        self.events.iter().find_map(PetEvent::death_cause)
    }

    /// The stage the pet evolved into during this cycle, if any.
    pub fn evolved_to(&self) -> Option<LifeStage> {
        self.events.iter().find_map(|event| match event {
            PetEvent::Evolved { stage } => Some(*stage),
            _ => None,
        })
    }

    fn record(&mut self, event: Option<PetEvent>) {
        let Some(event) = event else { return };
        // A dead pet refuses every step; one notice is enough.
        if event == PetEvent::NoLongerAlive && self.events.contains(&PetEvent::NoLongerAlive) {
            return;
        }
        self.events.push(event);
    }
}

/// One pet driven by one player.
#[derive(Debug)]
pub struct GameSession {
    pet: Pet,
}

impl GameSession {
    /// Bind a session to `pet`.
    pub const fn new(pet: Pet) -> Self {
        Self { pet }
    }

    /// The pet being played with.
    pub const fn pet(&self) -> &Pet {
        &self.pet
    }

    /// Release the pet.
    pub fn into_pet(self) -> Pet {
        self.pet
    }

    /// Snapshot for rendering.
    pub fn status(&self) -> PetStatus {
        self.pet.status()
    }

    /// Whether the pet is alive.
    pub const fn is_alive(&self) -> bool {
        self.pet.is_alive()
    }

    /// Apply passive decay, if due.
    pub fn decay(&mut self, now: u64) -> Option<PetEvent> {
        self.pet.decay_status(now)
    }

    /// Ask the pet for its sound. Runs no stage or health checks.
    pub fn make_sound(&self) -> PetEvent {
        self.pet.make_sound()
    }

    /// Run one command cycle for a known command.
    pub fn execute(&mut self, command: Command, now: u64) -> CommandReport {
        self.run_cycle(Some(command), now)
    }

    /// Run one command cycle for raw player input.
    ///
    /// Unrecognized input performs no action, but the stage update and
    /// health check still run.
    pub fn execute_command(&mut self, action: &str, now: u64) -> CommandReport {
        let command = action.parse::<Command>().ok();
        if command.is_none() {
            debug!(action, "ignoring unrecognized command");
        }
        self.run_cycle(command, now)
    }

    fn run_cycle(&mut self, command: Option<Command>, now: u64) -> CommandReport {
        let mut report = CommandReport {
            command,
            events: Vec::new(),
        };

        let action = command.map(|command| match command {
            Command::Eat => self.pet.eat(),
            Command::Sleep => self.pet.sleep(),
            Command::Play => self.pet.play(),
            Command::Exercise => self.pet.exercise(),
            Command::Clean => self.pet.clean(),
        });
        report.record(action);
        report.record(self.pet.update_stage(now));
        report.record(self.pet.check_health(now));

        debug!(
            pet_id = %self.pet.id(),
            command = command.map_or("none", Command::name),
            events = report.events.len(),
            alive = self.pet.is_alive(),
            "command cycle complete"
        );
        report
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tamagotchi_pet::{PetFactory, Vitals};

    use super::*;

    fn session() -> GameSession {
        GameSession::new(PetFactory::new().create_pet("Dog", "Rex", 0).unwrap())
    }

    #[test]
    fn dispatches_each_command() {
        let cases = [
            (Command::Eat, PetEvent::Ate),
            (Command::Sleep, PetEvent::Slept),
            (Command::Play, PetEvent::Played),
            (Command::Exercise, PetEvent::Exercised),
            (Command::Clean, PetEvent::Cleaned),
        ];
        for (command, expected) in cases {
            let mut session = session();
            let report = session.execute(command, 0);
            assert_eq!(report.command, Some(command));
            assert_eq!(report.events, vec![expected]);
        }
    }

    #[test]
    fn unrecognized_command_still_updates_stage() {
        let mut session = session();
        let before = session.status();
        let report = session.execute_command("dance", 61);
        assert_eq!(report.command, None);
        assert_eq!(report.evolved_to(), Some(LifeStage::Child));

        let after = session.status();
        assert_eq!(after.hunger, before.hunger);
        assert_eq!(after.happiness, before.happiness);
        assert_eq!(after.weight, before.weight);
    }

    #[test]
    fn action_then_stage_then_health() {
        let mut session = session();
        let report = session.execute_command("play", 61);
        assert_eq!(
            report.events,
            vec![
                PetEvent::Played,
                PetEvent::Evolved {
                    stage: LifeStage::Child
                },
            ]
        );
    }

    #[test]
    fn action_that_reaches_max_hunger_kills_in_same_cycle() {
        let mut pet = PetFactory::new().create_pet("Dog", "Rex", 0).unwrap();
        pet.set_vitals(Vitals::new(95, 50, 0, 0));
        let mut session = GameSession::new(pet);

        let report = session.execute(Command::Exercise, 1);
        assert_eq!(report.death(), Some(DeathCause::Starvation));
        assert_eq!(
            report.events,
            vec![
                PetEvent::Exercised,
                PetEvent::Died {
                    cause: DeathCause::Starvation
                },
            ]
        );
        assert!(!session.is_alive());
    }

    #[test]
    fn dead_pet_reports_once() {
        let mut pet = PetFactory::new().create_pet("Dog", "Rex", 0).unwrap();
        pet.set_vitals(Vitals::new(50, 0, 0, 0));
        let mut session = GameSession::new(pet);
        assert_eq!(session.execute_command("", 0).death(), Some(DeathCause::Sadness));

        let before = session.status();
        let report = session.execute(Command::Eat, 500);
        assert_eq!(report.events, vec![PetEvent::NoLongerAlive]);
        assert_eq!(session.status(), before);
    }

    #[test]
    fn make_sound_skips_checks() {
        let mut session = session();
        assert_eq!(
            session.make_sound(),
            PetEvent::Spoke {
                sound: String::from("Woof!")
            }
        );
        assert_eq!(session.status().stage, LifeStage::Baby);
        assert_eq!(session.decay(5), None);
        assert_eq!(session.decay(10), Some(PetEvent::Decayed));
    }
}
