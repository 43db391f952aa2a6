//! Pet construction from a species tag.
//!
//! The [`PetFactory`] keeps a registry of species constructors keyed by a
//! normalized tag (trimmed, ASCII-lowercased), so `"Dog"`, `"dog"` and
//! `" DOG "` all select the same species. [`PetFactory::new`] registers the
//! built-in [`Dog`] and [`Cat`]; further species can be added with
//! [`PetFactory::register`].

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::PetConfig;
use crate::error::PetError;
use crate::pet::Pet;
use crate::species::{Cat, Dog, Species};

/// Builds a boxed species behavior.
pub type SpeciesConstructor = fn() -> Box<dyn Species>;

/// A registered species: its display tag and constructor.
#[derive(Debug, Clone)]
struct SpeciesEntry {
    tag: String,
    construct: SpeciesConstructor,
}

/// Creates pets of registered species.
///
/// Every pet the factory creates runs on the factory's [`PetConfig`].
#[derive(Debug, Clone)]
pub struct PetFactory {
    /// Normalized tag -> entry.
    registry: BTreeMap<String, SpeciesEntry>,
    /// Rules handed to each new pet.
    config: PetConfig,
}

impl PetFactory {
    /// A factory with the default rules and the built-in species.
    pub fn new() -> Self {
        Self::with_config(PetConfig::default())
    }

    /// A factory with custom rules and the built-in species.
    pub fn with_config(config: PetConfig) -> Self {
        let mut registry = BTreeMap::new();
        for (tag, construct) in [
            ("Dog", dog as SpeciesConstructor),
            ("Cat", cat as SpeciesConstructor),
        ] {
            registry.insert(
                normalize(tag),
                SpeciesEntry {
                    tag: tag.to_owned(),
                    construct,
                },
            );
        }
        Self { registry, config }
    }

    /// A factory with custom rules and no species registered.
    pub const fn empty(config: PetConfig) -> Self {
        Self {
            registry: BTreeMap::new(),
            config,
        }
    }

    /// Register a new species under `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::EmptySpeciesTag`] if `tag` is blank, or
    /// [`PetError::DuplicateSpecies`] if the tag is already taken.
    pub fn register(&mut self, tag: &str, construct: SpeciesConstructor) -> Result<(), PetError> {
        let key = normalize(tag);
        if key.is_empty() {
            return Err(PetError::EmptySpeciesTag);
        }
        if self.registry.contains_key(&key) {
            return Err(PetError::DuplicateSpecies {
                tag: tag.trim().to_owned(),
            });
        }
        self.registry.insert(
            key,
            SpeciesEntry {
                tag: tag.trim().to_owned(),
                construct,
            },
        );
        debug!(tag = tag.trim(), "species registered");
        Ok(())
    }

    /// Display tags of every registered species, sorted.
    pub fn registered_species(&self) -> Vec<&str> {
        self.registry.values().map(|entry| entry.tag.as_str()).collect()
    }

    /// The rules new pets are created with.
    pub const fn config(&self) -> &PetConfig {
        &self.config
    }

    /// Create a pet of the species registered under `species_tag`.
    ///
    /// `now` becomes both the stage start and the last decay time.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::UnknownSpecies`] if no species matches the tag.
    pub fn create_pet(
        &self,
        species_tag: &str,
        name: impl Into<String>,
        now: u64,
    ) -> Result<Pet, PetError> {
        let entry = self
            .registry
            .get(&normalize(species_tag))
            .ok_or_else(|| PetError::UnknownSpecies {
                tag: species_tag.to_owned(),
            })?;

        let pet = Pet::new(
            name.into(),
            entry.tag.clone(),
            (entry.construct)(),
            self.config.clone(),
            now,
        );
        info!(
            pet_id = %pet.id(),
            pet = pet.name(),
            species = pet.species_tag(),
            "pet created"
        );
        Ok(pet)
    }
}

impl Default for PetFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

fn dog() -> Box<dyn Species> {
    Box::new(Dog)
}

fn cat() -> Box<dyn Species> {
    Box::new(Cat)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::events::PetEvent;

    #[derive(Debug)]
    struct Parrot;

    impl Species for Parrot {
        fn sound(&self) -> &str {
            "Squawk!"
        }
    }

    fn parrot() -> Box<dyn Species> {
        Box::new(Parrot)
    }

    #[test]
    fn creates_built_in_species() {
        let factory = PetFactory::new();
        let dog = factory.create_pet("Dog", "Rex", 0).unwrap();
        assert_eq!(dog.species_tag(), "Dog");
        assert_eq!(dog.name(), "Rex");

        let cat = factory.create_pet("cat", "Tom", 0).unwrap();
        assert_eq!(cat.species_tag(), "Cat");
    }

    #[test]
    fn tag_lookup_ignores_case_and_padding() {
        let factory = PetFactory::new();
        assert!(factory.create_pet("  DOG ", "Rex", 0).is_ok());
    }

    #[test]
    fn unknown_species_is_an_error() {
        let factory = PetFactory::new();
        let err = factory.create_pet("Dragon", "Puff", 0).unwrap_err();
        assert_eq!(
            err,
            PetError::UnknownSpecies {
                tag: String::from("Dragon")
            }
        );
        assert!(factory.create_pet("", "Nobody", 0).is_err());
    }

    #[test]
    fn registers_new_species() {
        let mut factory = PetFactory::new();
        factory.register("Parrot", parrot).unwrap();
        assert_eq!(factory.registered_species(), vec!["Cat", "Dog", "Parrot"]);

        let pet = factory.create_pet("parrot", "Polly", 0).unwrap();
        assert_eq!(
            pet.make_sound(),
            PetEvent::Spoke {
                sound: String::from("Squawk!")
            }
        );
    }

    #[test]
    fn rejects_duplicate_and_blank_tags() {
        let mut factory = PetFactory::new();
        assert_eq!(
            factory.register("dog", parrot),
            Err(PetError::DuplicateSpecies {
                tag: String::from("dog")
            })
        );
        assert_eq!(factory.register("   ", parrot), Err(PetError::EmptySpeciesTag));
    }

    #[test]
    fn empty_factory_knows_nothing() {
        let factory = PetFactory::empty(PetConfig::default());
        assert!(factory.registered_species().is_empty());
        assert!(factory.create_pet("Dog", "Rex", 0).is_err());
    }

    #[test]
    fn pets_inherit_factory_config() {
        let config = PetConfig {
            initial_hunger: 10,
            ..PetConfig::default()
        };
        let factory = PetFactory::with_config(config);
        let pet = factory.create_pet("Dog", "Rex", 0).unwrap();
        assert_eq!(pet.vitals().hunger.value(), 10);
    }
}
