//! Species behavior.
//!
//! A species changes exactly one thing about a pet: the sound it makes.
//! All numeric rules are shared. To add a species, implement [`Species`]
//! and register a constructor with [`PetFactory::register`].
//!
//! [`PetFactory::register`]: crate::factory::PetFactory::register

/// The species-specific capability of a pet.
pub trait Species: core::fmt::Debug + Send + Sync {
    /// The pet's idle sound, e.g. `"Woof!"`.
    fn sound(&self) -> &str;
}

/// A dog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Species for Dog {
    fn sound(&self) -> &str {
        "Woof!"
    }
}

/// A cat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Species for Cat {
    fn sound(&self) -> &str {
        "Meow!"
    }
}
