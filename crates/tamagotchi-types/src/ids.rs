//! Pet identifier.
//!
//! Names are chosen by the player and may repeat, so every pet also gets a
//! UUID v7 identifier. It is used to correlate log lines, nothing else.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PetId(pub Uuid);

impl PetId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(PetId::new(), PetId::new());
    }

    #[test]
    fn round_trips_through_uuid() {
        let id = PetId::new();
        assert_eq!(PetId::from(id.into_inner()), id);
    }
}
