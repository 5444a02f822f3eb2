/// Identifier types used throughout the domain layer
///
/// Habit and user ids are opaque strings minted by the persistence
/// collaborator, so they are wrapped in newtypes rather than parsed: you
/// can't accidentally pass a user id where a habit id is expected, and ids
/// that aren't UUIDs (the original backend used hex object ids) still load.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a habit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub String);

impl HabitId {
    /// Mint a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an id handed over by the store
    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    /// Borrow the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a user
///
/// The engine never resolves users itself; the auth collaborator supplies
/// this with the snapshot and it is carried through for logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Mint a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an id handed over by the auth layer
    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    /// Borrow the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
