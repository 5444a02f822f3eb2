/// Public library interface for the habit insight engine
///
/// The engine turns a point-in-time snapshot of a user's habits into
/// derived statistics and coaching content. Everything in the analytics
/// layer is a pure function of the snapshot and a passed-in reference
/// date; the insight layer adds one network-backed capability with a
/// deterministic fallback behind it.

// Internal modules
mod analytics;
mod domain;
mod insight;
mod snapshot;

// Re-export public modules and types
pub use analytics::*;
pub use domain::*;
pub use insight::*;
pub use snapshot::{read_snapshot, HabitSnapshot, SnapshotError};
