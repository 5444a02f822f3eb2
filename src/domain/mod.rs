/// Domain module containing the core data types
///
/// This module defines the entities the engine reads (Habit, TrackingEntry)
/// and the identifier newtypes, together with their validation rules.

pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid icon: {0}")]
    InvalidIcon(String),

    #[error("Tracking entry has an unparseable date: {date}")]
    MalformedTrackingEntry { date: String },
}
