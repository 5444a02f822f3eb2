/// Habit entity and its raw tracking log
///
/// This module defines the core Habit struct the engine analyzes, along with
/// the per-day TrackingEntry records it carries. Habits are owned by the
/// persistence collaborator: the engine only ever reads them, so there are
/// constructors and validation here but no mutators.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{DomainError, HabitId};

/// Day-precision date format used by tracking entries
pub const TRACKING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Icon assigned when the store did not record one
pub const DEFAULT_ICON: &str = "📝";

/// One day's completion record for a habit
///
/// The date is kept as the raw string the store handed over; rows with
/// unparseable dates are tolerated here and dropped by the accessor that
/// normalizes the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEntry {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Whether the habit was completed on that date
    pub completed: bool,
}

impl TrackingEntry {
    /// Create an entry for a known-good calendar date
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self {
            date: date.format(TRACKING_DATE_FORMAT).to_string(),
            completed,
        }
    }

    /// Parse the entry's date, flagging rows the store let through unchecked
    pub fn parsed_date(&self) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(&self.date, TRACKING_DATE_FORMAT).map_err(|_| {
            DomainError::MalformedTrackingEntry {
                date: self.date.clone(),
            }
        })
    }
}

/// A habit represents something the user wants to do regularly
///
/// Each habit has a display name, a short icon string, and the raw tracking
/// log of per-day completions. Snapshot JSON uses camelCase keys and accepts
/// `_id` for the id field, so exports from the original backend load as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    #[serde(alias = "_id")]
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Short display string shown next to the name (usually an emoji)
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Raw per-day completion records, order-irrelevant
    #[serde(default)]
    pub tracking: Vec<TrackingEntry>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// Mints a fresh id and starts with an empty tracking log. Passing no
    /// icon falls back to the default one.
    pub fn new(name: String, icon: Option<String>) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        let icon = match icon {
            Some(icon) => {
                Self::validate_icon(&icon)?;
                icon
            }
            None => default_icon(),
        };

        Ok(Self {
            id: HabitId::new(),
            name,
            icon,
            tracking: Vec::new(),
        })
    }

    /// Create a habit from existing data (used when loading a snapshot)
    ///
    /// Assumes the store already validated the fields; mainly used by tests
    /// and by callers reconstructing habits from persisted records.
    pub fn from_existing(
        id: HabitId,
        name: String,
        icon: String,
        tracking: Vec<TrackingEntry>,
    ) -> Self {
        Self {
            id,
            name,
            icon,
            tracking,
        }
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(())
    }

    /// Validate the icon string
    fn validate_icon(icon: &str) -> Result<(), DomainError> {
        let trimmed = icon.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidIcon(
                "Icon cannot be empty if specified".to_string()
            ));
        }

        if trimmed.chars().count() > 8 {
            return Err(DomainError::InvalidIcon(
                "Icon must be a short display string".to_string()
            ));
        }

        Ok(())
    }
}
