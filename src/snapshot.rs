/// Snapshot loading
///
/// The engine works on point-in-time exports: a JSON document holding one
/// user's habits with their tracking history. This module reads and decodes
/// that document; everything downstream is pure computation over it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Habit, UserId};

/// Errors that can occur while loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// A point-in-time export of one user's habit data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSnapshot {
    /// Owner of the habits in this snapshot
    pub user_id: UserId,

    /// Name to address the user by, when the export carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// All habits with their tracking history
    #[serde(default)]
    pub habits: Vec<Habit>,
}

/// Read and decode a snapshot from a JSON file
pub fn read_snapshot(path: &Path) -> Result<HabitSnapshot, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    let snapshot: HabitSnapshot = serde_json::from_str(&raw)?;

    tracing::info!(
        "Loaded snapshot for user {} with {} habits",
        snapshot.user_id.as_str(),
        snapshot.habits.len()
    );

    Ok(snapshot)
}
