//! Student domain model (relational slice).
//!
//! # Invariants
//! - `id` is store-generated and never reused for another student.
//! - A `None` id means the record has not been persisted yet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted student row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = i64;

/// Canonical student record.
///
/// JSON field names are camelCase to match the external wire shape
/// (`isFullTime`, `updatedOn`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Store-assigned row id. Absent until the first save.
    #[serde(default)]
    pub id: Option<StudentId>,
    pub name: String,
    pub lastname: String,
    pub grade: String,
    pub age: i64,
    #[serde(default)]
    pub is_full_time: bool,
    /// Last-updated date, supplied by the caller rather than the store.
    #[serde(default)]
    pub updated_on: Option<NaiveDate>,
}

impl Student {
    /// Creates an unsaved student record.
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        grade: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            lastname: lastname.into(),
            grade: grade.into(),
            age,
            is_full_time: false,
            updated_on: None,
        }
    }
}
