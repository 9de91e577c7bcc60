//! Teacher domain model (document slice).
//!
//! # Invariants
//! - `id` is the document identity; `teacher_id` is a business identifier
//!   with no uniqueness guarantee beyond convention.
//! - Deletion by `teacher_id` may therefore affect several documents.

use serde::{Deserialize, Serialize};

/// Document identity for a persisted teacher.
pub type TeacherDocId = String;

/// Canonical teacher document.
///
/// Serialized as-is into the document store body, so serde naming here is
/// also the persisted field naming (`teacherId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Document id. Generated on first save when absent.
    #[serde(default)]
    pub id: Option<TeacherDocId>,
    pub teacher_id: String,
    pub name: String,
    pub lastname: String,
    pub age: i64,
    pub title: String,
}

impl Teacher {
    /// Creates an unsaved teacher document.
    pub fn new(
        teacher_id: impl Into<String>,
        name: impl Into<String>,
        lastname: impl Into<String>,
        age: i64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            teacher_id: teacher_id.into(),
            name: name.into(),
            lastname: lastname.into(),
            age,
            title: title.into(),
        }
    }
}
