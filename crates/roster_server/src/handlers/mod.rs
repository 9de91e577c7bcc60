//! Request handlers, one module per slice.
//!
//! Each handler locks the shared connection, constructs the repository and
//! service for the request, and returns the repository result as JSON.

pub mod students;
pub mod teachers;

use crate::error::ApiError;
use crate::state::AppState;
use rusqlite::Connection;
use std::sync::MutexGuard;

pub(crate) fn lock_db(state: &AppState) -> Result<MutexGuard<'_, Connection>, ApiError> {
    state
        .db
        .lock()
        .map_err(|_| ApiError::internal("store connection lock poisoned"))
}
