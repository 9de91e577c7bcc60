//! Shared application state for the HTTP layer.

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Router state: one mutex-guarded store connection shared across handlers.
///
/// Requests are independent; isolation beyond the mutex is the store's
/// concern.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}
