//! HTTP façade over the roster core services.
//!
//! # Responsibility
//! - Translate requests into repository calls with no added business logic.
//! - Map repository errors onto HTTP status codes.
//!
//! # Invariants
//! - Handlers perform no validation beyond type coercion.
//! - All state lives in the backing store; the router only carries the
//!   shared connection handle.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
