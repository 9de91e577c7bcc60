//! Domain models for the two record slices.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted by the repositories.
//! - Keep wire naming (camelCase JSON) in one place via serde attributes.
//!
//! # Invariants
//! - Identifiers are immutable once assigned by the store.
//! - Models carry no validation; type coercion is the only input check.

pub mod student;
pub mod teacher;
