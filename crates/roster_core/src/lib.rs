//! Core domain logic for the roster service.
//! This crate is the single source of truth for record shapes and
//! store access semantics; the HTTP layer adds nothing on top.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::student::{Student, StudentId};
pub use model::teacher::{Teacher, TeacherDocId};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::teacher_repo::{SqliteTeacherRepository, TeacherRepository};
pub use repo::{Page, RepoError, RepoResult};
pub use service::student_service::StudentService;
pub use service::teacher_service::TeacherService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
