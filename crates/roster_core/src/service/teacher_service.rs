//! Teacher use-case service.
//!
//! # Responsibility
//! - Provide stable document-store entry points for the HTTP façade.
//! - Delegate persistence to repository implementations.

use crate::model::teacher::Teacher;
use crate::repo::teacher_repo::TeacherRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for teacher document operations.
pub struct TeacherService<R: TeacherRepository> {
    repo: R,
}

impl<R: TeacherRepository> TeacherService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Teacher>> {
        self.repo.find_all()
    }

    pub fn get(&self, doc_id: &str) -> RepoResult<Option<Teacher>> {
        self.repo.get(doc_id)
    }

    /// Saves and returns the re-read document.
    pub fn save(&self, teacher: &Teacher) -> RepoResult<Teacher> {
        self.repo.save(teacher)
    }

    pub fn find_by_teacher_id(&self, teacher_id: &str) -> RepoResult<Vec<Teacher>> {
        self.repo.find_by_teacher_id(teacher_id)
    }

    pub fn find_by_age_less_than(&self, age: i64) -> RepoResult<Vec<Teacher>> {
        self.repo.find_by_age_less_than(age)
    }

    pub fn find_by_name_or_lastname_order_by_age_desc(
        &self,
        name: &str,
        lastname: &str,
    ) -> RepoResult<Vec<Teacher>> {
        self.repo
            .find_by_name_or_lastname_order_by_age_desc(name, lastname)
    }

    /// At most 3 documents regardless of how many match.
    pub fn find_first3_by_title(&self, title: &str) -> RepoResult<Vec<Teacher>> {
        self.repo.find_first3_by_title(title)
    }

    pub fn find_by_name_starting_with(&self, prefix: &str) -> RepoResult<Vec<Teacher>> {
        self.repo.find_by_name_starting_with(prefix)
    }

    /// Case sensitivity is controlled by inline flags in `pattern`.
    pub fn find_by_name_regex(&self, pattern: &str) -> RepoResult<Vec<Teacher>> {
        self.repo.find_by_name_regex(pattern)
    }

    pub fn find_by_exact_name(&self, name: &str) -> RepoResult<Vec<Teacher>> {
        self.repo.find_by_exact_name(name)
    }

    /// Exclusive on both bounds.
    pub fn find_by_age_between(&self, age_gt: i64, age_lt: i64) -> RepoResult<Vec<Teacher>> {
        self.repo.find_by_age_between(age_gt, age_lt)
    }

    /// Deletes all documents matching the business identifier; returns the
    /// number removed.
    pub fn delete_by_teacher_id(&self, teacher_id: &str) -> RepoResult<usize> {
        self.repo.delete_by_teacher_id(teacher_id)
    }
}
