//! Student use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for the HTTP façade.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - The service adds no business logic, validation or transformation; it
//!   is a typed pass-through over the repository contract.

use crate::model::student::{Student, StudentId};
use crate::repo::student_repo::StudentRepository;
use crate::repo::{Page, RepoResult};

/// Use-case service wrapper for student operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns one page of students with pagination metadata.
    pub fn find_page(&self, page: u32, size: u32) -> RepoResult<Page<Student>> {
        self.repo.find_page(page, size)
    }

    /// Returns every student, unbounded.
    pub fn find_all(&self) -> RepoResult<Vec<Student>> {
        self.repo.find_all()
    }

    /// Exact, case-sensitive name lookup; empty vec means no matches.
    pub fn find_by_name(&self, name: &str) -> RepoResult<Vec<Student>> {
        self.repo.find_by_name(name)
    }

    /// Case-insensitive exact name lookup, first match in store order.
    pub fn find_by_name_ignore_case(&self, name: &str) -> RepoResult<Option<Student>> {
        self.repo.find_by_name_ignore_case(name)
    }

    pub fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        self.repo.find_by_id(id)
    }

    /// Saves and returns the re-read record.
    pub fn save(&self, student: &Student) -> RepoResult<Student> {
        self.repo.save(student)
    }

    /// Deletes by id; deleting an absent id is not an error.
    pub fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }
}
