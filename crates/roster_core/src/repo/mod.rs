//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for both slices.
//! - Isolate SQLite query details from service/HTTP orchestration.
//!
//! # Invariants
//! - Each derived-query operation is one explicit, hand-written
//!   filter/sort/limit function; there is no generic query engine.
//! - Repository APIs return semantic errors (`NotFound`, `InvalidRegex`) in
//!   addition to DB transport errors.

use crate::db::DbError;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod student_repo;
pub mod teacher_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound {
        entity: &'static str,
        id: String,
    },
    /// A caller-supplied regex pattern failed to compile.
    InvalidRegex {
        pattern: String,
        message: String,
    },
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidRegex { pattern, message } => {
                write!(f, "invalid name pattern `{pattern}`: {message}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "table `{table}` is missing required column `{column}`")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One bounded, offset-based window over a larger result set.
///
/// Metadata naming matches the wire shape expected by existing callers
/// (`totalElements`, `totalPages`, `number`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index.
    pub number: u32,
    /// Requested page size, not the returned row count.
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page, deriving `total_pages` from the requested size.
    ///
    /// A size of zero yields zero pages; input is otherwise not validated
    /// (delegated to the store per contract).
    pub fn new(content: Vec<T>, number: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size))
        };
        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
        }
    }
}

pub(crate) fn ensure_table_exists(
    conn: &rusqlite::Connection,
    table: &'static str,
) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists == 1 {
        Ok(())
    } else {
        Err(RepoError::MissingRequiredTable(table))
    }
}

pub(crate) fn ensure_schema_current(conn: &rusqlite::Connection) -> RepoResult<()> {
    let expected = crate::db::migrations::latest_version();
    let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual == expected {
        Ok(())
    } else {
        Err(RepoError::UninitializedConnection {
            expected_version: expected,
            actual_version: actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn page_math_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 0, 3, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn zero_size_yields_zero_pages() {
        let page: Page<i64> = Page::new(Vec::new(), 0, 0, 7);
        assert_eq!(page.total_pages, 0);
    }
}
