//! Teacher repository contract and SQLite-backed document implementation.
//!
//! # Responsibility
//! - Provide lookup/delete APIs over the schemaless `teachers` collection.
//! - Express each derived-query operation as one explicit filter/sort/limit
//!   function; scalar filters go through `json_extract`, regex matching runs
//!   in-process because the store has no regex operator.
//!
//! # Invariants
//! - `find_by_age_between` uses EXCLUSIVE bounds; ages equal to either bound
//!   are excluded. This boundary policy is deliberate and must not change.
//! - `delete_by_teacher_id` removes ALL matching documents and reports the
//!   count, since `teacherId` carries no uniqueness guarantee.
//! - `find_first3_by_title` never returns more than 3 documents.

use crate::model::teacher::{Teacher, TeacherDocId};
use crate::repo::{ensure_schema_current, ensure_table_exists, RepoError, RepoResult};
use log::info;
use regex::Regex;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const TEACHER_SELECT_SQL: &str = "SELECT doc_id, body FROM teachers";

/// Repository interface for teacher document operations.
pub trait TeacherRepository {
    fn find_all(&self) -> RepoResult<Vec<Teacher>>;
    fn get(&self, doc_id: &str) -> RepoResult<Option<Teacher>>;
    /// Upsert by document id; generates an id on first save. Returns the
    /// re-read document.
    fn save(&self, teacher: &Teacher) -> RepoResult<Teacher>;
    /// Matches on the business identifier, which may hit several documents.
    fn find_by_teacher_id(&self, teacher_id: &str) -> RepoResult<Vec<Teacher>>;
    /// Strictly-less-than age filter.
    fn find_by_age_less_than(&self, age: i64) -> RepoResult<Vec<Teacher>>;
    fn find_by_name_or_lastname_order_by_age_desc(
        &self,
        name: &str,
        lastname: &str,
    ) -> RepoResult<Vec<Teacher>>;
    /// At most 3 documents, in insertion order.
    fn find_first3_by_title(&self, title: &str) -> RepoResult<Vec<Teacher>>;
    /// Literal, case-sensitive prefix match.
    fn find_by_name_starting_with(&self, prefix: &str) -> RepoResult<Vec<Teacher>>;
    /// Pattern match against `name`. Case sensitivity comes from inline
    /// flags in the caller's pattern, e.g. `(?i)ali`.
    fn find_by_name_regex(&self, pattern: &str) -> RepoResult<Vec<Teacher>>;
    /// Exact, case-sensitive name match.
    fn find_by_exact_name(&self, name: &str) -> RepoResult<Vec<Teacher>>;
    /// EXCLUSIVE range: strictly greater than `age_gt` and strictly less
    /// than `age_lt`.
    fn find_by_age_between(&self, age_gt: i64, age_lt: i64) -> RepoResult<Vec<Teacher>>;
    /// Deletes every document whose `teacherId` matches; returns the count.
    fn delete_by_teacher_id(&self, teacher_id: &str) -> RepoResult<usize>;
}

/// SQLite-backed teacher document repository.
pub struct SqliteTeacherRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeacherRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        ensure_table_exists(conn, "teachers")?;
        Ok(Self { conn })
    }

    fn query_documents(&self, where_sql: &str, binds: Vec<Value>) -> RepoResult<Vec<Teacher>> {
        let sql = format!("{TEACHER_SELECT_SQL} {where_sql};");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(binds))?;

        let mut teachers = Vec::new();
        while let Some(row) = rows.next()? {
            teachers.push(parse_teacher_row(row)?);
        }
        Ok(teachers)
    }
}

impl TeacherRepository for SqliteTeacherRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Teacher>> {
        self.query_documents("ORDER BY rowid ASC", Vec::new())
    }

    fn get(&self, doc_id: &str) -> RepoResult<Option<Teacher>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEACHER_SELECT_SQL} WHERE doc_id = ?1;"))?;
        let mut rows = stmt.query([doc_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_teacher_row(row)?));
        }
        Ok(None)
    }

    fn save(&self, teacher: &Teacher) -> RepoResult<Teacher> {
        let doc_id: TeacherDocId = match &teacher.id {
            Some(id) => id.clone(),
            None => Uuid::new_v4().to_string(),
        };

        let mut document = teacher.clone();
        document.id = Some(doc_id.clone());
        let body = serde_json::to_string(&document)
            .map_err(|err| RepoError::InvalidData(format!("unserializable teacher: {err}")))?;

        self.conn.execute(
            "INSERT INTO teachers (doc_id, body)
             VALUES (?1, ?2)
             ON CONFLICT (doc_id) DO UPDATE SET body = excluded.body;",
            params![doc_id, body],
        )?;

        info!("event=teacher_save module=repo status=ok doc_id={doc_id}");

        self.get(&doc_id)?.ok_or(RepoError::NotFound {
            entity: "teacher",
            id: doc_id,
        })
    }

    fn find_by_teacher_id(&self, teacher_id: &str) -> RepoResult<Vec<Teacher>> {
        self.query_documents(
            "WHERE json_extract(body, '$.teacherId') = ? ORDER BY rowid ASC",
            vec![Value::Text(teacher_id.to_string())],
        )
    }

    fn find_by_age_less_than(&self, age: i64) -> RepoResult<Vec<Teacher>> {
        self.query_documents(
            "WHERE json_extract(body, '$.age') < ? ORDER BY rowid ASC",
            vec![Value::Integer(age)],
        )
    }

    fn find_by_name_or_lastname_order_by_age_desc(
        &self,
        name: &str,
        lastname: &str,
    ) -> RepoResult<Vec<Teacher>> {
        self.query_documents(
            "WHERE json_extract(body, '$.name') = ?
                OR json_extract(body, '$.lastname') = ?
             ORDER BY json_extract(body, '$.age') DESC, rowid ASC",
            vec![
                Value::Text(name.to_string()),
                Value::Text(lastname.to_string()),
            ],
        )
    }

    fn find_first3_by_title(&self, title: &str) -> RepoResult<Vec<Teacher>> {
        self.query_documents(
            "WHERE json_extract(body, '$.title') = ? ORDER BY rowid ASC LIMIT 3",
            vec![Value::Text(title.to_string())],
        )
    }

    fn find_by_name_starting_with(&self, prefix: &str) -> RepoResult<Vec<Teacher>> {
        // SQLite LIKE is case-insensitive and expands % and _; substr keeps
        // the match literal and case-sensitive.
        let prefix_chars = i64::try_from(prefix.chars().count()).unwrap_or(i64::MAX);
        self.query_documents(
            "WHERE substr(json_extract(body, '$.name'), 1, ?) = ? ORDER BY rowid ASC",
            vec![
                Value::Integer(prefix_chars),
                Value::Text(prefix.to_string()),
            ],
        )
    }

    fn find_by_name_regex(&self, pattern: &str) -> RepoResult<Vec<Teacher>> {
        let regex = Regex::new(pattern).map_err(|err| RepoError::InvalidRegex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;

        // SQLite carries no regexp operator by default, so the match runs
        // over the full collection in-process.
        let all = self.find_all()?;
        Ok(all
            .into_iter()
            .filter(|teacher| regex.is_match(&teacher.name))
            .collect())
    }

    fn find_by_exact_name(&self, name: &str) -> RepoResult<Vec<Teacher>> {
        self.query_documents(
            "WHERE json_extract(body, '$.name') = ? ORDER BY rowid ASC",
            vec![Value::Text(name.to_string())],
        )
    }

    fn find_by_age_between(&self, age_gt: i64, age_lt: i64) -> RepoResult<Vec<Teacher>> {
        // Exclusive on both ends.
        self.query_documents(
            "WHERE json_extract(body, '$.age') > ?
               AND json_extract(body, '$.age') < ?
             ORDER BY rowid ASC",
            vec![Value::Integer(age_gt), Value::Integer(age_lt)],
        )
    }

    fn delete_by_teacher_id(&self, teacher_id: &str) -> RepoResult<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM teachers WHERE json_extract(body, '$.teacherId') = ?1;",
            [teacher_id],
        )?;
        info!(
            "event=teacher_delete module=repo status=ok teacher_id={teacher_id} rows={deleted}"
        );
        Ok(deleted)
    }
}

fn parse_teacher_row(row: &Row<'_>) -> RepoResult<Teacher> {
    let doc_id: String = row.get("doc_id")?;
    let body: String = row.get("body")?;
    let mut teacher: Teacher = serde_json::from_str(&body).map_err(|err| {
        RepoError::InvalidData(format!("invalid teacher document `{doc_id}`: {err}"))
    })?;
    // The row key is authoritative for document identity.
    teacher.id = Some(doc_id);
    Ok(teacher)
}

