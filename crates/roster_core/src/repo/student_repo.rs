//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and lookup APIs over the relational `students`
//!   table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `find_page` partitions the full set ordered by `id ASC`; successive
//!   pages never skip or duplicate rows absent concurrent writes.
//! - `save` returns a freshly re-read row, never the input echoed back.
//! - `delete_by_id` is an idempotent no-op for absent ids.

use crate::model::student::{Student, StudentId};
use crate::repo::{ensure_schema_current, ensure_table_exists, Page, RepoError, RepoResult};
use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Connection, Row};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    lastname,
    grade,
    age,
    is_full_time,
    updated_on
FROM students";

/// Repository interface for student CRUD and lookup operations.
pub trait StudentRepository {
    /// Returns one bounded window of students plus pagination metadata.
    ///
    /// Negative or overflowing inputs are not validated here; behavior is
    /// delegated to the store.
    fn find_page(&self, page: u32, size: u32) -> RepoResult<Page<Student>>;
    /// Returns every student, unbounded. Caller accepts the memory cost.
    fn find_all(&self) -> RepoResult<Vec<Student>>;
    /// Exact, case-sensitive name match. Empty vec when nothing matches.
    fn find_by_name(&self, name: &str) -> RepoResult<Vec<Student>>;
    /// Case-insensitive exact name match. On multiple matches returns the
    /// first row in store order (`id ASC`).
    fn find_by_name_ignore_case(&self, name: &str) -> RepoResult<Option<Student>>;
    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>>;
    /// Insert when `id` is absent, full-row replace otherwise. Returns the
    /// re-read record so store-assigned values are reflected.
    fn save(&self, student: &Student) -> RepoResult<Student>;
    /// Deletes by id; absent ids are a no-op.
    fn delete_by_id(&self, id: StudentId) -> RepoResult<()>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        ensure_table_exists(conn, "students")?;
        Ok(Self { conn })
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn find_page(&self, page: u32, size: u32) -> RepoResult<Page<Student>> {
        let total: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))?;

        let mut stmt = self.conn.prepare(&format!(
            "{STUDENT_SELECT_SQL}
             ORDER BY id ASC
             LIMIT ?1 OFFSET ?2;"
        ))?;
        let offset = i64::from(page) * i64::from(size);
        let mut rows = stmt.query(params![i64::from(size), offset])?;

        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(Page::new(students, page, size, total))
    }

    fn find_all(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }
        Ok(students)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Vec<Student>> {
        let mut stmt = self.conn.prepare(&format!(
            "{STUDENT_SELECT_SQL}
             WHERE name = ?1
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([name])?;

        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }
        Ok(students)
    }

    fn find_by_name_ignore_case(&self, name: &str) -> RepoResult<Option<Student>> {
        let mut stmt = self.conn.prepare(&format!(
            "{STUDENT_SELECT_SQL}
             WHERE lower(name) = lower(?1)
             ORDER BY id ASC
             LIMIT 1;"
        ))?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }
        Ok(None)
    }

    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }
        Ok(None)
    }

    fn save(&self, student: &Student) -> RepoResult<Student> {
        let saved_id = match student.id {
            None => {
                self.conn.execute(
                    "INSERT INTO students (name, lastname, grade, age, is_full_time, updated_on)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                    params![
                        student.name,
                        student.lastname,
                        student.grade,
                        student.age,
                        bool_to_int(student.is_full_time),
                        student.updated_on.map(|date| date.to_string()),
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                // Full-row replace; a provided id that does not exist yet is
                // inserted under that id (upsert).
                self.conn.execute(
                    "INSERT INTO students (id, name, lastname, grade, age, is_full_time, updated_on)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                     ON CONFLICT (id) DO UPDATE SET
                        name = excluded.name,
                        lastname = excluded.lastname,
                        grade = excluded.grade,
                        age = excluded.age,
                        is_full_time = excluded.is_full_time,
                        updated_on = excluded.updated_on;",
                    params![
                        id,
                        student.name,
                        student.lastname,
                        student.grade,
                        student.age,
                        bool_to_int(student.is_full_time),
                        student.updated_on.map(|date| date.to_string()),
                    ],
                )?;
                id
            }
        };

        info!("event=student_save module=repo status=ok id={saved_id}");

        // Read-after-write so store-assigned values are reflected.
        self.find_by_id(saved_id)?.ok_or(RepoError::NotFound {
            entity: "student",
            id: saved_id.to_string(),
        })
    }

    fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;
        info!("event=student_delete module=repo status=ok id={id} rows={changed}");
        Ok(())
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let updated_on = match row.get::<_, Option<String>>("updated_on")? {
        Some(text) => Some(text.parse::<NaiveDate>().map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid date value `{text}` in students.updated_on"
            ))
        })?),
        None => None,
    };

    let is_full_time = match row.get::<_, i64>("is_full_time")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_full_time value `{other}` in students.is_full_time"
            )));
        }
    };

    Ok(Student {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        lastname: row.get("lastname")?,
        grade: row.get("grade")?,
        age: row.get("age")?,
        is_full_time,
        updated_on,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
