//! Student slice handlers: pass-through CRUD over the relational store.

use crate::dto::{EchoParams, PageParams};
use crate::error::{not_found, ApiResult};
use crate::handlers::lock_db;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::{Page, SqliteStudentRepository, Student, StudentId, StudentService};

const ECHO_PREFIX: &str = "echoMessage echoed: ";
const ECHO_DEFAULT: &str = "Hello ilker";

/// GET `/students/echoMessage?msg=`: diagnostic no-op.
pub async fn echo_message(Query(params): Query<EchoParams>) -> String {
    let message = params.msg.unwrap_or_else(|| ECHO_DEFAULT.to_string());
    format!("{ECHO_PREFIX}{message}")
}

/// GET `/students?page=&rowsPerPage=`: paginated list, defaults 0 and 5.
pub async fn find_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Page<Student>>> {
    let conn = lock_db(&state)?;
    let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);
    Ok(Json(service.find_page(params.page(), params.rows_per_page())?))
}

/// GET `/students/all`: full unpaginated list.
pub async fn find_all(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    let conn = lock_db(&state)?;
    let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);
    Ok(Json(service.find_all()?))
}

/// POST `/students`: create/update; responds with the re-read record.
pub async fn save(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> ApiResult<Json<Student>> {
    let conn = lock_db(&state)?;
    let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);
    Ok(Json(service.save(&student)?))
}

/// DELETE `/students/{id}`: idempotent delete by id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> ApiResult<StatusCode> {
    let conn = lock_db(&state)?;
    let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);
    service.delete_by_id(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET `/students/findByNameIgnoreCaseQuery/{name}`: case-insensitive
/// lookup; 404 when nothing matches.
pub async fn find_by_name_ignore_case(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Student>> {
    let conn = lock_db(&state)?;
    let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);
    let student = service
        .find_by_name_ignore_case(&name)?
        .ok_or_else(|| not_found("student", &name))?;
    Ok(Json(student))
}
