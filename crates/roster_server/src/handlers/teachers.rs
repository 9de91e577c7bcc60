//! Teacher slice handlers: pass-through lookups over the document store.

use crate::dto::{AgeBetweenParams, DeletedCount, NameOrLastnameParams, RegexParams};
use crate::error::{not_found, ApiResult};
use crate::handlers::lock_db;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use roster_core::{SqliteTeacherRepository, Teacher, TeacherService};

/// GET `/teachers`: full list.
pub async fn find_all(State(state): State<AppState>) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_all()?))
}

/// GET `/teachers/{id}`: by document id; 404 when absent.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Teacher>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    let teacher = service.get(&id)?.ok_or_else(|| not_found("teacher", &id))?;
    Ok(Json(teacher))
}

/// POST `/teachers`: create/update; responds with the re-read document.
pub async fn save(
    State(state): State<AppState>,
    Json(teacher): Json<Teacher>,
) -> ApiResult<Json<Teacher>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.save(&teacher)?))
}

/// DELETE `/teachers/byTeacherId/{teacherId}`: removes every matching
/// document; the count makes multi-match deletes visible to the caller.
pub async fn delete_by_teacher_id(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> ApiResult<Json<DeletedCount>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    let deleted = service.delete_by_teacher_id(&teacher_id)?;
    Ok(Json(DeletedCount { deleted }))
}

/// GET `/teachers/findByTeacherId/{teacherId}`.
pub async fn find_by_teacher_id(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_teacher_id(&teacher_id)?))
}

/// GET `/teachers/findByAgeLessThan/{age}`: strict upper bound.
pub async fn find_by_age_less_than(
    State(state): State<AppState>,
    Path(age): Path<i64>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_age_less_than(age)?))
}

/// GET `/teachers/findByNameOrLastname?name=&lastname=`: age descending.
pub async fn find_by_name_or_lastname(
    State(state): State<AppState>,
    Query(params): Query<NameOrLastnameParams>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_name_or_lastname_order_by_age_desc(
        &params.name,
        &params.lastname,
    )?))
}

/// GET `/teachers/findFirst3ByTitle/{title}`: capped at 3 documents.
pub async fn find_first3_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_first3_by_title(&title)?))
}

/// GET `/teachers/findByNameStartingWith/{prefix}`: literal prefix.
pub async fn find_by_name_starting_with(
    State(state): State<AppState>,
    Path(prefix): Path<String>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_name_starting_with(&prefix)?))
}

/// GET `/teachers/findByExactName/{name}`: exact, case-sensitive match.
pub async fn find_by_exact_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_exact_name(&name)?))
}

/// GET `/teachers/findByNameRegex?pattern=`: case sensitivity is the
/// caller's, via inline flags such as `(?i)`; 400 on a bad pattern.
pub async fn find_by_name_regex(
    State(state): State<AppState>,
    Query(params): Query<RegexParams>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_name_regex(&params.pattern)?))
}

/// GET `/teachers/findByAgeBetween?ageGT=&ageLT=`: exclusive bounds.
pub async fn find_by_age_between(
    State(state): State<AppState>,
    Query(params): Query<AgeBetweenParams>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let conn = lock_db(&state)?;
    let service = TeacherService::new(SqliteTeacherRepository::try_new(&conn)?);
    Ok(Json(service.find_by_age_between(params.age_gt, params.age_lt)?))
}
