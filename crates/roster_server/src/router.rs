//! Route table: one route per repository operation, base prefix `/rest/v1`.

use crate::handlers::{students, teachers};
use crate::state::AppState;
use axum::routing::{delete, get};
use axum::Router;

/// Builds the application router over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/rest/v1/students",
            get(students::find_page).post(students::save),
        )
        .route("/rest/v1/students/all", get(students::find_all))
        .route("/rest/v1/students/echoMessage", get(students::echo_message))
        .route(
            "/rest/v1/students/findByNameIgnoreCaseQuery/{name}",
            get(students::find_by_name_ignore_case),
        )
        .route("/rest/v1/students/{id}", delete(students::delete))
        .route(
            "/rest/v1/teachers",
            get(teachers::find_all).post(teachers::save),
        )
        .route(
            "/rest/v1/teachers/findByTeacherId/{teacherId}",
            get(teachers::find_by_teacher_id),
        )
        .route(
            "/rest/v1/teachers/findByAgeLessThan/{age}",
            get(teachers::find_by_age_less_than),
        )
        .route(
            "/rest/v1/teachers/findByNameOrLastname",
            get(teachers::find_by_name_or_lastname),
        )
        .route(
            "/rest/v1/teachers/findFirst3ByTitle/{title}",
            get(teachers::find_first3_by_title),
        )
        .route(
            "/rest/v1/teachers/findByNameStartingWith/{prefix}",
            get(teachers::find_by_name_starting_with),
        )
        .route(
            "/rest/v1/teachers/findByNameRegex",
            get(teachers::find_by_name_regex),
        )
        .route(
            "/rest/v1/teachers/findByExactName/{name}",
            get(teachers::find_by_exact_name),
        )
        .route(
            "/rest/v1/teachers/findByAgeBetween",
            get(teachers::find_by_age_between),
        )
        .route(
            "/rest/v1/teachers/byTeacherId/{teacherId}",
            delete(teachers::delete_by_teacher_id),
        )
        .route("/rest/v1/teachers/{id}", get(teachers::get))
        .with_state(state)
}
