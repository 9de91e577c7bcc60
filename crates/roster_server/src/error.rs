//! HTTP error mapping for repository failures.
//!
//! # Responsibility
//! - Convert semantic repository errors into status codes.
//! - Keep error bodies to one stable JSON shape: `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use roster_core::RepoError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error surface of the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    Repo(RepoError),
    Internal(String),
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Repo(RepoError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Repo(RepoError::InvalidRegex { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Repo(err) => err.to_string(),
            Self::Internal(message) => message.clone(),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("event=request_failed module=server status=error error={message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// 404 helper for single-record lookups.
pub fn not_found(entity: &'static str, id: impl ToString) -> ApiError {
    ApiError::Repo(RepoError::NotFound {
        entity,
        id: id.to_string(),
    })
}
