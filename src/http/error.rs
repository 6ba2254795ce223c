//! Handler error type with IntoResponse
//!
//! Three visible outcomes at the boundary: a normal page, a 404, or a
//! generic 500. Database and render faults are logged with their real
//! cause and surfaced as the generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Requested id does not exist (404)
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Database fault (500, logged)
    #[error("database error: {0}")]
    Database(DbError),

    /// Template render failure (500, logged)
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, format!("{} {} not found", resource, id))
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
            Self::Render(e) => {
                tracing::error!("Template render error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
