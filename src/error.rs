use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// A single rejected input field, reported back to the client alongside the
/// overall validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation(Vec<FieldViolation>),
    NotFound(&'static str),
    Conflict(String),
    Forbidden,
    Unauthenticated,
    Database(DbErr),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(violations) => {
                write!(f, "invalid input in {} field(s)", violations.len())
            }
            AppError::NotFound(what) => write!(f, "{} not found", what),
            AppError::Conflict(message) => f.write_str(message),
            AppError::Forbidden => f.write_str("Admin access required"),
            AppError::Unauthenticated => f.write_str("Authentication required"),
            AppError::Database(err) => write!(f, "database error: {}", err),
            AppError::Internal(message) => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(value: DbErr) -> Self {
        Self::Database(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Backing-store detail is logged, never echoed to the client.
        let body = match &self {
            AppError::Validation(violations) => {
                json!({"error": self.to_string(), "fields": violations})
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "database failure");
                json!({"error": "Internal server error"})
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "internal failure");
                json!({"error": "Internal server error"})
            }
            other => json!({"error": other.to_string()}),
        };

        (status, Json(body)).into_response()
    }
}
