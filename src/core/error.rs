use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::slug::SlugError;
use crate::shared::types::ApiResponse;

/// PostgreSQL SQLSTATE for unique constraint violations
const PG_UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for foreign key violations
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Slug exhausted: {0}")]
    SlugExhausted(String),

    #[error("No content: {0}")]
    NoContent(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidInput(_) | AppError::InvalidReference(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateName(_) => StatusCode::CONFLICT,
            AppError::NoContent(_) => StatusCode::NO_CONTENT,
            AppError::Database(_) | AppError::SlugExhausted(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Translate store errors, surfacing constraint violations as domain errors.
    ///
    /// The store's unique indexes are the authoritative guard against concurrent
    /// writers that both passed the in-process duplicate check.
    pub fn from_db(e: sqlx::Error, entity: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => {
                    let constraint = db_err.constraint().unwrap_or_default();
                    return if constraint.contains("slug") {
                        AppError::DuplicateName(format!(
                            "A {} with this slug already exists",
                            entity
                        ))
                    } else {
                        AppError::DuplicateName(format!(
                            "A {} with this name already exists",
                            entity
                        ))
                    };
                }
                Some(PG_FOREIGN_KEY_VIOLATION) => {
                    return AppError::InvalidReference(
                        "Referenced record does not exist".to_string(),
                    );
                }
                _ => {}
            }
        }

        tracing::error!("Database error on {}: {:?}", entity, e);
        AppError::Database(e)
    }
}

impl From<SlugError> for AppError {
    fn from(e: SlugError) -> Self {
        match e {
            SlugError::InvalidInput(_) | SlugError::Empty(_) => AppError::InvalidInput(e.to_string()),
            SlugError::Exhausted { .. } => AppError::SlugExhausted(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (e.to_string(), None)
            }
            AppError::SlugExhausted(ref msg) => {
                tracing::error!("Slug resolution failed: {}", msg);
                (msg.clone(), None)
            }
            AppError::Validation(ref msg) => (msg.clone(), Some(vec![msg.clone()])),
            AppError::InvalidInput(msg)
            | AppError::InvalidReference(msg)
            | AppError::NotFound(msg)
            | AppError::DuplicateName(msg)
            | AppError::NoContent(msg) => (msg, None),
        };

        ApiResponse::<()>::error(status, message, errors).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
