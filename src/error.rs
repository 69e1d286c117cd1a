//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::FieldError;

/// Failure reported by a [`BookStore`](crate::repository::BookStore)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => AppError::Validation(errors),
            StoreError::Database(e) => AppError::Database(e),
        }
    }
}

/// How an error should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Failure,
}

/// Error details left on the response for the page-rendering middleware
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let page = match &self {
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                ErrorPage {
                    status: StatusCode::NOT_FOUND,
                    kind: ErrorKind::NotFound,
                    message: msg.clone(),
                }
            }
            AppError::Validation(errors) => {
                // Handlers redisplay forms themselves; reaching here is a bug.
                tracing::error!("Unhandled validation errors: {:?}", errors);
                failure()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                failure()
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {:#}", e);
                failure()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                failure()
            }
        };

        // Plain-text body, replaced by the rendered view when the
        // error page middleware is installed.
        let mut response = (page.status, page.message.clone()).into_response();
        response.extensions_mut().insert(page);
        response
    }
}

fn failure() -> ErrorPage {
    ErrorPage {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        kind: ErrorKind::Failure,
        message: "Internal server error".to_string(),
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
