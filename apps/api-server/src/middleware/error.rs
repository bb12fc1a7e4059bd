//! Error handling - every error becomes a structured `{ "message": ... }` body.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use blog_core::domain::FieldError;
use blog_shared::MessageResponse;

/// Application-level error type for the HTTP boundary.
#[derive(Debug)]
pub enum AppError {
    /// No post matches the requested id (including malformed ids).
    PostNotFound,
    /// The request body could not be read as the expected shape.
    BadRequest(String),
    Validation(Vec<FieldError>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::PostNotFound => write!(f, "Post not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(errors) => {
                write!(f, "Validation failed: {}", join_field_errors(errors))
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::PostNotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::PostNotFound => "Post not found".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Validation(errors) => {
                format!("Validation failed: {}", join_field_errors(errors))
            }
            AppError::Internal(detail) => {
                // Log internal errors; never leak the detail to clients
                tracing::error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
    }
}

// Conversion from repository errors
impl From<blog_core::error::RepoError> for AppError {
    fn from(err: blog_core::error::RepoError) -> Self {
        match err {
            blog_core::error::RepoError::NotFound => AppError::PostNotFound,
            blog_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            blog_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}

/// Maps body-deserialization failures (missing fields, malformed JSON) into
/// the structured `{ "message": ... }` shape. The extractor's default reply
/// is plain text, which would break the response contract.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
