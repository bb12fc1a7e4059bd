//! Domain-level error types.
//!
//! Validation failures are typed as `Vec<FieldError>` on the entity
//! constructors; this module covers the storage seam.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
