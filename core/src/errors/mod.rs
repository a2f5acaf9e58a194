//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{ServiceError, TokenError, ValidationError};

use thiserror::Error;

/// Errors raised by repositories and infrastructure collaborators
///
/// Services never return these to callers; they are translated into a
/// `ServiceError` at the service boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
