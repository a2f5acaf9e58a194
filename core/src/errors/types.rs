//! Error types for validation, token handling and service results
//!
//! `ValidationError` and `TokenError` are raised below the service boundary.
//! `ServiceError` is the only error a caller ever observes: it travels inside
//! a `ServiceResult` next to the status code.

use std::fmt::Display;

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be null or empty!")]
    RequiredField { field: String },

    #[error("{field} has an invalid format!")]
    InvalidFormat { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        Self::InvalidFormat { field: field.into() }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed: {reason}")]
    TokenGenerationFailed { reason: String },
}

/// Error carried by a `ServiceResult`
///
/// The message is what the caller sees; persistence failures prefix the
/// store error with the operation that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required argument was absent
    #[error("{message}")]
    MissingArgument { message: String },

    /// An argument was present but unusable
    #[error("{message}")]
    InvalidArgument { message: String },

    /// The lookup matched nothing
    #[error("{message}")]
    NotFound { message: String },

    /// The operation succeeded but there is nothing to return
    #[error("{message}")]
    Empty { message: String },

    /// The store (or another collaborator) failed
    #[error("{context}: {reason}")]
    Persistence { context: String, reason: String },
}

impl ServiceError {
    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument { message: message.into() }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::Empty { message: message.into() }
    }

    /// Wraps a lower-level failure with a description of the failed operation
    pub fn persistence(context: impl Into<String>, source: &impl Display) -> Self {
        Self::Persistence {
            context: context.into(),
            reason: source.to_string(),
        }
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::MissingArgument { .. } => "missing_argument",
            ServiceError::InvalidArgument { .. } => "invalid_argument",
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Empty { .. } => "empty",
            ServiceError::Persistence { .. } => "persistence",
        }
    }

    /// Whether the error stems from caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::MissingArgument { .. } | ServiceError::InvalidArgument { .. }
        )
    }
}

impl From<ValidationError> for ServiceError {
    fn from(error: ValidationError) -> Self {
        ServiceError::InvalidArgument {
            message: error.to_string(),
        }
    }
}
