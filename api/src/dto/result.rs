use serde::{Deserialize, Serialize};

use cm_core::errors::ServiceError;

/// Error part of a response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable kind, e.g. `missing_argument`
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl From<&ServiceError> for ErrorBody {
    fn from(error: &ServiceError) -> Self {
        Self {
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// JSON projection of a service result; the status travels as the HTTP status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBody<T> {
    pub value: Option<T>,
    pub error: Option<ErrorBody>,
}
