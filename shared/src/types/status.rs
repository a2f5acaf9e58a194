//! HTTP-style status codes carried by every service result

use serde::{Deserialize, Serialize};

/// Outcome status of a service operation
///
/// Values map one-to-one onto HTTP status codes so the presentation layer
/// can project them directly onto a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// 200 - the operation completed and returns a value
    Ok,
    /// 201 - a new document was persisted
    Created,
    /// 204 - completed without content to report
    NoContent,
    /// 400 - the caller supplied missing or invalid input
    BadRequest,
    /// 404 - the requested document does not exist
    NotFound,
    /// 500 - the store or another collaborator failed
    InternalServerError,
}

impl StatusCode {
    /// Numeric HTTP status code
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// Whether the status is a 4xx caller error
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Whether the status is a 5xx failure
    pub fn is_server_error(&self) -> bool {
        self.as_u16() >= 500
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        };
        write!(f, "{} {}", self.as_u16(), reason)
    }
}
