//! Uniform outcome wrapper returned by every service operation.

use cm_shared::StatusCode;

use crate::errors::ServiceError;

/// Value, status code and optional error of a service call
///
/// `error` is set for every failure. Two successful outcomes also carry
/// one: an empty listing (`NoContent`) explains why nothing came back.
/// Failures may still carry a value, e.g. the unpersisted input entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResult<T> {
    pub value: Option<T>,
    pub status_code: StatusCode,
    pub error: Option<ServiceError>,
}

impl<T> ServiceResult<T> {
    /// Creates a result without an error
    pub fn new(value: Option<T>, status_code: StatusCode) -> Self {
        Self {
            value,
            status_code,
            error: None,
        }
    }

    /// Creates a result carrying an error
    pub fn with_error(value: Option<T>, status_code: StatusCode, error: ServiceError) -> Self {
        Self {
            value,
            status_code,
            error: Some(error),
        }
    }

    /// `200 OK` with a value
    pub fn ok(value: T) -> Self {
        Self::new(Some(value), StatusCode::Ok)
    }

    /// `201 Created` with the persisted value
    pub fn created(value: T) -> Self {
        Self::new(Some(value), StatusCode::Created)
    }

    /// `400 Bad Request` without a value
    pub fn bad_request(error: ServiceError) -> Self {
        Self::with_error(None, StatusCode::BadRequest, error)
    }

    /// `404 Not Found` without a value
    pub fn not_found(error: ServiceError) -> Self {
        Self::with_error(None, StatusCode::NotFound, error)
    }

    /// `500 Internal Server Error` without a value
    pub fn internal_error(error: ServiceError) -> Self {
        Self::with_error(None, StatusCode::InternalServerError, error)
    }

    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Transforms the value, keeping status and error
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ServiceResult {
            value: self.value.map(f),
            status_code: self.status_code,
            error: self.error,
        }
    }

    /// Splits the result into its parts
    pub fn into_parts(self) -> (Option<T>, StatusCode, Option<ServiceError>) {
        (self.value, self.status_code, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_result_has_no_error() {
        let result = ServiceResult::ok(5);
        assert_eq!(result.value, Some(5));
        assert_eq!(result.status_code, StatusCode::Ok);
        assert!(result.error.is_none());
        assert!(result.is_success());
    }

    #[test]
    fn test_failure_keeps_value() {
        let result = ServiceResult::with_error(
            Some("input"),
            StatusCode::InternalServerError,
            ServiceError::empty("boom"),
        );
        assert_eq!(result.value, Some("input"));
        assert!(!result.is_success());
        assert!(result.error.is_some());
    }

    #[test]
    fn test_map_preserves_status_and_error() {
        let result = ServiceResult::with_error(
            Some(vec![1, 2]),
            StatusCode::NoContent,
            ServiceError::empty("nothing"),
        )
        .map(|v| v.len());

        let (value, status, error) = result.into_parts();
        assert_eq!(value, Some(2));
        assert_eq!(status, StatusCode::NoContent);
        assert_eq!(error, Some(ServiceError::empty("nothing")));
    }

    #[test]
    fn test_bad_request_has_no_value() {
        let result: ServiceResult<u8> =
            ServiceResult::bad_request(ServiceError::missing_argument("x cannot be null!"));
        assert!(result.value.is_none());
        assert_eq!(result.status_code, StatusCode::BadRequest);
    }
}
