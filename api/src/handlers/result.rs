//! Projection of service results onto HTTP responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use cm_core::domain::value_objects::ServiceResult;

use crate::dto::{ErrorBody, ResultBody};

/// Turn a service result into a response with the same status
///
/// `204 No Content` never carries a body, so the value and any explanation
/// attached to it are dropped there.
pub fn respond<T: Serialize>(result: ServiceResult<T>) -> HttpResponse {
    let (value, status_code, error) = result.into_parts();
    let status = StatusCode::from_u16(status_code.as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status == StatusCode::NO_CONTENT {
        if let Some(error) = &error {
            tracing::debug!(kind = error.kind(), "{}", error);
        }
        return HttpResponse::NoContent().finish();
    }

    HttpResponse::build(status).json(ResultBody {
        value,
        error: error.as_ref().map(ErrorBody::from),
    })
}
