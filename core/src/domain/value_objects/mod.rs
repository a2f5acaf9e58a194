//! Value objects exchanged between services and their callers.

pub mod auth_response;
pub mod service_result;

pub use auth_response::{AuthenticateRequest, AuthenticateResponse, PublicUser};
pub use service_result::ServiceResult;
