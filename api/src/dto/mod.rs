//! Wire shapes for API responses

pub mod result;

pub use result::{ErrorBody, ResultBody};
