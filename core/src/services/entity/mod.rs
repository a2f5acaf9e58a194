//! Entity service module
//!
//! Generic create/get/list/update/delete over any `Document`, reporting
//! every outcome as a `ServiceResult`. `ClientService` is the customer
//! instantiation; the user service wraps another one.

mod service;

#[cfg(test)]
mod tests;

pub use service::{ClientService, EntityService};
