//! Authentication service module
//!
//! Checks a user name and password against the stored users and issues a
//! signed token on success.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthenticationService;
