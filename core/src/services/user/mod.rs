//! User account service
//!
//! CRUD over users with password hashing on the way in, plus credential
//! validation against the stored hash.

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;
