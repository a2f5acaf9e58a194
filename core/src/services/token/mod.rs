//! Token service module for JWT management
//!
//! This module handles issuing HS256-signed tokens for authenticated users
//! and verifying them on protected requests.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
