//! Shared configuration and common types for the CustomerManager server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded once at startup
//! - The HTTP-style status codes carried by service results

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
    Settings, StoreKind,
};
pub use types::StatusCode;
