//! # Infrastructure Layer
//!
//! Concrete storage for the CustomerManager backend. The services in
//! `cm_core` only see the `DocumentRepository` trait; this crate backs it
//! with MongoDB collections.
//!
//! ## Architecture
//!
//! - **Database**: connection handling and one generic repository per
//!   document type, keyed by the string `id` field

// Re-export core types for convenience
pub use cm_core::errors::*;

/// Database module - MongoDB implementations
pub mod database;

pub use database::{MongoConnection, MongoDocumentRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
