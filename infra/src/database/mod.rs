//! Database module - MongoDB implementations
//!
//! This module provides the document store access layer:
//! - Client construction and health checks
//! - The generic document repository over one collection per entity type

pub mod connection;
pub mod mongo;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::MongoConnection;
pub use mongo::MongoDocumentRepository;
