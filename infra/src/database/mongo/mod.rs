//! MongoDB repository implementations

mod document_repository;

pub use document_repository::{filter_to_document, index_models, MongoDocumentRepository};
