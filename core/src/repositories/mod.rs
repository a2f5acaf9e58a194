pub mod document;

pub use document::{DocumentRepository, Filter, InMemoryDocumentRepository};

#[cfg(test)]
pub use document::MockDocumentRepository;
