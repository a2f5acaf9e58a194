pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod filter;
pub mod memory;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod tests;

pub use filter::Filter;
pub use memory::InMemoryDocumentRepository;
pub use r#trait::DocumentRepository;

#[cfg(test)]
pub use mock::MockDocumentRepository;
