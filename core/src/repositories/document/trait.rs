//! Document repository trait defining the interface for document persistence.
//!
//! One trait serves every entity type; each concrete store is instantiated
//! once per document type. Lookups by predicate go through the narrow
//! [`Filter`] type instead of exposing the store's full query language.

use async_trait::async_trait;

use crate::domain::entities::document::Document;
use crate::errors::DomainError;

use super::filter::Filter;

/// Repository trait for document persistence operations
///
/// Every store failure surfaces as a `DomainError`; services translate it
/// into a failed `ServiceResult`.
///
/// # Example
/// ```no_run
/// # use cm_core::domain::entities::Customer;
/// # use cm_core::repositories::{DocumentRepository, Filter};
/// # type BoxError = Box<dyn std::error::Error>;
/// # async fn example(repo: &impl DocumentRepository<Customer>) -> Result<(), BoxError> {
/// let created = repo.create(Customer::new("Acme")).await?;
///
/// let filter = Filter::new().eq("name", "Acme");
/// if let Some(found) = repo.find_one(&filter).await? {
///     println!("found {}", found.id);
/// }
/// repo.remove(&created.id).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait DocumentRepository<D: Document>: Send + Sync {
    /// Every document in the collection
    async fn find_all(&self) -> Result<Vec<D>, DomainError>;

    /// The document with the given id
    ///
    /// # Returns
    /// * `Ok(Some(D))` - Document found
    /// * `Ok(None)` - No document with given id
    /// * `Err(DomainError)` - The store failed
    async fn find_by_id(&self, id: &str) -> Result<Option<D>, DomainError>;

    /// The first document matching every condition of the filter
    async fn find_one(&self, filter: &Filter) -> Result<Option<D>, DomainError>;

    /// Persists a new document
    ///
    /// Returns the stored copy; an empty id is replaced by a generated one.
    async fn create(&self, document: D) -> Result<D, DomainError>;

    /// Replaces the document stored under `id`
    async fn replace(&self, id: &str, document: D) -> Result<D, DomainError>;

    /// Removes the document stored under `id`
    async fn remove(&self, id: &str) -> Result<(), DomainError>;
}
