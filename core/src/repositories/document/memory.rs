//! Process-local implementation of DocumentRepository

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::document::Document;
use crate::errors::DomainError;

use super::filter::Filter;
use super::trait_::DocumentRepository;

/// Document repository kept in memory, in insertion order
///
/// Used when no external store is configured and by integration tests.
/// Clones share the same underlying collection.
#[derive(Clone)]
pub struct InMemoryDocumentRepository<D: Document> {
    documents: Arc<RwLock<Vec<D>>>,
}

impl<D: Document> InMemoryDocumentRepository<D> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository pre-filled with documents
    pub fn with_documents(documents: Vec<D>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl<D: Document> Default for InMemoryDocumentRepository<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for InMemoryDocumentRepository<D> {
    async fn find_all(&self) -> Result<Vec<D>, DomainError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<D>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id() == id).cloned())
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<D>, DomainError> {
        let documents = self.documents.read().await;
        for document in documents.iter() {
            if filter.matches(document)? {
                return Ok(Some(document.clone()));
            }
        }
        Ok(None)
    }

    async fn create(&self, mut document: D) -> Result<D, DomainError> {
        let mut documents = self.documents.write().await;

        if document.id().is_empty() {
            document.set_id(Uuid::new_v4().to_string());
        } else if documents.iter().any(|d| d.id() == document.id()) {
            return Err(DomainError::database(format!(
                "duplicate key: {} with id {} already exists",
                D::LABEL,
                document.id()
            )));
        }

        let now = Utc::now();
        document.set_timestamps(now, now);
        documents.push(document.clone());
        Ok(document)
    }

    async fn replace(&self, id: &str, mut document: D) -> Result<D, DomainError> {
        let mut documents = self.documents.write().await;

        let Some(existing) = documents.iter_mut().find(|d| d.id() == id) else {
            return Err(DomainError::NotFound {
                resource: format!("{} {}", D::LABEL, id),
            });
        };

        document.set_id(id.to_string());
        document.set_timestamps(existing.created_at(), Utc::now());
        *existing = document.clone();
        Ok(document)
    }

    async fn remove(&self, id: &str) -> Result<(), DomainError> {
        let mut documents = self.documents.write().await;
        documents.retain(|d| d.id() != id);
        Ok(())
    }
}
