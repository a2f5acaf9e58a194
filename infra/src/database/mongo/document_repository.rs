//! MongoDB implementation of the DocumentRepository trait.
//!
//! Each document type lives in its own collection. Documents are addressed
//! by their string `id` field, which carries a unique index; the `_id`
//! the server adds is never read back into the entity.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document as BsonDocument};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use uuid::Uuid;

use cm_core::domain::entities::Document;
use cm_core::errors::DomainError;
use cm_core::repositories::{DocumentRepository, Filter};

use crate::database::connection::MongoConnection;

/// MongoDB implementation of DocumentRepository
pub struct MongoDocumentRepository<D: Document> {
    /// Collection holding documents of type `D`
    collection: Collection<D>,
    _document: PhantomData<fn() -> D>,
}

impl<D: Document> Clone for MongoDocumentRepository<D> {
    fn clone(&self) -> Self {
        Self::new(self.collection.clone())
    }
}

impl<D: Document> MongoDocumentRepository<D> {
    /// Create a repository over an explicit collection
    pub fn new(collection: Collection<D>) -> Self {
        Self {
            collection,
            _document: PhantomData,
        }
    }

    /// Create a repository over the document type's default collection
    pub fn from_connection(connection: &MongoConnection) -> Self {
        Self::new(connection.collection::<D>())
    }

    /// Create the unique indexes on `id` and the document's unique fields
    ///
    /// Idempotent; run once at startup before serving requests.
    pub async fn ensure_indexes(&self) -> Result<(), DomainError> {
        self.collection
            .create_indexes(index_models::<D>(), None)
            .await
            .map_err(|e| store_error("create indexes on", D::COLLECTION, e))?;

        tracing::debug!(
            collection = D::COLLECTION,
            unique_fields = ?D::UNIQUE_FIELDS,
            "Unique indexes ensured"
        );
        Ok(())
    }
}

/// Unique index on `id`, plus one per unique field
///
/// Field indexes only cover non-empty strings, so documents leaving the
/// field blank do not collide.
pub fn index_models<D: Document>() -> Vec<IndexModel> {
    let id_index = IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    let field_indexes = D::UNIQUE_FIELDS.iter().map(|field| {
        let options = IndexOptions::builder()
            .unique(true)
            .partial_filter_expression(doc! { *field: { "$gt": "" } })
            .build();
        IndexModel::builder()
            .keys(doc! { *field: 1 })
            .options(options)
            .build()
    });

    std::iter::once(id_index).chain(field_indexes).collect()
}

/// Translate a field-equality filter into a MongoDB query document
pub fn filter_to_document(filter: &Filter) -> Result<BsonDocument, DomainError> {
    let mut query = BsonDocument::new();
    for (field, value) in filter.conditions() {
        let value = bson::to_bson(value).map_err(|e| {
            DomainError::internal(format!("Failed to convert filter on {}: {}", field, e))
        })?;
        query.insert(field.clone(), value);
    }
    Ok(query)
}

fn store_error(operation: &str, collection: &str, error: mongodb::error::Error) -> DomainError {
    tracing::error!(collection, error = %error, "MongoDB {} failed", operation);
    DomainError::database(format!("Failed to {} {}: {}", operation, collection, error))
}

#[async_trait]
impl<D: Document + Unpin> DocumentRepository<D> for MongoDocumentRepository<D> {
    async fn find_all(&self) -> Result<Vec<D>, DomainError> {
        let cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| store_error("list", D::COLLECTION, e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| store_error("read", D::COLLECTION, e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<D>, DomainError> {
        self.collection
            .find_one(doc! { "id": id }, None)
            .await
            .map_err(|e| store_error("query", D::COLLECTION, e))
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<D>, DomainError> {
        let query = filter_to_document(filter)?;
        self.collection
            .find_one(query, None)
            .await
            .map_err(|e| store_error("query", D::COLLECTION, e))
    }

    async fn create(&self, mut document: D) -> Result<D, DomainError> {
        if document.id().is_empty() {
            document.set_id(Uuid::new_v4().to_string());
        }
        let now = Utc::now();
        document.set_timestamps(now, now);

        self.collection
            .insert_one(&document, None)
            .await
            .map_err(|e| store_error("insert into", D::COLLECTION, e))?;

        tracing::debug!(collection = D::COLLECTION, id = %document.id(), "Document inserted");
        Ok(document)
    }

    async fn replace(&self, id: &str, mut document: D) -> Result<D, DomainError> {
        let not_found = || DomainError::NotFound {
            resource: format!("{} {}", D::LABEL, id),
        };
        // creation time survives replacement
        let existing = self.find_by_id(id).await?.ok_or_else(not_found)?;

        document.set_id(id.to_string());
        document.set_timestamps(existing.created_at(), Utc::now());

        let result = self
            .collection
            .replace_one(doc! { "id": id }, &document, None)
            .await
            .map_err(|e| store_error("replace in", D::COLLECTION, e))?;

        if result.matched_count == 0 {
            return Err(not_found());
        }
        Ok(document)
    }

    async fn remove(&self, id: &str) -> Result<(), DomainError> {
        let result = self
            .collection
            .delete_one(doc! { "id": id }, None)
            .await
            .map_err(|e| store_error("delete from", D::COLLECTION, e))?;

        tracing::debug!(
            collection = D::COLLECTION,
            %id,
            deleted = result.deleted_count,
            "Document removed"
        );
        Ok(())
    }
}
