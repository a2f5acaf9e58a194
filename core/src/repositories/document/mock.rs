//! Mock implementation of DocumentRepository for testing
//!
//! Failures are programmed per id, per document and per operation; every
//! call is counted so tests can assert that validation short-circuits
//! before touching the store.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::document::Document;
use crate::errors::DomainError;

use super::filter::Filter;
use super::trait_::DocumentRepository;

/// Mock document repository for testing
pub struct MockDocumentRepository<D: Document + PartialEq> {
    pub documents: Mutex<HashMap<String, D>>,
    /// `find_by_id` fails for these ids
    pub failing_lookups: Mutex<HashSet<String>>,
    /// `remove` fails for these ids
    pub failing_removals: Mutex<HashSet<String>>,
    /// `create` and `replace` fail when handed one of these documents
    pub failing_documents: Mutex<Vec<D>>,
    pub fail_find_all: AtomicBool,
    pub fail_find_one: AtomicBool,
    calls: AtomicUsize,
}

impl<D: Document + PartialEq> MockDocumentRepository<D> {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            failing_lookups: Mutex::new(HashSet::new()),
            failing_removals: Mutex::new(HashSet::new()),
            failing_documents: Mutex::new(Vec::new()),
            fail_find_all: AtomicBool::new(false),
            fail_find_one: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_document(self, document: D) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(document.id().to_string(), document);
        self
    }

    pub fn fail_lookup(self, id: &str) -> Self {
        self.failing_lookups.lock().unwrap().insert(id.to_string());
        self
    }

    pub fn fail_removal(self, id: &str) -> Self {
        self.failing_removals.lock().unwrap().insert(id.to_string());
        self
    }

    pub fn fail_on(self, document: D) -> Self {
        self.failing_documents.lock().unwrap().push(document);
        self
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn store_error(operation: &str) -> DomainError {
        DomainError::database(format!("{} failed", operation))
    }
}

impl<D: Document + PartialEq> Default for MockDocumentRepository<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document + PartialEq> DocumentRepository<D> for MockDocumentRepository<D> {
    async fn find_all(&self) -> Result<Vec<D>, DomainError> {
        self.record();
        if self.fail_find_all.load(Ordering::SeqCst) {
            return Err(Self::store_error("find_all"));
        }
        Ok(self.documents.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<D>, DomainError> {
        self.record();
        if self.failing_lookups.lock().unwrap().contains(id) {
            return Err(Self::store_error("find_by_id"));
        }
        Ok(self.documents.lock().unwrap().get(id).cloned())
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<D>, DomainError> {
        self.record();
        if self.fail_find_one.load(Ordering::SeqCst) {
            return Err(Self::store_error("find_one"));
        }
        let documents = self.documents.lock().unwrap();
        for document in documents.values() {
            if filter.matches(document)? {
                return Ok(Some(document.clone()));
            }
        }
        Ok(None)
    }

    async fn create(&self, mut document: D) -> Result<D, DomainError> {
        self.record();
        if self.failing_documents.lock().unwrap().contains(&document) {
            return Err(Self::store_error("create"));
        }
        if document.id().is_empty() {
            document.set_id(format!("generated-{}", self.calls()));
        }
        self.documents
            .lock()
            .unwrap()
            .insert(document.id().to_string(), document.clone());
        Ok(document)
    }

    async fn replace(&self, id: &str, mut document: D) -> Result<D, DomainError> {
        self.record();
        if self.failing_documents.lock().unwrap().contains(&document) {
            return Err(Self::store_error("replace"));
        }
        document.set_id(id.to_string());
        self.documents
            .lock()
            .unwrap()
            .insert(id.to_string(), document.clone());
        Ok(document)
    }

    async fn remove(&self, id: &str) -> Result<(), DomainError> {
        self.record();
        if self.failing_removals.lock().unwrap().contains(id) {
            return Err(Self::store_error("remove"));
        }
        self.documents.lock().unwrap().remove(id);
        Ok(())
    }
}
