//! Field-equality predicate used for repository lookups.

use serde::Serialize;
use serde_json::Value;

use crate::errors::DomainError;

/// Conjunction of field equality conditions
///
/// Field names are the serialized names of the document fields. An empty
/// filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the condition `field == value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates the filter against a document in memory
    pub fn matches<D: Serialize>(&self, document: &D) -> Result<bool, DomainError> {
        let value = serde_json::to_value(document)
            .map_err(|e| DomainError::internal(format!("Failed to serialize document: {}", e)))?;

        Ok(self
            .conditions
            .iter()
            .all(|(field, expected)| value.get(field) == Some(expected)))
    }
}
