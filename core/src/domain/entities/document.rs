//! Contract shared by every entity persisted in the document store.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ValidationError;

/// A record stored in its own collection and identified by a string id
///
/// Identity is the `id` alone; uniqueness is enforced by the store. The
/// labels feed the messages services attach to their results.
pub trait Document: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Collection holding documents of this type
    const COLLECTION: &'static str;

    /// Singular name used in messages (e.g. "client")
    const LABEL: &'static str;

    /// Plural name used in messages (e.g. "clients")
    const LABEL_PLURAL: &'static str;

    /// Fields besides `id` that no two documents may share when non-empty
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// When the document was first stored
    fn created_at(&self) -> DateTime<Utc>;

    /// Records when the document was first stored and last written
    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);

    /// Checks the fields that must be present before persisting
    fn validate(&self) -> Result<(), ValidationError>;
}
