//! Customer entity, exposed to callers as a "client".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::document::Document;

/// Postal address of a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub zip_code: String,
}

/// Customer entity managed by the client service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, assigned by the store when empty
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Contact e-mail address
    #[serde(default)]
    pub email: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,

    /// Tax or national identification number
    #[serde(default)]
    pub document: String,

    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a customer with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the contact e-mail
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Document for Customer {
    const COLLECTION: &'static str = "customers";
    const LABEL: &'static str = "client";
    const LABEL_PLURAL: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::required("name"));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(ValidationError::invalid_format("email"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer() {
        let customer = Customer::new("Acme").with_email("contact@acme.test");
        assert_eq!(customer.name, "Acme");
        assert!(customer.id.is_empty());
        assert!(customer.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_name() {
        let customer = Customer::new("   ");
        assert_eq!(customer.validate(), Err(ValidationError::required("name")));
    }

    #[test]
    fn test_validate_email_format() {
        let customer = Customer::new("Acme").with_email("not-an-email");
        assert_eq!(customer.validate(), Err(ValidationError::invalid_format("email")));
    }

    #[test]
    fn test_deserialize_partial_document() {
        let customer: Customer = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(customer, Customer::new("Acme"));
        assert_eq!(customer.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn test_timestamps_round_trip_through_json() {
        let mut customer = Customer::new("Acme");
        let created = "2024-03-01T08:30:00Z".parse::<DateTime<Utc>>().unwrap();
        customer.set_timestamps(created, created + chrono::Duration::hours(2));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["created_at"], "2024-03-01T08:30:00Z");

        let back: Customer = serde_json::from_value(json).unwrap();
        assert_eq!(back.created_at(), created);
        assert_eq!(back.updated_at, created + chrono::Duration::hours(2));
    }
}
