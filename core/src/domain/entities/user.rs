//! User entity representing an account that can sign in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::document::Document;

/// User entity
///
/// `password` holds a bcrypt hash once persisted through the user service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store when empty
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Contact e-mail address
    #[serde(default)]
    pub email: String,

    /// Login checked by credential validation
    #[serde(default)]
    pub login: String,

    /// User name checked by authentication
    #[serde(default)]
    pub user_name: String,

    /// Password hash (plain text only on the way in)
    #[serde(default)]
    pub password: String,

    /// Set by the store on insert
    #[serde(default)]
    pub created_at: DateTime<Utc>,

    /// Set by the store on every write
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user whose login and user name are the same
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        let user_name = user_name.into();
        Self {
            login: user_name.clone(),
            user_name,
            password: password.into(),
            ..Default::default()
        }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "user";
    const LABEL_PLURAL: &'static str = "users";
    const UNIQUE_FIELDS: &'static [&'static str] = &["user_name", "login"];

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
        if self.login.is_empty() && self.user_name.is_empty() {
            return Err(ValidationError::required("login"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::required("password"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_copies_login() {
        let user = User::new("jdoe", "secret").with_name("John Doe");
        assert_eq!(user.login, "jdoe");
        assert_eq!(user.user_name, "jdoe");
        assert_eq!(user.name, "John Doe");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_login_or_user_name() {
        let user = User::new("", "secret");
        assert_eq!(user.validate(), Err(ValidationError::required("login")));
    }

    #[test]
    fn test_validate_requires_password() {
        let user = User::new("jdoe", "");
        assert_eq!(user.validate(), Err(ValidationError::required("password")));
    }
}
