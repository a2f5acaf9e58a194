//! Authentication request and response value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Credentials submitted for authentication
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl AuthenticateRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// User data that is safe to hand back to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub login: String,
    pub user_name: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            login: user.login,
            user_name: user.user_name,
        }
    }
}

/// Successful authentication: the user and a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub user: PublicUser,
    pub token: String,
}

impl AuthenticateResponse {
    /// Builds the response, dropping the password hash
    pub fn new(user: User, token: String) -> Self {
        Self {
            user: user.into(),
            token,
        }
    }
}
