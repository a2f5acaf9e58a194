//! Authentication configuration and the injected signing settings

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign tokens
    pub secret: String,

    /// Token lifetime in hours
    #[serde(default = "default_expiry_hours")]
    pub expiry_hours: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiry_hours: default_expiry_hours(),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_hours = hours;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for stored passwords
    #[serde(default = "default_hash_cost")]
    pub password_hash_cost: u32,

    /// Account created at startup when no user with that name exists
    #[serde(default)]
    pub bootstrap_user: Option<BootstrapUser>,
}

/// Initial account credentials (`BOOTSTRAP_USER_NAME`, `BOOTSTRAP_PASSWORD`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BootstrapUser {
    pub user_name: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password_hash_cost: default_hash_cost(),
            bootstrap_user: None,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let expiry_hours = std::env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_expiry_hours);
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm());
        let password_hash_cost = std::env::var("PASSWORD_HASH_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_hash_cost);
        let bootstrap_user = match (
            std::env::var("BOOTSTRAP_USER_NAME"),
            std::env::var("BOOTSTRAP_PASSWORD"),
        ) {
            (Ok(user_name), Ok(password)) if !user_name.is_empty() && !password.is_empty() => {
                Some(BootstrapUser { user_name, password })
            }
            _ => None,
        };

        Self {
            jwt: JwtConfig {
                secret,
                expiry_hours,
                algorithm,
            },
            password_hash_cost,
            bootstrap_user,
        }
    }

    /// Read-only signing settings handed to the token service
    pub fn settings(&self) -> Settings {
        Settings {
            secret: self.jwt.secret.clone(),
            token_expiry_hours: self.jwt.expiry_hours,
            algorithm: self.jwt.algorithm.clone(),
        }
    }
}

/// Process-wide signing settings
///
/// Built once at startup and passed to the authentication components at
/// construction. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Symmetric signing secret
    pub secret: String,

    /// Issued tokens expire this many hours after issuance
    pub token_expiry_hours: i64,

    /// HMAC signing algorithm name (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Settings {
    /// Settings with the given secret, HS256 and the default 12 hour lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry_hours: default_expiry_hours(),
            algorithm: default_algorithm(),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_expiry_hours() -> i64 {
    12
}

fn default_hash_cost() -> u32 {
    12
}
