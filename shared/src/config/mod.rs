//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Document store selection and connection settings
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, BootstrapUser, JwtConfig, Settings};
pub use database::{DatabaseConfig, StoreKind};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Configuration problems that should stop a production start
    pub fn production_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.auth.jwt.is_using_default_secret() {
            warnings.push(String::from("JWT_SECRET is not set; using the default signing secret"));
        }
        if self.database.store == StoreKind::Memory {
            warnings.push(String::from("STORE is memory; data is lost on restart"));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_warnings() {
        let config = AppConfig::default();
        let warnings = config.production_warnings();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_configured_config_has_no_warnings() {
        let config = AppConfig {
            database: DatabaseConfig::mongo("mongodb://db:27017", "crm"),
            auth: AuthConfig {
                jwt: JwtConfig::new("a-real-secret"),
                password_hash_cost: 10,
                bootstrap_user: None,
            },
            ..Default::default()
        };
        assert!(config.production_warnings().is_empty());
    }
}
