//! Document store configuration module

use serde::{Deserialize, Serialize};

/// Which repository backend the server wires up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Process-local map, lost on restart
    Memory,
    /// MongoDB collections
    Mongo,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            "mongo" | "mongodb" => Ok(StoreKind::Mongo),
            _ => Err(format!("Invalid store: {}", s)),
        }
    }
}

/// Database configuration for MongoDB connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Selected repository backend
    pub store: StoreKind,

    /// MongoDB connection URL
    pub url: String,

    /// Database name holding the collections
    pub database: String,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::Memory,
            url: String::from("mongodb://localhost:27017"),
            database: String::from("customer_manager"),
            connect_timeout: 10,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let store = std::env::var("STORE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.store);
        let url = std::env::var("MONGODB_URL").unwrap_or(defaults.url);
        let database = std::env::var("MONGODB_DATABASE").unwrap_or(defaults.database);
        let connect_timeout = std::env::var("MONGODB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout);

        Self {
            store,
            url,
            database,
            connect_timeout,
        }
    }

    /// Create a MongoDB-backed configuration
    pub fn mongo(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            store: StoreKind::Mongo,
            url: url.into(),
            database: database.into(),
            ..Default::default()
        }
    }

    /// Check if this is a production database
    pub fn is_production(&self) -> bool {
        self.store == StoreKind::Mongo
            && !self.url.contains("localhost")
            && !self.url.contains("127.0.0.1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_memory_store() {
        let config = DatabaseConfig::default();
        assert_eq!(config.store, StoreKind::Memory);
        assert!(!config.is_production());
    }

    #[test]
    fn test_mongo_config() {
        let config = DatabaseConfig::mongo("mongodb://db.internal:27017", "crm");
        assert_eq!(config.store, StoreKind::Mongo);
        assert_eq!(config.database, "crm");
        assert!(config.is_production());
    }

    #[test]
    fn test_store_kind_parsing() {
        assert_eq!("MongoDB".parse::<StoreKind>(), Ok(StoreKind::Mongo));
        assert_eq!("memory".parse::<StoreKind>(), Ok(StoreKind::Memory));
        assert!("redis".parse::<StoreKind>().is_err());
    }
}
