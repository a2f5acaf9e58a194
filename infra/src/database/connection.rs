//! MongoDB client management
//!
//! Wraps the driver client (which pools connections internally) together
//! with the configured database handle.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use cm_core::domain::entities::Document;
use cm_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// MongoDB connection wrapper
///
/// Cheap to clone; every clone shares the driver's pool.
#[derive(Clone)]
pub struct MongoConnection {
    /// Driver client
    client: Client,
    /// Database holding the document collections
    database: Database,
    /// Configuration used to create this client
    config: DatabaseConfig,
}

impl MongoConnection {
    /// Create a client for the configured URL and database
    ///
    /// The driver connects lazily, so an unreachable server only surfaces
    /// on the first operation or on `health_check`.
    ///
    /// # Example
    /// ```no_run
    /// use cm_infra::database::MongoConnection;
    /// use cm_shared::config::DatabaseConfig;
    ///
    /// async fn connect() -> Result<MongoConnection, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::mongo("mongodb://localhost:27017", "customer_manager");
    ///     let connection = MongoConnection::connect(config).await?;
    ///     Ok(connection)
    /// }
    /// ```
    pub async fn connect(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        if config.database.is_empty() {
            return Err(InfrastructureError::Config(
                "database name cannot be empty".to_string(),
            ));
        }

        tracing::info!(database = %config.database, "Creating MongoDB client");

        let mut options = ClientOptions::parse(&config.url).await.map_err(|e| {
            tracing::error!("Invalid MongoDB URL: {}", e);
            InfrastructureError::Config(format!("Invalid database URL: {}", e))
        })?;
        let timeout = Duration::from_secs(config.connect_timeout);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        Ok(Self {
            client,
            database,
            config,
        })
    }

    /// The configured database handle
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Collection storing documents of type `D`
    pub fn collection<D: Document>(&self) -> Collection<D> {
        self.database.collection::<D>(D::COLLECTION)
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Check that the server answers a ping
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let reply = self
            .database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        Ok(reply.get_f64("ok").map(|ok| ok == 1.0).unwrap_or(false)
            || reply.get_i32("ok").map(|ok| ok == 1).unwrap_or(false))
    }

    /// Close the client, waiting for in-flight operations
    pub async fn close(self) {
        tracing::info!("Closing MongoDB client");
        self.client.shutdown().await;
    }
}
