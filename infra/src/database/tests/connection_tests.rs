//! Unit tests for MongoDB client construction

use cm_shared::config::DatabaseConfig;

use crate::database::connection::MongoConnection;
use crate::InfrastructureError;

#[tokio::test]
async fn test_connect_with_invalid_url() {
    let config = DatabaseConfig::mongo("invalid://url", "customer_manager");

    let result = MongoConnection::connect(config).await;
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_connect_requires_database_name() {
    let config = DatabaseConfig::mongo("mongodb://localhost:27017", "");

    let result = MongoConnection::connect(config).await;
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_connect_is_lazy() {
    // no server needed until the first operation
    let config = DatabaseConfig::mongo("mongodb://localhost:27017", "customer_manager");

    let connection = MongoConnection::connect(config).await.unwrap();
    assert_eq!(connection.database().name(), "customer_manager");
    assert_eq!(connection.config().connect_timeout, 10);
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_health_check() {
    let url = std::env::var("MONGODB_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let connection = MongoConnection::connect(DatabaseConfig::mongo(url, "customer_manager_test"))
        .await
        .unwrap();

    assert!(connection.health_check().await.unwrap());
}
