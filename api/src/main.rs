use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use cm_api::{create_app, telemetry, AppState};
use cm_core::domain::entities::{Customer, User};
use cm_core::repositories::{DocumentRepository, Filter, InMemoryDocumentRepository};
use cm_core::services::PasswordHasher;
use cm_infra::{MongoConnection, MongoDocumentRepository};
use cm_shared::config::{AppConfig, BootstrapUser, ServerConfig, StoreKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init(&config.logging);

    tracing::info!(
        environment = %config.environment,
        store = ?config.database.store,
        "Starting CustomerManager API Server"
    );
    for warning in config.production_warnings() {
        tracing::warn!("{}", warning);
    }

    let settings = config.auth.settings();
    let hasher = PasswordHasher::new(config.auth.password_hash_cost);

    match config.database.store {
        StoreKind::Memory => {
            let clients = Arc::new(InMemoryDocumentRepository::<Customer>::new());
            let users = Arc::new(InMemoryDocumentRepository::<User>::new());
            let state = AppState::new(clients, users.clone(), &settings, hasher);
            bootstrap(&config, &state, users.as_ref()).await?;
            serve(&config.server, state).await?;
        }
        StoreKind::Mongo => {
            let connection = MongoConnection::connect(config.database.clone())
                .await
                .context("could not create the MongoDB client")?;

            let clients =
                Arc::new(MongoDocumentRepository::<Customer>::from_connection(&connection));
            let users = Arc::new(MongoDocumentRepository::<User>::from_connection(&connection));
            clients.ensure_indexes().await?;
            users.ensure_indexes().await?;

            let state = AppState::new(clients, users.clone(), &settings, hasher);
            bootstrap(&config, &state, users.as_ref()).await?;
            serve(&config.server, state).await?;
            connection.close().await;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Create the configured initial account unless its user name is taken
async fn bootstrap<C, U>(
    config: &AppConfig,
    state: &AppState<C, U>,
    users: &U,
) -> anyhow::Result<()>
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let Some(BootstrapUser { user_name, password }) = &config.auth.bootstrap_user else {
        return Ok(());
    };

    let existing = users
        .find_one(&Filter::new().eq("user_name", user_name.as_str()))
        .await?;
    if existing.is_some() {
        tracing::debug!(%user_name, "Bootstrap user already present");
        return Ok(());
    }

    let user = User::new(user_name.as_str(), password.as_str()).with_name(user_name.as_str());
    let result = state.user_service.create(Some(user)).await;
    match result.error {
        None => {
            tracing::info!(%user_name, "Bootstrap user created");
            Ok(())
        }
        Some(error) => Err(anyhow::anyhow!("could not create bootstrap user: {}", error)),
    }
}

async fn serve<C, U>(server: &ServerConfig, state: AppState<C, U>) -> std::io::Result<()>
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let bind_address = server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(state);
    let mut http_server = HttpServer::new(move || create_app(state.clone()));
    if server.workers > 0 {
        http_server = http_server.workers(server.workers);
    }

    http_server.bind(&bind_address)?.run().await
}
