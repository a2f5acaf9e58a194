//! Route handlers
//!
//! - `auth` - credential exchange for a bearer token
//! - `clients` - client CRUD (bearer token required)
//! - `users` - user CRUD and credential validation (bearer token required)
//! - `health` - liveness probe

pub mod auth;
pub mod clients;
pub mod health;
pub mod users;

use std::sync::Arc;

use cm_core::domain::entities::{Customer, User};
use cm_core::repositories::DocumentRepository;
use cm_core::services::{
    AuthenticationService, ClientService, PasswordHasher, TokenService, UserService,
};
use cm_shared::Settings;

/// Application state that holds shared services
pub struct AppState<C, U>
where
    C: DocumentRepository<Customer>,
    U: DocumentRepository<User>,
{
    pub client_service: ClientService<C>,
    pub user_service: UserService<U>,
    pub auth_service: AuthenticationService<U>,
    pub token_service: Arc<TokenService>,
}

impl<C, U> AppState<C, U>
where
    C: DocumentRepository<Customer>,
    U: DocumentRepository<User>,
{
    /// Wire the services over the given repositories
    ///
    /// Authentication and the bearer middleware share one token service so
    /// issued tokens verify with the same key.
    pub fn new(
        clients: Arc<C>,
        users: Arc<U>,
        settings: &Settings,
        hasher: PasswordHasher,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(settings));
        Self {
            client_service: ClientService::new(clients),
            user_service: UserService::new(users.clone(), hasher),
            auth_service: AuthenticationService::with_token_service(users, token_service.clone()),
            token_service,
        }
    }
}
