//! Client route handlers
//!
//! Every handler requires a verified bearer token; the JSON body of each
//! response is `{ "value": ..., "error": { "kind", "message" } }` with the
//! status taken from the service result.

use actix_web::{web, HttpResponse};

use cm_core::domain::entities::{Customer, User};
use cm_core::repositories::DocumentRepository;

use crate::handlers::respond;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/clients
pub async fn list<C, U>(state: web::Data<AppState<C, U>>, _auth: AuthContext) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    respond(state.client_service.get_all().await)
}

/// Handler for GET /api/v1/clients/{id}
pub async fn get<C, U>(
    state: web::Data<AppState<C, U>>,
    path: web::Path<String>,
    _auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    respond(state.client_service.get(&path.into_inner()).await)
}

/// Handler for POST /api/v1/clients
///
/// A missing or unparsable body reaches the service as no client and is
/// answered with 400.
pub async fn create<C, U>(
    state: web::Data<AppState<C, U>>,
    body: Option<web::Json<Customer>>,
    auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    tracing::debug!(user_id = %auth.user_id, "create client");
    respond(state.client_service.create(body.map(web::Json::into_inner)).await)
}

/// Handler for PUT /api/v1/clients/{id}
pub async fn update<C, U>(
    state: web::Data<AppState<C, U>>,
    path: web::Path<String>,
    body: Option<web::Json<Customer>>,
    auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let id = path.into_inner();
    tracing::debug!(user_id = %auth.user_id, %id, "update client");
    respond(
        state
            .client_service
            .update(&id, body.map(web::Json::into_inner))
            .await,
    )
}

/// Handler for DELETE /api/v1/clients/{id}
pub async fn delete<C, U>(
    state: web::Data<AppState<C, U>>,
    path: web::Path<String>,
    auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let id = path.into_inner();
    tracing::debug!(user_id = %auth.user_id, %id, "delete client");
    respond(state.client_service.delete(&id).await)
}
