//! User route handlers
//!
//! Responses carry `PublicUser` values, so password hashes never leave the
//! service.

use actix_web::{web, HttpResponse};

use cm_core::domain::entities::{Customer, User};
use cm_core::domain::value_objects::PublicUser;
use cm_core::repositories::DocumentRepository;

use crate::handlers::respond;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/users
pub async fn list<C, U>(state: web::Data<AppState<C, U>>, _auth: AuthContext) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let result = state.user_service.get_all().await;
    respond(result.map(|users| users.into_iter().map(PublicUser::from).collect::<Vec<_>>()))
}

/// Handler for GET /api/v1/users/{id}
pub async fn get<C, U>(
    state: web::Data<AppState<C, U>>,
    path: web::Path<String>,
    _auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let result = state.user_service.get(&path.into_inner()).await;
    respond(result.map(PublicUser::from))
}

/// Handler for POST /api/v1/users
pub async fn create<C, U>(
    state: web::Data<AppState<C, U>>,
    body: Option<web::Json<User>>,
    auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    tracing::debug!(user_id = %auth.user_id, "create user");
    let result = state.user_service.create(body.map(web::Json::into_inner)).await;
    respond(result.map(PublicUser::from))
}

/// Handler for PUT /api/v1/users/{id}
pub async fn update<C, U>(
    state: web::Data<AppState<C, U>>,
    path: web::Path<String>,
    body: Option<web::Json<User>>,
    auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let id = path.into_inner();
    tracing::debug!(user_id = %auth.user_id, %id, "update user");
    let result = state
        .user_service
        .update(&id, body.map(web::Json::into_inner))
        .await;
    respond(result.map(PublicUser::from))
}

/// Handler for DELETE /api/v1/users/{id}
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
    tracing::debug!(user_id = %auth.user_id, %id, "delete user");
    respond(state.user_service.delete(&id).await)
}

/// Handler for POST /api/v1/users/validate
///
/// Checks a `{ "login", "password" }` pair; the value is `true` only when
/// both match a stored user.
pub async fn validate<C, U>(
    state: web::Data<AppState<C, U>>,
    body: Option<web::Json<User>>,
    _auth: AuthContext,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    respond(state.user_service.validate(body.map(web::Json::into_inner)).await)
}
