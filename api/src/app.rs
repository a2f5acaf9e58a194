//! Application factory
//!
//! Builds the actix-web application around the shared state. Client and
//! user scopes are wrapped with the bearer token middleware; authentication
//! and health stay public.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use cm_core::domain::entities::{Customer, User};
use cm_core::repositories::DocumentRepository;

use crate::middleware::auth::JwtAuth;
use crate::routes::{auth, clients, health, users, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<C, U>(
    app_state: web::Data<AppState<C, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/authenticate", web::post().to(auth::authenticate::<C, U>)),
                )
                .service(
                    web::scope("/clients")
                        .wrap(jwt_auth.clone())
                        .route("", web::get().to(clients::list::<C, U>))
                        .route("", web::post().to(clients::create::<C, U>))
                        .route("/{id}", web::get().to(clients::get::<C, U>))
                        .route("/{id}", web::put().to(clients::update::<C, U>))
                        .route("/{id}", web::delete().to(clients::delete::<C, U>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(jwt_auth)
                        .route("", web::get().to(users::list::<C, U>))
                        .route("", web::post().to(users::create::<C, U>))
                        // before "/{id}" so the literal segment wins
                        .route("/validate", web::post().to(users::validate::<C, U>))
                        .route("/{id}", web::get().to(users::get::<C, U>))
                        .route("/{id}", web::put().to(users::update::<C, U>))
                        .route("/{id}", web::delete().to(users::delete::<C, U>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "value": null,
        "error": {
            "kind": "not_found",
            "message": "The requested resource was not found"
        }
    }))
}
