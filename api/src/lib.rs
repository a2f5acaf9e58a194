//! # CustomerManager API
//!
//! actix-web surface over the core services: authentication, client and
//! user CRUD, and a health probe. Client and user routes sit behind the
//! bearer token middleware.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
