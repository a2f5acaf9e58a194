//! Business services containing domain logic and use cases.

pub mod auth;
pub mod entity;
pub mod password;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::AuthenticationService;
pub use entity::{ClientService, EntityService};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;
