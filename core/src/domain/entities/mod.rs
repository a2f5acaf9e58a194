//! Domain entities stored as documents.

pub mod customer;
pub mod document;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use customer::{Address, Customer};
pub use document::Document;
pub use token::{Claims, TOKEN_EXPIRY_HOURS};
pub use user::User;
