//! # CustomerManager Core
//!
//! Core business logic and domain layer for the CustomerManager backend.
//! This crate contains domain entities, the document repository contract,
//! the client/user/authentication services and the error types they report.
//! Every service operation returns a [`ServiceResult`] instead of failing.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Address, Claims, Customer, Document, User};
pub use domain::value_objects::{
    AuthenticateRequest, AuthenticateResponse, PublicUser, ServiceResult,
};
pub use errors::{DomainError, DomainResult, ServiceError, TokenError, ValidationError};
pub use repositories::{DocumentRepository, Filter, InMemoryDocumentRepository};
pub use services::{
    AuthenticationService, ClientService, EntityService, PasswordHasher, TokenService,
    TokenServiceConfig, UserService,
};
