//! Authentication route handlers

pub mod authenticate;

pub use authenticate::authenticate;
