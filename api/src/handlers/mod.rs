//! Shared handler helpers

pub mod result;

pub use result::respond;
