//! Type definitions shared between the core and presentation layers
//!
//! - `status` - HTTP-style status codes attached to service results

pub mod status;

pub use status::StatusCode;
