//! Application constants module.
//!
//! Centralizes the error codes, error messages and success messages used by
//! the handlers and services.

pub mod error_codes;
pub mod errors;
pub mod messages;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
