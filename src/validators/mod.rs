//! Input validation helpers shared by handlers and services.

pub mod common;
pub mod user;

pub use common::*;
pub use user::*;
