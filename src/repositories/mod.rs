//! Repository layer for database operations.
//!
//! Keeps SQL out of the services; each method runs exactly one statement.

pub mod user_repository;

pub use user_repository::UserRepository;
