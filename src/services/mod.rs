//! Services organized by domain concern.

pub mod file_service;
pub mod health_service;
pub mod user_service;

pub use file_service::FileService;
pub use health_service::HealthService;
pub use user_service::UserService;
