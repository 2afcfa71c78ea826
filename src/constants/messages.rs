//! Success message constants used throughout the application.

/// Body of the liveness probe when storage answers.
pub const MSG_HEALTHY: &str = "Welcome to the user service!";

/// Body of the root endpoint.
pub fn app_banner() -> String {
    format!("Application V{}", env!("CARGO_PKG_VERSION"))
}
