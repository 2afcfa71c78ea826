use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// Default upload ceiling in bytes.
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 1_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub upload_dir: String,
    pub max_upload_size: usize,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", 8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://users.db".to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            max_upload_size: parse_var("MAX_UPLOAD_SIZE", DEFAULT_MAX_UPLOAD_SIZE),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "user-service".to_string()),
        }
    }
}

/// Read a numeric variable, falling back to `default` when it is unset or malformed.
fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} must be a valid number, got '{}'; using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_on_garbage() {
        env::set_var("USER_SERVICE_TEST_PORT", "not-a-port");
        assert_eq!(parse_var::<u16>("USER_SERVICE_TEST_PORT", 8080), 8080);
        env::remove_var("USER_SERVICE_TEST_PORT");
    }

    #[test]
    fn parse_var_reads_value() {
        env::set_var("USER_SERVICE_TEST_LIMIT", "2048");
        assert_eq!(parse_var::<usize>("USER_SERVICE_TEST_LIMIT", 1), 2048);
        env::remove_var("USER_SERVICE_TEST_LIMIT");
    }

    #[test]
    fn parse_var_uses_default_when_unset() {
        assert_eq!(parse_var::<u32>("USER_SERVICE_TEST_UNSET", 5), 5);
    }
}
