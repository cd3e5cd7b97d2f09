use std::str::FromStr;
use std::time::Duration;

use crate::config::database::RetryPolicy;
use crate::config::env_provider::{EnvironmentProvider, SystemEnvironment};
use crate::config::errors::SettingsError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db?mode=rwc";
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/items";

/// Application settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_connect_attempts: u32,
    pub db_connect_backoff: Duration,
    pub api_url: String,
    pub notification_timeout: Duration,
}

impl AppSettings {
    /// Load settings from the process environment (after `.env`)
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenv::dotenv().ok();
        Self::from_provider(&SystemEnvironment)
    }

    /// Load settings from the given environment provider
    ///
    /// Unset variables take their defaults; set but unparsable values are errors.
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let db_connect_attempts = parse_or(env, "DB_CONNECT_ATTEMPTS", 5u32, "positive integer")?;
        if db_connect_attempts == 0 {
            return Err(SettingsError::InvalidValue {
                setting_name: "DB_CONNECT_ATTEMPTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let settings = Self {
            database_url: env
                .get_var("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_host: env
                .get_var("SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_or(env, "SERVER_PORT", DEFAULT_SERVER_PORT, "port number")?,
            db_connect_attempts,
            db_connect_backoff: Duration::from_millis(parse_or(
                env,
                "DB_CONNECT_BACKOFF_MS",
                200u64,
                "milliseconds",
            )?),
            api_url: env
                .get_var("CATALOG_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            notification_timeout: Duration::from_millis(parse_or(
                env,
                "NOTIFICATION_TIMEOUT_MS",
                3000u64,
                "milliseconds",
            )?),
        };

        tracing::debug!("Settings loaded: {:?}", settings);

        Ok(settings)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Public API root advertised in the OpenAPI document
    pub fn server_url(&self) -> String {
        format!("http://localhost:{}/api", self.server_port)
    }

    /// Initial database connection policy
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.db_connect_attempts,
            initial_backoff: self.db_connect_backoff,
        }
    }
}

fn parse_or<T: FromStr>(
    env: &dyn EnvironmentProvider,
    key: &str,
    default: T,
    expected: &str,
) -> Result<T, SettingsError> {
    match env.get_var(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| SettingsError::InvalidFormat {
            setting_name: key.to_string(),
            expected: expected.to_string(),
            actual: raw,
        }),
    }
}
