pub mod database;
pub mod env_provider;
pub mod errors;
pub mod logging;
pub mod settings;

pub use database::{RetryPolicy, connect_with_retry, migrate};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::SettingsError;
pub use logging::{LoggingConfig, LoggingError, init_logging};
pub use settings::AppSettings;
