use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::InternalError;

/// Retry policy for the initial database connection
///
/// The delay before retry `n` is `initial_backoff * 2^(n-1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (1-based)
    pub fn backoff_after(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

/// Connect to the database, retrying with exponential backoff
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established
/// * `Err(InternalError)` - The last connection error once all attempts failed
pub async fn connect_with_retry(
    database_url: &str,
    policy: RetryPolicy,
) -> Result<DatabaseConnection, InternalError> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match Database::connect(database_url).await {
            Ok(db) => {
                tracing::info!("Connected to database on attempt {}", attempt);
                return Ok(db);
            }
            Err(e) if attempt < attempts => {
                let delay = policy.backoff_after(attempt);
                tracing::warn!(
                    "Database connection attempt {}/{} failed: {}; retrying in {:?}",
                    attempt,
                    attempts,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!("Database connection failed after {} attempts: {}", attempts, e);
                return Err(InternalError::database("connect_database", e));
            }
        }
    }
}

/// Run pending migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
