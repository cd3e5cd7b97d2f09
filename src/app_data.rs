use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{AppSettings, connect_with_retry, migrate};
use crate::errors::InternalError;
use crate::services::ItemService;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// The database handle is created once and passed down explicitly:
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ├─ db (DatabaseConnection, connected with retry + migrated)
///   ├─ item_store (Arc<ItemStore>)   ← owns a clone of db
///   └─ item_service (Arc<ItemService>) ← owns item_store
///   ↓
/// ItemsApi::new(item_service)
/// ```
pub struct AppData {
    pub settings: Arc<AppSettings>,
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
    pub item_service: Arc<ItemService>,
}

impl AppData {
    /// Connect, migrate and build the store and service
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the database stays unreachable for every
    /// attempt of the retry policy, or when migrations fail
    pub async fn init(settings: Arc<AppSettings>) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let db = connect_with_retry(&settings.database_url, settings.retry_policy()).await?;
        migrate(&db).await?;

        let app_data = Self::from_connection(settings, db);

        tracing::info!("AppData initialization complete");

        Ok(app_data)
    }

    /// Build the store and service over an existing, migrated connection
    pub fn from_connection(settings: Arc<AppSettings>, db: DatabaseConnection) -> Self {
        let item_store = Arc::new(ItemStore::new(db.clone()));
        let item_service = Arc::new(ItemService::new(item_store.clone()));

        Self {
            settings,
            db,
            item_store,
            item_service,
        }
    }
}
