use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::errors::InternalError;
use crate::services::ItemService;
use crate::stores::{ItemSequenceStore, ItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// The database handle is opened once in main.rs and handed in here; every
/// store and service receives it explicitly instead of reaching for global
/// state.
///
/// ```text
/// main.rs
///   ↓ connect + migrate
/// AppData::init(db)
///   └─ item_service (Arc<ItemService>) ← db, ItemStore, ItemSequenceStore
///   ↓
/// api::build_app(&app_data) → ItemsApi, HealthApi
///   ↓ server stops
/// AppData::close()
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_service: Arc<ItemService>,
}

impl AppData {
    /// Wire stores and services around an already migrated connection
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::info!("Initializing AppData...");

        let item_service = Arc::new(ItemService::new(
            db.clone(),
            Arc::new(ItemStore::new()),
            Arc::new(ItemSequenceStore::new()),
        ));

        tracing::info!("AppData initialization complete");

        Self { db, item_service }
    }

    /// Close the database connection pool
    pub async fn close(self) -> Result<(), InternalError> {
        self.db
            .close()
            .await
            .map_err(|e| InternalError::database("close_database", e))?;

        tracing::info!("Database connection closed");

        Ok(())
    }
}
