// Test utilities shared across unit tests
// Only compiled when running tests

use crate::services::ItemService;
use crate::stores::{ItemSequenceStore, ItemStore};
use crate::types::internal::ItemDraft;
use migration::{ItemMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Creates an in-memory catalog database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates a test database plus an ItemService wired to it
///
/// Callers can discard what they don't need:
/// ```rust
/// let (_db, service) = setup_test_item_service().await;
/// ```
pub async fn setup_test_item_service() -> (DatabaseConnection, Arc<ItemService>) {
    let db = setup_test_db().await;
    let service = Arc::new(ItemService::new(
        db.clone(),
        Arc::new(ItemStore::new()),
        Arc::new(ItemSequenceStore::new()),
    ));

    (db, service)
}

/// A complete, valid creation payload
pub fn item_draft(name: &str, category: &str) -> ItemDraft {
    ItemDraft {
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        thickness: Some("300".to_string()),
        side: Some("Single".to_string()),
        lamination: Some("Matte".to_string()),
        size: Some("A4".to_string()),
        price: Some(10.0),
        description: Some(format!("{} description", name)),
        image_urls: Some(vec![format!("https://img.example/{}.png", name)]),
    }
}
