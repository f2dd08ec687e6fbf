// Common test utilities for integration tests
#![allow(dead_code)]

use catalog_backend::AppData;
use catalog_backend::types::internal::ItemDraft;
use migration::{ItemMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Creates a test catalog database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates AppData wired to a fresh in-memory database
pub async fn setup_test_app_data() -> AppData {
    AppData::init(setup_test_db().await)
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

/// JSON body for the create endpoint
pub fn item_json(name: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": category,
        "thickness": "300",
        "side": "Single",
        "lamination": "Matte",
        "size": "A4",
        "price": 12.5,
        "description": format!("{} description", name),
        "imageUrls": [format!("https://img.example/{}.png", name)]
    })
}
