use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;
use crate::query::{ItemQuery, OptionField, split_distinct};
use crate::services::item_validator::{validate_new_item, validate_patch};
use crate::stores::item_sequence_store::format_human_id;
use crate::stores::{ItemSequenceStore, ItemStore};
use crate::types::db::item;
use crate::types::internal::{ItemDraft, ItemPatch};

/// Item catalog service
///
/// Owns the injected connection handle and runs every item operation as one
/// independent unit of work. Validation happens before any storage access, so
/// a rejected payload never leaves a partial record behind.
pub struct ItemService {
    db: DatabaseConnection,
    item_store: Arc<ItemStore>,
    sequence_store: Arc<ItemSequenceStore>,
}

impl ItemService {
    pub fn new(
        db: DatabaseConnection,
        item_store: Arc<ItemStore>,
        sequence_store: Arc<ItemSequenceStore>,
    ) -> Self {
        Self {
            db,
            item_store,
            sequence_store,
        }
    }

    /// Validate and insert a new item
    ///
    /// The sequence increment and the insert share one transaction; if either
    /// fails the transaction is dropped and rolled back.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored item with generated ids and timestamps
    /// * `Err(InternalError)` - Validation failure or storage error
    pub async fn create_item(&self, draft: ItemDraft) -> Result<item::Model, InternalError> {
        let new_item = validate_new_item(draft)?;
        let image_urls = encode_image_urls(&new_item.image_urls)?;

        let txn = self.db.begin().await.map_err(|source| DatabaseError::TransactionBegin {
            operation: "create_item".to_string(),
            source,
        })?;

        let seq = self.sequence_store.next_value(&txn).await?;
        let now = Utc::now().timestamp_millis();

        let row = item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            seq: Set(seq),
            human_id: Set(format_human_id(seq)),
            name: Set(new_item.name),
            category: Set(new_item.category),
            thickness: Set(new_item.thickness),
            side: Set(new_item.side),
            lamination: Set(new_item.lamination),
            size: Set(new_item.size),
            price: Set(new_item.price),
            description: Set(new_item.description),
            image_urls: Set(image_urls),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = self.item_store.insert(&txn, row).await?;

        txn.commit().await.map_err(|source| DatabaseError::TransactionCommit {
            operation: "create_item".to_string(),
            source,
        })?;

        tracing::info!(item_id = %created.id, human_id = %created.human_id, "Item created");

        Ok(created)
    }

    pub async fn get_item(&self, id: &str) -> Result<item::Model, InternalError> {
        self.item_store
            .find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| InternalError::not_found(id))
    }

    /// List items matching a normalized query
    pub async fn list_items(&self, query: &ItemQuery) -> Result<Vec<item::Model>, InternalError> {
        let items = self.item_store.find_items(&self.db, query).await?;
        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Apply a merge-patch to an existing item
    ///
    /// An unknown id is reported before the patch is validated. Fields absent
    /// from the patch keep their stored values; `updatedAt` is always refreshed.
    pub async fn update_item(
        &self,
        id: &str,
        draft: ItemDraft,
    ) -> Result<item::Model, InternalError> {
        let existing = self.get_item(id).await?;
        let patch = validate_patch(draft)?;

        let mut row: item::ActiveModel = existing.into();
        apply_patch(&mut row, patch)?;
        row.updated_at = Set(Utc::now().timestamp_millis());

        let updated = self.item_store.update(&self.db, row).await?;

        tracing::info!(item_id = %updated.id, "Item updated");

        Ok(updated)
    }

    /// Permanently remove an item
    pub async fn delete_item(&self, id: &str) -> Result<(), InternalError> {
        let removed = self.item_store.delete_by_id(&self.db, id).await?;
        if removed == 0 {
            return Err(InternalError::not_found(id));
        }

        tracing::info!(item_id = %id, "Item deleted");

        Ok(())
    }

    /// Every atomic option value seen in `field` across all items
    pub async fn distinct_values(&self, field: OptionField) -> Result<BTreeSet<String>, InternalError> {
        let raw = self.item_store.distinct_values(&self.db, field).await?;
        Ok(split_distinct(raw))
    }
}

fn apply_patch(row: &mut item::ActiveModel, patch: ItemPatch) -> Result<(), InternalError> {
    if let Some(name) = patch.name {
        row.name = Set(name);
    }
    if let Some(category) = patch.category {
        row.category = Set(category);
    }
    if let Some(thickness) = patch.thickness {
        row.thickness = Set(thickness);
    }
    if let Some(side) = patch.side {
        row.side = Set(side);
    }
    if let Some(lamination) = patch.lamination {
        row.lamination = Set(lamination);
    }
    if let Some(size) = patch.size {
        row.size = Set(size);
    }
    if let Some(price) = patch.price {
        row.price = Set(price);
    }
    if let Some(description) = patch.description {
        row.description = Set(description);
    }
    if let Some(urls) = patch.image_urls {
        row.image_urls = Set(encode_image_urls(&urls)?);
    }
    Ok(())
}

fn encode_image_urls(urls: &[String]) -> Result<String, InternalError> {
    serde_json::to_string(urls).map_err(|e| InternalError::parse("image_urls", e.to_string()))
}

/// Decode the stored JSON image list
pub fn decode_image_urls(raw: &str) -> Result<Vec<String>, InternalError> {
    serde_json::from_str(raw).map_err(|e| InternalError::parse("image_urls", e.to_string()))
}
