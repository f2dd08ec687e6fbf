use crate::errors::InternalError;
use crate::query::{ItemQuery, OptionField};
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// ItemStore runs item reads and writes against the `items` table
///
/// The store holds no connection of its own; callers pass either the shared
/// connection or an open transaction so writes can be grouped.
#[derive(Debug, Default)]
pub struct ItemStore {}

impl ItemStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Insert a fully populated item row
    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        item: ActiveModel,
    ) -> Result<item::Model, InternalError> {
        item.insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_item", e))
    }

    pub async fn find_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: &str,
    ) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_item_by_id", e))
    }

    /// Run a normalized listing query
    ///
    /// Rows are ordered by the requested field, then by insertion order
    /// (ascending, whatever the requested direction) so ties are stable.
    /// The limit caps the sorted sequence from its start.
    pub async fn find_items(
        &self,
        conn: &impl ConnectionTrait,
        query: &ItemQuery,
    ) -> Result<Vec<item::Model>, InternalError> {
        let mut select = Item::find();

        if !query.predicate.is_unrestricted() {
            select = select.filter(query.predicate.to_condition());
        }

        if let Some(column) = query.sort.column() {
            select = select.order_by(column, query.direction.to_order());
        }
        select = select.order_by_asc(item::Column::Seq);

        if let Some(limit) = query.effective_limit() {
            select = select.limit(limit);
        }

        select
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_items", e))
    }

    /// Persist changed columns of an existing row
    ///
    /// # Returns
    /// * `Ok(Model)` - The row as stored after the update
    /// * `Err(InternalError)` - NotFound if the row vanished, or a database error
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        item: ActiveModel,
    ) -> Result<item::Model, InternalError> {
        let id = match &item.id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => id.clone(),
            ActiveValue::NotSet => String::new(),
        };
        item.update(conn).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => InternalError::not_found(id),
            other => InternalError::database("update_item", other),
        })
    }

    /// Delete a row by id, returning how many rows were removed (0 or 1)
    pub async fn delete_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: &str,
    ) -> Result<u64, InternalError> {
        let result = Item::delete_by_id(id.to_string())
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.rows_affected)
    }

    /// Every distinct raw value stored in an option column
    pub async fn distinct_values(
        &self,
        conn: &impl ConnectionTrait,
        field: OptionField,
    ) -> Result<Vec<Option<String>>, InternalError> {
        Item::find()
            .select_only()
            .column(field.column())
            .distinct()
            .into_tuple::<Option<String>>()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("distinct_item_values", e))
    }
}
