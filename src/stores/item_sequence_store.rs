use crate::errors::InternalError;
use crate::types::db::item_sequence::{self, ActiveModel, Entity as ItemSequence};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

/// Primary key of the singleton counter row
const SEQUENCE_ROW_ID: i32 = 1;

/// ItemSequenceStore hands out the numbers behind human-readable item ids
///
/// The counter is bumped with a single `UPDATE ... SET value = value + 1`, so
/// when it runs inside the same transaction as the item insert two concurrent
/// creates can never observe the same value.
#[derive(Debug, Default)]
pub struct ItemSequenceStore {}

impl ItemSequenceStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Increment the counter and return the new value
    ///
    /// Recreates the counter row starting at 1 if it is missing.
    pub async fn next_value(&self, conn: &impl ConnectionTrait) -> Result<i64, InternalError> {
        let result = ItemSequence::update_many()
            .col_expr(
                item_sequence::Column::Value,
                Expr::col(item_sequence::Column::Value).add(1),
            )
            .filter(item_sequence::Column::Id.eq(SEQUENCE_ROW_ID))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("increment_item_sequence", e))?;

        if result.rows_affected == 0 {
            tracing::warn!("Item sequence row missing, recreating it");
            let row = ActiveModel {
                id: Set(SEQUENCE_ROW_ID),
                value: Set(1),
            };
            row.insert(conn)
                .await
                .map_err(|e| InternalError::database("create_item_sequence", e))?;
            return Ok(1);
        }

        ItemSequence::find_by_id(SEQUENCE_ROW_ID)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("read_item_sequence", e))?
            .map(|row| row.value)
            .ok_or_else(|| InternalError::parse("item_sequence", "counter row disappeared"))
    }
}

/// Format a sequence value as a display id, e.g. `item-0042`
pub fn format_human_id(value: i64) -> String {
    format!("item-{:04}", value)
}
