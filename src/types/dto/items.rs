use chrono::{DateTime, SecondsFormat, Utc};
use poem_openapi::Object;

use crate::errors::InternalError;
use crate::services::item_service::decode_image_urls;
use crate::types::db::item;
use crate::types::internal::ItemDraft;

/// Item fields accepted by the create and update endpoints
///
/// Every field is optional at the wire level so that missing fields are
/// reported together by the validator instead of failing body parsing.
/// Create requires all of them; update applies only those present.
#[derive(Object, Debug, Clone, Default)]
#[oai(rename_all = "camelCase")]
pub struct ItemPayload {
    /// Display name of the item
    pub name: Option<String>,

    /// Category, or comma-separated categories
    pub category: Option<String>,

    /// Paper thickness options in GSM, comma-separated (e.g. "200,300")
    pub thickness: Option<String>,

    /// Printable sides options, comma-separated
    pub side: Option<String>,

    /// Lamination options, comma-separated
    pub lamination: Option<String>,

    /// Size options, comma-separated
    pub size: Option<String>,

    /// Unit price
    pub price: Option<f64>,

    /// Free-text description
    pub description: Option<String>,

    /// Image URLs; the first one is the cover image
    pub image_urls: Option<Vec<String>>,
}

impl From<ItemPayload> for ItemDraft {
    fn from(payload: ItemPayload) -> Self {
        Self {
            name: payload.name,
            category: payload.category,
            thickness: payload.thickness,
            side: payload.side,
            lamination: payload.lamination,
            size: payload.size,
            price: payload.price,
            description: payload.description,
            image_urls: payload.image_urls,
        }
    }
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: String,

    /// Sequential display identifier (item-NNNN)
    pub human_id: String,

    pub name: String,
    pub category: String,
    pub thickness: String,
    pub side: String,
    pub lamination: String,
    pub size: String,
    pub price: f64,
    pub description: String,
    pub image_urls: Vec<String>,

    /// Timestamp when the item was created (RFC 3339)
    pub created_at: String,

    /// Timestamp of the last update (RFC 3339)
    pub updated_at: String,
}

impl TryFrom<item::Model> for ItemResponse {
    type Error = InternalError;

    fn try_from(model: item::Model) -> Result<Self, Self::Error> {
        let image_urls = decode_image_urls(&model.image_urls)?;
        let created_at = format_timestamp(model.created_at)?;
        let updated_at = format_timestamp(model.updated_at)?;

        Ok(Self {
            id: model.id,
            human_id: model.human_id,
            name: model.name,
            category: model.category,
            thickness: model.thickness,
            side: model.side,
            lamination: model.lamination,
            size: model.size,
            price: model.price,
            description: model.description,
            image_urls,
            created_at,
            updated_at,
        })
    }
}

/// Create/update response: confirmation message plus the stored item
#[derive(Object, Debug)]
pub struct ItemMessageResponse {
    pub message: String,
    pub item: ItemResponse,
}

/// Plain confirmation message
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

fn format_timestamp(millis: i64) -> Result<String, InternalError> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| InternalError::parse("timestamp", format!("out of range: {}", millis)))
}
