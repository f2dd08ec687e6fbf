use poem_openapi::param::{Path, Query};
use poem_openapi::{ApiResponse, OpenApi, Tags, payload::Json};
use std::sync::Arc;

use crate::errors::ItemApiError;
use crate::query::{ItemQueryParams, OptionField, build_query};
use crate::services::ItemService;
use crate::types::dto::items::{ItemMessageResponse, ItemPayload, ItemResponse, MessageResponse};

/// Catalog item endpoints
pub struct ItemsApi {
    item_service: Arc<ItemService>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemService
    pub fn new(item_service: Arc<ItemService>) -> Self {
        Self { item_service }
    }

    async fn distinct(&self, field: OptionField) -> Result<Json<Vec<String>>, ItemApiError> {
        let values = self.item_service.distinct_values(field).await?;
        Ok(Json(values.into_iter().collect()))
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Catalog item management
    Items,
    /// Option values derived from existing items
    Options,
}

/// Successful item creation
#[derive(ApiResponse)]
enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemMessageResponse>),
}

#[OpenApi(prefix_path = "/item")]
impl ItemsApi {
    /// Create a new item
    ///
    /// Every item field is required. Returns the stored item with its
    /// generated ids and timestamps.
    #[oai(path = "/create", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<ItemPayload>,
    ) -> Result<CreateItemResponse, ItemApiError> {
        let created = self.item_service.create_item(body.0.into()).await?;

        Ok(CreateItemResponse::Created(Json(ItemMessageResponse {
            message: "Item created successfully".to_string(),
            item: ItemResponse::try_from(created)?,
        })))
    }

    /// List items
    ///
    /// Option filters match case-insensitively inside comma-joined values;
    /// `all` disables a filter. Unparseable `limit` values mean no limit.
    #[oai(path = "/get", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        #[oai(name = "searchTerm")] search_term: Query<Option<String>>,
        category: Query<Option<String>>,
        thickness: Query<Option<String>>,
        side: Query<Option<String>>,
        lamination: Query<Option<String>>,
        size: Query<Option<String>>,
        sort: Query<Option<String>>,
        order: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> Result<Json<Vec<ItemResponse>>, ItemApiError> {
        let query = build_query(&ItemQueryParams {
            search_term: search_term.0,
            category: category.0,
            thickness: thickness.0,
            side: side.0,
            lamination: lamination.0,
            size: size.0,
            sort: sort.0,
            order: order.0,
            limit: limit.0,
        });

        let items = self.item_service.list_items(&query).await?;
        let items = items
            .into_iter()
            .map(ItemResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Json(items))
    }

    /// Get a single item by id
    #[oai(path = "/get/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<ItemResponse>, ItemApiError> {
        let item = self.item_service.get_item(&id.0).await?;
        Ok(Json(ItemResponse::try_from(item)?))
    }

    /// Permanently delete an item
    #[oai(path = "/delete/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<MessageResponse>, ItemApiError> {
        self.item_service.delete_item(&id.0).await?;

        Ok(Json(MessageResponse {
            message: "Item has been deleted!".to_string(),
        }))
    }

    /// Update an item
    ///
    /// Only the fields present in the body are changed.
    #[oai(path = "/update/:id", method = "post", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<ItemPayload>,
    ) -> Result<Json<ItemMessageResponse>, ItemApiError> {
        let updated = self.item_service.update_item(&id.0, body.0.into()).await?;

        Ok(Json(ItemMessageResponse {
            message: "Item updated successfully".to_string(),
            item: ItemResponse::try_from(updated)?,
        }))
    }

    /// All distinct categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Options")]
    async fn categories(&self) -> Result<Json<Vec<String>>, ItemApiError> {
        self.distinct(OptionField::Category).await
    }

    /// All distinct thicknesses
    #[oai(path = "/thicknesses", method = "get", tag = "ApiTags::Options")]
    async fn thicknesses(&self) -> Result<Json<Vec<String>>, ItemApiError> {
        self.distinct(OptionField::Thickness).await
    }

    /// All distinct sides
    #[oai(path = "/sides", method = "get", tag = "ApiTags::Options")]
    async fn sides(&self) -> Result<Json<Vec<String>>, ItemApiError> {
        self.distinct(OptionField::Side).await
    }

    /// All distinct laminations
    #[oai(path = "/laminations", method = "get", tag = "ApiTags::Options")]
    async fn laminations(&self) -> Result<Json<Vec<String>>, ItemApiError> {
        self.distinct(OptionField::Lamination).await
    }

    /// All distinct sizes
    #[oai(path = "/sizes", method = "get", tag = "ApiTags::Options")]
    async fn sizes(&self) -> Result<Json<Vec<String>>, ItemApiError> {
        self.distinct(OptionField::Size).await
    }
}
