use poem_openapi::{ApiResponse, OpenApi, Tags, param::Path, payload::Json};
use std::sync::Arc;

use crate::errors::ItemApiError;
use crate::services::ItemService;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{CreateItemRequest, Item, UpdateItemRequest};

/// Confirmation message returned by a successful delete
pub const ITEM_REMOVED_MESSAGE: &str = "Item removed";

/// Items API
pub struct ItemsApi {
    item_service: Arc<ItemService>,
}

impl ItemsApi {
    /// Create a new ItemsApi over the given ItemService
    pub fn new(item_service: Arc<ItemService>) -> Self {
        Self { item_service }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

/// Response for a successful create
#[derive(ApiResponse, Debug)]
pub enum CreateItemResponse {
    /// The created item
    #[oai(status = 201)]
    Created(Json<Item>),
}

#[OpenApi]
impl ItemsApi {
    /// List all items, newest first
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ItemApiError> {
        let items = self.item_service.get_all().await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Get a single item
    #[oai(path = "/items/:id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Item>, ItemApiError> {
        let item = self.item_service.get_one(&id.0).await?;

        Ok(Json(item.into()))
    }

    /// Create a new item
    ///
    /// Returns the created item with generated ID and timestamp
    #[oai(path = "/items", method = "post", tag = "ItemTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemApiError> {
        let item = self.item_service.create(body.0.into()).await?;

        tracing::info!("Item {} created", item.id);

        Ok(CreateItemResponse::Created(Json(item.into())))
    }

    /// Update the supplied fields of an item
    #[oai(path = "/items/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemApiError> {
        let item = self.item_service.update(&id.0, body.0.into()).await?;

        tracing::info!("Item {} updated", item.id);

        Ok(Json(item.into()))
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<MessageResponse>, ItemApiError> {
        self.item_service.delete(&id.0).await?;

        tracing::info!("Item {} removed", id.0);

        Ok(Json(MessageResponse {
            message: ITEM_REMOVED_MESSAGE.to_string(),
        }))
    }
}
