// Client data layer - typed access to the items HTTP surface
pub mod http;

use async_trait::async_trait;

use crate::errors::ClientError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{CreateItemRequest, Item, UpdateItemRequest};

pub use http::HttpItemsClient;

/// The five calls a view can make against the items resource
///
/// Each call resolves with data or fails with a `ClientError`. There is no
/// caching and no retry at this layer.
#[async_trait]
pub trait ItemsClient: Send + Sync {
    /// All items, newest first
    async fn list_items(&self) -> Result<Vec<Item>, ClientError>;

    async fn get_item(&self, id: &str) -> Result<Item, ClientError>;

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item, ClientError>;

    /// Send only the fields present in `request`
    async fn update_item(&self, id: &str, request: &UpdateItemRequest)
        -> Result<Item, ClientError>;

    async fn delete_item(&self, id: &str) -> Result<MessageResponse, ClientError>;
}
