use std::sync::Arc;

use crate::errors::{InternalError, ItemError};
use crate::services::item_validator::ItemValidator;
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::internal::{ItemChanges, NewItem};

/// Item service sitting between transport and storage
///
/// Validates input with `ItemValidator` and collapses `InvalidIdentifier`
/// into `NotFound`, so callers cannot tell a malformed id from a missing one.
pub struct ItemService {
    item_store: Arc<ItemStore>,
}

impl ItemService {
    /// Create a new ItemService over the given store
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }

    /// Create an item after validating every field
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record with generated id and created_at
    /// * `Err(InternalError)` - `ValidationFailed` or a storage failure
    pub async fn create(&self, new_item: NewItem) -> Result<item::Model, InternalError> {
        ItemValidator::validate_new_item(&new_item)?;

        self.item_store.insert(new_item).await
    }

    /// Get one item by id
    pub async fn get_one(&self, id: &str) -> Result<item::Model, InternalError> {
        self.item_store
            .get_by_id(id)
            .await
            .map_err(collapse_invalid_identifier)
    }

    /// Get all items, newest first
    pub async fn get_all(&self) -> Result<Vec<item::Model>, InternalError> {
        self.item_store.list_all().await
    }

    /// Update the supplied fields of an item
    ///
    /// The id is resolved before the fields are checked, so an absent or
    /// malformed id is `NotFound` even when the changes are invalid.
    ///
    /// # Returns
    /// * `Ok(Model)` - The updated record
    /// * `Err(InternalError)` - `NotFound`, `ValidationFailed`, or a storage failure
    pub async fn update(
        &self,
        id: &str,
        changes: ItemChanges,
    ) -> Result<item::Model, InternalError> {
        self.get_one(id).await?;
        ItemValidator::validate_changes(&changes)?;

        self.item_store
            .update_by_id(id, changes)
            .await
            .map_err(collapse_invalid_identifier)
    }

    /// Delete an item
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        self.item_store
            .delete_by_id(id)
            .await
            .map_err(collapse_invalid_identifier)
    }
}

/// Malformed ids surface as NotFound at this layer
fn collapse_invalid_identifier(err: InternalError) -> InternalError {
    match err {
        InternalError::Item(ItemError::InvalidIdentifier(id)) => {
            tracing::debug!("Malformed item id {:?} treated as not found", id);
            ItemError::NotFound(id).into()
        }
        other => other,
    }
}
