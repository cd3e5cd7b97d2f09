use crate::errors::{InternalError, ItemError};
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::internal::{ItemChanges, NewItem};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

/// ItemStore persists item records
///
/// The store is the only writer of `id` and `created_at`. Each operation is
/// independent and relies on the backend's per-record atomicity.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore over an already connected database
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parse an id into its canonical stored form
    ///
    /// # Returns
    /// * `Ok(String)` - Lowercase hyphenated UUID
    /// * `Err(InternalError)` - `InvalidIdentifier` if `id` is not a UUID
    fn canonical_id(id: &str) -> Result<String, InternalError> {
        Uuid::parse_str(id.trim())
            .map(|uuid| uuid.to_string())
            .map_err(|_| ItemError::InvalidIdentifier(id.to_string()).into())
    }

    /// Insert a new item record
    ///
    /// Assigns a time-ordered id and the creation timestamp.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record
    /// * `Err(InternalError)` - `StorageUnavailable` or database error
    pub async fn insert(&self, new_item: NewItem) -> Result<item::Model, InternalError> {
        let record = ActiveModel {
            id: Set(Uuid::now_v7().to_string()),
            name: Set(new_item.name),
            description: Set(new_item.description),
            category: Set(new_item.category),
            price: Set(new_item.price),
            created_at: Set(Utc::now().timestamp_millis()),
        };

        let stored = record
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        tracing::debug!("Inserted item {}", stored.id);

        Ok(stored)
    }

    /// Get an item by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The record
    /// * `Err(InternalError)` - `NotFound`, `InvalidIdentifier`, or database error
    pub async fn get_by_id(&self, id: &str) -> Result<item::Model, InternalError> {
        let id = Self::canonical_id(id)?;

        Item::find_by_id(id.clone())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_item", e))?
            .ok_or_else(|| ItemError::NotFound(id).into())
    }

    /// List all items, newest first
    ///
    /// Ties on `created_at` are broken by id, which is time ordered.
    pub async fn list_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Apply the supplied fields to an existing item
    ///
    /// Fields that are `None` in `changes` keep their stored value.
    ///
    /// # Returns
    /// * `Ok(Model)` - The updated record
    /// * `Err(InternalError)` - `NotFound`, `InvalidIdentifier`, or database error
    pub async fn update_by_id(
        &self,
        id: &str,
        changes: ItemChanges,
    ) -> Result<item::Model, InternalError> {
        let current = self.get_by_id(id).await?;

        if changes.is_empty() {
            return Ok(current);
        }

        let id = current.id.clone();
        let mut active_model: ActiveModel = current.into();
        if let Some(name) = changes.name {
            active_model.name = Set(name);
        }
        if let Some(description) = changes.description {
            active_model.description = Set(description);
        }
        if let Some(category) = changes.category {
            active_model.category = Set(category);
        }
        if let Some(price) = changes.price {
            active_model.price = Set(price);
        }

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| update_error(&id, e))?;

        tracing::debug!("Updated item {}", updated.id);

        Ok(updated)
    }

    /// Delete an item by id
    ///
    /// # Returns
    /// * `Ok(())` - The record was removed
    /// * `Err(InternalError)` - `NotFound` if nothing was removed, `InvalidIdentifier`, or database error
    pub async fn delete_by_id(&self, id: &str) -> Result<(), InternalError> {
        let id = Self::canonical_id(id)?;

        let result = Item::delete_by_id(id.clone())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::NotFound(id).into());
        }

        tracing::debug!("Deleted item {}", id);

        Ok(())
    }
}

/// A record removed between the lookup and the write is `NotFound`
fn update_error(id: &str, err: DbErr) -> InternalError {
    match err {
        DbErr::RecordNotUpdated => ItemError::NotFound(id.to_string()).into(),
        other => InternalError::database("update_item", other),
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{sample_item, setup_test_db};

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let store = ItemStore::new(setup_test_db().await);

        let stored = store.insert(sample_item("Lamp")).await.unwrap();

        assert!(Uuid::parse_str(&stored.id).is_ok());
        assert!(stored.created_at > 0);
        assert_eq!(stored.name, "Lamp");
    }

    #[tokio::test]
    async fn test_get_by_id_with_malformed_id_is_invalid_identifier() {
        let store = ItemStore::new(setup_test_db().await);

        let result = store.get_by_id("not-a-uuid").await;

        match result {
            Err(InternalError::Item(ItemError::InvalidIdentifier(id))) => {
                assert_eq!(id, "not-a-uuid");
            }
            other => panic!("Expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_by_id_accepts_uppercase_uuid() {
        let store = ItemStore::new(setup_test_db().await);
        let stored = store.insert(sample_item("Lamp")).await.unwrap();

        let found = store.get_by_id(&stored.id.to_uppercase()).await.unwrap();

        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_get_by_id_with_unknown_id_is_not_found() {
        let store = ItemStore::new(setup_test_db().await);

        let result = store.get_by_id(&Uuid::now_v7().to_string()).await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_list_all_on_empty_store_is_empty() {
        let store = ItemStore::new(setup_test_db().await);

        let items = store.list_all().await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_update_with_no_changes_returns_current_record() {
        let store = ItemStore::new(setup_test_db().await);
        let stored = store.insert(sample_item("Lamp")).await.unwrap();

        let updated = store
            .update_by_id(&stored.id, ItemChanges::default())
            .await
            .unwrap();

        assert_eq!(updated, stored);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = ItemStore::new(setup_test_db().await);
        let stored = store.insert(sample_item("Lamp")).await.unwrap();

        store.delete_by_id(&stored.id).await.unwrap();
        let second = store.delete_by_id(&stored.id).await;

        assert!(matches!(second, Err(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_record_vanished_during_update_is_not_found() {
        let err = update_error("abc", DbErr::RecordNotUpdated);

        assert!(matches!(
            err,
            InternalError::Item(ItemError::NotFound(ref id)) if id == "abc"
        ));
    }

    #[test]
    fn test_other_update_failures_stay_database_errors() {
        let err = update_error("abc", DbErr::Custom("boom".to_string()));

        assert!(matches!(err, InternalError::Database { .. }));
    }
}
