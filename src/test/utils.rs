// Test utilities shared across unit tests

use async_trait::async_trait;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::client::ItemsClient;
use crate::errors::ClientError;
use crate::services::ItemService;
use crate::stores::ItemStore;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{CreateItemRequest, Item, UpdateItemRequest};
use crate::types::internal::NewItem;

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a test database and an ItemService over it
///
/// Callers can discard what they don't need:
/// ```rust
/// let (_db, service) = setup_test_service().await;
/// ```
pub async fn setup_test_service() -> (DatabaseConnection, ItemService) {
    let db = setup_test_db().await;
    let service = ItemService::new(Arc::new(ItemStore::new(db.clone())));
    (db, service)
}

/// A valid NewItem named `name`
pub fn sample_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        description: format!("{} description", name),
        category: "General".to_string(),
        price: 9.99,
    }
}

/// A stored-looking Item for client-side tests
pub fn sample_dto(name: &str, category: &str, price: f64) -> Item {
    Item {
        id: Uuid::now_v7().to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        category: category.to_string(),
        price,
        created_at: Utc::now().to_rfc3339(),
    }
}

/// In-process ItemsClient that records every call
///
/// Items are kept newest first, like the server. Operations listed in
/// `failing` fail with a 500 "Server Error".
#[derive(Default)]
pub struct MockItemsClient {
    items: Mutex<Vec<Item>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<Vec<&'static str>>,
}

impl MockItemsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let client = Self::default();
        *client.items.lock().unwrap() = items;
        client
    }

    /// Make the named operation ("list", "get", "create", "update", "delete") fail
    pub fn fail_on(&self, operation: &'static str) {
        self.failing.lock().unwrap().push(operation);
    }

    /// Operations called so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(operation.to_string());
        if self.failing.lock().unwrap().contains(&operation) {
            return Err(ClientError::Server {
                status: 500,
                message: "Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn not_found() -> ClientError {
        ClientError::Server {
            status: 404,
            message: "Item not found".to_string(),
        }
    }
}

#[async_trait]
impl ItemsClient for MockItemsClient {
    async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        self.record("list")?;
        Ok(self.items())
    }

    async fn get_item(&self, id: &str) -> Result<Item, ClientError> {
        self.record("get")?;
        self.items()
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(Self::not_found)
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item, ClientError> {
        self.record("create")?;
        let item = Item {
            id: Uuid::now_v7().to_string(),
            name: request.name.clone(),
            description: request.description.clone(),
            category: request.category.clone(),
            price: request.price,
            created_at: Utc::now().to_rfc3339(),
        };
        self.items.lock().unwrap().insert(0, item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: &str, request: &UpdateItemRequest) -> Result<Item, ClientError> {
        self.record("update")?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(Self::not_found)?;
        if let Some(name) = &request.name {
            item.name = name.clone();
        }
        if let Some(description) = &request.description {
            item.description = description.clone();
        }
        if let Some(category) = &request.category {
            item.category = category.clone();
        }
        if let Some(price) = request.price {
            item.price = price;
        }
        Ok(item.clone())
    }

    async fn delete_item(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.record("delete")?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(Self::not_found());
        }
        Ok(MessageResponse {
            message: "Item removed".to_string(),
        })
    }
}
