use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ItemsClient;
use crate::types::dto::items::Item;

use super::notifications::Notifier;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch items";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this item?";
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete item";
pub const EMPTY_STATE_MESSAGE: &str = "No items found.";

/// Blocking yes/no question shown before a destructive action
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Result of a delete request from the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

/// Price as shown in the list, e.g. `Rs.12.50`
pub fn format_price(price: f64) -> String {
    format!("Rs.{:.2}", price)
}

/// Case-insensitive substring match over the text fields and the price
pub fn matches_search(item: &Item, term: &str) -> bool {
    let term = term.to_lowercase();
    item.name.to_lowercase().contains(&term)
        || item.description.to_lowercase().contains(&term)
        || item.category.to_lowercase().contains(&term)
        || item.price.to_string().contains(&term)
}

/// Item table with an in-memory search filter
pub struct ListView {
    client: Arc<dyn ItemsClient>,
    notifier: Notifier,
    items: Vec<Item>,
    search: String,
    loading: bool,
    error: Option<String>,
}

impl ListView {
    pub fn new(client: Arc<dyn ItemsClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            items: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
        }
    }

    /// Fetch all items
    pub async fn mount(&mut self) {
        match self.client.list_items().await {
            Ok(items) => {
                tracing::debug!("Loaded {} items", items.len());
                self.items = items;
            }
            Err(e) => {
                tracing::error!("Failed to load items: {}", e);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Page-level error banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Rows matching the current search term, in loaded order
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| matches_search(item, &self.search))
            .collect()
    }

    pub fn empty_state(&self) -> Option<&'static str> {
        if self.visible_items().is_empty() {
            Some(EMPTY_STATE_MESSAGE)
        } else {
            None
        }
    }

    /// Ask for confirmation, then delete the row
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_CONFIRM_PROMPT).await {
            return DeleteOutcome::Cancelled;
        }

        match self.client.delete_item(id).await {
            Ok(_) => {
                self.items.retain(|item| item.id != id);
                self.notifier.success(ITEM_DELETED_MESSAGE);
                tracing::info!("Deleted item {}", id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!("Failed to delete item {}: {}", id, e);
                self.error = Some(DELETE_FAILED_MESSAGE.to_string());
                self.notifier.error(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;
