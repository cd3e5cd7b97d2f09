use chrono::{DateTime, SecondsFormat};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::item;
use crate::types::internal::{ItemChanges, NewItem};

/// Request model for creating a new item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: String,

    /// Category the item belongs to
    pub category: String,

    /// Price, must be greater than zero
    pub price: f64,
}

/// Request model for updating an item. Omitted fields are left unchanged.
#[derive(Object, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[oai(skip_serializing_if_is_none)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[oai(skip_serializing_if_is_none)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[oai(skip_serializing_if_is_none)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[oai(skip_serializing_if_is_none)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: String,

    /// Category the item belongs to
    pub category: String,

    /// Price of the item
    pub price: f64,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        let created_at = DateTime::from_timestamp_millis(model.created_at)
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
            price: model.price,
            created_at,
        }
    }
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            category: request.category,
            price: request.price,
        }
    }
}

impl From<NewItem> for CreateItemRequest {
    fn from(item: NewItem) -> Self {
        Self {
            name: item.name,
            description: item.description,
            category: item.category,
            price: item.price,
        }
    }
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(request: UpdateItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            category: request.category,
            price: request.price,
        }
    }
}

impl From<NewItem> for UpdateItemRequest {
    fn from(item: NewItem) -> Self {
        Self {
            name: Some(item.name),
            description: Some(item.description),
            category: Some(item.category),
            price: Some(item.price),
        }
    }
}
