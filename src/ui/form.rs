use std::collections::BTreeMap;

use crate::errors::ItemError;
use crate::services::ItemValidator;
use crate::types::dto::items::Item;
use crate::types::internal::{ItemField, NewItem};

/// Per-field validation messages, in form order
pub type FieldErrors = BTreeMap<ItemField, String>;

/// Raw text state of the item form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFormFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
}

impl ItemFormFields {
    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Description => &self.description,
            ItemField::Category => &self.category,
            ItemField::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: ItemField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ItemField::Name => self.name = value,
            ItemField::Description => self.description = value,
            ItemField::Category => self.category = value,
            ItemField::Price => self.price = value,
        }
    }

    /// Check every field and build the item to submit
    ///
    /// All failing fields are reported, not only the first one.
    pub fn validate(&self) -> Result<NewItem, FieldErrors> {
        let mut errors = FieldErrors::new();

        for field in [ItemField::Name, ItemField::Description, ItemField::Category] {
            if let Err(e) = ItemValidator::check_text(field, self.get(field)) {
                record(&mut errors, e);
            }
        }

        let price = match ItemValidator::parse_price(&self.price) {
            Ok(price) => Some(price),
            Err(e) => {
                record(&mut errors, e);
                None
            }
        };

        match price {
            Some(price) if errors.is_empty() => Ok(NewItem {
                name: self.name.clone(),
                description: self.description.clone(),
                category: self.category.clone(),
                price,
            }),
            _ => Err(errors),
        }
    }
}

impl From<&Item> for ItemFormFields {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            price: item.price.to_string(),
        }
    }
}

fn record(errors: &mut FieldErrors, error: ItemError) {
    if let ItemError::ValidationFailed { field, reason } = error {
        errors.insert(field, reason);
    }
}
