use crate::errors::ItemError;
use crate::types::internal::{ItemChanges, ItemField, NewItem};

/// Message for a non-numeric, zero or negative price
pub const PRICE_NOT_POSITIVE: &str = "Price must be a positive number";

/// Message for a missing field, e.g. "Name is required"
pub fn required_message(field: ItemField) -> String {
    format!("{} is required", field.label())
}

/// Item field rules shared by the service and the form views
///
/// Rules:
/// - `name`, `description`, `category` must contain non-whitespace text
/// - `price` must be a finite number greater than zero
pub struct ItemValidator;

impl ItemValidator {
    /// Check a text field
    pub fn check_text(field: ItemField, value: &str) -> Result<(), ItemError> {
        if value.trim().is_empty() {
            return Err(ItemError::validation(field, required_message(field)));
        }
        Ok(())
    }

    /// Check a numeric price
    pub fn check_price(price: f64) -> Result<(), ItemError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(ItemError::validation(ItemField::Price, PRICE_NOT_POSITIVE));
        }
        Ok(())
    }

    /// Parse price text as typed into a form
    ///
    /// # Returns
    /// * `Ok(f64)` - A positive price
    /// * `Err(ItemError)` - Empty input ("Price is required") or not a positive number
    pub fn parse_price(input: &str) -> Result<f64, ItemError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ItemError::validation(
                ItemField::Price,
                required_message(ItemField::Price),
            ));
        }

        let price = input
            .parse::<f64>()
            .map_err(|_| ItemError::validation(ItemField::Price, PRICE_NOT_POSITIVE))?;
        Self::check_price(price)?;

        Ok(price)
    }

    /// Validate all fields of a new item (fail fast, in form order)
    pub fn validate_new_item(item: &NewItem) -> Result<(), ItemError> {
        Self::check_text(ItemField::Name, &item.name)?;
        Self::check_text(ItemField::Description, &item.description)?;
        Self::check_text(ItemField::Category, &item.category)?;
        Self::check_price(item.price)
    }

    /// Validate the supplied fields of a partial update
    ///
    /// Omitted fields are not checked; they keep their stored value.
    pub fn validate_changes(changes: &ItemChanges) -> Result<(), ItemError> {
        if let Some(name) = &changes.name {
            Self::check_text(ItemField::Name, name)?;
        }
        if let Some(description) = &changes.description {
            Self::check_text(ItemField::Description, description)?;
        }
        if let Some(category) = &changes.category {
            Self::check_text(ItemField::Category, category)?;
        }
        if let Some(price) = changes.price {
            Self::check_price(price)?;
        }
        Ok(())
    }
}
