use sea_orm::DbErr;
use thiserror::Error;

use crate::types::internal::ItemField;

/// Internal error type for store and service operations
///
/// Separates infrastructure failures (database, storage reachability) from
/// item domain outcomes. This error type is NOT exposed via API; endpoints
/// convert it with `ItemApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: DbErr,
    },

    /// The backing store could not be reached
    #[error("Storage unavailable: {operation} failed: {source}")]
    StorageUnavailable {
        operation: String,
        #[source]
        source: DbErr,
    },

    /// Item domain errors
    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    /// Create a database error with context
    ///
    /// Connection and pool acquisition failures become `StorageUnavailable`,
    /// everything else is a plain `Database` error.
    pub fn database(operation: impl Into<String>, source: DbErr) -> Self {
        let operation = operation.into();
        match source {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                Self::StorageUnavailable { operation, source }
            }
            source => Self::Database { operation, source },
        }
    }

    /// True for `ItemError::NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, InternalError::Item(ItemError::NotFound(_)))
    }
}

/// Item store and service errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    /// No item with this id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The id is not well-formed for the store's id scheme
    #[error("Invalid item identifier: {0}")]
    InvalidIdentifier(String),

    /// A field value violates the item constraints
    #[error("Validation failed for {field}: {reason}")]
    ValidationFailed { field: ItemField, reason: String },
}

impl ItemError {
    /// Create a validation error
    pub fn validation(field: ItemField, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}
