use crate::errors::internal::{InternalError, ItemError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Fixed message for missing or malformed item ids
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

/// Generic message for unexpected failures
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// A field value was rejected
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Item id is absent or malformed
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemApiError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: ITEM_NOT_FOUND_MESSAGE.to_string(),
            status_code: 404,
        }))
    }

    /// Create a ValidationFailed error carrying the field message
    pub fn validation_failed(message: String) -> Self {
        ItemApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemError::NotFound(_))
            | InternalError::Item(ItemError::InvalidIdentifier(_)) => Self::not_found(),
            InternalError::Item(ItemError::ValidationFailed { field, reason }) => {
                tracing::warn!("Rejected item field {}: {}", field, reason);
                Self::validation_failed(reason.clone())
            }
            InternalError::StorageUnavailable { operation, .. } => {
                tracing::error!("Storage unavailable in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Database { operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: SERVER_ERROR_MESSAGE.to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemApiError::ValidationFailed(json) => json.0.message.clone(),
            ItemApiError::NotFound(json) => json.0.message.clone(),
            ItemApiError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemApiError::ValidationFailed(json) => json.0.status_code,
            ItemApiError::NotFound(json) => json.0.status_code,
            ItemApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for ItemApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
