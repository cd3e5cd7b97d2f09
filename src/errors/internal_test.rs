#[cfg(test)]
mod tests {
    use crate::errors::internal::{InternalError, ItemError};
    use crate::types::internal::ItemField;
    use sea_orm::{DbErr, RuntimeErr};

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("insert_item", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_item"));
        assert!(error_string.contains("Database error"));
        assert!(matches!(error, InternalError::Database { .. }));
    }

    #[test]
    fn test_connection_error_is_storage_unavailable() {
        let db_err = DbErr::Conn(RuntimeErr::Internal("connection refused".to_string()));
        let error = InternalError::database("list_items", db_err);

        assert!(matches!(error, InternalError::StorageUnavailable { .. }));
        let error_string = error.to_string();
        assert!(error_string.contains("Storage unavailable"));
        assert!(error_string.contains("list_items"));
    }

    #[test]
    fn test_item_error_not_found() {
        let error = ItemError::NotFound("abc".to_string());
        assert_eq!(error.to_string(), "Item not found: abc");
    }

    #[test]
    fn test_item_error_invalid_identifier() {
        let error = ItemError::InvalidIdentifier("not-a-uuid".to_string());
        assert_eq!(error.to_string(), "Invalid item identifier: not-a-uuid");
    }

    #[test]
    fn test_item_error_validation_failed() {
        let error = ItemError::validation(ItemField::Price, "Price must be a positive number");
        assert_eq!(
            error.to_string(),
            "Validation failed for price: Price must be a positive number"
        );
    }

    #[test]
    fn test_item_error_auto_converts_to_internal_error() {
        let internal_error: InternalError = ItemError::NotFound("abc".to_string()).into();

        assert!(internal_error.is_not_found());
        assert!(internal_error.to_string().contains("Item not found"));
    }

    #[test]
    fn test_validation_error_is_not_not_found() {
        let internal_error: InternalError =
            ItemError::validation(ItemField::Name, "Name is required").into();

        assert!(!internal_error.is_not_found());
    }
}
