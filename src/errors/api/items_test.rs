#[cfg(test)]
mod tests {
    use crate::errors::api::ItemApiError;
    use crate::errors::internal::{InternalError, ItemError};
    use crate::types::internal::ItemField;
    use sea_orm::{DbErr, RuntimeErr};

    #[test]
    fn test_not_found_maps_to_404_with_fixed_message() {
        let err = ItemApiError::from_internal_error(ItemError::NotFound("x".to_string()).into());

        assert!(matches!(err, ItemApiError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Item not found");
    }

    #[test]
    fn test_invalid_identifier_is_indistinguishable_from_not_found() {
        let err = ItemApiError::from_internal_error(
            ItemError::InvalidIdentifier("garbage".to_string()).into(),
        );

        assert!(matches!(err, ItemApiError::NotFound(_)));
        assert_eq!(err.message(), "Item not found");
    }

    #[test]
    fn test_validation_failure_maps_to_400_with_reason() {
        let err = ItemApiError::from_internal_error(
            ItemError::validation(ItemField::Category, "Category is required").into(),
        );

        assert!(matches!(err, ItemApiError::ValidationFailed(_)));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Category is required");
    }

    #[test]
    fn test_database_error_hides_details() {
        let err = ItemApiError::from_internal_error(InternalError::database(
            "insert_item",
            DbErr::Custom("disk I/O error".to_string()),
        ));

        assert!(matches!(err, ItemApiError::InternalError(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "Server Error");
    }

    #[test]
    fn test_storage_unavailable_maps_to_500() {
        let err = ItemApiError::from_internal_error(InternalError::database(
            "list_items",
            DbErr::Conn(RuntimeErr::Internal("refused".to_string())),
        ));

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Server Error");
    }
}
