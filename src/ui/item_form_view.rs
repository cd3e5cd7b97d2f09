use std::sync::Arc;

use crate::client::ItemsClient;
use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};
use crate::types::internal::ItemField;

use super::form::{FieldErrors, ItemFormFields};
use super::notifications::Notifier;
use super::routes::Route;

pub const ITEM_ADDED_MESSAGE: &str = "Item added successfully";
pub const ITEM_UPDATED_MESSAGE: &str = "Item updated successfully";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add item";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update item";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch item details";

/// Which record the form writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Form lifecycle
///
/// ```text
/// Loading ──load ok──▶ Ready ──submit──▶ Submitting ──ok──▶ Success
///    │                   ▲                    │
///    └─load failed─▶ LoadFailed               └──failed──▶ Ready (error shown)
/// ```
///
/// Create forms start at `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Ready,
    Submitting,
    Success,
    LoadFailed,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field validation failed; nothing was sent
    Invalid,
    /// The form was not in `Ready`
    Ignored,
    /// The request failed; the page-level error is set
    Failed,
    /// Saved; the notification has settled and the caller should navigate
    Navigate(Route),
}

/// Create or edit form for a single item
pub struct ItemFormView {
    client: Arc<dyn ItemsClient>,
    notifier: Notifier,
    mode: FormMode,
    state: FormState,
    fields: ItemFormFields,
    field_errors: FieldErrors,
    error: Option<String>,
}

impl ItemFormView {
    /// Empty form, ready for input
    pub fn create(client: Arc<dyn ItemsClient>, notifier: Notifier) -> Self {
        Self::new(client, notifier, FormMode::Create, FormState::Ready)
    }

    /// Edit form for `id`; call `mount` to pre-fill it
    pub fn edit(client: Arc<dyn ItemsClient>, notifier: Notifier, id: impl Into<String>) -> Self {
        Self::new(
            client,
            notifier,
            FormMode::Edit { id: id.into() },
            FormState::Loading,
        )
    }

    fn new(client: Arc<dyn ItemsClient>, notifier: Notifier, mode: FormMode, state: FormState) -> Self {
        Self {
            client,
            notifier,
            mode,
            state,
            fields: ItemFormFields::default(),
            field_errors: FieldErrors::new(),
            error: None,
        }
    }

    /// Load the existing record into the fields (edit mode only)
    pub async fn mount(&mut self) {
        let FormMode::Edit { id } = &self.mode else {
            return;
        };
        if self.state != FormState::Loading {
            return;
        }

        match self.client.get_item(id).await {
            Ok(item) => {
                self.fields = ItemFormFields::from(&item);
                self.state = FormState::Ready;
            }
            Err(e) => {
                tracing::error!("Failed to load item {}: {}", id, e);
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
                self.state = FormState::LoadFailed;
            }
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &ItemFormFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: ItemField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn field_error(&self, field: ItemField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Page-level error banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Item",
            FormMode::Edit { .. } => "Edit Item",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        let submitting = self.state == FormState::Submitting;
        match (&self.mode, submitting) {
            (FormMode::Create, false) => "Add Item",
            (FormMode::Create, true) => "Adding...",
            (FormMode::Edit { .. }, false) => "Update Item",
            (FormMode::Edit { .. }, true) => "Updating...",
        }
    }

    /// Validate and save
    ///
    /// On success waits until the success notification is dismissed or its
    /// display timeout elapses, then returns the list route.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state != FormState::Ready {
            return SubmitOutcome::Ignored;
        }

        let new_item = match self.fields.validate() {
            Ok(item) => item,
            Err(errors) => {
                self.field_errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.field_errors.clear();

        self.state = FormState::Submitting;

        let result = match &self.mode {
            FormMode::Create => {
                let request = CreateItemRequest::from(new_item);
                self.client.create_item(&request).await
            }
            FormMode::Edit { id } => {
                let request = UpdateItemRequest::from(new_item);
                self.client.update_item(id, &request).await
            }
        };

        let (success_message, failure_message) = match self.mode {
            FormMode::Create => (ITEM_ADDED_MESSAGE, ADD_FAILED_MESSAGE),
            FormMode::Edit { .. } => (ITEM_UPDATED_MESSAGE, UPDATE_FAILED_MESSAGE),
        };

        match result {
            Ok(item) => {
                tracing::info!("Saved item {}", item.id);
                self.error = None;
                self.state = FormState::Success;
                self.notifier.success(success_message).settled().await;
                SubmitOutcome::Navigate(Route::List)
            }
            Err(e) => {
                tracing::error!("{}: {}", failure_message, e);
                self.error = Some(failure_message.to_string());
                self.notifier.error(failure_message);
                self.state = FormState::Ready;
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "item_form_view_test.rs"]
mod item_form_view_test;
