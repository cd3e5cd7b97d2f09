// UI views - list, create and edit forms over the client data layer
pub mod form;
pub mod item_form_view;
pub mod list_view;
pub mod notifications;
pub mod routes;

pub use form::{FieldErrors, ItemFormFields};
pub use item_form_view::{FormMode, FormState, ItemFormView, SubmitOutcome};
pub use list_view::{Confirm, DeleteOutcome, ListView};
pub use notifications::{
    Notification, NotificationHandle, NotificationKind, NotificationReceiver, Notifier,
    PendingNotification, Settled,
};
pub use routes::Route;
