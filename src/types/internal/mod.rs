// Domain values shared by the service, the client and the views
pub mod item;

pub use item::{ItemChanges, ItemField, NewItem};
