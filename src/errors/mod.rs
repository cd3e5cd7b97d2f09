// Errors layer - Error type definitions
pub mod api;
pub mod client;
pub mod internal;

// Re-exports for convenience
pub use api::ItemApiError;
pub use client::ClientError;
pub use internal::{InternalError, ItemError};

#[cfg(test)]
mod internal_test;
