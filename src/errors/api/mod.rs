// API-facing error types
pub mod items;

// Re-exports for convenience
pub use items::ItemApiError;

#[cfg(test)]
mod items_test;
