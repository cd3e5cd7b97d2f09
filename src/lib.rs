// Library exports for integration tests and external use

pub mod api;
pub mod app_data;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod services;
pub mod stores;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test;
