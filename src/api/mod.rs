// API layer - HTTP endpoints
pub mod health;
pub mod items;

use std::sync::Arc;

use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route, get, handler};
use poem_openapi::OpenApiService;
use poem_openapi::error::ParseRequestPayloadError;

pub use health::HealthApi;
pub use items::ItemsApi;

use crate::errors::ItemApiError;
use crate::services::ItemService;

/// Plain-text banner served at `/`
#[handler]
fn index() -> &'static str {
    "API is running"
}

/// Bodies that fail to deserialize get the same JSON error shape as
/// field validation failures
async fn reject_unparsable_body(err: ParseRequestPayloadError) -> ItemApiError {
    tracing::warn!("Rejected request body: {}", err.reason);
    ItemApiError::validation_failed(format!("Invalid request body: {}", err.reason))
}

/// Compose the full HTTP application
///
/// ```text
/// /            → "API is running"
/// /api/health  → HealthApi
/// /api/items   → ItemsApi
/// /swagger     → Swagger UI
/// ```
pub fn build_app(item_service: Arc<ItemService>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(item_service)),
        "Item Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .at("/", get(index))
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .catch_error(reject_unparsable_body)
        .with(Cors::new())
        .with(Tracing)
}
