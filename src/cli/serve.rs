use poem::{Server, listener::TcpListener};

use crate::api::build_app;
use crate::app_data::AppData;

/// Serve the HTTP API until the process is stopped
pub async fn run_server(app_data: &AppData) -> Result<(), std::io::Error> {
    let settings = &app_data.settings;
    let app = build_app(app_data.item_service.clone(), settings.server_url());

    let bind_address = settings.bind_address();

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        settings.server_port
    );
    tracing::info!("API endpoints available at {}", settings.server_url());

    Server::new(TcpListener::bind(bind_address)).run(app).await
}
