// Common test utilities for integration tests
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use catalog_backend::api::build_app;
use catalog_backend::services::ItemService;
use catalog_backend::stores::ItemStore;
use migration::{Migrator, MigratorTrait};
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::Server;
use sea_orm::{Database, DatabaseConnection};

/// Creates a test catalog database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// ItemService over a fresh in-memory database
pub async fn setup_item_service() -> Arc<ItemService> {
    let db = setup_test_db().await;
    Arc::new(ItemService::new(Arc::new(ItemStore::new(db))))
}

/// Run the full app on an ephemeral local port
///
/// Returns the base URL of the items collection.
pub async fn spawn_server() -> String {
    let service = setup_item_service().await;

    let acceptor = TcpListener::bind("127.0.0.1:0")
        .into_acceptor()
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = *acceptor.local_addr()[0]
        .as_socket_addr()
        .expect("Listener has no socket address");

    let app = build_app(service, format!("http://{}/api", addr));
    tokio::spawn(async move {
        let _ = Server::new_with_acceptor(acceptor).run(app).await;
    });

    format!("http://{}/api/items", addr)
}
