//! Shared fixtures for integration tests.

use jangter_server::{
    ServerConfig,
    domain::{Item, ItemId, UserId},
    infrastructure::repository::InMemoryItemRepository,
    ui::app_with_items,
};
use tokio::net::TcpListener;

/// Origin admitted by the test server's CORS policy
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Chat room API server running on an ephemeral port
pub struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose catalog holds item 7 (sold by 42), item 8 (sold
    /// by 42) and item 9 (sold by 43)
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    /// Start a server with a custom configuration and the default catalog
    pub async fn start_with(config: ServerConfig) -> Self {
        let items = InMemoryItemRepository::new(vec![
            item(7, 42, "Road bike"),
            item(8, 42, "Helmet"),
            item(9, 43, "Desk lamp"),
        ]);
        let app = app_with_items(&config, items).expect("Failed to build app");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn item(id: i64, seller_id: i64, title: &str) -> Item {
    Item::new(
        ItemId::new(id).expect("valid item id"),
        UserId::new(seller_id).expect("valid seller id"),
        title,
    )
}
