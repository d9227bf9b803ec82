//! Server configuration.

use std::path::PathBuf;

/// Origin admitted by CORS when none is configured
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Configuration for the chat room API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind (0 = ephemeral)
    pub port: u16,
    /// Origins admitted by CORS
    pub allowed_origins: Vec<String>,
    /// JSON file seeding the item catalog
    pub items_file: Option<PathBuf>,
    /// Maximum number of stored chat rooms (None = unlimited)
    pub max_chat_rooms: Option<usize>,
    /// Whether unexpected failure details are echoed to the client
    pub expose_internal_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            items_file: None,
            max_chat_rooms: None,
            expose_internal_errors: true,
        }
    }
}

impl ServerConfig {
    /// Address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
