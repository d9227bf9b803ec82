//! Handler modules for HTTP endpoints.

pub mod chat;
pub mod http;
pub mod response;

// Re-export HTTP handlers
pub use chat::{create_chat_room, delete_chat_room, get_chat_room, list_chat_rooms};
pub use http::health_check;
