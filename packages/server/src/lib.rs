//! Chat room API server for a second-hand marketplace.
//!
//! A buyer opens a chat room with the seller of an item. Rooms can be
//! fetched, listed and deleted by their participants only. Every response,
//! success or failure, is wrapped in the same envelope.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run as run_server;
