//! HTTP server for the chat room API.

pub mod handler;
pub mod identity;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::{cors_layer, create_router};
pub use runner::{app_with_items, build_app, run};
