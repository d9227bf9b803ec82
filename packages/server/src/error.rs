//! Server startup and runtime errors.

use thiserror::Error;

use crate::infrastructure::repository::ItemSeedError;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configured CORS origin is not a valid header value
    #[error("Invalid CORS origin: '{0}'")]
    InvalidOrigin(String),

    /// The item catalog could not be loaded
    #[error(transparent)]
    ItemSeed(#[from] ItemSeedError),

    /// The listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
