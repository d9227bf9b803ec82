//! Chat room API server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin jangter-server -- --items-file items.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use jangter_server::ServerConfig;
use jangter_shared::logger::setup_logger;

/// CLI arguments for the chat room API server.
#[derive(Parser, Debug)]
#[command(name = "jangter-server", about = "Marketplace chat room API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Origins admitted by CORS, comma separated.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = jangter_server::config::DEFAULT_ALLOWED_ORIGIN
    )]
    allowed_origins: Vec<String>,

    /// JSON file seeding the item catalog: `[{"id": 7, "seller_id": 42, "title": "..."}]`.
    #[arg(long, env = "ITEMS_FILE")]
    items_file: Option<PathBuf>,

    /// Maximum number of stored chat rooms.
    #[arg(long, env = "MAX_CHAT_ROOMS")]
    max_chat_rooms: Option<usize>,

    /// Replace the detail of unexpected failures with a generic message.
    #[arg(long, env = "HIDE_INTERNAL_ERRORS", default_value_t = false)]
    hide_internal_errors: bool,

    /// Default log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            allowed_origins: args.allowed_origins,
            items_file: args.items_file,
            max_chat_rooms: args.max_chat_rooms,
            expose_internal_errors: !args.hide_internal_errors,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = jangter_server::run_server(ServerConfig::from(args)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
