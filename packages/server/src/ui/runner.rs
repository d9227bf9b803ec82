//! Server wiring and main loop.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    error::ServerError,
    infrastructure::repository::{InMemoryChatRoomRepository, InMemoryItemRepository},
    usecase::ChatRoomService,
};

use super::{
    router::{cors_layer, create_router},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application, loading the item catalog named in the config
pub async fn build_app(config: &ServerConfig) -> Result<Router, ServerError> {
    let items = match &config.items_file {
        Some(path) => InMemoryItemRepository::from_json_file(path).await?,
        None => InMemoryItemRepository::new(Vec::new()),
    };

    if items.is_empty() {
        tracing::warn!("Item catalog is empty; every chat room creation will be rejected");
    } else {
        tracing::info!("Loaded {} items into the catalog", items.len());
    }

    app_with_items(config, items)
}

/// Build the application around an already loaded item catalog
pub fn app_with_items(
    config: &ServerConfig,
    items: InMemoryItemRepository,
) -> Result<Router, ServerError> {
    let chat_rooms = Arc::new(InMemoryChatRoomRepository::with_capacity(
        config.max_chat_rooms,
    ));
    let chat_service = Arc::new(ChatRoomService::new(chat_rooms, Arc::new(items)));
    let state = Arc::new(AppState::new(chat_service, config.expose_internal_errors));
    let cors = cors_layer(&config.allowed_origins)?;

    Ok(create_router(state, cors))
}

/// Run the server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let app = build_app(&config).await?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Chat room API listening on http://{}", addr);
    tracing::info!("Allowed CORS origins: {:?}", config.allowed_origins);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
