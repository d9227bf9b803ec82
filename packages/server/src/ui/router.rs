//! Route table and HTTP middleware.

use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ServerError;

use super::{
    handler::{create_chat_room, delete_chat_room, get_chat_room, health_check, list_chat_rooms},
    identity::CALLER_ID_HEADER,
    state::AppState,
};

/// Build the application router
pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/chats", post(create_chat_room).get(list_chat_rooms))
        .route(
            "/api/chats/{room_id}",
            get(get_chat_room).delete(delete_chat_room),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy admitting only the configured origins
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ServerError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(CALLER_ID_HEADER),
        ]))
}
