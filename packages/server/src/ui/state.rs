//! Server state shared by every handler.

use std::sync::Arc;

use crate::usecase::ChatService;

/// Shared application state
pub struct AppState {
    /// Chat Service（ユースケース層の窓口）
    pub chat_service: Arc<dyn ChatService>,
    /// Whether unexpected failure details are echoed to the client
    pub expose_internal_errors: bool,
}

impl AppState {
    pub fn new(chat_service: Arc<dyn ChatService>, expose_internal_errors: bool) -> Self {
        Self {
            chat_service,
            expose_internal_errors,
        }
    }
}
