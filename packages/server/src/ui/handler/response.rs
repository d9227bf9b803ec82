//! Uniform envelope mapping shared by every chat room handler.
//!
//! Success and failure both produce an [`ApiResponse`] body. The status is
//! chosen from the operation on success, from the business category on an
//! expected failure, and is 500 for anything else.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    domain::{BusinessError, ErrorCode},
    infrastructure::dto::http::ApiResponse,
    usecase::ChatServiceError,
};

/// Replaces the failure detail of unexpected errors when they are hidden
pub const HIDDEN_INTERNAL_ERROR: &str = "Internal server error";

/// The four chat room operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOperation {
    Create,
    Get,
    List,
    Delete,
}

impl ChatOperation {
    /// Status of a successful response
    pub fn success_status(self) -> StatusCode {
        match self {
            Self::Create => StatusCode::CREATED,
            Self::Get | Self::List | Self::Delete => StatusCode::OK,
        }
    }

    /// Message of a successful response
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Chat room created.",
            Self::Get => "Chat room retrieved.",
            Self::List => "Chat rooms retrieved.",
            Self::Delete => "Chat room deleted.",
        }
    }

    /// Message of a response to an unexpected failure
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Failed to create chat room.",
            Self::Get => "Failed to retrieve chat room.",
            Self::List => "Failed to retrieve chat rooms.",
            Self::Delete => "Failed to delete chat room.",
        }
    }
}

impl fmt::Display for ChatOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create chat room",
            Self::Get => "get chat room",
            Self::List => "list chat rooms",
            Self::Delete => "delete chat room",
        };
        f.write_str(name)
    }
}

/// HTTP status of a business failure category
pub fn status_of(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput
        | ErrorCode::InvalidPageRequest
        | ErrorCode::CannotChatWithSelf
        | ErrorCode::CounterpartyNotSeller => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::ChatRoomAccessDenied => StatusCode::FORBIDDEN,
        ErrorCode::ChatRoomNotFound | ErrorCode::ItemNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ChatRoomAlreadyExists => StatusCode::CONFLICT,
    }
}

/// Envelope for a business failure
pub fn business_failure(error: &BusinessError) -> Response {
    let body = ApiResponse::<()>::failure(error.code.message(), error.detail.clone());
    (status_of(error.code), Json(body)).into_response()
}

/// Map the outcome of an operation onto its envelope.
///
/// `data` is `None` for operations without a payload.
pub fn respond<T: Serialize>(
    operation: ChatOperation,
    outcome: Result<Option<T>, ChatServiceError>,
    expose_internal_errors: bool,
) -> Response {
    match outcome {
        Ok(data) => {
            let body = ApiResponse::success(data, operation.success_message());
            (operation.success_status(), Json(body)).into_response()
        }
        Err(ChatServiceError::Business(error)) => {
            tracing::info!("{} rejected ({:?}): {}", operation, error.code, error.detail);
            business_failure(&error)
        }
        Err(ChatServiceError::Unexpected(detail)) => {
            tracing::error!("{} failed: {}", operation, detail);
            let error = if expose_internal_errors {
                detail
            } else {
                HIDDEN_INTERNAL_ERROR.to_string()
            };
            let body = ApiResponse::<()>::failure(operation.failure_message(), error);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
