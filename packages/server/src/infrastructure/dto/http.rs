//! HTTP API request/response DTOs for the chat room API.

use jangter_shared::time::timestamp_to_rfc3339;
use serde::{Deserialize, Serialize};

use crate::domain::{ChatRoom, Page};

/// Uniform envelope wrapping every chat room API response.
///
/// `error` is only present on failure and `data` only on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response, with or without a payload
    pub fn success(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            error: None,
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Request body for opening a chat room with the seller of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoomRequest {
    #[serde(
        alias = "counterpartyUserId",
        alias = "counterpartyId",
        alias = "counterparty_id",
        alias = "sellerId",
        alias = "seller_id"
    )]
    pub counterparty_user_id: i64,
    #[serde(alias = "itemId")]
    pub item_id: i64,
}

/// Public view of a chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoomResponse {
    pub chat_room_id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub item_id: i64,
    pub created_at: String, // RFC 3339
    pub updated_at: String, // RFC 3339
}

impl From<ChatRoom> for ChatRoomResponse {
    fn from(room: ChatRoom) -> Self {
        Self {
            chat_room_id: room.id.value(),
            buyer_id: room.buyer_id.value(),
            seller_id: room.seller_id.value(),
            item_id: room.item_id.value(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
            updated_at: timestamp_to_rfc3339(room.updated_at.value()),
        }
    }
}

/// One page of the caller's chat rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoomListResponse {
    pub chat_rooms: Vec<ChatRoomResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub has_next: bool,
}

impl From<Page<ChatRoom>> for ChatRoomListResponse {
    fn from(page: Page<ChatRoom>) -> Self {
        let total_pages = page.total_pages();
        let has_next = page.has_next();
        let page = page.map(ChatRoomResponse::from);
        Self {
            chat_rooms: page.content,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            has_next,
        }
    }
}

/// Query parameters of the chat room listing.
///
/// `sort` accepts either a field name or `field,direction`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListChatRoomsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}
