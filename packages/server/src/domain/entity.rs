//! Core domain models for the marketplace chat.

use super::value_object::{ChatRoomId, ItemId, Timestamp, UserId};

/// A chat room between the buyer and the seller of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoom {
    /// Chat room identifier
    pub id: ChatRoomId,
    /// The user who opened the chat room
    pub buyer_id: UserId,
    /// The user who listed the item
    pub seller_id: UserId,
    /// The item under discussion
    pub item_id: ItemId,
    /// Timestamp when the chat room was created
    pub created_at: Timestamp,
    /// Timestamp when the chat room was last modified
    pub updated_at: Timestamp,
}

impl ChatRoom {
    /// Whether the user is the buyer or the seller of this chat room
    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.buyer_id == user_id || self.seller_id == user_id
    }
}

/// A chat room that has not been stored yet.
///
/// The repository assigns the identifier and timestamps on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewChatRoom {
    pub buyer_id: UserId,
    pub seller_id: UserId,
    pub item_id: ItemId,
}

/// A listed marketplace item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// The user selling the item
    pub seller_id: UserId,
    /// Listing title
    pub title: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: ItemId, seller_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id,
            seller_id,
            title: title.into(),
        }
    }
}
