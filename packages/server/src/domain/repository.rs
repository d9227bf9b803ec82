//! Repository traits.
//!
//! The domain layer owns these abstractions; the infrastructure layer
//! provides the implementations (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{ChatRoom, Item, NewChatRoom},
    error::RepositoryError,
    pagination::{Page, PageRequest},
    value_object::{ChatRoomId, ItemId, UserId},
};

/// Storage of chat rooms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRoomRepository: Send + Sync {
    /// Store a new chat room, assigning its id and timestamps
    async fn insert(&self, new_room: NewChatRoom) -> Result<ChatRoom, RepositoryError>;

    /// Look up a chat room by id
    async fn find_by_id(&self, id: ChatRoomId) -> Result<Option<ChatRoom>, RepositoryError>;

    /// Look up the chat room for a buyer, seller and item
    async fn find_by_trade(
        &self,
        buyer_id: UserId,
        seller_id: UserId,
        item_id: ItemId,
    ) -> Result<Option<ChatRoom>, RepositoryError>;

    /// One page of the chat rooms the user participates in
    async fn find_page_by_participant(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<Page<ChatRoom>, RepositoryError>;

    /// Remove a chat room
    async fn delete(&self, id: ChatRoomId) -> Result<(), RepositoryError>;
}

/// Read access to the item catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Look up an item by id
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;
}
