//! Domain layer for the marketplace chat.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod pagination;
pub mod repository;
pub mod value_object;

pub use entity::{ChatRoom, Item, NewChatRoom};
pub use error::{BusinessError, ErrorCode, RepositoryError, ValueObjectError};
pub use pagination::{Page, PageRequest, SortDirection, SortField};
pub use repository::{ChatRoomRepository, ItemRepository};
pub use value_object::{ChatRoomId, ItemId, Timestamp, UserId};
