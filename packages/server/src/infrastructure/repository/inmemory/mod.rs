//! InMemory Repository 実装

mod chat_room;
mod item;

pub use chat_room::InMemoryChatRoomRepository;
pub use item::{InMemoryItemRepository, ItemSeedError};
