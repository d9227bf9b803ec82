//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から ChatService trait 経由で呼び出され、Domain 層を操作します。

pub mod create_chat_room;
pub mod delete_chat_room;
pub mod error;
pub mod get_chat_room;
pub mod list_chat_rooms;
pub mod service;

pub use create_chat_room::{CreateChatRoomInput, CreateChatRoomUseCase};
pub use delete_chat_room::DeleteChatRoomUseCase;
pub use error::ChatServiceError;
pub use get_chat_room::GetChatRoomUseCase;
pub use list_chat_rooms::ListChatRoomsUseCase;
pub use service::{ChatRoomService, ChatService};
