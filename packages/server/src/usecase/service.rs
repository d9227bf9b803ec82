//! Chat Service
//!
//! UI 層が依存する唯一の窓口。UI 層はこの trait にのみ依存し、
//! 各ユースケースの組み立ては `ChatRoomService` が担います。

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    ChatRoom, ChatRoomId, ChatRoomRepository, ItemRepository, Page, PageRequest, UserId,
};

use super::{
    create_chat_room::{CreateChatRoomInput, CreateChatRoomUseCase},
    delete_chat_room::DeleteChatRoomUseCase,
    error::ChatServiceError,
    get_chat_room::GetChatRoomUseCase,
    list_chat_rooms::ListChatRoomsUseCase,
};

/// チャットルームに対する操作
///
/// すべての操作は呼び出し元の ID を明示的に受け取ります。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// 呼び出し元を購入者としてチャットルームを作成
    async fn create_chat_room(
        &self,
        caller: UserId,
        input: CreateChatRoomInput,
    ) -> Result<ChatRoom, ChatServiceError>;

    /// 参加しているチャットルームを取得
    async fn get_chat_room(
        &self,
        room_id: ChatRoomId,
        caller: UserId,
    ) -> Result<ChatRoom, ChatServiceError>;

    /// 参加しているチャットルームの一覧を取得
    async fn list_chat_rooms(
        &self,
        caller: UserId,
        request: PageRequest,
    ) -> Result<Page<ChatRoom>, ChatServiceError>;

    /// 参加しているチャットルームを削除
    async fn delete_chat_room(
        &self,
        room_id: ChatRoomId,
        caller: UserId,
    ) -> Result<(), ChatServiceError>;
}

/// Repository を使った ChatService の実装
pub struct ChatRoomService {
    create: CreateChatRoomUseCase,
    get: GetChatRoomUseCase,
    list: ListChatRoomsUseCase,
    delete: DeleteChatRoomUseCase,
}

impl ChatRoomService {
    /// 新しい ChatRoomService を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self {
            create: CreateChatRoomUseCase::new(chat_rooms.clone(), items),
            get: GetChatRoomUseCase::new(chat_rooms.clone()),
            list: ListChatRoomsUseCase::new(chat_rooms.clone()),
            delete: DeleteChatRoomUseCase::new(chat_rooms),
        }
    }
}

#[async_trait]
impl ChatService for ChatRoomService {
    async fn create_chat_room(
        &self,
        caller: UserId,
        input: CreateChatRoomInput,
    ) -> Result<ChatRoom, ChatServiceError> {
        self.create.execute(caller, input).await
    }

    async fn get_chat_room(
        &self,
        room_id: ChatRoomId,
        caller: UserId,
    ) -> Result<ChatRoom, ChatServiceError> {
        self.get.execute(room_id, caller).await
    }

    async fn list_chat_rooms(
        &self,
        caller: UserId,
        request: PageRequest,
    ) -> Result<Page<ChatRoom>, ChatServiceError> {
        self.list.execute(caller, request).await
    }

    async fn delete_chat_room(
        &self,
        room_id: ChatRoomId,
        caller: UserId,
    ) -> Result<(), ChatServiceError> {
        self.delete.execute(room_id, caller).await
    }
}
