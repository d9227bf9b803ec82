//! UseCase: チャットルーム取得処理
//!
//! 参加者（購入者・販売者）以外からの取得は拒否します。

use std::sync::Arc;

use crate::domain::{ChatRoom, ChatRoomId, ChatRoomRepository, ErrorCode, UserId};

use super::error::ChatServiceError;

/// チャットルーム取得のユースケース
pub struct GetChatRoomUseCase {
    chat_rooms: Arc<dyn ChatRoomRepository>,
}

impl GetChatRoomUseCase {
    /// 新しい GetChatRoomUseCase を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>) -> Self {
        Self { chat_rooms }
    }

    /// チャットルーム取得を実行
    ///
    /// # Returns
    ///
    /// * `Ok(ChatRoom)` - 取得したチャットルーム
    /// * `Err(ChatServiceError)` - 存在しない、または参加者ではない
    pub async fn execute(
        &self,
        room_id: ChatRoomId,
        caller: UserId,
    ) -> Result<ChatRoom, ChatServiceError> {
        find_participating_room(self.chat_rooms.as_ref(), room_id, caller).await
    }
}

/// 呼び出し元が参加しているチャットルームを取得する
///
/// 取得と削除で共通の認可チェック。
pub(super) async fn find_participating_room(
    chat_rooms: &dyn ChatRoomRepository,
    room_id: ChatRoomId,
    caller: UserId,
) -> Result<ChatRoom, ChatServiceError> {
    let room = chat_rooms.find_by_id(room_id).await?.ok_or_else(|| {
        ChatServiceError::business(
            ErrorCode::ChatRoomNotFound,
            format!("chat room {room_id} does not exist"),
        )
    })?;

    if !room.is_participant(caller) {
        tracing::warn!(
            "User {} attempted to access chat room {} without being a participant",
            caller,
            room_id
        );
        return Err(ChatServiceError::business(
            ErrorCode::ChatRoomAccessDenied,
            format!("user {caller} is not a participant of chat room {room_id}"),
        ));
    }

    Ok(room)
}
