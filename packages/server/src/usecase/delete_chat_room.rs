//! UseCase: チャットルーム削除処理
//!
//! 参加者（購入者・販売者）だけが削除できます。

use std::sync::Arc;

use crate::domain::{ChatRoomId, ChatRoomRepository, ErrorCode, RepositoryError, UserId};

use super::{error::ChatServiceError, get_chat_room::find_participating_room};

/// チャットルーム削除のユースケース
pub struct DeleteChatRoomUseCase {
    chat_rooms: Arc<dyn ChatRoomRepository>,
}

impl DeleteChatRoomUseCase {
    /// 新しい DeleteChatRoomUseCase を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>) -> Self {
        Self { chat_rooms }
    }

    /// 削除を実行
    pub async fn execute(&self, room_id: ChatRoomId, caller: UserId) -> Result<(), ChatServiceError> {
        // 1. 認可チェック（存在しない・参加者ではない場合はここで失敗）
        find_participating_room(self.chat_rooms.as_ref(), room_id, caller).await?;

        // 2. 削除（同時に削除された場合は存在しないものとして扱う）
        self.chat_rooms
            .delete(room_id)
            .await
            .map_err(|error| match error {
                RepositoryError::ChatRoomNotStored(_) => ChatServiceError::business(
                    ErrorCode::ChatRoomNotFound,
                    format!("chat room {room_id} does not exist"),
                ),
                other => ChatServiceError::from(other),
            })?;

        tracing::info!("Chat room {} deleted by user {}", room_id, caller);

        Ok(())
    }
}
