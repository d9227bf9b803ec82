//! UseCase: チャットルーム一覧取得処理
//!
//! 呼び出し元が参加しているチャットルームだけを返します。

use std::sync::Arc;

use crate::domain::{ChatRoom, ChatRoomRepository, Page, PageRequest, UserId};

use super::error::ChatServiceError;

/// チャットルーム一覧取得のユースケース
pub struct ListChatRoomsUseCase {
    chat_rooms: Arc<dyn ChatRoomRepository>,
}

impl ListChatRoomsUseCase {
    /// 新しい ListChatRoomsUseCase を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>) -> Self {
        Self { chat_rooms }
    }

    /// 一覧取得を実行
    pub async fn execute(
        &self,
        caller: UserId,
        request: PageRequest,
    ) -> Result<Page<ChatRoom>, ChatServiceError> {
        let page = self
            .chat_rooms
            .find_page_by_participant(caller, request)
            .await?;

        tracing::debug!(
            "Listed {} of {} chat rooms for user {} (page {})",
            page.content.len(),
            page.total_elements,
            caller,
            page.page
        );

        Ok(page)
    }
}
