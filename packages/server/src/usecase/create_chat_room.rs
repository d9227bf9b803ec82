//! UseCase: チャットルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateChatRoomUseCase::execute() メソッド
//! - 購入者（呼び出し元）と販売者（相手）と商品の組でチャットルームを作成する処理
//!
//! ### なぜこのテストが必要か
//! - ビジネスルールの検証：自分自身とのチャット、存在しない商品、販売者以外との
//!   チャット、重複作成を拒否する
//! - ストレージ障害が想定外エラーとして扱われることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規チャットルームの作成
//! - 異常系：各ビジネスエラーとストレージ障害

use std::sync::Arc;

use crate::domain::{
    ChatRoom, ChatRoomRepository, ErrorCode, ItemId, ItemRepository, NewChatRoom,
    RepositoryError, UserId,
};

use super::error::ChatServiceError;

/// チャットルーム作成の入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateChatRoomInput {
    /// チャット相手（商品の販売者）
    pub counterparty_id: UserId,
    /// 対象の商品
    pub item_id: ItemId,
}

/// チャットルーム作成のユースケース
pub struct CreateChatRoomUseCase {
    chat_rooms: Arc<dyn ChatRoomRepository>,
    items: Arc<dyn ItemRepository>,
}

impl CreateChatRoomUseCase {
    /// 新しい CreateChatRoomUseCase を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { chat_rooms, items }
    }

    /// チャットルーム作成を実行
    ///
    /// 呼び出し元が購入者、`input.counterparty_id` が販売者になります。
    ///
    /// # Returns
    ///
    /// * `Ok(ChatRoom)` - 作成されたチャットルーム
    /// * `Err(ChatServiceError)` - 作成失敗
    pub async fn execute(
        &self,
        caller: UserId,
        input: CreateChatRoomInput,
    ) -> Result<ChatRoom, ChatServiceError> {
        // 1. 自分自身とのチャットは不可
        if caller == input.counterparty_id {
            return Err(ChatServiceError::business(
                ErrorCode::CannotChatWithSelf,
                format!("user {caller} cannot open a chat room with themselves"),
            ));
        }

        // 2. 商品の存在確認と販売者の照合
        let item = self.items.find_by_id(input.item_id).await?.ok_or_else(|| {
            ChatServiceError::business(
                ErrorCode::ItemNotFound,
                format!("item {} does not exist", input.item_id),
            )
        })?;
        if item.seller_id != input.counterparty_id {
            return Err(ChatServiceError::business(
                ErrorCode::CounterpartyNotSeller,
                format!(
                    "user {} is not the seller of item {}",
                    input.counterparty_id, item.id
                ),
            ));
        }

        // 3. 重複チェック
        if let Some(existing) = self
            .chat_rooms
            .find_by_trade(caller, input.counterparty_id, input.item_id)
            .await?
        {
            return Err(already_exists(existing.id.value(), input.item_id));
        }

        // 4. 保存（同時作成との競合は Repository が同じロック内で検出する）
        let room = self
            .chat_rooms
            .insert(NewChatRoom {
                buyer_id: caller,
                seller_id: input.counterparty_id,
                item_id: input.item_id,
            })
            .await
            .map_err(|error| match error {
                RepositoryError::DuplicateTrade { existing } => {
                    already_exists(existing, input.item_id)
                }
                other => ChatServiceError::from(other),
            })?;

        tracing::info!(
            "Chat room {} created (buyer: {}, seller: {}, item: {})",
            room.id,
            room.buyer_id,
            room.seller_id,
            room.item_id
        );

        Ok(room)
    }
}

fn already_exists(existing: i64, item_id: ItemId) -> ChatServiceError {
    ChatServiceError::business(
        ErrorCode::ChatRoomAlreadyExists,
        format!("chat room {existing} already exists for item {item_id}"),
    )
}
