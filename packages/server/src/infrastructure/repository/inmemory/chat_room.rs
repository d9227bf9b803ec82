//! InMemory ChatRoom Repository 実装
//!
//! ドメイン層が定義する ChatRoomRepository trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用します。
//!
//! ID は 1 から順に採番し、削除された ID は再利用しません。
//! 購入者・販売者・商品の組の一意性は insert 内で同じロックのまま検査します。

use std::collections::BTreeMap;

use async_trait::async_trait;
use jangter_shared::time::get_utc_timestamp;
use tokio::sync::Mutex;

use crate::domain::{
    ChatRoom, ChatRoomId, ChatRoomRepository, ItemId, NewChatRoom, Page, PageRequest,
    RepositoryError, Timestamp, UserId,
};

/// ストレージ本体（Mutex で保護される）
struct ChatRoomTable {
    rooms: BTreeMap<ChatRoomId, ChatRoom>,
    /// 次に採番する ID（使い切った場合は None）
    next_id: Option<ChatRoomId>,
}

impl ChatRoomTable {
    fn find_by_trade(
        &self,
        buyer_id: UserId,
        seller_id: UserId,
        item_id: ItemId,
    ) -> Option<&ChatRoom> {
        self.rooms.values().find(|room| {
            room.buyer_id == buyer_id && room.seller_id == seller_id && room.item_id == item_id
        })
    }
}

/// インメモリ ChatRoom Repository 実装
///
/// ドメイン層の ChatRoomRepository trait を実装します（依存性の逆転）。
pub struct InMemoryChatRoomRepository {
    table: Mutex<ChatRoomTable>,
    /// 保持できるチャットルーム数の上限（None なら無制限）
    capacity: Option<usize>,
}

impl InMemoryChatRoomRepository {
    /// 容量無制限の InMemoryChatRoomRepository を作成
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// 容量を指定して InMemoryChatRoomRepository を作成
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            table: Mutex::new(ChatRoomTable {
                rooms: BTreeMap::new(),
                next_id: Some(ChatRoomId::FIRST),
            }),
            capacity,
        }
    }

    /// 保持しているチャットルーム数
    pub async fn count(&self) -> usize {
        self.table.lock().await.rooms.len()
    }
}

impl Default for InMemoryChatRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRoomRepository for InMemoryChatRoomRepository {
    async fn insert(&self, new_room: NewChatRoom) -> Result<ChatRoom, RepositoryError> {
        let mut table = self.table.lock().await;

        if let Some(existing) =
            table.find_by_trade(new_room.buyer_id, new_room.seller_id, new_room.item_id)
        {
            return Err(RepositoryError::DuplicateTrade {
                existing: existing.id.value(),
            });
        }

        if let Some(capacity) = self.capacity
            && table.rooms.len() >= capacity
        {
            return Err(RepositoryError::CapacityExceeded { capacity });
        }

        let id = table.next_id.ok_or(RepositoryError::IdSpaceExhausted)?;
        let now = Timestamp::new(get_utc_timestamp());
        let room = ChatRoom {
            id,
            buyer_id: new_room.buyer_id,
            seller_id: new_room.seller_id,
            item_id: new_room.item_id,
            created_at: now,
            updated_at: now,
        };

        table.rooms.insert(id, room.clone());
        table.next_id = id.next();

        Ok(room)
    }

    async fn find_by_id(&self, id: ChatRoomId) -> Result<Option<ChatRoom>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.rooms.get(&id).cloned())
    }

    async fn find_by_trade(
        &self,
        buyer_id: UserId,
        seller_id: UserId,
        item_id: ItemId,
    ) -> Result<Option<ChatRoom>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.find_by_trade(buyer_id, seller_id, item_id).cloned())
    }

    async fn find_page_by_participant(
        &self,
        user_id: UserId,
        request: PageRequest,
    ) -> Result<Page<ChatRoom>, RepositoryError> {
        let mut rooms: Vec<ChatRoom> = {
            let table = self.table.lock().await;
            table
                .rooms
                .values()
                .filter(|room| room.is_participant(user_id))
                .cloned()
                .collect()
        };

        rooms.sort_by(|a, b| request.compare(a, b));

        Ok(Page::from_sorted(rooms, &request))
    }

    async fn delete(&self, id: ChatRoomId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table
            .rooms
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::ChatRoomNotStored(id.value()))
    }
}
