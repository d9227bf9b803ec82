//! InMemory Item Repository 実装
//!
//! 商品カタログは読み取り専用で、起動時に一括で投入します。
//! JSON ファイルからの投入にも対応しています。

use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Item, ItemId, ItemRepository, RepositoryError, UserId, ValueObjectError};

/// 商品データ投入時のエラー
#[derive(Debug, Error)]
pub enum ItemSeedError {
    /// ファイル読み込み失敗
    #[error("Failed to read item seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON パース失敗
    #[error("Failed to parse item seed file: {0}")]
    Json(#[from] serde_json::Error),

    /// 不正な ID を含む商品
    #[error("Invalid item in seed data: {0}")]
    InvalidItem(#[from] ValueObjectError),
}

/// 投入用の商品レコード（JSON）
#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: i64,
    seller_id: i64,
    #[serde(default)]
    title: String,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValueObjectError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Ok(Item::new(
            ItemId::new(record.id)?,
            UserId::new(record.seller_id)?,
            record.title,
        ))
    }
}

/// インメモリ Item Repository 実装
pub struct InMemoryItemRepository {
    items: HashMap<ItemId, Item>,
}

impl InMemoryItemRepository {
    /// 商品リストから InMemoryItemRepository を作成
    ///
    /// 同じ ID の商品が複数ある場合は後のものが優先されます。
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// JSON 文字列（`[{"id": 7, "seller_id": 42, "title": "..."}]`）から作成
    pub fn from_json(json: &str) -> Result<Self, ItemSeedError> {
        let records: Vec<ItemRecord> = serde_json::from_str(json)?;
        let items = records
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(items))
    }

    /// JSON ファイルから作成
    pub async fn from_json_file(path: &Path) -> Result<Self, ItemSeedError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ItemSeedError::Io {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&json)
    }

    /// 登録されている商品数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 商品が 1 件も登録されていないか
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        Ok(self.items.get(&id).cloned())
    }
}
