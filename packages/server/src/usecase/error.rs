//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{BusinessError, ErrorCode, RepositoryError};

/// Chat Service の失敗
///
/// 想定済みのビジネスエラーと、それ以外の想定外エラーの 2 種類のみ。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatServiceError {
    /// 想定済みのビジネスエラー（カテゴリと詳細を持つ）
    #[error(transparent)]
    Business(#[from] BusinessError),

    /// 想定外のエラー（ストレージ障害など）
    #[error("{0}")]
    Unexpected(String),
}

impl ChatServiceError {
    /// ビジネスエラーを作成するショートカット
    pub fn business(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Business(BusinessError::new(code, detail))
    }
}

impl From<RepositoryError> for ChatServiceError {
    fn from(error: RepositoryError) -> Self {
        Self::Unexpected(error.to_string())
    }
}
