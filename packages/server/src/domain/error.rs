//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId must be positive
    #[error("UserId must be a positive integer (got {0})")]
    UserIdNotPositive(i64),

    /// ItemId must be positive
    #[error("ItemId must be a positive integer (got {0})")]
    ItemIdNotPositive(i64),

    /// ChatRoomId must be positive
    #[error("ChatRoomId must be a positive integer (got {0})")]
    ChatRoomIdNotPositive(i64),

    /// Page size must be at least one
    #[error("Page size must be at least 1 (got {0})")]
    PageSizeZero(u32),

    /// Unknown sort field
    #[error("Cannot sort chat rooms by '{0}'")]
    UnknownSortField(String),

    /// Unknown sort direction
    #[error("Sort direction must be 'asc' or 'desc' (got '{0}')")]
    UnknownSortDirection(String),
}

/// Closed set of business failure categories.
///
/// Every category carries a caller-facing message. The HTTP status for a
/// category is decided by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request could not be understood (bad body, bad path id)
    InvalidInput,
    /// The pagination parameters are invalid
    InvalidPageRequest,
    /// No caller identity accompanied the request
    Unauthenticated,
    /// The chat room does not exist
    ChatRoomNotFound,
    /// The caller is neither buyer nor seller of the chat room
    ChatRoomAccessDenied,
    /// The item does not exist
    ItemNotFound,
    /// The caller named themselves as counterparty
    CannotChatWithSelf,
    /// The counterparty is not the seller of the item
    CounterpartyNotSeller,
    /// A chat room already exists for this buyer, seller and item
    ChatRoomAlreadyExists,
}

impl ErrorCode {
    /// Caller-facing description of the category.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid request.",
            Self::InvalidPageRequest => "Invalid pagination parameters.",
            Self::Unauthenticated => "Authentication is required.",
            Self::ChatRoomNotFound => "Chat room not found.",
            Self::ChatRoomAccessDenied => "You are not a participant of this chat room.",
            Self::ItemNotFound => "Item not found.",
            Self::CannotChatWithSelf => "You cannot open a chat room with yourself.",
            Self::CounterpartyNotSeller => "The counterparty is not the seller of this item.",
            Self::ChatRoomAlreadyExists => "A chat room for this item already exists.",
        }
    }
}

/// An expected, named failure: a category plus a detail describing this
/// particular occurrence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct BusinessError {
    /// Failure category
    pub code: ErrorCode,
    /// Detail of this occurrence
    pub detail: String,
}

impl BusinessError {
    /// Create a new business error
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The chat room to remove is not stored
    #[error("Chat room {0} is not stored")]
    ChatRoomNotStored(i64),

    /// A chat room for the same buyer, seller and item is already stored
    #[error("Chat room {existing} already exists for this trade")]
    DuplicateTrade { existing: i64 },

    /// The store is full
    #[error("Chat room store capacity exceeded: maximum {capacity} chat rooms allowed")]
    CapacityExceeded { capacity: usize },

    /// No identifier is left to assign
    #[error("Chat room identifier space exhausted")]
    IdSpaceExhausted,
}
