//! Pagination and sorting of chat room listings.

use std::{cmp::Ordering, str::FromStr};

use super::{entity::ChatRoom, error::ValueObjectError};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size served; larger requests are clamped
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field a chat room listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Id,
}

impl FromStr for SortField {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            "id" | "chatRoomId" | "chat_room_id" => Ok(Self::Id),
            other => Err(ValueObjectError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ValueObjectError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// A request for one page of a listing.
///
/// Pages are zero-based. The default is the first page of
/// [`DEFAULT_PAGE_SIZE`] entries, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: SortField,
    direction: SortDirection,
}

impl PageRequest {
    /// Create a page request.
    ///
    /// A size above [`MAX_PAGE_SIZE`] is clamped.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PageSizeZero` when `size` is zero.
    pub fn new(
        page: u32,
        size: u32,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<Self, ValueObjectError> {
        if size == 0 {
            return Err(ValueObjectError::PageSizeZero(size));
        }
        Ok(Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
            sort,
            direction,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> SortField {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Number of entries preceding this page, saturating at `usize::MAX`
    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_mul(self.size as usize)
    }

    /// Ordering of two chat rooms under this request.
    ///
    /// Ties on the sort field fall back to the id, in the same direction.
    pub fn compare(&self, a: &ChatRoom, b: &ChatRoom) -> Ordering {
        let by_field = match self.sort {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Id => Ordering::Equal,
        };
        let ordering = by_field.then_with(|| a.id.cmp(&b.id));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortField::default(),
            direction: SortDirection::default(),
        }
    }
}

/// One page of a listing plus the metadata needed to fetch the others
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Entries on this page
    pub content: Vec<T>,
    /// Zero-based page index
    pub page: u32,
    /// Requested page size
    pub size: u32,
    /// Number of entries across all pages
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Cut one page out of an already sorted listing
    pub fn from_sorted(entries: Vec<T>, request: &PageRequest) -> Self {
        let total_elements = entries.len() as u64;
        let content = entries
            .into_iter()
            .skip(request.offset())
            .take(request.size() as usize)
            .collect();
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    /// Number of pages needed to hold every entry
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Whether a page follows this one
    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }

    /// Convert every entry, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
