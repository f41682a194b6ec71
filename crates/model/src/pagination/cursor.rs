use crate::pagination::page::PageSize;

/// Offset-based pagination cursor.
///
/// Owned by a single stream; it only ever moves forward, by exactly one page
/// size per non-empty page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    /// Cursor positioned at the first row.
    pub fn start() -> Self {
        Cursor { offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Cursor for the page following the one fetched at this offset.
    pub fn advance(self, page_size: PageSize) -> Self {
        Cursor {
            offset: self.offset + page_size.get(),
        }
    }
}
