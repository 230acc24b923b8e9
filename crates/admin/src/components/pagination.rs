//! Fixed-size pagination over an already-filtered list.
//!
//! Page indexes are zero-based. An index past the end is not an error: it
//! just yields an empty page.

use serde::Serialize;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` items (`ceil(len / page_size)`).
///
/// A zero page size has no pages.
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Items `[page_index * page_size, page_index * page_size + page_size)`,
/// clamped to the slice.
#[must_use]
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    let start = start.min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// Position of one page within a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Zero-based index of this page.
    pub index: usize,
    /// Total number of pages.
    pub count: usize,
    /// Whether a page follows this one.
    pub has_next_page: bool,
    /// Whether a page precedes this one.
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Describe page `index` of a list of `len` items.
    #[must_use]
    pub const fn new(len: usize, page_size: usize, index: usize) -> Self {
        let count = page_count(len, page_size);
        Self {
            index,
            count,
            has_next_page: index.saturating_add(1) < count,
            has_previous_page: index > 0 && count > 0,
        }
    }

    /// Last valid index for `count` pages (0 when there are none).
    #[must_use]
    pub const fn last_index(count: usize) -> usize {
        count.saturating_sub(1)
    }
}
