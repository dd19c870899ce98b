use crate::error::{AchqError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of an already filtered and sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Count of the whole sequence before slicing.
    pub total_items: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Slices `records` to the requested page.
///
/// Page 0 is treated as page 1. A page past the end yields no items but still
/// reports the full `total_items`.
pub fn paginate<T>(records: Vec<T>, request: PageRequest) -> Result<Page<T>> {
    if request.page_size == 0 {
        return Err(AchqError::InvalidPageSize);
    }
    let page = request.page.max(1);
    let total_items = records.len();
    let start = (page - 1).saturating_mul(request.page_size);
    let items = records
        .into_iter()
        .skip(start)
        .take(request.page_size)
        .collect();

    Ok(Page {
        items,
        total_items,
        page,
        page_size: request.page_size,
    })
}
