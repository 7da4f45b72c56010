//! Pagination utilities.
//!
//! The backend pages every list endpoint the same way: the client asks for a
//! 1-based `page` of `limit` items and gets back the items plus `{current,
//! total}`, where `total` counts items rather than pages. The helpers here
//! turn that into the page window the list screens navigate.

use serde::{Deserialize, Serialize};

/// Smallest page size the client will request.
pub const MIN_PAGE_SIZE: u32 = 1;
/// Largest page size the client will request.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string()), ("limit", self.limit.to_string())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub current: u32,
    #[serde(default)]
    pub total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: first_page(),
            total: 0,
        }
    }
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
            limit,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.pagination.total, self.limit)
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    pub fn previous(&self) -> Option<PageRequest> {
        self.has_previous()
            .then(|| PageRequest::new(self.current_page() - 1, self.limit))
    }

    pub fn next(&self) -> Option<PageRequest> {
        self.has_next()
            .then(|| PageRequest::new(self.current_page() + 1, self.limit))
    }

    pub fn label(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_page(),
            self.total_pages().max(1)
        )
    }
}

/// Number of pages needed for `total_items` at `limit` per page.
pub fn total_pages(total_items: u32, limit: u32) -> u32 {
    let limit = limit.max(MIN_PAGE_SIZE);
    total_items.div_ceil(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current: u32, total: u32, limit: u32) -> Page<u32> {
        Page {
            items: Vec::new(),
            pagination: Pagination { current, total },
            limit,
        }
    }

    #[test]
    fn request_clamps_page_and_limit() {
        let request = PageRequest::new(0, 10_000);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, MAX_PAGE_SIZE);
        assert_eq!(
            request.query_pairs(),
            vec![("page", "1".to_string()), ("limit", "100".to_string())]
        );
    }

    #[test]
    fn total_counts_items_not_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
    }

    #[test]
    fn window_navigation_respects_bounds() {
        let middle = page(2, 45, 20);
        assert_eq!(middle.previous(), Some(PageRequest::new(1, 20)));
        assert_eq!(middle.next(), Some(PageRequest::new(3, 20)));

        let last = page(3, 45, 20);
        assert!(last.next().is_none());
        assert_eq!(last.label(), "Page 3 of 3");

        let empty = page(1, 0, 20);
        assert!(empty.previous().is_none());
        assert!(empty.next().is_none());
        assert_eq!(empty.label(), "Page 1 of 1");
    }
}
