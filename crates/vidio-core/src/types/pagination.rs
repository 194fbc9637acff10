//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Build a page request from a raw `?page=` query value.
    ///
    /// A missing or non-numeric value selects the first page, a value below
    /// one selects the first page, and a numeric value too large to
    /// represent is kept as `u64::MAX` so that [`PageRequest::clamp_to`]
    /// moves it to the last page.
    pub fn parse(raw: Option<&str>, page_size: u64) -> Self {
        let page = match raw.map(str::trim) {
            None | Some("") => 1,
            Some(s) => match s.parse::<i64>() {
                Ok(n) if n < 1 => 1,
                Ok(n) => n as u64,
                Err(_) if s.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
                Err(_) => 1,
            },
        };
        Self::new(page, page_size)
    }

    /// Number of pages needed for `total_items`. An empty set still has one page.
    pub fn total_pages(&self, total_items: u64) -> u64 {
        if total_items == 0 {
            1
        } else {
            total_items.div_ceil(self.page_size)
        }
    }

    /// Move an out-of-range page onto the nearest valid one.
    pub fn clamp_to(&self, total_items: u64) -> Self {
        Self {
            page: self.page.clamp(1, self.total_pages(total_items)),
            page_size: self.page_size,
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = PageRequest::new(page, page_size).total_pages(total_items);
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_values() {
        assert_eq!(PageRequest::parse(None, 5).page, 1);
        assert_eq!(PageRequest::parse(Some(""), 5).page, 1);
        assert_eq!(PageRequest::parse(Some("abc"), 5).page, 1);
        assert_eq!(PageRequest::parse(Some("-4"), 5).page, 1);
        assert_eq!(PageRequest::parse(Some("0"), 5).page, 1);
        assert_eq!(PageRequest::parse(Some(" 3 "), 5).page, 3);
        assert_eq!(
            PageRequest::parse(Some("99999999999999999999999"), 5).page,
            u64::MAX
        );
    }

    #[test]
    fn test_clamp_to_last_page() {
        let req = PageRequest::new(9, 5);
        assert_eq!(req.clamp_to(12).page, 3);
        assert_eq!(req.clamp_to(0).page, 1);
        assert_eq!(PageRequest::new(u64::MAX, 5).clamp_to(6).page, 2);
    }

    #[test]
    fn test_offset_and_total_pages() {
        let req = PageRequest::new(3, 5);
        assert_eq!(req.offset(), 10);
        assert_eq!(req.limit(), 5);
        assert_eq!(req.total_pages(12), 3);
        assert_eq!(req.total_pages(10), 2);
        assert_eq!(req.total_pages(0), 1);
    }

    #[test]
    fn test_page_response_flags() {
        let resp = PageResponse::new(vec![1, 2], 3, 5, 12);
        assert_eq!(resp.total_pages, 3);
        assert!(!resp.has_next);
        assert!(resp.has_previous);

        let first = PageResponse::<u8>::new(vec![], 1, 5, 0);
        assert_eq!(first.total_pages, 1);
        assert!(!first.has_next);
        assert!(!first.has_previous);
    }
}
