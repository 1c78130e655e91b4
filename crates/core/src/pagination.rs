//! Pagination parameter clamping shared by all list endpoints.

use serde::Deserialize;

/// Default number of items per page when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Hard upper bound on `limit`; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Generic pagination parameters (`?page=&limit=`).
///
/// Pages are 1-indexed. Out-of-range values are clamped by [`PageParams::limit`]
/// and [`PageParams::offset`] rather than rejected.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Effective page number (1-indexed, minimum 1).
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// SQL `OFFSET` derived from page and limit.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// A single page of results plus the total match count.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, limit: Option<i64>) -> PageParams {
        PageParams { page, limit }
    }

    #[test]
    fn defaults_apply_when_unset() {
        let p = params(None, None);
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn limit_is_clamped_to_maximum() {
        let p = params(Some(1), Some(5000));
        assert_eq!(p.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn zero_and_negative_values_are_clamped() {
        let p = params(Some(0), Some(-3));
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let p = params(Some(3), Some(10));
        assert_eq!(p.offset(), 20);
    }
}
