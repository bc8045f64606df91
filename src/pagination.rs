//! Page/offset parameters shared by list queries.

pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// 1-based page selection applied to repository list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}
