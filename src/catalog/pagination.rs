/// Pagination descriptors shared by all list queries
///
/// A `Pagination` is built from the optional `page`/`pageSize` GraphQL
/// arguments and handed to the store, which returns a `Page` of rows.

use std::fmt;

/// Page used when the request gives none (or a page below 1)
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request gives none (or zero)
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Column every list query is ordered by
pub const UPDATED_AT_COLUMN: &str = "updated_at";

/// Sort order applied to a list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub descending: bool,
}

impl Sort {
    /// Most recently updated rows first
    pub fn updated_desc() -> Self {
        Self {
            column: UPDATED_AT_COLUMN.to_string(),
            descending: true,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.descending { "desc" } else { "asc" };
        write!(f, "{} {}", self.column, direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub sort: Sort,
    pub limit: i64,
    pub page: i64,
}

impl Pagination {
    /// Build a descriptor from raw request arguments.
    ///
    /// `page` below 1 becomes 1 and a `page_size` of zero becomes 50. A
    /// negative `page_size` is kept as-is and means "no limit".
    pub fn from_args(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };

        let limit = match page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size,
        };

        Self {
            sort: Sort::updated_desc(),
            limit,
            page,
        }
    }

    /// Whether the query is unbounded (negative page size)
    pub fn is_unbounded(&self) -> bool {
        self.limit < 0
    }

    /// Number of rows to skip before the requested page
    pub fn offset(&self) -> usize {
        if self.is_unbounded() {
            return 0;
        }
        usize::try_from((self.page - 1).saturating_mul(self.limit)).unwrap_or(usize::MAX)
    }

    /// Maximum number of rows to return, `None` when unbounded
    pub fn fetch(&self) -> Option<usize> {
        if self.is_unbounded() {
            None
        } else {
            Some(usize::try_from(self.limit).unwrap_or(usize::MAX))
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_args(None, None)
    }
}

/// One page of rows plus the counts needed to request further pages
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, pagination: &Pagination, total_rows: usize) -> Self {
        let total_pages = match pagination.fetch() {
            Some(0) => 0,
            Some(limit) => total_rows.div_ceil(limit),
            None if total_rows == 0 => 0,
            None => 1,
        };

        Self {
            rows,
            page: pagination.page,
            limit: pagination.limit,
            total_rows,
            total_pages,
        }
    }
}
