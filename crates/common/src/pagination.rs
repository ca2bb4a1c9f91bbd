//! Offset pagination arithmetic shared by every record listing.
//!
//! Pages are addressed by a zero-based index; `offset = page * per_page`.

use serde::{Deserialize, Serialize};

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 0-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self { Self { page, per_page } }

    /// Returns `(page, per_page)` when the page is addressable: a non-zero size and
    /// an offset (`page * per_page`) that the store can bind as a signed 64-bit value.
    pub fn checked(self) -> Option<(u64, u64)> {
        if self.per_page == 0 || self.per_page > MAX_OFFSET {
            return None;
        }
        match self.page.checked_mul(self.per_page) {
            Some(offset) if offset <= MAX_OFFSET => Some((self.page, self.per_page)),
            _ => None,
        }
    }
}

/// SQLite binds LIMIT/OFFSET as signed 64-bit integers.
const MAX_OFFSET: u64 = i64::MAX as u64;

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, per_page: 5 } }
}

/// Position of one fetched page within the whole record set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u64,
    pub per_page: u64,
    /// Unfiltered row count of the table.
    pub total: u64,
}

impl PageInfo {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self { Self { page, per_page, total } }

    /// `ceil(total / per_page)`; zero when the table is empty.
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 { return 0; }
        self.total.div_ceil(self.per_page)
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1).saturating_mul(self.per_page) < self.total
    }

    pub fn has_prev(&self) -> bool { self.page > 0 }

    /// Last addressable page index, never below zero.
    pub fn last_page(&self) -> u64 { self.total_pages().saturating_sub(1) }
}
