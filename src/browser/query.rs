// SPDX-License-Identifier: MPL-2.0
//! Canonical query and pagination state.
//!
//! The [`Query`] is the single normalized object handed to the external
//! loader on every reload. [`Pagination`] owns the page/sort half of that
//! query and guarantees the `skip == current_page * rows_per_page`
//! invariant at the moment a query is built.

use crate::browser::columns::ColumnId;
use std::collections::BTreeMap;
use std::fmt;

/// Sort direction for the active order-by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Wire spelling used in the canonical query.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filter or search value.
///
/// The original carried untyped `any` values here; a closed enum keeps the
/// loader seam checkable without constraining what callers can express.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl FilterValue {
    /// Returns the text content if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for an empty text value; used to drop cleared search fields.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.is_empty())
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

/// Keyed filter/search criteria, ordered for deterministic iteration.
pub type Criteria = BTreeMap<String, FilterValue>;

/// The normalized query emitted to the external loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub limit: usize,
    pub skip: usize,
    pub order_by: ColumnId,
    pub order: SortOrder,
    pub filters: Criteria,
    pub search: Criteria,
}

/// Page and sort state, created with fixed defaults and mutated only by
/// the browser component. Never persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub rows_per_page: usize,
    pub order: SortOrder,
    pub order_by: ColumnId,
}

/// Choices offered by the rows-per-page control.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Default page size when none is configured.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

impl Pagination {
    /// Creates pagination state sorted ascending on `order_by`.
    #[must_use]
    pub fn new(order_by: ColumnId, rows_per_page: usize) -> Self {
        Self {
            current_page: 0,
            rows_per_page: rows_per_page.max(1),
            order: SortOrder::Asc,
            order_by,
        }
    }

    /// Number of records to skip for the current page.
    #[must_use]
    pub fn skip(&self) -> usize {
        self.current_page * self.rows_per_page
    }

    /// Total pages needed for `count` records (at least one).
    #[must_use]
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.rows_per_page).max(1)
    }

    /// Applies a header or dropdown sort request: a repeated column flips
    /// the direction, a new column sorts ascending. Always returns to the
    /// first page.
    pub fn sort(&mut self, column: ColumnId) {
        if self.order_by == column {
            self.order = self.order.toggled();
        } else {
            self.order_by = column;
            self.order = SortOrder::Asc;
        }
        self.current_page = 0;
    }

    /// Sets the direction directly (card-bar dropdown), returning to the
    /// first page when it actually changes.
    ///
    /// Returns `true` if the direction changed.
    pub fn set_order(&mut self, order: SortOrder) -> bool {
        if self.order == order {
            return false;
        }
        self.order = order;
        self.current_page = 0;
        true
    }

    /// Moves to `page`, clamped to the range implied by `count`.
    pub fn set_page(&mut self, page: usize, count: usize) {
        self.current_page = page.min(self.page_count(count) - 1);
    }

    /// Changes the page size and returns to the first page.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.current_page = 0;
    }

    /// Builds the canonical query for the current state.
    #[must_use]
    pub fn to_query(&self, filters: Criteria, search: Criteria) -> Query {
        Query {
            limit: self.rows_per_page,
            skip: self.skip(),
            order_by: self.order_by,
            order: self.order,
            filters,
            search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: ColumnId = ColumnId::new("name");
    const UPDATED: ColumnId = ColumnId::new("updated_at");

    #[test]
    fn skip_tracks_page_and_rows_per_page() {
        let mut p = Pagination::new(NAME, 10);
        assert_eq!(p.skip(), 0);

        p.set_page(1, 23);
        assert_eq!(p.skip(), 10);

        p.set_rows_per_page(5);
        assert_eq!(p.current_page, 0);
        assert_eq!(p.skip(), 0);
    }

    #[test]
    fn twenty_three_records_make_three_pages_of_ten() {
        let p = Pagination::new(NAME, 10);
        assert_eq!(p.page_count(23), 3);
    }

    #[test]
    fn page_is_clamped_to_available_range() {
        let mut p = Pagination::new(NAME, 10);
        p.set_page(9, 23);
        assert_eq!(p.current_page, 2);
    }

    #[test]
    fn sorting_same_column_flips_direction() {
        let mut p = Pagination::new(NAME, 10);
        p.sort(NAME);
        assert_eq!(p.order, SortOrder::Desc);
        assert_eq!(p.order_by, NAME);
        p.sort(NAME);
        assert_eq!(p.order, SortOrder::Asc);
    }

    #[test]
    fn sorting_new_column_resets_to_ascending_first_page() {
        let mut p = Pagination::new(NAME, 10);
        p.sort(NAME); // name desc
        p.set_page(2, 30);
        p.sort(UPDATED);
        assert_eq!(p.order_by, UPDATED);
        assert_eq!(p.order, SortOrder::Asc);
        assert_eq!(p.current_page, 0);
    }

    #[test]
    fn set_order_resets_page_only_on_change() {
        let mut p = Pagination::new(NAME, 10);
        p.set_page(1, 30);
        assert!(!p.set_order(SortOrder::Asc));
        assert_eq!(p.current_page, 1);
        assert!(p.set_order(SortOrder::Desc));
        assert_eq!(p.current_page, 0);
    }

    #[test]
    fn query_carries_skip_invariant() {
        let mut p = Pagination::new(NAME, 10);
        p.set_page(1, 23);
        let q = p.to_query(Criteria::new(), Criteria::new());
        assert_eq!(q.skip, 10);
        assert_eq!(q.limit, 10);
        assert_eq!(q.skip, p.current_page * p.rows_per_page);
    }

    #[test]
    fn page_count_never_zero() {
        let p = Pagination::new(NAME, 10);
        assert_eq!(p.page_count(0), 1);
    }

    #[test]
    fn sort_order_round_trips() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
    }

    #[test]
    fn empty_text_filter_detected() {
        assert!(FilterValue::Text(String::new()).is_empty_text());
        assert!(!FilterValue::from("x").is_empty_text());
        assert!(!FilterValue::Flag(false).is_empty_text());
    }
}
