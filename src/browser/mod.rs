// SPDX-License-Identifier: MPL-2.0
//! Entity-agnostic record browser.
//!
//! Renders a remote collection as a sortable, paginated table or card
//! grid with multi-row selection, debounced quick search, advanced
//! search and bulk actions. The browser never fetches data itself: every
//! query change surfaces as an [`Effect::LoadRequested`] carrying the
//! canonical [`Query`], and the host replies through
//! [`State::apply_loaded`].

pub mod cards;
pub mod columns;
pub mod component;
pub mod pagination;
pub mod query;
pub mod search_panel;
pub mod selection;
pub mod table;
pub mod toolbar;

pub use columns::{Align, CellValue, ColumnDescriptor, ColumnId, Record, RecordId, RowAction};
pub use component::{
    BrowserConfig, Effect, Labels, Message, State, ToolbarMenu, ViewEnv, ViewMode,
    DEFAULT_WIDE_BREAKPOINT, SEARCH_DEBOUNCE,
};
pub use query::{
    Criteria, FilterValue, Pagination, Query, SortOrder, DEFAULT_ROWS_PER_PAGE,
    ROWS_PER_PAGE_OPTIONS,
};
pub use selection::SelectionModel;
