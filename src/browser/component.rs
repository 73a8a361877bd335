// SPDX-License-Identifier: MPL-2.0
//! Record browser component encapsulating state and update logic.
//!
//! [`State`] is the single source of truth for the canonical query,
//! pagination, selection and view mode. Every mutation that changes the
//! canonical query produces exactly one [`Effect::LoadRequested`] carrying
//! the full recomputed [`Query`]; pure UI-local changes (view toggle,
//! selection, panel collapse) never trigger a reload. The host owns all
//! actual data fetching: it reacts to effects and feeds rows back through
//! [`State::apply_loaded`].

use crate::browser::columns::{ColumnDescriptor, ColumnId, Record, RecordId};
use crate::browser::query::{
    Criteria, FilterValue, Pagination, Query, SortOrder, DEFAULT_ROWS_PER_PAGE,
};
use crate::browser::selection::SelectionModel;
use crate::browser::{cards, table, toolbar};
use crate::ui::styles;
use iced::widget::{container, mouse_area, opaque, Column, Stack};
use iced::{Element, Length, Task};
use std::time::Duration;
use tracing::debug;

/// Idle window after the last keystroke before a quick-search emission.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Viewport width at which the layout is classified wide.
pub const DEFAULT_WIDE_BREAKPOINT: f32 = 900.0;

/// Which of the two renderings of the collection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Table,
    #[default]
    Card,
}

/// One caller-supplied bulk action shown ahead of the built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarMenu {
    pub label: String,
    pub icon: String,
}

impl ToolbarMenu {
    #[must_use]
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// Built-in chrome strings. Callers localize by replacing fields;
/// column labels come from the descriptors.
#[derive(Debug, Clone)]
pub struct Labels {
    pub selected: String,
    pub delete: String,
    pub mark_seen: String,
    pub confirm_title: String,
    pub confirm_delete: String,
    pub confirm_cancel: String,
    pub rows_per_page: String,
    pub range_of: String,
    pub order_by: String,
    pub ascending: String,
    pub descending: String,
    pub empty: String,
    pub loading: String,
    pub table_view: String,
    pub card_view: String,
    pub updated_at: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            selected: "selected".to_string(),
            delete: "Delete".to_string(),
            mark_seen: "Mark as seen".to_string(),
            confirm_title: "Delete the selected records?".to_string(),
            confirm_delete: "Delete".to_string(),
            confirm_cancel: "Cancel".to_string(),
            rows_per_page: "Rows per page:".to_string(),
            range_of: "of".to_string(),
            order_by: "Order by".to_string(),
            ascending: "Ascending".to_string(),
            descending: "Descending".to_string(),
            empty: "No records".to_string(),
            loading: "Loading…".to_string(),
            table_view: "Table view".to_string(),
            card_view: "Card view".to_string(),
            updated_at: "Updated".to_string(),
        }
    }
}

/// Construction-time inputs: the caller contract of the browser.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Ordered column descriptors; ids must match keys in every record.
    pub head_cells: Vec<ColumnDescriptor>,
    /// Gates the built-in delete bulk action.
    pub can_delete: bool,
    /// Gates the built-in mark-as-seen bulk action.
    pub can_update: bool,
    /// One row excluded from selection and counted out of the row count.
    pub disabled_row_id: Option<RecordId>,
    /// Externally seeded filter values, merged into `filters` at mount.
    pub default_filters: Criteria,
    /// Extra caller-supplied bulk actions.
    pub toolbar_menus: Vec<ToolbarMenu>,
    pub rows_per_page: usize,
    /// Initial order-by column.
    pub order_by: ColumnId,
    pub wide_breakpoint: f32,
    /// Viewport width at mount, used to seed the breakpoint class and the
    /// open/collapsed defaults of the search panel and card filter bar.
    pub viewport_width: f32,
    pub labels: Labels,
}

impl BrowserConfig {
    #[must_use]
    pub fn new(head_cells: Vec<ColumnDescriptor>, order_by: ColumnId) -> Self {
        Self {
            head_cells,
            can_delete: false,
            can_update: false,
            disabled_row_id: None,
            default_filters: Criteria::new(),
            toolbar_menus: Vec::new(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            order_by,
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
            viewport_width: DEFAULT_WIDE_BREAKPOINT,
            labels: Labels::default(),
        }
    }
}

/// Messages emitted by the browser's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A quick-search keystroke for one field (debounced).
    Search { field: String, value: String },
    /// The debounce timer for generation `n` elapsed.
    SearchDebounceElapsed(u64),
    /// The advanced form submitted a wholesale replacement (immediate).
    AdvancedSearch(Criteria),
    /// Header click or card-bar column pick.
    Sort(ColumnId),
    /// Card-bar direction pick.
    OrderPicked(SortOrder),
    PageChanged(usize),
    RowsPerPageChanged(usize),
    SelectAll(bool),
    ToggleRow(RecordId),
    /// Primary click on a row or card.
    RowActivated(RecordId),
    /// Press on a caller-described per-row action.
    RowActionPressed { record: RecordId, action: &'static str },
    SetViewMode(ViewMode),
    ToggleFilterBar,
    /// Toolbar delete icon; opens the confirmation dialog.
    DeleteRequested,
    DeleteConfirmed,
    DeleteCancelled,
    MarkSeenPressed,
    /// Caller-supplied toolbar action at `index` in `toolbar_menus`.
    CustomActionPressed(usize),
    /// Window resize forwarded by the host.
    ViewportResized { width: f32 },
}

/// Side effects the host should perform after handling a browser message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the canonical query against the backing collection and reply
    /// via [`State::apply_loaded`] with the same token.
    LoadRequested { token: u64, query: Query },
    /// Delete these records, then call [`State::refresh`].
    DeleteSelected(Vec<RecordId>),
    /// Mark these records as seen, then call [`State::refresh`].
    MarkSeenSelected(Vec<RecordId>),
    /// A caller-supplied toolbar action was pressed.
    CustomAction { index: usize, ids: Vec<RecordId> },
    /// A row or card was activated (preview).
    RowActivated(RecordId),
    /// A per-row action button was pressed.
    RowAction { record: RecordId, action: &'static str },
}

/// Environment required to render the browser.
#[derive(Debug, Clone, Copy)]
pub struct ViewEnv {
    /// Whether the host currently has a load in flight. Drives the
    /// loading placeholder in both views; supplied explicitly so the
    /// browser reads no ambient state.
    pub loading: bool,
}

/// Complete browser component state.
pub struct State {
    config: BrowserConfig,
    records: Vec<Record>,
    count: usize,
    pagination: Pagination,
    filters: Criteria,
    search: Criteria,
    selection: SelectionModel,
    view_mode: ViewMode,
    viewport_width: f32,
    wide: bool,
    filter_bar_open: bool,
    confirm_delete_open: bool,

    // Quick-search burst being coalesced; merged into `search` when the
    // debounce generation fires unchanged.
    pending_search: Criteria,
    debounce_generation: u64,

    // Request tokens: monotonically increasing per emission, so stale
    // loader responses can be discarded on arrival.
    last_issued_token: u64,
    last_applied_token: u64,
    // Token of the most recent criteria-changing emission; the first
    // accepted load at or past it reconciles the selection.
    reconcile_after: Option<u64>,
}

impl State {
    #[must_use]
    pub fn new(config: BrowserConfig) -> Self {
        let wide = config.viewport_width >= config.wide_breakpoint;
        let view_mode = if wide { ViewMode::Table } else { ViewMode::Card };
        Self {
            pagination: Pagination::new(config.order_by, config.rows_per_page),
            filters: config.default_filters.clone(),
            search: Criteria::new(),
            selection: SelectionModel::new(config.disabled_row_id.clone()),
            records: Vec::new(),
            count: 0,
            view_mode,
            viewport_width: config.viewport_width,
            wide,
            filter_bar_open: wide,
            confirm_delete_open: false,
            pending_search: Criteria::new(),
            debounce_generation: 0,
            last_issued_token: 0,
            last_applied_token: 0,
            reconcile_after: None,
            config,
        }
    }

    /// Emits the current canonical query. Called by the host once at boot
    /// and again after completing a bulk mutation.
    pub fn refresh(&mut self) -> Effect {
        self.emit(true)
    }

    /// Merges externally seeded filters (route state) and reloads.
    pub fn set_default_filters(&mut self, defaults: Criteria) -> Effect {
        for (key, value) in defaults {
            self.filters.insert(key, value);
        }
        self.pagination.current_page = 0;
        self.emit(true)
    }

    /// Accepts rows and total count for the load identified by `token`.
    ///
    /// Responses that are not newer than the last applied one are
    /// discarded, so a slow early reply cannot overwrite a fresh one.
    /// Returns `true` if the response was applied.
    pub fn apply_loaded(&mut self, token: u64, records: Vec<Record>, count: usize) -> bool {
        if token <= self.last_applied_token || token > self.last_issued_token {
            debug!(token, last_applied = self.last_applied_token, "discarding stale load response");
            return false;
        }
        self.last_applied_token = token;
        self.records = records;
        self.count = count;
        if let Some(after) = self.reconcile_after {
            if token >= after {
                let ids: Vec<RecordId> = self.records.iter().map(|r| r.id.clone()).collect();
                self.selection.retain_present(&ids);
                self.reconcile_after = None;
            }
        }
        true
    }

    pub fn update(&mut self, message: Message) -> (Task<Message>, Effect) {
        match message {
            Message::Search { field, value } => {
                self.pending_search.insert(field, FilterValue::Text(value));
                self.debounce_generation += 1;
                let generation = self.debounce_generation;
                let task = Task::perform(tokio::time::sleep(SEARCH_DEBOUNCE), move |()| {
                    Message::SearchDebounceElapsed(generation)
                });
                (task, Effect::None)
            }
            Message::SearchDebounceElapsed(generation) => {
                // A later keystroke restarted the timer; only the newest
                // generation commits.
                if generation != self.debounce_generation || self.pending_search.is_empty() {
                    return (Task::none(), Effect::None);
                }
                for (field, value) in std::mem::take(&mut self.pending_search) {
                    if value.is_empty_text() {
                        self.search.remove(&field);
                    } else {
                        self.search.insert(field, value);
                    }
                }
                self.pagination.current_page = 0;
                (Task::none(), self.emit(true))
            }
            Message::AdvancedSearch(values) => {
                // Supersedes any quick-search burst still in its window.
                self.debounce_generation += 1;
                self.pending_search.clear();
                self.search = values;
                self.pagination.current_page = 0;
                (Task::none(), self.emit(true))
            }
            Message::Sort(column) => {
                self.pagination.sort(column);
                (Task::none(), self.emit(true))
            }
            Message::OrderPicked(order) => {
                if self.pagination.set_order(order) {
                    (Task::none(), self.emit(true))
                } else {
                    (Task::none(), Effect::None)
                }
            }
            Message::PageChanged(page) => {
                self.pagination.set_page(page, self.count);
                (Task::none(), self.emit(false))
            }
            Message::RowsPerPageChanged(rows) => {
                self.pagination.set_rows_per_page(rows);
                (Task::none(), self.emit(false))
            }
            Message::SelectAll(checked) => {
                if checked {
                    let ids: Vec<RecordId> =
                        self.records.iter().map(|r| r.id.clone()).collect();
                    self.selection.select_all(&ids);
                } else {
                    self.selection.clear();
                }
                (Task::none(), Effect::None)
            }
            Message::ToggleRow(id) => {
                self.selection.toggle(id);
                (Task::none(), Effect::None)
            }
            Message::RowActivated(id) => (Task::none(), Effect::RowActivated(id)),
            Message::RowActionPressed { record, action } => {
                (Task::none(), Effect::RowAction { record, action })
            }
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
                (Task::none(), Effect::None)
            }
            Message::ToggleFilterBar => {
                self.filter_bar_open = !self.filter_bar_open;
                (Task::none(), Effect::None)
            }
            Message::DeleteRequested => {
                if self.config.can_delete && !self.selection.is_empty() {
                    self.confirm_delete_open = true;
                }
                (Task::none(), Effect::None)
            }
            Message::DeleteConfirmed => {
                self.confirm_delete_open = false;
                if self.config.can_delete && !self.selection.is_empty() {
                    (Task::none(), Effect::DeleteSelected(self.selection.ids()))
                } else {
                    (Task::none(), Effect::None)
                }
            }
            Message::DeleteCancelled => {
                self.confirm_delete_open = false;
                (Task::none(), Effect::None)
            }
            Message::MarkSeenPressed => {
                if self.config.can_update && !self.selection.is_empty() {
                    (Task::none(), Effect::MarkSeenSelected(self.selection.ids()))
                } else {
                    (Task::none(), Effect::None)
                }
            }
            Message::CustomActionPressed(index) => {
                if index < self.config.toolbar_menus.len() && !self.selection.is_empty() {
                    (
                        Task::none(),
                        Effect::CustomAction {
                            index,
                            ids: self.selection.ids(),
                        },
                    )
                } else {
                    (Task::none(), Effect::None)
                }
            }
            Message::ViewportResized { width } => {
                self.viewport_width = width;
                let wide = width >= self.config.wide_breakpoint;
                if wide != self.wide {
                    self.wide = wide;
                    if wide {
                        // The wide classification forces the table view,
                        // discarding a manual switch to cards.
                        self.view_mode = ViewMode::Table;
                    }
                }
                (Task::none(), Effect::None)
            }
        }
    }

    /// Builds the canonical query, bumps the request token and returns the
    /// load effect. `criteria_changed` marks emissions whose results must
    /// reconcile the selection (everything except pure pagination moves).
    fn emit(&mut self, criteria_changed: bool) -> Effect {
        self.last_issued_token += 1;
        let token = self.last_issued_token;
        if criteria_changed {
            self.reconcile_after = Some(token);
        }
        let query = self
            .pagination
            .to_query(self.filters.clone(), self.search.clone());
        debug_assert_eq!(query.skip, self.pagination.current_page * self.pagination.rows_per_page);
        debug!(
            token,
            skip = query.skip,
            limit = query.limit,
            order_by = %query.order_by,
            order = %query.order,
            "emitting canonical query"
        );
        Effect::LoadRequested { token, query }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn is_wide(&self) -> bool {
        self.wide
    }

    #[must_use]
    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete_open
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.config.labels
    }

    /// Current text for a quick-search field: the uncommitted burst value
    /// if one is pending, otherwise the committed search value. Lets the
    /// host's input widget reflect the controller without its own copy.
    #[must_use]
    pub fn search_text(&self, field: &str) -> &str {
        self.pending_search
            .get(field)
            .or_else(|| self.search.get(field))
            .and_then(FilterValue::as_text)
            .unwrap_or("")
    }

    /// True while any bulk-capable selection exists; the toolbar renders
    /// nothing otherwise.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Whether any bulk callback is wired at all; without one the
    /// selection checkboxes are hidden entirely.
    #[must_use]
    fn selectable(&self) -> bool {
        self.config.can_delete || self.config.can_update || !self.config.toolbar_menus.is_empty()
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    pub fn view(&self, env: ViewEnv) -> Element<'_, Message> {
        let ctx = BodyContext {
            columns: &self.config.head_cells,
            records: &self.records,
            selection: &self.selection,
            pagination: &self.pagination,
            count: self.count,
            loading: env.loading,
            selectable: self.selectable(),
            wide: self.wide,
            filter_bar_open: self.filter_bar_open,
            viewport_width: self.viewport_width,
            labels: &self.config.labels,
        };

        let body: Element<'_, Message> = match self.view_mode {
            ViewMode::Table => table::view(&ctx),
            ViewMode::Card => cards::view(&ctx),
        };

        let mut column = Column::new().spacing(crate::ui::design_tokens::spacing::SM);
        // Card mode carries its own switcher inside the filter bar.
        if self.view_mode == ViewMode::Table {
            column = column.push(self.view_switcher());
        }
        if let Some(bar) = toolbar::view(toolbar::ViewContext {
            selection: &self.selection,
            can_delete: self.config.can_delete,
            can_update: self.config.can_update,
            menus: &self.config.toolbar_menus,
            labels: &self.config.labels,
        }) {
            column = column.push(bar);
        }
        column = column.push(body);

        let base: Element<'_, Message> = column.width(Length::Fill).into();

        if self.confirm_delete_open {
            let backdrop = mouse_area(
                container(iced::widget::Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::overlay::backdrop),
            )
            .on_press(Message::DeleteCancelled);

            Stack::new()
                .push(base)
                .push(opaque(backdrop))
                .push(opaque(toolbar::confirm_dialog(
                    self.selection.len(),
                    &self.config.labels,
                )))
                .width(Length::Fill)
                .into()
        } else {
            base
        }
    }

    /// Table/card toggle buttons, right-aligned above the table body.
    fn view_switcher(&self) -> Element<'_, Message> {
        use crate::ui::design_tokens::{spacing, typography};
        use iced::widget::{button, Row, Space, Text};

        let style_for =
            |active: bool| -> fn(&iced::Theme, button::Status) -> button::Style {
                if active {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }
            };

        let table_button =
            button(Text::new(self.config.labels.table_view.as_str()).size(typography::BODY_SM))
                .on_press(Message::SetViewMode(ViewMode::Table))
                .padding([spacing::XXS, spacing::XS])
                .style(style_for(self.view_mode == ViewMode::Table));

        let card_button =
            button(Text::new(self.config.labels.card_view.as_str()).size(typography::BODY_SM))
                .on_press(Message::SetViewMode(ViewMode::Card))
                .padding([spacing::XXS, spacing::XS])
                .style(style_for(self.view_mode == ViewMode::Card));

        Row::new()
            .spacing(spacing::XXS)
            .push(Space::new().width(Length::Fill))
            .push(table_button)
            .push(card_button)
            .into()
    }
}

/// Shared rendering context handed to the table and card views.
pub(crate) struct BodyContext<'a> {
    pub columns: &'a [ColumnDescriptor],
    pub records: &'a [Record],
    pub selection: &'a SelectionModel,
    pub pagination: &'a Pagination,
    pub count: usize,
    pub loading: bool,
    pub selectable: bool,
    pub wide: bool,
    pub filter_bar_open: bool,
    pub viewport_width: f32,
    pub labels: &'a Labels,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::columns::{ColumnDescriptor, Record};

    const NAME: ColumnId = ColumnId::new("name");
    const UPDATED: ColumnId = ColumnId::new("updated_at");

    fn config() -> BrowserConfig {
        let mut config = BrowserConfig::new(
            vec![
                ColumnDescriptor::new(NAME, "Name"),
                ColumnDescriptor::new(UPDATED, "Updated"),
            ],
            NAME,
        );
        config.can_delete = true;
        config.can_update = true;
        config
    }

    fn record(id: &str) -> Record {
        Record::new(RecordId::new(id)).field(NAME, id)
    }

    fn load(state: &mut State, effect: &Effect, ids: &[&str], count: usize) {
        let Effect::LoadRequested { token, .. } = effect else {
            panic!("expected LoadRequested, got {effect:?}");
        };
        let records = ids.iter().map(|id| record(id)).collect();
        assert!(state.apply_loaded(*token, records, count));
    }

    #[test]
    fn refresh_emits_query_with_defaults() {
        let mut state = State::new(config());
        match state.refresh() {
            Effect::LoadRequested { token, query } => {
                assert_eq!(token, 1);
                assert_eq!(query.skip, 0);
                assert_eq!(query.limit, DEFAULT_ROWS_PER_PAGE);
                assert_eq!(query.order, SortOrder::Asc);
                assert_eq!(query.order_by, NAME);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn page_change_recomputes_skip_and_keeps_selection() {
        let mut state = State::new(config());
        let boot = state.refresh();
        load(&mut state, &boot, &["r1", "r2"], 23);
        state.update(Message::ToggleRow(RecordId::new("r1")));

        let (_, effect) = state.update(Message::PageChanged(1));
        match effect {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(query.skip, 10);
                assert_eq!(query.limit, 10);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert!(state.selection().contains(&RecordId::new("r1")));
    }

    #[tokio::test]
    async fn debounce_only_newest_generation_commits() {
        let mut state = State::new(config());

        let (_, e1) = state.update(Message::Search {
            field: "q".into(),
            value: "a".into(),
        });
        assert_eq!(e1, Effect::None);
        let (_, e2) = state.update(Message::Search {
            field: "q".into(),
            value: "ab".into(),
        });
        assert_eq!(e2, Effect::None);

        // The first timer fires late and is ignored.
        let (_, stale) = state.update(Message::SearchDebounceElapsed(1));
        assert_eq!(stale, Effect::None);

        let (_, fresh) = state.update(Message::SearchDebounceElapsed(2));
        match fresh {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(query.skip, 0);
                assert_eq!(
                    query.search.get("q"),
                    Some(&FilterValue::Text("ab".into()))
                );
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[tokio::test]
    async fn committing_empty_search_clears_the_field() {
        let mut state = State::new(config());
        state.update(Message::Search {
            field: "q".into(),
            value: "abc".into(),
        });
        state.update(Message::SearchDebounceElapsed(1));
        state.update(Message::Search {
            field: "q".into(),
            value: String::new(),
        });
        let (_, effect) = state.update(Message::SearchDebounceElapsed(2));
        match effect {
            Effect::LoadRequested { query, .. } => assert!(query.search.is_empty()),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[tokio::test]
    async fn advanced_search_is_immediate_and_wholesale() {
        let mut state = State::new(config());
        state.update(Message::Search {
            field: "q".into(),
            value: "typing".into(),
        });

        let mut values = Criteria::new();
        values.insert("status".into(), FilterValue::from("published"));
        let (_, effect) = state.update(Message::AdvancedSearch(values.clone()));
        match effect {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(query.skip, 0);
                assert_eq!(query.search, values);
            }
            other => panic!("unexpected effect {other:?}"),
        }

        // The superseded quick-search burst must never commit.
        let (_, stale) = state.update(Message::SearchDebounceElapsed(1));
        assert_eq!(stale, Effect::None);
    }

    #[test]
    fn sort_same_column_twice_flips_direction() {
        let mut state = State::new(config());
        let (_, first) = state.update(Message::Sort(UPDATED));
        match first {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(query.order_by, UPDATED);
                assert_eq!(query.order, SortOrder::Asc);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        let (_, second) = state.update(Message::Sort(UPDATED));
        match second {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(query.order_by, UPDATED);
                assert_eq!(query.order, SortOrder::Desc);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn select_all_excludes_disabled_row() {
        let mut cfg = config();
        cfg.disabled_row_id = Some(RecordId::new("r3"));
        let mut state = State::new(cfg);
        let boot = state.refresh();
        load(&mut state, &boot, &["r1", "r2", "r3"], 3);

        state.update(Message::SelectAll(true));
        assert_eq!(
            state.selection().ids(),
            vec![RecordId::new("r1"), RecordId::new("r2")]
        );
    }

    #[test]
    fn delete_flow_requires_explicit_confirmation() {
        let mut state = State::new(config());
        let boot = state.refresh();
        load(&mut state, &boot, &["r1"], 1);
        state.update(Message::ToggleRow(RecordId::new("r1")));

        let (_, opened) = state.update(Message::DeleteRequested);
        assert_eq!(opened, Effect::None);
        assert!(state.is_confirming_delete());

        // Dismissing the dialog fires no callback and keeps the selection.
        let (_, cancelled) = state.update(Message::DeleteCancelled);
        assert_eq!(cancelled, Effect::None);
        assert!(!state.is_confirming_delete());
        assert!(state.has_selection());

        state.update(Message::DeleteRequested);
        let (_, confirmed) = state.update(Message::DeleteConfirmed);
        assert_eq!(
            confirmed,
            Effect::DeleteSelected(vec![RecordId::new("r1")])
        );
    }

    #[test]
    fn mark_seen_is_gated_by_permission() {
        let mut cfg = config();
        cfg.can_update = false;
        let mut state = State::new(cfg);
        let boot = state.refresh();
        load(&mut state, &boot, &["r1"], 1);
        state.update(Message::ToggleRow(RecordId::new("r1")));

        let (_, effect) = state.update(Message::MarkSeenPressed);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn stale_load_response_is_discarded() {
        let mut state = State::new(config());
        let boot = state.refresh();
        let Effect::LoadRequested { token: t1, .. } = boot else {
            panic!()
        };
        let (_, next) = state.update(Message::PageChanged(0));
        let Effect::LoadRequested { token: t2, .. } = next else {
            panic!()
        };

        // The newer response lands first.
        assert!(state.apply_loaded(t2, vec![record("new")], 1));
        // The slow earlier response must not overwrite it.
        assert!(!state.apply_loaded(t1, vec![record("old")], 1));
        assert_eq!(state.records()[0].id, RecordId::new("new"));
    }

    #[test]
    fn criteria_change_reconciles_selection_against_loaded_ids() {
        let mut state = State::new(config());
        let boot = state.refresh();
        load(&mut state, &boot, &["r1", "r2"], 2);
        state.update(Message::SelectAll(true));

        let (_, sorted) = state.update(Message::Sort(UPDATED));
        load(&mut state, &sorted, &["r2", "r9"], 2);

        assert_eq!(state.selection().ids(), vec![RecordId::new("r2")]);
    }

    #[test]
    fn pagination_load_keeps_offpage_selection() {
        let mut state = State::new(config());
        let boot = state.refresh();
        load(&mut state, &boot, &["r1", "r2"], 23);
        state.update(Message::SelectAll(true));

        let (_, paged) = state.update(Message::PageChanged(1));
        load(&mut state, &paged, &["r11", "r12"], 23);

        assert!(state.selection().contains(&RecordId::new("r1")));
        assert!(state.selection().contains(&RecordId::new("r2")));
    }

    #[test]
    fn wide_transition_forces_table_view() {
        let mut cfg = config();
        cfg.viewport_width = 600.0;
        let mut state = State::new(cfg);
        assert_eq!(state.view_mode(), ViewMode::Card);

        state.update(Message::ViewportResized { width: 1200.0 });
        assert_eq!(state.view_mode(), ViewMode::Table);

        // Narrowing keeps the last choice instead of forcing cards back.
        state.update(Message::ViewportResized { width: 600.0 });
        assert_eq!(state.view_mode(), ViewMode::Table);

        // A manual switch while narrow survives further narrow resizes.
        state.update(Message::SetViewMode(ViewMode::Card));
        state.update(Message::ViewportResized { width: 500.0 });
        assert_eq!(state.view_mode(), ViewMode::Card);
    }

    #[tokio::test]
    async fn search_text_reflects_pending_burst() {
        let mut state = State::new(config());
        assert_eq!(state.search_text("q"), "");
        state.update(Message::Search {
            field: "q".into(),
            value: "dra".into(),
        });
        assert_eq!(state.search_text("q"), "dra");
        state.update(Message::SearchDebounceElapsed(1));
        assert_eq!(state.search_text("q"), "dra");
    }

    #[test]
    fn set_default_filters_merges_keeps_existing_and_resets_page() {
        let mut cfg = config();
        cfg.default_filters
            .insert("team".into(), FilterValue::from("ops"));
        let mut state = State::new(cfg);
        let boot = state.refresh();
        load(&mut state, &boot, &["r1", "r2"], 23);
        state.update(Message::PageChanged(1));

        let mut route = Criteria::new();
        route.insert("status".into(), FilterValue::from("draft"));
        match state.set_default_filters(route) {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(query.skip, 0);
                assert_eq!(
                    query.filters.get("team"),
                    Some(&FilterValue::Text("ops".into()))
                );
                assert_eq!(
                    query.filters.get("status"),
                    Some(&FilterValue::Text("draft".into()))
                );
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn default_filters_are_merged_and_emitted() {
        let mut cfg = config();
        cfg.default_filters
            .insert("status".into(), FilterValue::from("draft"));
        let mut state = State::new(cfg);
        match state.refresh() {
            Effect::LoadRequested { query, .. } => {
                assert_eq!(
                    query.filters.get("status"),
                    Some(&FilterValue::Text("draft".into()))
                );
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }
}
