// SPDX-License-Identifier: MPL-2.0
//! Update loop: browser message routing and effect execution.
//!
//! The browser never touches the store. Its effects land here, where the
//! app queries or mutates the [`ArticleStore`] and answers loads through
//! `apply_loaded` with the token the request was issued under.

use super::data::OPEN_ACTION;
use super::{App, Message, StatusChoice};
use crate::browser::{self, Criteria, Effect, FilterValue};
use crate::config;
use iced::Task;
use tracing::{info, warn};

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Browser(message) => {
            persist_preferences(app, &message);
            let (task, effect) = app.browser.update(message);
            Task::batch(vec![task.map(Message::Browser), run_effect(app, effect)])
        }
        Message::Loaded {
            token,
            records,
            count,
        } => {
            if app.browser.apply_loaded(token, records, count) {
                app.loading = false;
            }
            Task::none()
        }
        Message::StatusDraftPicked(choice) => {
            app.status_draft = choice;
            Task::none()
        }
        Message::FilterApply => {
            let mut criteria = Criteria::new();
            if let StatusChoice::Only(status) = app.status_draft {
                criteria.insert("status".to_string(), FilterValue::from(status.as_str()));
            }
            handle(
                app,
                Message::Browser(browser::Message::AdvancedSearch(criteria)),
            )
        }
        Message::FilterReset => {
            app.status_draft = StatusChoice::Any;
            handle(
                app,
                Message::Browser(browser::Message::AdvancedSearch(Criteria::new())),
            )
        }
        Message::ToggleSearchPanel => {
            app.search_panel_open = !app.search_panel_open;
            Task::none()
        }
        Message::WindowResized(size) => handle(
            app,
            Message::Browser(browser::Message::ViewportResized { width: size.width }),
        ),
    }
}

/// Executes one browser effect against the store.
pub(super) fn run_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::LoadRequested { token, query } => {
            app.loading = true;
            let (records, count) = app.store.query(&query);
            Task::perform(async move { (records, count) }, move |(records, count)| {
                Message::Loaded {
                    token,
                    records,
                    count,
                }
            })
        }
        Effect::DeleteSelected(ids) => {
            app.store.delete(&ids);
            info!(deleted = ids.len(), "deleted selected articles");
            let refresh = app.browser.refresh();
            run_effect(app, refresh)
        }
        Effect::MarkSeenSelected(ids) => {
            app.store.mark_seen(&ids);
            let refresh = app.browser.refresh();
            run_effect(app, refresh)
        }
        Effect::CustomAction { index: 0, ids } => {
            // The only wired menu is the export action.
            info!(articles = ids.len(), "exporting selection");
            Task::none()
        }
        Effect::CustomAction { index, .. } => {
            warn!(index, "unknown toolbar action");
            Task::none()
        }
        Effect::RowActivated(id) => {
            app.last_opened = app.store.get(&id).map(|article| article.title.clone());
            Task::none()
        }
        Effect::RowAction { record, action } if action == OPEN_ACTION => {
            app.last_opened = app.store.get(&record).map(|article| article.title.clone());
            Task::none()
        }
        Effect::RowAction { record, action } => {
            warn!(%record, action, "unknown row action");
            Task::none()
        }
    }
}

/// Writes browser preference changes back to the config file before the
/// message reaches the component.
fn persist_preferences(app: &mut App, message: &browser::Message) {
    if let browser::Message::RowsPerPageChanged(rows) = message {
        app.config.rows_per_page = Some(*rows);
        if let Err(err) = config::save(&app.config, app.config_dir.as_deref()) {
            warn!(%err, "failed to persist rows-per-page preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::data;
    use crate::app::Flags;
    use crate::browser::{Pagination, Query, RecordId, SortOrder};
    use tempfile::TempDir;

    fn boot_app(dir: &TempDir) -> App {
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _) = App::new(flags);
        app
    }

    /// The query the constructor emits under token 1.
    fn boot_query() -> Query {
        Pagination::new(data::UPDATED_AT, 10).to_query(Criteria::new(), Criteria::new())
    }

    fn reply(app: &mut App, token: u64, query: &Query) {
        let (records, count) = app.store.query(query);
        handle(
            app,
            Message::Loaded {
                token,
                records,
                count,
            },
        );
    }

    #[test]
    fn boot_load_round_trip_populates_the_browser() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        assert!(app.loading);

        reply(&mut app, 1, &boot_query());
        assert!(!app.loading);
        assert_eq!(app.browser.count(), 23);
        assert_eq!(app.browser.records().len(), 10);
    }

    #[test]
    fn confirmed_delete_mutates_the_store_and_refreshes() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        let victim = app.browser.records()[1].id.clone();
        handle(&mut app, Message::Browser(browser::Message::ToggleRow(victim.clone())));
        handle(&mut app, Message::Browser(browser::Message::DeleteRequested));
        handle(&mut app, Message::Browser(browser::Message::DeleteConfirmed));

        assert_eq!(app.store.len(), 22);
        assert!(app.store.get(&victim).is_none());
        // The confirmed delete triggered a refresh.
        assert!(app.loading);
    }

    #[test]
    fn mark_seen_round_trip_updates_the_rendered_rows() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        let id = app.browser.records()[0].id.clone();
        handle(&mut app, Message::Browser(browser::Message::ToggleRow(id.clone())));
        handle(&mut app, Message::Browser(browser::Message::MarkSeenPressed));
        assert!(app.store.get(&id).expect("article exists").seen);

        // Refresh was issued under token 2.
        reply(&mut app, 2, &boot_query());
        let row = app
            .browser
            .records()
            .iter()
            .find(|r| r.id == id)
            .expect("row still present");
        assert_eq!(
            row.get(data::SEEN).map(crate::browser::CellValue::render),
            Some("yes".to_string())
        );
    }

    #[test]
    fn filter_apply_commits_the_draft_and_reset_clears_it() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        handle(
            &mut app,
            Message::StatusDraftPicked(StatusChoice::Only(data::Status::Draft)),
        );
        assert!(!app.loading);

        handle(&mut app, Message::FilterApply);
        assert!(app.loading);

        let mut search = Criteria::new();
        search.insert("status".into(), FilterValue::from("draft"));
        let query = Pagination::new(data::UPDATED_AT, 10).to_query(Criteria::new(), search);
        reply(&mut app, 2, &query);
        assert!(app.browser.count() < 23);

        handle(&mut app, Message::FilterReset);
        assert_eq!(app.status_draft, StatusChoice::Any);
        reply(&mut app, 3, &boot_query());
        assert_eq!(app.browser.count(), 23);
    }

    #[test]
    fn row_activation_records_the_opened_title() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        let id = app.browser.records()[0].id.clone();
        handle(&mut app, Message::Browser(browser::Message::RowActivated(id.clone())));
        assert_eq!(
            app.last_opened.as_deref(),
            Some(app.store.get(&id).unwrap().title.as_str())
        );
    }

    #[test]
    fn open_row_action_behaves_like_activation() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        let id = app.browser.records()[2].id.clone();
        handle(
            &mut app,
            Message::Browser(browser::Message::RowActionPressed {
                record: id.clone(),
                action: OPEN_ACTION,
            }),
        );
        assert!(app.last_opened.is_some());
    }

    #[test]
    fn rows_per_page_change_is_persisted() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        handle(
            &mut app,
            Message::Browser(browser::Message::RowsPerPageChanged(25)),
        );
        let flag = dir.path().to_string_lossy().into_owned();
        let saved = config::load(Some(&flag)).expect("load config");
        assert_eq!(saved.rows_per_page, Some(25));
    }

    #[test]
    fn resize_below_breakpoint_keeps_table_until_switched() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);

        handle(
            &mut app,
            Message::WindowResized(iced::Size::new(600.0, 700.0)),
        );
        assert!(!app.browser.is_wide());
        assert_eq!(app.browser.view_mode(), crate::browser::ViewMode::Table);

        handle(
            &mut app,
            Message::Browser(browser::Message::SetViewMode(crate::browser::ViewMode::Card)),
        );
        handle(
            &mut app,
            Message::WindowResized(iced::Size::new(1200.0, 700.0)),
        );
        assert_eq!(app.browser.view_mode(), crate::browser::ViewMode::Table);
    }

    #[test]
    fn pinned_article_never_enters_the_selection() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);

        // Title descending puts the pinned welcome article on page one.
        handle(&mut app, Message::Browser(browser::Message::Sort(data::TITLE)));
        handle(&mut app, Message::Browser(browser::Message::Sort(data::TITLE)));
        let mut pagination = Pagination::new(data::TITLE, 10);
        pagination.order = SortOrder::Desc;
        let query = pagination.to_query(Criteria::new(), Criteria::new());
        reply(&mut app, 3, &query);
        assert!(app
            .browser
            .records()
            .iter()
            .any(|r| r.id == RecordId::new("a-001")));

        handle(&mut app, Message::Browser(browser::Message::SelectAll(true)));
        assert!(!app
            .browser
            .selection()
            .contains(&RecordId::new("a-001")));
        assert_eq!(app.browser.selection().len(), 9);
    }

    #[test]
    fn stale_reply_cannot_overwrite_a_fresh_one() {
        let dir = TempDir::new().expect("temp dir");
        let mut app = boot_app(&dir);
        reply(&mut app, 1, &boot_query());

        // Two reloads in flight: sort (2) then page change (3).
        handle(&mut app, Message::Browser(browser::Message::Sort(data::VIEWS)));
        handle(&mut app, Message::Browser(browser::Message::PageChanged(0)));

        let mut sorted = Pagination::new(data::VIEWS, 10);
        sorted.order = SortOrder::Asc;
        let query = sorted.to_query(Criteria::new(), Criteria::new());

        reply(&mut app, 3, &query);
        assert!(!app.loading);

        let before = app.browser.records().to_vec();
        reply(&mut app, 2, &query);
        assert_eq!(app.browser.records(), before.as_slice());
    }
}
