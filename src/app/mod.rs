// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the record browser.
//!
//! The `App` owns the article store and plays the loader role: it turns
//! every `LoadRequested` effect into an asynchronous query against the
//! store and feeds the reply back through the browser's `apply_loaded`.
//! Policy decisions (window sizing, which bulk actions are wired, config
//! persistence) stay close to the update loop so user-facing behavior is
//! easy to audit.

pub mod data;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, StatusChoice};

use crate::browser::{
    self, BrowserConfig, ColumnDescriptor, Criteria, FilterValue, RecordId, ToolbarMenu,
};
use crate::config::{self, Config};
use data::ArticleStore;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Label of the one caller-supplied toolbar action.
const EXPORT_MENU_LABEL: &str = "Export selection";

/// The seeded welcome article stays undeletable.
const PINNED_ARTICLE_ID: &str = "a-001";

pub struct App {
    store: ArticleStore,
    browser: browser::State,
    config: Config,
    config_dir: Option<String>,
    /// True while a load issued to the store has not been applied yet.
    loading: bool,
    search_panel_open: bool,
    /// Uncommitted advanced-search form state.
    status_draft: StatusChoice,
    /// Title of the last activated article, shown in the status line.
    last_opened: Option<String>,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced takes the boot closure as Fn, so the one-shot flags hand-off
    // goes through a RefCell<Option<_>>.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot closure invoked twice");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn article_columns() -> Vec<ColumnDescriptor> {
    use crate::browser::Align;
    vec![
        ColumnDescriptor::new(data::TITLE, "Title"),
        ColumnDescriptor::new(data::AUTHOR, "Author").align(Align::Left),
        ColumnDescriptor::new(data::STATUS, "Status").align(Align::Center).width(110.0),
        ColumnDescriptor::new(data::VIEWS, "Views").numeric().width(80.0),
        ColumnDescriptor::new(data::SEEN, "Seen").align(Align::Center).width(70.0),
        ColumnDescriptor::new(data::UPDATED_AT, "Updated").width(150.0),
    ]
}

impl App {
    /// Initializes the store and browser from `Flags` and kicks off the
    /// first load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load(flags.config_dir.as_deref()).unwrap_or_default();
        if let Some(theme) = flags.theme {
            config.theme_mode = theme;
        }

        let mut browser_config = BrowserConfig::new(article_columns(), data::UPDATED_AT);
        browser_config.can_delete = true;
        browser_config.can_update = true;
        browser_config.disabled_row_id = Some(RecordId::new(PINNED_ARTICLE_ID));
        browser_config.toolbar_menus = vec![ToolbarMenu::new(EXPORT_MENU_LABEL, "⇩")];
        let wide_breakpoint = config.effective_wide_breakpoint();
        browser_config.rows_per_page = config.effective_rows_per_page();
        browser_config.wide_breakpoint = wide_breakpoint;
        browser_config.viewport_width = WINDOW_DEFAULT_WIDTH as f32;

        // Route state: the --status flag stands in for filters an outer
        // screen would push down, so it flows through the merge path.
        let mut route_filters = Criteria::new();
        if let Some(status) = &flags.status {
            route_filters.insert("status".to_string(), FilterValue::from(status.clone()));
        }

        let mut app = App {
            store: ArticleStore::seeded(),
            browser: browser::State::new(browser_config),
            config,
            config_dir: flags.config_dir,
            loading: false,
            // Open by default when the window starts wide.
            search_panel_open: WINDOW_DEFAULT_WIDTH as f32 >= wide_breakpoint,
            status_draft: initial_status_draft(flags.status.as_deref()),
            last_opened: None,
        };

        let boot_effect = if route_filters.is_empty() {
            app.browser.refresh()
        } else {
            app.browser.set_default_filters(route_filters)
        };
        let task = update::run_effect(&mut app, boot_effect);
        (app, task)
    }

    fn title(&self) -> String {
        "Iced Records".to_string()
    }

    fn theme(&self) -> Theme {
        self.config.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

fn initial_status_draft(status: Option<&str>) -> StatusChoice {
    StatusChoice::ALL
        .into_iter()
        .find(|choice| match choice {
            StatusChoice::Only(s) => Some(s.as_str()) == status,
            StatusChoice::Any => false,
        })
        .unwrap_or(StatusChoice::Any)
}
