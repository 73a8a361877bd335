// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::data::Status;
use crate::browser;
use crate::browser::Record;
use crate::ui::theming::ThemeMode;
use std::fmt;

/// Launch parameters parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configuration directory.
    pub config_dir: Option<String>,
    /// Overrides the persisted theme mode for this session.
    pub theme: Option<ThemeMode>,
    /// Seeds a status filter at boot, as a route parameter would.
    pub status: Option<String>,
}

/// Status choice offered by the advanced-search dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChoice {
    Any,
    Only(Status),
}

impl StatusChoice {
    pub const ALL: [StatusChoice; 4] = [
        StatusChoice::Any,
        StatusChoice::Only(Status::Draft),
        StatusChoice::Only(Status::Published),
        StatusChoice::Only(Status::Archived),
    ];
}

impl fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusChoice::Any => f.write_str("any status"),
            StatusChoice::Only(status) => status.fmt(f),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A message owned by the record browser.
    Browser(browser::Message),
    /// The loader finished the query issued under `token`.
    Loaded {
        token: u64,
        records: Vec<Record>,
        count: usize,
    },
    /// Draft change in the advanced-search form; nothing reloads until
    /// the form is applied.
    StatusDraftPicked(StatusChoice),
    FilterApply,
    FilterReset,
    ToggleSearchPanel,
    WindowResized(iced::Size),
}
