// SPDX-License-Identifier: MPL-2.0
//! `iced_records` is an entity-agnostic record browser built with the Iced
//! GUI framework.
//!
//! The [`browser`] module renders any remote collection as a sortable,
//! paginated table or card grid with multi-row selection, debounced quick
//! search, advanced search and bulk actions, while delegating every data
//! fetch to the host. The [`app`] module is a complete host: an article
//! admin screen backed by an in-memory store.

#![doc(html_root_url = "https://docs.rs/iced_records/0.1.0")]

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod ui;
