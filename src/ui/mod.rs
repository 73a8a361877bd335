// SPDX-License-Identifier: MPL-2.0
//! Shared user interface infrastructure.
//!
//! The record browser components follow the Elm-style "state down,
//! messages up" pattern; this module carries the styling layer they and
//! the host application share.
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
