// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes are the only native events the shell cares about: the
//! browser needs the viewport width to keep its breakpoint class current.

use super::{App, Message};
use iced::{event, Subscription};

pub(super) fn subscription(_app: &App) -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}
