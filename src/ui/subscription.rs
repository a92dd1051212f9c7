// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions driving countdowns and focus pauses.
//!
//! The tick subscription is active only while some countdown is running;
//! expiry exactness comes from the countdown's own instant arithmetic,
//! not from the sweep cadence.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::registry::Registry;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Periodic tick for sweeping expired countdowns.
pub fn ticks(registry: &Registry) -> Subscription<Message> {
    if registry.any_running() {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps window focus changes to pause/resume messages.
///
/// Hosts that already listen to window events can instead forward
/// [`Message::FocusChanged`] themselves.
pub fn focus_events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Focused) => Some(Message::FocusChanged(true)),
        event::Event::Window(window::Event::Unfocused) => Some(Message::FocusChanged(false)),
        _ => None,
    })
}
