// SPDX-License-Identifier: MPL-2.0
//! Iced view layer for the toast engine.
//!
//! This module renders registry state and translates pointer, focus, and
//! timer activity into [`Message`] values the host forwards to
//! `Container::handle_message`.
//!
//! # Components
//!
//! - [`toast_view`] - Widget for a single toast card
//! - [`overlay`] - Position-bucketed overlay over the whole window
//! - [`subscription`] - Countdown tick and window-focus subscriptions
//! - [`style`] - Accent palette and style functions
//!
//! # Usage
//!
//! ```ignore
//! // In the application's view:
//! let toasts = iced_toaster::ui::overlay::view(container.registry(), Instant::now())
//!     .map(Message::Toast);
//!
//! // In the application's update:
//! Message::Toast(inner) => container.handle_message(&inner),
//!
//! // In the application's subscriptions:
//! iced_toaster::ui::subscription::ticks(container.registry()).map(Message::Toast)
//! ```
//!
//! Hover, click, and tick wiring is owned by these widgets and lives
//! exactly as long as the toast does. Drag geometry is the one thing the
//! engine cannot observe on its own: hosts with draggable toasts forward
//! `DragStarted`/`DragMoved`/`DragEnded` from their own hit-testing.

pub mod overlay;
pub mod style;
pub mod subscription;
pub mod toast_view;

use crate::toast::ToastId;
use iced::{Point, Rectangle};
use std::time::Instant;

/// Messages produced by the toast widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by id.
    Dismiss(ToastId),
    /// The toast body was clicked.
    Clicked(ToastId),
    /// The pointer entered a toast.
    HoverEntered(ToastId),
    /// The pointer left a toast.
    HoverLeft(ToastId),
    /// The host window gained or lost focus.
    FocusChanged(bool),
    /// A drag gesture started over a toast.
    DragStarted {
        id: ToastId,
        origin: Point,
        bounds: Rectangle,
    },
    /// The pointer moved during an active gesture.
    DragMoved { id: ToastId, position: Point },
    /// The pointer was released, ending an active gesture.
    DragEnded { id: ToastId, position: Point },
    /// Periodic tick for sweeping expired countdowns.
    Tick(Instant),
}
