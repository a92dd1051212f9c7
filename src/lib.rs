// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a transient-notification ("toast") engine for
//! applications built with the Iced GUI framework.
//!
//! Toasts are enqueued over a small per-container event bus, resolved
//! against a chain of defaults, tracked in a registry keyed by id, and
//! dismissed either by a pausable countdown, a click, or a horizontal
//! drag gesture.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod api;
pub mod bus;
pub mod config;
pub mod content;
pub mod drag;
pub mod error;
pub mod lifecycle;
pub mod options;
pub mod registry;
pub mod toast;
pub mod ui;
