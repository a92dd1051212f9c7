// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] entity, its [`ToastId`], and the
//! callback handle used for `on_click`/`on_close` hooks.

use crate::content::ToastContent;
use crate::drag::DragGesture;
use crate::lifecycle::{Lifecycle, PauseSources};
use crate::options::{
    Accessibility, CloseButtonSetting, DraggablePercent, IconSetting, Position, Timeout,
    ToastDefaults, ToastOptions, ToastType,
};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Unique identifier for a toast within one registry instance.
///
/// Auto-generated ids count up from zero per registry; callers may also
/// supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host callback invoked with the toast's id.
///
/// Callbacks run synchronously inside the emitting call; a panicking
/// callback propagates to the emitter.
#[derive(Clone)]
pub struct ToastCallback(Rc<dyn Fn(ToastId)>);

impl ToastCallback {
    pub fn new(callback: impl Fn(ToastId) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn invoke(&self, id: ToastId) {
        (self.0)(id);
    }
}

impl fmt::Debug for ToastCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToastCallback(..)")
    }
}

/// One registered notification.
///
/// Fields are resolved once, at creation time, from the defaults chain.
/// `position` never changes afterwards; everything else can be rewritten
/// by an update.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    toast_type: ToastType,
    content: ToastContent,
    position: Position,
    timeout: Timeout,
    hide_progress_bar: bool,
    close_on_click: bool,
    pause_on_hover: bool,
    pause_on_focus_loss: bool,
    draggable: bool,
    draggable_percent: DraggablePercent,
    icon: IconSetting,
    close_button: CloseButtonSetting,
    show_close_button_on_hover: bool,
    accessibility: Accessibility,
    rtl: bool,
    toast_class: Vec<String>,
    body_class: Vec<String>,
    on_click: Option<ToastCallback>,
    on_close: Option<ToastCallback>,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) drag: Option<DragGesture>,
    pub(crate) hovered: bool,
    pub(crate) exit_transition_enabled: bool,
}

impl Toast {
    /// Builds a toast from a fully-resolved option bundle.
    #[must_use]
    pub fn from_resolved(
        id: ToastId,
        toast_type: ToastType,
        content: ToastContent,
        resolved: ToastDefaults,
        paused_by: PauseSources,
        now: Instant,
    ) -> Self {
        let lifecycle = Lifecycle::new(resolved.timeout, paused_by, now);
        Self {
            id,
            toast_type,
            content,
            position: resolved.position,
            timeout: resolved.timeout,
            hide_progress_bar: resolved.hide_progress_bar,
            close_on_click: resolved.close_on_click,
            pause_on_hover: resolved.pause_on_hover,
            pause_on_focus_loss: resolved.pause_on_focus_loss,
            draggable: resolved.draggable,
            draggable_percent: resolved.draggable_percent,
            icon: resolved.icon,
            close_button: resolved.close_button,
            show_close_button_on_hover: resolved.show_close_button_on_hover,
            accessibility: resolved.accessibility,
            rtl: resolved.rtl,
            toast_class: resolved.toast_class,
            body_class: resolved.body_class,
            on_click: resolved.on_click,
            on_close: resolved.on_close,
            lifecycle,
            drag: None,
            hovered: false,
            exit_transition_enabled: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast_type(&self) -> ToastType {
        self.toast_type
    }

    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    #[must_use]
    pub fn hide_progress_bar(&self) -> bool {
        self.hide_progress_bar
    }

    #[must_use]
    pub fn close_on_click(&self) -> bool {
        self.close_on_click
    }

    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    #[must_use]
    pub fn pause_on_focus_loss(&self) -> bool {
        self.pause_on_focus_loss
    }

    #[must_use]
    pub fn draggable(&self) -> bool {
        self.draggable
    }

    #[must_use]
    pub fn draggable_percent(&self) -> DraggablePercent {
        self.draggable_percent
    }

    #[must_use]
    pub fn icon(&self) -> &IconSetting {
        &self.icon
    }

    #[must_use]
    pub fn close_button(&self) -> &CloseButtonSetting {
        &self.close_button
    }

    #[must_use]
    pub fn show_close_button_on_hover(&self) -> bool {
        self.show_close_button_on_hover
    }

    #[must_use]
    pub fn accessibility(&self) -> &Accessibility {
        &self.accessibility
    }

    #[must_use]
    pub fn rtl(&self) -> bool {
        self.rtl
    }

    #[must_use]
    pub fn toast_class(&self) -> &[String] {
        &self.toast_class
    }

    #[must_use]
    pub fn body_class(&self) -> &[String] {
        &self.body_class
    }

    /// Whether the countdown is currently burning down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    /// Whether the pointer is currently over the toast.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Horizontal drag displacement, or zero with no active gesture.
    #[must_use]
    pub fn drag_delta(&self) -> f32 {
        self.drag.as_ref().map_or(0.0, DragGesture::delta)
    }

    /// Drag feedback opacity, or full opacity with no active gesture.
    #[must_use]
    pub fn drag_opacity(&self) -> f32 {
        self.drag.as_ref().map_or(1.0, DragGesture::opacity)
    }

    /// Whether the host should play the normal exit transition on removal.
    /// Cleared when a drag gesture commits a dismissal.
    #[must_use]
    pub fn exit_transition_enabled(&self) -> bool {
        self.exit_transition_enabled
    }

    /// Countdown fraction remaining, or `None` when the timeout is disabled.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Option<f32> {
        self.lifecycle.progress_at(now)
    }

    #[must_use]
    pub(crate) fn on_click(&self) -> Option<ToastCallback> {
        self.on_click.clone()
    }

    /// Invokes `on_close`, if present. The registry calls this exactly
    /// once, after the entry has been removed.
    pub(crate) fn fire_close(&self) {
        if let Some(callback) = &self.on_close {
            callback.invoke(self.id);
        }
    }

    pub(crate) fn set_content(&mut self, content: ToastContent) {
        self.content = content;
    }

    /// Shallow-merges update options over the stored fields.
    ///
    /// `position` is immutable after creation and is deliberately not
    /// merged. A supplied timeout re-arms the countdown.
    pub(crate) fn apply_options(&mut self, options: &ToastOptions, now: Instant) {
        if let Some(toast_type) = options.toast_type {
            self.toast_type = toast_type;
        }
        if let Some(timeout) = options.timeout {
            self.timeout = timeout;
            self.lifecycle.restart(timeout, now);
        }
        if let Some(hide) = options.hide_progress_bar {
            self.hide_progress_bar = hide;
        }
        if let Some(close) = options.close_on_click {
            self.close_on_click = close;
        }
        if let Some(pause) = options.pause_on_hover {
            self.pause_on_hover = pause;
        }
        if let Some(pause) = options.pause_on_focus_loss {
            self.pause_on_focus_loss = pause;
        }
        if let Some(draggable) = options.draggable {
            self.draggable = draggable;
        }
        if let Some(percent) = options.draggable_percent {
            self.draggable_percent = percent;
        }
        if let Some(icon) = &options.icon {
            self.icon = icon.clone();
        }
        if let Some(close_button) = &options.close_button {
            self.close_button = close_button.clone();
        }
        if let Some(show) = options.show_close_button_on_hover {
            self.show_close_button_on_hover = show;
        }
        if let Some(accessibility) = &options.accessibility {
            self.accessibility = accessibility.clone();
        }
        if let Some(rtl) = options.rtl {
            self.rtl = rtl;
        }
        if let Some(classes) = &options.toast_class {
            self.toast_class = classes.clone();
        }
        if let Some(classes) = &options.body_class {
            self.body_class = classes.clone();
        }
        if let Some(callback) = &options.on_click {
            self.on_click = Some(callback.clone());
        }
        if let Some(callback) = &options.on_close {
            self.on_close = Some(callback.clone());
        }
    }

    /// Bumps a timeout that did not nominally change so the countdown
    /// restart is still observable: an update carrying the stored value is
    /// rewritten to `stored + 1ms` before merging.
    #[must_use]
    pub(crate) fn effective_update_timeout(&self, requested: Timeout) -> Timeout {
        match (requested, self.timeout) {
            (Timeout::After(new), Timeout::After(old)) if new == old => {
                Timeout::After(old + Duration::from_millis(1))
            }
            _ => requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn resolved() -> ToastDefaults {
        ToastDefaults::default()
    }

    fn toast(id: u64) -> Toast {
        Toast::from_resolved(
            ToastId::new(id),
            ToastType::Default,
            ToastContent::Text("hello".into()),
            resolved(),
            PauseSources::default(),
            Instant::now(),
        )
    }

    #[test]
    fn new_toast_runs_with_enabled_timeout() {
        let toast = toast(0);
        assert!(toast.is_running());
        assert!(!toast.is_dragging());
        assert!(toast.exit_transition_enabled());
    }

    #[test]
    fn fire_close_invokes_callback_with_id() {
        let seen = Rc::new(Cell::new(None));
        let seen_in_callback = Rc::clone(&seen);

        let mut resolved = resolved();
        resolved.on_close = Some(ToastCallback::new(move |id| {
            seen_in_callback.set(Some(id));
        }));
        let toast = Toast::from_resolved(
            ToastId::new(7),
            ToastType::Info,
            ToastContent::Text("bye".into()),
            resolved,
            PauseSources::default(),
            Instant::now(),
        );

        toast.fire_close();
        assert_eq!(seen.get(), Some(ToastId::new(7)));
    }

    #[test]
    fn apply_options_skips_position() {
        let mut toast = toast(0);
        let original = toast.position();
        toast.apply_options(
            &ToastOptions::new().position(Position::BottomLeft),
            Instant::now(),
        );
        assert_eq!(toast.position(), original);
    }

    #[test]
    fn equal_timeout_update_bumps_by_one_millisecond() {
        let toast = toast(0);
        assert_eq!(
            toast.effective_update_timeout(Timeout::millis(5000)),
            Timeout::After(Duration::from_millis(5001))
        );
    }

    #[test]
    fn different_timeout_update_is_stored_verbatim() {
        let toast = toast(0);
        assert_eq!(
            toast.effective_update_timeout(Timeout::millis(1234)),
            Timeout::millis(1234)
        );
    }

    #[test]
    fn disabled_timeout_update_is_not_bumped() {
        let mut toast = toast(0);
        toast.apply_options(&ToastOptions::new().timeout(Timeout::Disabled), Instant::now());
        assert_eq!(
            toast.effective_update_timeout(Timeout::Disabled),
            Timeout::Disabled
        );
    }

    #[test]
    fn timeout_update_rearms_the_countdown() {
        let mut toast = toast(0);
        let now = Instant::now();
        toast.apply_options(&ToastOptions::new().timeout_millis(250), now);

        assert_eq!(toast.timeout(), Timeout::millis(250));
        assert!(toast.lifecycle.is_expired_at(now + Duration::from_millis(250)));
    }
}
