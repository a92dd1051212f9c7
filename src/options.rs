// SPDX-License-Identifier: MPL-2.0
//! Option bundles and the defaults-resolution chain.
//!
//! Toast configuration is resolved from four layers, lowest to highest
//! precedence: built-in defaults, container defaults (mutable at runtime
//! via `UpdateDefaults`), the per-type bundle in
//! [`ContainerOptions::toast_defaults`] (applied on creation only), and the
//! options passed at the call site. Merging is shallow: a higher layer
//! replaces a field wholesale, including nested values such as
//! [`Accessibility`].

use crate::config::{
    DEFAULT_CLOSE_BUTTON_LABEL, DEFAULT_DRAGGABLE_PERCENT, DEFAULT_MAX_TOASTS, DEFAULT_TIMEOUT_MS,
    DEFAULT_TOAST_ROLE, DEFAULT_TRANSITION_MS, MAX_DRAGGABLE_PERCENT, MIN_DRAGGABLE_PERCENT,
};
use crate::toast::{Toast, ToastCallback};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Semantic category of a toast, driving its accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ToastType {
    /// Neutral message with no semantic accent.
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

/// Screen-anchor region where a toast queue renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All six anchor regions, in rendering order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns true for the three top-anchored regions.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

/// Auto-dismiss countdown duration, or disabled entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// The toast never auto-dismisses.
    Disabled,
    /// The toast auto-dismisses after this much running time.
    After(Duration),
}

impl Timeout {
    /// Creates an enabled timeout from milliseconds.
    #[must_use]
    pub fn millis(ms: u64) -> Self {
        Timeout::After(Duration::from_millis(ms))
    }

    /// Returns the countdown duration, or `None` when disabled.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Timeout::Disabled => None,
            Timeout::After(duration) => Some(duration),
        }
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        matches!(self, Timeout::Disabled)
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Timeout::millis(DEFAULT_TIMEOUT_MS)
    }
}

/// Fraction of the toast width a drag must cover to commit a dismissal.
///
/// This newtype enforces validity at the type level: the value is always
/// within `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggablePercent(f32);

impl DraggablePercent {
    /// Creates a new drag fraction, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_DRAGGABLE_PERCENT, MAX_DRAGGABLE_PERCENT))
    }

    /// Returns the fraction as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DraggablePercent {
    fn default() -> Self {
        Self(DEFAULT_DRAGGABLE_PERCENT)
    }
}

/// Icon shown at the leading edge of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconSetting {
    /// A per-type glyph chosen by the built-in view.
    #[default]
    Auto,
    /// A literal text glyph.
    Text(String),
    /// A host-rendered component, referenced by name.
    Component(String),
    /// No icon.
    Hidden,
}

/// Close button rendered at the trailing edge of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CloseButtonSetting {
    /// The built-in close button.
    #[default]
    Auto,
    /// A host-rendered component, referenced by name.
    Component(String),
    /// No close button.
    Hidden,
}

/// Accessibility labels announced for a toast.
///
/// Replaced wholesale when overridden; the merge chain never combines
/// individual fields from different layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessibility {
    /// Role announced for the toast body.
    pub toast_role: String,
    /// Label announced for the close button.
    pub close_button_label: String,
}

impl Default for Accessibility {
    fn default() -> Self {
        Self {
            toast_role: DEFAULT_TOAST_ROLE.to_string(),
            close_button_label: DEFAULT_CLOSE_BUTTON_LABEL.to_string(),
        }
    }
}

/// Named layer or surface the toast overlay renders into.
///
/// The engine never touches the target itself; changing it via
/// [`ContainerUpdate`] bumps the registry's remount epoch so the host knows
/// to rebuild the overlay widget tree in the new place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderTarget {
    /// The application's root window surface.
    #[default]
    Root,
    /// A host-defined named layer.
    Named(String),
}

/// Hook consulted before a toast enters the registry.
///
/// Returning `None` silently drops the candidate; returning a transformed
/// toast stores that toast exactly.
#[derive(Clone)]
pub struct BeforeCreateFilter(Rc<dyn Fn(Toast, &[Toast]) -> Option<Toast>>);

impl BeforeCreateFilter {
    pub fn new(filter: impl Fn(Toast, &[Toast]) -> Option<Toast> + 'static) -> Self {
        Self(Rc::new(filter))
    }

    #[must_use]
    pub fn run(&self, candidate: Toast, current: &[Toast]) -> Option<Toast> {
        (self.0)(candidate, current)
    }
}

impl fmt::Debug for BeforeCreateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BeforeCreateFilter(..)")
    }
}

/// Display-only hook over the toasts of one position.
///
/// Runs on clones; it can drop or reorder entries for rendering but never
/// mutates the registry.
#[derive(Clone)]
pub struct DisplayFilter(Rc<dyn Fn(Vec<Toast>) -> Vec<Toast>>);

impl DisplayFilter {
    pub fn new(filter: impl Fn(Vec<Toast>) -> Vec<Toast> + 'static) -> Self {
        Self(Rc::new(filter))
    }

    #[must_use]
    pub fn run(&self, toasts: Vec<Toast>) -> Vec<Toast> {
        (self.0)(toasts)
    }
}

impl fmt::Debug for DisplayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayFilter(..)")
    }
}

/// Per-call toast options. Every field is optional; unset fields fall
/// through to the lower layers of the defaults chain.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub toast_type: Option<ToastType>,
    pub position: Option<Position>,
    pub timeout: Option<Timeout>,
    pub hide_progress_bar: Option<bool>,
    pub close_on_click: Option<bool>,
    pub pause_on_hover: Option<bool>,
    pub pause_on_focus_loss: Option<bool>,
    pub draggable: Option<bool>,
    pub draggable_percent: Option<DraggablePercent>,
    pub icon: Option<IconSetting>,
    pub close_button: Option<CloseButtonSetting>,
    pub show_close_button_on_hover: Option<bool>,
    pub accessibility: Option<Accessibility>,
    pub rtl: Option<bool>,
    pub toast_class: Option<Vec<String>>,
    pub body_class: Option<Vec<String>>,
    pub on_click: Option<ToastCallback>,
    pub on_close: Option<ToastCallback>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = Some(toast_type);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets an enabled timeout from milliseconds.
    #[must_use]
    pub fn timeout_millis(self, ms: u64) -> Self {
        self.timeout(Timeout::millis(ms))
    }

    #[must_use]
    pub fn hide_progress_bar(mut self, hide: bool) -> Self {
        self.hide_progress_bar = Some(hide);
        self
    }

    #[must_use]
    pub fn close_on_click(mut self, close: bool) -> Self {
        self.close_on_click = Some(close);
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = Some(pause);
        self
    }

    #[must_use]
    pub fn pause_on_focus_loss(mut self, pause: bool) -> Self {
        self.pause_on_focus_loss = Some(pause);
        self
    }

    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    #[must_use]
    pub fn draggable_percent(mut self, percent: DraggablePercent) -> Self {
        self.draggable_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: IconSetting) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn close_button(mut self, close_button: CloseButtonSetting) -> Self {
        self.close_button = Some(close_button);
        self
    }

    #[must_use]
    pub fn show_close_button_on_hover(mut self, show: bool) -> Self {
        self.show_close_button_on_hover = Some(show);
        self
    }

    #[must_use]
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = Some(rtl);
        self
    }

    #[must_use]
    pub fn toast_class(mut self, classes: Vec<String>) -> Self {
        self.toast_class = Some(classes);
        self
    }

    #[must_use]
    pub fn body_class(mut self, classes: Vec<String>) -> Self {
        self.body_class = Some(classes);
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: ToastCallback) -> Self {
        self.on_click = Some(callback);
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: ToastCallback) -> Self {
        self.on_close = Some(callback);
        self
    }
}

/// Fully-resolved per-toast defaults.
///
/// The container holds one of these as the base layer; resolution clones it
/// and overlays the per-type bundle and the call-site options.
#[derive(Debug, Clone)]
pub struct ToastDefaults {
    pub position: Position,
    pub timeout: Timeout,
    pub hide_progress_bar: bool,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub pause_on_focus_loss: bool,
    pub draggable: bool,
    pub draggable_percent: DraggablePercent,
    pub icon: IconSetting,
    pub close_button: CloseButtonSetting,
    pub show_close_button_on_hover: bool,
    pub accessibility: Accessibility,
    pub rtl: bool,
    pub toast_class: Vec<String>,
    pub body_class: Vec<String>,
    pub on_click: Option<ToastCallback>,
    pub on_close: Option<ToastCallback>,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            position: Position::default(),
            timeout: Timeout::default(),
            hide_progress_bar: false,
            close_on_click: true,
            pause_on_hover: true,
            pause_on_focus_loss: true,
            draggable: true,
            draggable_percent: DraggablePercent::default(),
            icon: IconSetting::default(),
            close_button: CloseButtonSetting::default(),
            show_close_button_on_hover: false,
            accessibility: Accessibility::default(),
            rtl: false,
            toast_class: Vec::new(),
            body_class: Vec::new(),
            on_click: None,
            on_close: None,
        }
    }
}

impl ToastDefaults {
    /// Overlays the set fields of `options` onto this bundle.
    ///
    /// The merge is shallow: nested values such as `accessibility` are
    /// replaced wholesale.
    pub fn apply(&mut self, options: &ToastOptions) {
        if let Some(position) = options.position {
            self.position = position;
        }
        if let Some(timeout) = options.timeout {
            self.timeout = timeout;
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
}

/// Resolved container-level configuration.
#[derive(Debug, Clone)]
pub struct ContainerOptions {
    /// Display limit per position. Overflow is silently hidden, not removed.
    pub max_toasts: usize,
    /// Render each position's queue in reverse insertion order.
    pub newest_on_top: bool,
    /// Class-name hooks for the container element.
    pub container_class: Vec<String>,
    /// Layer or surface the overlay renders into.
    pub render_target: RenderTarget,
    /// Exit transition duration handed to the host (in milliseconds).
    pub transition_millis: u64,
    /// Base per-toast defaults.
    pub defaults: ToastDefaults,
    /// Per-type override bundles, applied on creation only.
    pub toast_defaults: BTreeMap<ToastType, ToastOptions>,
    /// Hook vetoing or transforming candidates before they are stored.
    pub filter_before_create: Option<BeforeCreateFilter>,
    /// Display-only hook over each position's toasts.
    pub filter_toasts: Option<DisplayFilter>,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            newest_on_top: true,
            container_class: Vec::new(),
            render_target: RenderTarget::default(),
            transition_millis: DEFAULT_TRANSITION_MS,
            defaults: ToastDefaults::default(),
            toast_defaults: BTreeMap::new(),
            filter_before_create: None,
            filter_toasts: None,
        }
    }
}

impl ContainerOptions {
    /// Resolves the defaults chain for one creation call.
    ///
    /// Precedence, lowest to highest: this container's defaults, the
    /// per-type bundle for the resolved type, then `options` itself.
    #[must_use]
    pub fn resolve(&self, options: &ToastOptions) -> (ToastType, ToastDefaults) {
        let toast_type = options.toast_type.unwrap_or_default();
        let mut resolved = self.defaults.clone();
        if let Some(bundle) = self.toast_defaults.get(&toast_type) {
            resolved.apply(bundle);
        }
        resolved.apply(options);
        (toast_type, resolved)
    }

    /// Overlays the set fields of `update` onto this configuration.
    pub fn apply(&mut self, update: &ContainerUpdate) {
        if let Some(max_toasts) = update.max_toasts {
            self.max_toasts = max_toasts;
        }
        if let Some(newest) = update.newest_on_top {
            self.newest_on_top = newest;
        }
        if let Some(classes) = &update.container_class {
            self.container_class = classes.clone();
        }
        if let Some(target) = &update.render_target {
            self.render_target = target.clone();
        }
        if let Some(transition) = update.transition_millis {
            self.transition_millis = transition;
        }
        self.defaults.apply(&update.toast);
        if let Some(bundles) = &update.toast_defaults {
            self.toast_defaults = bundles.clone();
        }
        if let Some(filter) = &update.filter_before_create {
            self.filter_before_create = Some(filter.clone());
        }
        if let Some(filter) = &update.filter_toasts {
            self.filter_toasts = Some(filter.clone());
        }
    }
}

/// Partial container configuration carried by an `UpdateDefaults` event.
///
/// Applies to toasts created afterwards; existing registry entries are
/// never retroactively altered.
#[derive(Debug, Clone, Default)]
pub struct ContainerUpdate {
    pub max_toasts: Option<usize>,
    pub newest_on_top: Option<bool>,
    pub container_class: Option<Vec<String>>,
    pub render_target: Option<RenderTarget>,
    pub transition_millis: Option<u64>,
    /// Partial per-toast defaults merged into the container's base layer.
    pub toast: ToastOptions,
    pub toast_defaults: Option<BTreeMap<ToastType, ToastOptions>>,
    pub filter_before_create: Option<BeforeCreateFilter>,
    pub filter_toasts: Option<DisplayFilter>,
}

impl ContainerUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = Some(max_toasts);
        self
    }

    #[must_use]
    pub fn newest_on_top(mut self, newest: bool) -> Self {
        self.newest_on_top = Some(newest);
        self
    }

    #[must_use]
    pub fn render_target(mut self, target: RenderTarget) -> Self {
        self.render_target = Some(target);
        self
    }

    #[must_use]
    pub fn toast(mut self, toast: ToastOptions) -> Self {
        self.toast = toast;
        self
    }

    #[must_use]
    pub fn toast_defaults(mut self, bundles: BTreeMap<ToastType, ToastOptions>) -> Self {
        self.toast_defaults = Some(bundles);
        self
    }

    #[must_use]
    pub fn filter_before_create(mut self, filter: BeforeCreateFilter) -> Self {
        self.filter_before_create = Some(filter);
        self
    }

    #[must_use]
    pub fn filter_toasts(mut self, filter: DisplayFilter) -> Self {
        self.filter_toasts = Some(filter);
        self
    }
}
