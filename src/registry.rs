// SPDX-License-Identifier: MPL-2.0
//! Registry owning the id→toast mapping and the container defaults.
//!
//! The registry is the sole bus subscriber; its event handlers are the
//! only mutators and each one is synchronous and total: an operation
//! either applies wholly or is a no-op. Unknown ids, vetoed candidates,
//! and duplicate ids are all handled silently: notifications are a
//! best-effort affordance and the worst failure mode is a dropped or
//! stale toast, never a crash.

use crate::bus::{AddPayload, Event, EventKind, Handler, NotificationBus, UpdatePayload};
use crate::drag::{DragGesture, DragOutcome};
use crate::lifecycle::{PauseSource, PauseSources};
use crate::options::{ContainerOptions, ContainerUpdate, Position};
use crate::toast::{Toast, ToastId};
use iced::{Point, Rectangle};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

struct Inner {
    toasts: BTreeMap<ToastId, Toast>,
    options: ContainerOptions,
    next_id: u64,
    remount_epoch: u64,
    window_focused: bool,
}

/// Cheap handle to one registry instance.
///
/// Clones share the same state; independently constructed registries
/// share nothing, including the id counter.
#[derive(Clone)]
pub struct Registry {
    inner: Rc<RefCell<Inner>>,
    subscriptions: Rc<RefCell<Vec<(EventKind, Handler)>>>,
}

impl Registry {
    #[must_use]
    pub fn new(options: ContainerOptions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                toasts: BTreeMap::new(),
                options,
                next_id: 0,
                remount_epoch: 0,
                window_focused: true,
            })),
            subscriptions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Subscribes this registry's event handlers on `bus`.
    ///
    /// The handlers are remembered so [`Registry::detach`] can remove
    /// exactly what was added.
    pub fn attach(&self, bus: &dyn NotificationBus) {
        let mut subscriptions = self.subscriptions.borrow_mut();

        let inner = Rc::clone(&self.inner);
        let handler: Handler = Rc::new(move |event| {
            if let Event::Add(payload) = event {
                add(&inner, payload);
            }
        });
        bus.on(EventKind::Add, Rc::clone(&handler));
        subscriptions.push((EventKind::Add, handler));

        let inner = Rc::clone(&self.inner);
        let handler: Handler = Rc::new(move |event| {
            if let Event::Dismiss(id) = event {
                dismiss(&inner, *id);
            }
        });
        bus.on(EventKind::Dismiss, Rc::clone(&handler));
        subscriptions.push((EventKind::Dismiss, handler));

        let inner = Rc::clone(&self.inner);
        let handler: Handler = Rc::new(move |event| {
            if let Event::Update(payload) = event {
                update(&inner, payload);
            }
        });
        bus.on(EventKind::Update, Rc::clone(&handler));
        subscriptions.push((EventKind::Update, handler));

        let inner = Rc::clone(&self.inner);
        let handler: Handler = Rc::new(move |event| {
            if let Event::Clear = event {
                clear(&inner);
            }
        });
        bus.on(EventKind::Clear, Rc::clone(&handler));
        subscriptions.push((EventKind::Clear, handler));

        let inner = Rc::clone(&self.inner);
        let handler: Handler = Rc::new(move |event| {
            if let Event::UpdateDefaults(update) = event {
                update_defaults(&inner, update);
            }
        });
        bus.on(EventKind::UpdateDefaults, Rc::clone(&handler));
        subscriptions.push((EventKind::UpdateDefaults, handler));
    }

    /// Removes every handler a previous [`Registry::attach`] registered.
    pub fn detach(&self, bus: &dyn NotificationBus) {
        for (kind, handler) in self.subscriptions.borrow_mut().drain(..) {
            bus.off(kind, &handler);
        }
    }

    /// Hands out the next auto-generated id.
    #[must_use]
    pub fn allocate_id(&self) -> ToastId {
        let mut inner = self.inner.borrow_mut();
        let id = ToastId::new(inner.next_id);
        inner.next_id += 1;
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().toasts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.inner.borrow().toasts.contains_key(&id)
    }

    /// Snapshot of one toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.inner.borrow().toasts.get(&id).cloned()
    }

    /// Snapshot of every registered id, in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.inner.borrow().toasts.keys().copied().collect()
    }

    /// Current container configuration.
    #[must_use]
    pub fn options(&self) -> ContainerOptions {
        self.inner.borrow().options.clone()
    }

    /// Bumped whenever an `UpdateDefaults` changes the render target; the
    /// host re-mounts the overlay widget tree when it observes a new
    /// value. Registry contents survive the remount untouched.
    #[must_use]
    pub fn remount_epoch(&self) -> u64 {
        self.inner.borrow().remount_epoch
    }

    /// The toasts to render for one position: filtered through the
    /// display hook, truncated to `max_toasts`, and reversed when
    /// `newest_on_top` is set.
    ///
    /// Truncation is a display concern only; the registry may hold more
    /// entries for the position than this returns.
    #[must_use]
    pub fn position_toasts(&self, position: Position) -> Vec<Toast> {
        let (mut list, filter) = {
            let inner = self.inner.borrow();
            let list: Vec<Toast> = inner
                .toasts
                .values()
                .filter(|toast| toast.position() == position)
                .cloned()
                .collect();
            (list, inner.options.filter_toasts.clone())
        };
        if let Some(filter) = filter {
            list = filter.run(list);
        }
        let inner = self.inner.borrow();
        list.truncate(inner.options.max_toasts);
        if inner.options.newest_on_top {
            list.reverse();
        }
        list
    }

    /// Ids whose countdown has completed while running, as of `now`.
    ///
    /// The caller emits a dismiss for each; expiry itself never mutates.
    #[must_use]
    pub fn expired(&self, now: Instant) -> Vec<ToastId> {
        self.inner
            .borrow()
            .toasts
            .values()
            .filter(|toast| toast.lifecycle.is_expired_at(now))
            .map(Toast::id)
            .collect()
    }

    /// Whether any countdown is currently burning down.
    #[must_use]
    pub fn any_running(&self) -> bool {
        self.inner
            .borrow()
            .toasts
            .values()
            .any(Toast::is_running)
    }

    /// Pointer entered a toast. Pauses the countdown when the toast opted
    /// into `pause_on_hover`.
    pub fn hover_enter(&self, id: ToastId, now: Instant) {
        let mut inner = self.inner.borrow_mut();
        if let Some(toast) = inner.toasts.get_mut(&id) {
            toast.hovered = true;
            if toast.pause_on_hover() {
                toast.lifecycle.hold(PauseSource::Hover, now);
            }
        }
    }

    /// Pointer left a toast. Resumes unless another pause source is held.
    pub fn hover_leave(&self, id: ToastId, now: Instant) {
        let mut inner = self.inner.borrow_mut();
        if let Some(toast) = inner.toasts.get_mut(&id) {
            toast.hovered = false;
            toast.lifecycle.release(PauseSource::Hover, now);
        }
    }

    /// Window focus changed. Applies to every toast that opted into
    /// `pause_on_focus_loss`; the focus state is also remembered so toasts
    /// created while unfocused start paused.
    pub fn focus_changed(&self, focused: bool, now: Instant) {
        let mut inner = self.inner.borrow_mut();
        inner.window_focused = focused;
        for toast in inner.toasts.values_mut() {
            if !toast.pause_on_focus_loss() {
                continue;
            }
            if focused {
                toast.lifecycle.release(PauseSource::FocusLoss, now);
            } else {
                toast.lifecycle.hold(PauseSource::FocusLoss, now);
            }
        }
    }

    /// Starts a drag gesture for a draggable toast. Pauses the countdown
    /// unconditionally for the gesture's duration. Ignored when a gesture
    /// is already active; only one pointer is captured at a time.
    pub fn drag_start(&self, id: ToastId, origin: Point, bounds: Rectangle, now: Instant) {
        let mut inner = self.inner.borrow_mut();
        if let Some(toast) = inner.toasts.get_mut(&id) {
            if !toast.draggable() || toast.drag.is_some() {
                return;
            }
            toast.drag = Some(DragGesture::begin(origin, bounds, toast.draggable_percent()));
            toast.lifecycle.hold(PauseSource::Drag, now);
        }
    }

    /// Records pointer motion for an active gesture. Ignored when no
    /// gesture is active for the toast.
    pub fn drag_move(&self, id: ToastId, position: Point) {
        let mut inner = self.inner.borrow_mut();
        if let Some(toast) = inner.toasts.get_mut(&id) {
            if let Some(gesture) = toast.drag.as_mut() {
                gesture.update(position);
            }
        }
    }

    /// Ends an active gesture and returns its outcome, or `None` when no
    /// gesture was active.
    ///
    /// On [`DragOutcome::Dismiss`] the toast's exit transition is disabled
    /// (the element keeps its trajectory off-screen) and the caller emits
    /// the dismiss. On a snapback the toast stays paused only when the
    /// release point is still inside the recorded bounding box and the
    /// toast pauses on hover.
    pub fn drag_end(&self, id: ToastId, release: Point, now: Instant) -> Option<DragOutcome> {
        let mut inner = self.inner.borrow_mut();
        let toast = inner.toasts.get_mut(&id)?;
        let gesture = toast.drag.take()?;
        let outcome = gesture.finish(release);
        toast.lifecycle.release(PauseSource::Drag, now);
        match outcome {
            DragOutcome::Dismiss => {
                toast.exit_transition_enabled = false;
            }
            DragOutcome::Snapback { released_inside } => {
                toast.hovered = released_inside;
                if released_inside && toast.pause_on_hover() {
                    toast.lifecycle.hold(PauseSource::Hover, now);
                } else {
                    toast.lifecycle.release(PauseSource::Hover, now);
                }
            }
        }
        Some(outcome)
    }

    /// A click landed on the toast. Invokes `on_click` and reports
    /// whether the caller should dismiss: only when the toast closes on
    /// click and the pointer has not been dragged away from its press
    /// point.
    pub fn click(&self, id: ToastId) -> bool {
        let (callback, dismiss) = {
            let inner = self.inner.borrow();
            match inner.toasts.get(&id) {
                Some(toast) => {
                    let dragged_away = toast
                        .drag
                        .as_ref()
                        .is_some_and(|gesture| gesture.delta() != 0.0);
                    (toast.on_click(), toast.close_on_click() && !dragged_away)
                }
                None => return false,
            }
        };
        if let Some(callback) = callback {
            callback.invoke(id);
        }
        dismiss
    }
}

fn add(inner: &Rc<RefCell<Inner>>, payload: &AddPayload) {
    let (candidate, filter) = {
        let inner_ref = inner.borrow();
        let (toast_type, resolved) = inner_ref.options.resolve(&payload.options);

        // Toasts created while the window is unfocused start paused.
        let mut paused_by = PauseSources::default();
        if !inner_ref.window_focused && resolved.pause_on_focus_loss {
            paused_by.set(PauseSource::FocusLoss, true);
        }

        let candidate = Toast::from_resolved(
            payload.id,
            toast_type,
            payload.content.clone(),
            resolved,
            paused_by,
            Instant::now(),
        );
        (candidate, inner_ref.options.filter_before_create.clone())
    };

    let accepted = match filter {
        Some(filter) => {
            let current: Vec<Toast> = inner.borrow().toasts.values().cloned().collect();
            filter.run(candidate, &current)
        }
        None => Some(candidate),
    };

    // A vetoed candidate is dropped silently; a duplicate id overwrites
    // the previous entry (last write wins).
    if let Some(toast) = accepted {
        inner.borrow_mut().toasts.insert(toast.id(), toast);
    }
}

fn dismiss(inner: &Rc<RefCell<Inner>>, id: ToastId) {
    // Remove first, then fire the callback outside the borrow so an
    // `on_close` that re-enters the registry sees consistent state and
    // runs exactly once.
    let removed = inner.borrow_mut().toasts.remove(&id);
    if let Some(toast) = removed {
        toast.fire_close();
    }
}

fn clear(inner: &Rc<RefCell<Inner>>) {
    // Snapshot the ids before iterating; dismissal mutates the map.
    let ids: Vec<ToastId> = inner.borrow().toasts.keys().copied().collect();
    for id in ids {
        dismiss(inner, id);
    }
}

fn update(inner: &Rc<RefCell<Inner>>, payload: &UpdatePayload) {
    let synthesized = {
        let mut guard = inner.borrow_mut();
        match guard.toasts.get_mut(&payload.id) {
            Some(toast) => {
                let mut options = payload.options.clone();
                if let Some(requested) = options.timeout {
                    // An update carrying the stored timeout still has to
                    // restart the countdown observably, so the value is
                    // bumped by one millisecond before merging.
                    options.timeout = Some(toast.effective_update_timeout(requested));
                }
                if let Some(content) = &payload.content {
                    toast.set_content(content.clone());
                }
                toast.apply_options(&options, Instant::now());
                None
            }
            None if payload.create => Some(AddPayload {
                id: payload.id,
                content: payload
                    .content
                    .clone()
                    .unwrap_or_else(|| crate::content::ToastContent::Text(String::new())),
                options: payload.options.clone(),
            }),
            None => None,
        }
    };
    if let Some(payload) = synthesized {
        add(inner, &payload);
    }
}

fn update_defaults(inner: &Rc<RefCell<Inner>>, update: &ContainerUpdate) {
    let mut guard = inner.borrow_mut();
    if let Some(target) = &update.render_target {
        if *target != guard.options.render_target {
            guard.remount_epoch += 1;
        }
    }
    guard.options.apply(update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::LocalBus;
    use crate::content::ToastContent;
    use crate::options::{
        BeforeCreateFilter, DisplayFilter, RenderTarget, Timeout, ToastOptions, ToastType,
    };
    use crate::toast::ToastCallback;
    use iced::Size;
    use std::cell::Cell;
    use std::time::Duration;

    fn wired() -> (Registry, LocalBus) {
        let bus = LocalBus::new();
        let registry = Registry::new(ContainerOptions::default());
        registry.attach(&bus);
        (registry, bus)
    }

    fn add_event(registry: &Registry, options: ToastOptions) -> Event {
        Event::Add(AddPayload {
            id: registry.allocate_id(),
            content: ToastContent::Text("test".into()),
            options,
        })
    }

    #[test]
    fn add_stores_a_resolved_toast() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));

        assert_eq!(registry.len(), 1);
        let toast = registry.get(ToastId::new(0)).unwrap();
        assert_eq!(toast.position(), Position::TopRight);
        assert_eq!(toast.timeout(), Timeout::millis(5000));
        assert!(toast.is_running());
    }

    #[test]
    fn duplicate_id_overwrites_silently() {
        let (registry, bus) = wired();
        bus.emit(&Event::Add(AddPayload {
            id: ToastId::new(9),
            content: ToastContent::Text("first".into()),
            options: ToastOptions::new(),
        }));
        bus.emit(&Event::Add(AddPayload {
            id: ToastId::new(9),
            content: ToastContent::Text("second".into()),
            options: ToastOptions::new(),
        }));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(ToastId::new(9)).unwrap().content().text(),
            Some("second")
        );
    }

    #[test]
    fn before_create_filter_vetoes_silently() {
        let bus = LocalBus::new();
        let mut options = ContainerOptions::default();
        options.filter_before_create =
            Some(BeforeCreateFilter::new(|_candidate, _current| None));
        let registry = Registry::new(options);
        registry.attach(&bus);

        bus.emit(&add_event(&registry, ToastOptions::new()));
        assert!(registry.is_empty());
    }

    #[test]
    fn before_create_filter_transform_is_stored_exactly() {
        let bus = LocalBus::new();
        let mut options = ContainerOptions::default();
        options.filter_before_create = Some(BeforeCreateFilter::new(|mut candidate, _current| {
            candidate.set_content(ToastContent::Text("rewritten".into()));
            Some(candidate)
        }));
        let registry = Registry::new(options);
        registry.attach(&bus);

        bus.emit(&add_event(&registry, ToastOptions::new()));
        assert_eq!(
            registry.get(ToastId::new(0)).unwrap().content().text(),
            Some("rewritten")
        );
    }

    #[test]
    fn dismiss_unknown_id_leaves_registry_unchanged() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let before = registry.ids();

        bus.emit(&Event::Dismiss(ToastId::new(404)));
        assert_eq!(registry.ids(), before);
    }

    #[test]
    fn dismiss_invokes_on_close_once_then_deletes() {
        let (registry, bus) = wired();
        let calls = Rc::new(Cell::new(0));
        let calls_in_callback = Rc::clone(&calls);

        bus.emit(&add_event(
            &registry,
            ToastOptions::new().on_close(ToastCallback::new(move |_id| {
                calls_in_callback.set(calls_in_callback.get() + 1);
            })),
        ));

        bus.emit(&Event::Dismiss(ToastId::new(0)));
        bus.emit(&Event::Dismiss(ToastId::new(0)));

        assert!(registry.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clear_empties_and_fires_each_on_close_once() {
        let (registry, bus) = wired();
        let calls = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let calls_in_callback = Rc::clone(&calls);
            bus.emit(&add_event(
                &registry,
                ToastOptions::new().on_close(ToastCallback::new(move |_id| {
                    calls_in_callback.set(calls_in_callback.get() + 1);
                })),
            ));
        }
        bus.emit(&add_event(&registry, ToastOptions::new()));

        bus.emit(&Event::Clear);
        assert!(registry.is_empty());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn ids_stay_unique_across_operation_sequences() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        bus.emit(&add_event(&registry, ToastOptions::new()));
        bus.emit(&Event::Add(AddPayload {
            id: ToastId::new(1),
            content: ToastContent::Text("overwrite".into()),
            options: ToastOptions::new(),
        }));
        bus.emit(&Event::Dismiss(ToastId::new(0)));
        bus.emit(&add_event(&registry, ToastOptions::new()));

        let mut ids = registry.ids();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn update_merges_options_over_stored_toast() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));

        bus.emit(&Event::Update(UpdatePayload {
            id: ToastId::new(0),
            content: Some(ToastContent::Text("updated".into())),
            options: ToastOptions::new().rtl(true),
            create: false,
        }));

        let toast = registry.get(ToastId::new(0)).unwrap();
        assert_eq!(toast.content().text(), Some("updated"));
        assert!(toast.rtl());
        // Untouched fields survive the merge.
        assert_eq!(toast.timeout(), Timeout::millis(5000));
    }

    #[test]
    fn update_with_identical_timeout_stores_old_plus_one() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new().timeout_millis(3000)));

        bus.emit(&Event::Update(UpdatePayload {
            id: ToastId::new(0),
            content: None,
            options: ToastOptions::new().timeout_millis(3000),
            create: false,
        }));

        assert_eq!(
            registry.get(ToastId::new(0)).unwrap().timeout(),
            Timeout::After(Duration::from_millis(3001))
        );
    }

    #[test]
    fn update_with_different_timeout_stores_it_verbatim() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new().timeout_millis(3000)));

        bus.emit(&Event::Update(UpdatePayload {
            id: ToastId::new(0),
            content: None,
            options: ToastOptions::new().timeout_millis(4000),
            create: false,
        }));

        assert_eq!(
            registry.get(ToastId::new(0)).unwrap().timeout(),
            Timeout::millis(4000)
        );
    }

    #[test]
    fn update_unknown_id_without_create_is_a_no_op() {
        let (registry, bus) = wired();
        bus.emit(&Event::Update(UpdatePayload {
            id: ToastId::new(5),
            content: Some(ToastContent::Text("ghost".into())),
            options: ToastOptions::new(),
            create: false,
        }));
        assert!(registry.is_empty());
    }

    #[test]
    fn update_unknown_id_with_create_synthesizes_an_add() {
        let (registry, bus) = wired();
        bus.emit(&Event::Update(UpdatePayload {
            id: ToastId::new(5),
            content: Some(ToastContent::Text("born".into())),
            options: ToastOptions::new().toast_type(ToastType::Info),
            create: true,
        }));

        let toast = registry.get(ToastId::new(5)).unwrap();
        assert_eq!(toast.content().text(), Some("born"));
        assert_eq!(toast.toast_type(), ToastType::Info);
    }

    #[test]
    fn update_does_not_apply_type_bundles() {
        let bus = LocalBus::new();
        let mut options = ContainerOptions::default();
        options
            .toast_defaults
            .insert(ToastType::Error, ToastOptions::new().rtl(true));
        let registry = Registry::new(options);
        registry.attach(&bus);

        bus.emit(&add_event(&registry, ToastOptions::new()));
        bus.emit(&Event::Update(UpdatePayload {
            id: ToastId::new(0),
            content: None,
            options: ToastOptions::new().toast_type(ToastType::Error),
            create: false,
        }));

        let toast = registry.get(ToastId::new(0)).unwrap();
        assert_eq!(toast.toast_type(), ToastType::Error);
        // The per-type bundle only applies on creation.
        assert!(!toast.rtl());
    }

    #[test]
    fn position_toasts_truncates_but_registry_keeps_everything() {
        let (registry, bus) = wired();
        bus.emit(&Event::UpdateDefaults(
            ContainerUpdate::new().max_toasts(2),
        ));
        for _ in 0..3 {
            bus.emit(&add_event(&registry, ToastOptions::new()));
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.position_toasts(Position::TopRight).len(), 2);
    }

    #[test]
    fn position_toasts_reverses_when_newest_on_top() {
        let (registry, bus) = wired();
        for _ in 0..3 {
            bus.emit(&add_event(&registry, ToastOptions::new()));
        }

        let newest_first = registry.position_toasts(Position::TopRight);
        assert_eq!(newest_first[0].id(), ToastId::new(2));

        bus.emit(&Event::UpdateDefaults(
            ContainerUpdate::new().newest_on_top(false),
        ));
        let oldest_first = registry.position_toasts(Position::TopRight);
        assert_eq!(oldest_first[0].id(), ToastId::new(0));
    }

    #[test]
    fn position_toasts_only_returns_matching_position() {
        let (registry, bus) = wired();
        bus.emit(&add_event(
            &registry,
            ToastOptions::new().position(Position::BottomLeft),
        ));
        bus.emit(&add_event(&registry, ToastOptions::new()));

        assert_eq!(registry.position_toasts(Position::BottomLeft).len(), 1);
        assert_eq!(registry.position_toasts(Position::TopRight).len(), 1);
        assert_eq!(registry.position_toasts(Position::TopCenter).len(), 0);
    }

    #[test]
    fn display_filter_reorders_without_mutating() {
        let bus = LocalBus::new();
        let mut options = ContainerOptions::default();
        options.newest_on_top = false;
        options.filter_toasts = Some(DisplayFilter::new(|toasts| {
            toasts
                .into_iter()
                .filter(|toast| toast.toast_type() == ToastType::Error)
                .collect()
        }));
        let registry = Registry::new(options);
        registry.attach(&bus);

        bus.emit(&add_event(&registry, ToastOptions::new()));
        bus.emit(&add_event(
            &registry,
            ToastOptions::new().toast_type(ToastType::Error),
        ));

        let displayed = registry.position_toasts(Position::TopRight);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id(), ToastId::new(1));
        // Display filtering never touches the registry itself.
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn update_defaults_applies_to_future_toasts_only() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));

        bus.emit(&Event::UpdateDefaults(ContainerUpdate::new().toast(
            ToastOptions::new().timeout(Timeout::Disabled),
        )));
        bus.emit(&add_event(&registry, ToastOptions::new()));

        assert_eq!(
            registry.get(ToastId::new(0)).unwrap().timeout(),
            Timeout::millis(5000)
        );
        assert_eq!(
            registry.get(ToastId::new(1)).unwrap().timeout(),
            Timeout::Disabled
        );
    }

    #[test]
    fn render_target_change_bumps_remount_epoch_and_keeps_toasts() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        assert_eq!(registry.remount_epoch(), 0);

        bus.emit(&Event::UpdateDefaults(
            ContainerUpdate::new().render_target(RenderTarget::Named("sidebar".into())),
        ));
        assert_eq!(registry.remount_epoch(), 1);
        assert_eq!(registry.len(), 1);

        // Re-sending the same target is not a change.
        bus.emit(&Event::UpdateDefaults(
            ContainerUpdate::new().render_target(RenderTarget::Named("sidebar".into())),
        ));
        assert_eq!(registry.remount_epoch(), 1);
    }

    #[test]
    fn expired_reports_only_completed_running_countdowns() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new().timeout_millis(1000)));
        bus.emit(&add_event(&registry, ToastOptions::new().timeout(Timeout::Disabled)));

        let later = Instant::now() + Duration::from_millis(1500);
        assert_eq!(registry.expired(later), vec![ToastId::new(0)]);
    }

    #[test]
    fn disabled_timeout_never_expires() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new().timeout(Timeout::Disabled)));

        let much_later = Instant::now() + Duration::from_secs(3600);
        assert!(registry.expired(much_later).is_empty());
    }

    #[test]
    fn hover_pauses_and_resumes_the_countdown() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.hover_enter(ToastId::new(0), now);
        assert!(!registry.get(ToastId::new(0)).unwrap().is_running());
        assert!(registry.get(ToastId::new(0)).unwrap().is_hovered());

        registry.hover_leave(ToastId::new(0), now);
        assert!(registry.get(ToastId::new(0)).unwrap().is_running());
    }

    #[test]
    fn hover_does_not_pause_when_opted_out() {
        let (registry, bus) = wired();
        bus.emit(&add_event(
            &registry,
            ToastOptions::new().pause_on_hover(false),
        ));

        registry.hover_enter(ToastId::new(0), Instant::now());
        let toast = registry.get(ToastId::new(0)).unwrap();
        assert!(toast.is_hovered());
        assert!(toast.is_running());
    }

    #[test]
    fn focus_loss_pauses_opted_in_toasts() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        bus.emit(&add_event(
            &registry,
            ToastOptions::new().pause_on_focus_loss(false),
        ));
        let now = Instant::now();

        registry.focus_changed(false, now);
        assert!(!registry.get(ToastId::new(0)).unwrap().is_running());
        assert!(registry.get(ToastId::new(1)).unwrap().is_running());

        registry.focus_changed(true, now);
        assert!(registry.get(ToastId::new(0)).unwrap().is_running());
    }

    #[test]
    fn toast_created_while_unfocused_starts_paused() {
        let (registry, bus) = wired();
        registry.focus_changed(false, Instant::now());

        bus.emit(&add_event(&registry, ToastOptions::new()));
        assert!(!registry.get(ToastId::new(0)).unwrap().is_running());

        registry.focus_changed(true, Instant::now());
        assert!(registry.get(ToastId::new(0)).unwrap().is_running());
    }

    #[test]
    fn hover_leave_keeps_paused_while_focus_is_lost() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.hover_enter(ToastId::new(0), now);
        registry.focus_changed(false, now);
        registry.hover_leave(ToastId::new(0), now);

        assert!(!registry.get(ToastId::new(0)).unwrap().is_running());
    }

    fn bounds_100_wide() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 40.0))
    }

    #[test]
    fn drag_at_threshold_commits_dismissal() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.drag_start(ToastId::new(0), Point::new(10.0, 20.0), bounds_100_wide(), now);
        registry.drag_move(ToastId::new(0), Point::new(69.0, 20.0));
        let outcome = registry.drag_end(ToastId::new(0), Point::new(70.0, 20.0), now);

        assert_eq!(outcome, Some(DragOutcome::Dismiss));
        // The gesture marks the toast, the caller performs the dismissal.
        let toast = registry.get(ToastId::new(0)).unwrap();
        assert!(!toast.exit_transition_enabled());
    }

    #[test]
    fn drag_below_threshold_snaps_back_and_keeps_the_toast() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.drag_start(ToastId::new(0), Point::new(10.0, 20.0), bounds_100_wide(), now);
        let outcome = registry.drag_end(ToastId::new(0), Point::new(69.0, 20.0), now);

        assert_eq!(
            outcome,
            Some(DragOutcome::Snapback {
                released_inside: true
            })
        );
        assert!(registry.contains(ToastId::new(0)));
        assert!(registry.get(ToastId::new(0)).unwrap().exit_transition_enabled());
    }

    #[test]
    fn drag_pauses_unconditionally_and_snapback_inside_stays_paused() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.drag_start(ToastId::new(0), Point::new(10.0, 20.0), bounds_100_wide(), now);
        assert!(!registry.get(ToastId::new(0)).unwrap().is_running());

        // Released inside the box with pause_on_hover: stays paused.
        registry.drag_end(ToastId::new(0), Point::new(30.0, 20.0), now);
        assert!(!registry.get(ToastId::new(0)).unwrap().is_running());
    }

    #[test]
    fn snapback_outside_the_box_resumes() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.drag_start(ToastId::new(0), Point::new(10.0, 20.0), bounds_100_wide(), now);
        registry.drag_end(ToastId::new(0), Point::new(40.0, 300.0), now);

        assert!(registry.get(ToastId::new(0)).unwrap().is_running());
    }

    #[test]
    fn drag_events_without_active_gesture_are_ignored() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.drag_move(ToastId::new(0), Point::new(50.0, 20.0));
        assert_eq!(registry.drag_end(ToastId::new(0), Point::new(50.0, 20.0), now), None);
        assert!(registry.get(ToastId::new(0)).unwrap().is_running());
    }

    #[test]
    fn non_draggable_toast_ignores_drag_start() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new().draggable(false)));

        registry.drag_start(
            ToastId::new(0),
            Point::new(10.0, 20.0),
            bounds_100_wide(),
            Instant::now(),
        );
        assert!(!registry.get(ToastId::new(0)).unwrap().is_dragging());
    }

    #[test]
    fn click_invokes_on_click_and_requests_dismissal() {
        let (registry, bus) = wired();
        let clicks = Rc::new(Cell::new(0));
        let clicks_in_callback = Rc::clone(&clicks);
        bus.emit(&add_event(
            &registry,
            ToastOptions::new().on_click(ToastCallback::new(move |_id| {
                clicks_in_callback.set(clicks_in_callback.get() + 1);
            })),
        ));

        assert!(registry.click(ToastId::new(0)));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn click_does_not_dismiss_mid_drag() {
        let (registry, bus) = wired();
        bus.emit(&add_event(&registry, ToastOptions::new()));
        let now = Instant::now();

        registry.drag_start(ToastId::new(0), Point::new(10.0, 20.0), bounds_100_wide(), now);
        registry.drag_move(ToastId::new(0), Point::new(25.0, 20.0));

        assert!(!registry.click(ToastId::new(0)));
    }

    #[test]
    fn detach_removes_exactly_the_attached_handlers() {
        let bus = LocalBus::new();
        let registry = Registry::new(ContainerOptions::default());
        registry.attach(&bus);
        assert_eq!(bus.handler_count(EventKind::Add), 1);

        registry.detach(&bus);
        assert_eq!(bus.handler_count(EventKind::Add), 0);
        assert_eq!(bus.handler_count(EventKind::Dismiss), 0);

        // Events after detach no longer reach the registry.
        bus.emit(&Event::Add(AddPayload {
            id: ToastId::new(0),
            content: ToastContent::Text("orphan".into()),
            options: ToastOptions::new(),
        }));
        assert!(registry.is_empty());
    }

    #[test]
    fn independent_registries_do_not_share_id_counters() {
        let first = Registry::new(ContainerOptions::default());
        let second = Registry::new(ContainerOptions::default());

        assert_eq!(first.allocate_id(), ToastId::new(0));
        assert_eq!(first.allocate_id(), ToastId::new(1));
        assert_eq!(second.allocate_id(), ToastId::new(0));
    }
}
