// SPDX-License-Identifier: MPL-2.0
//! Process-local publish/subscribe channel for toast events.
//!
//! Each container owns its own bus; injecting the bus explicitly is what
//! lets several independent notification areas coexist without
//! cross-talk. Dispatch is synchronous and in registration order, with no
//! isolation between handlers: a panicking handler aborts the remaining
//! handlers for that emit and propagates to the emitter.

use crate::content::ToastContent;
use crate::options::{ContainerUpdate, ToastOptions};
use crate::toast::ToastId;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A toast event carried over the bus.
#[derive(Debug, Clone)]
pub enum Event {
    Add(AddPayload),
    Dismiss(ToastId),
    Update(UpdatePayload),
    Clear,
    UpdateDefaults(ContainerUpdate),
}

impl Event {
    /// The subscription key this event dispatches under.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Add(_) => EventKind::Add,
            Event::Dismiss(_) => EventKind::Dismiss,
            Event::Update(_) => EventKind::Update,
            Event::Clear => EventKind::Clear,
            Event::UpdateDefaults(_) => EventKind::UpdateDefaults,
        }
    }
}

/// Discriminant of [`Event`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Add,
    Dismiss,
    Update,
    Clear,
    UpdateDefaults,
}

/// Payload of an [`Event::Add`].
#[derive(Debug, Clone)]
pub struct AddPayload {
    pub id: ToastId,
    pub content: ToastContent,
    pub options: ToastOptions,
}

/// Payload of an [`Event::Update`].
#[derive(Debug, Clone)]
pub struct UpdatePayload {
    pub id: ToastId,
    /// Replacement content, if any.
    pub content: Option<ToastContent>,
    /// Options shallow-merged over the stored toast.
    pub options: ToastOptions,
    /// Synthesize an add when the id is not registered.
    pub create: bool,
}

/// A subscribed event handler. Identity (the `Rc` allocation) is what
/// [`NotificationBus::off`] matches on.
pub type Handler = Rc<dyn Fn(&Event)>;

/// The bus contract: ordered subscription, identity-based removal,
/// synchronous dispatch.
pub trait NotificationBus {
    /// Appends `handler` to the list for `kind`. Duplicates are allowed
    /// and each registration is invoked separately.
    fn on(&self, kind: EventKind, handler: Handler);

    /// Removes the first handler identical to `handler`. No-op when the
    /// handler was never registered.
    fn off(&self, kind: EventKind, handler: &Handler);

    /// Invokes every handler registered for the event's kind, in
    /// registration order.
    fn emit(&self, event: &Event);
}

/// Default single-threaded bus implementation.
#[derive(Default)]
pub struct LocalBus {
    handlers: RefCell<BTreeMap<EventKind, Vec<Handler>>>,
}

impl LocalBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers currently registered for `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers
            .borrow()
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

impl NotificationBus for LocalBus {
    fn on(&self, kind: EventKind, handler: Handler) {
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    fn off(&self, kind: EventKind, handler: &Handler) {
        let mut handlers = self.handlers.borrow_mut();
        if let Some(list) = handlers.get_mut(&kind) {
            if let Some(index) = list.iter().position(|h| Rc::ptr_eq(h, handler)) {
                list.remove(index);
            }
        }
    }

    fn emit(&self, event: &Event) {
        // Snapshot so handlers can subscribe/unsubscribe mid-emit without
        // poisoning the borrow.
        let list = self
            .handlers
            .borrow()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();
        for handler in list {
            handler(event);
        }
    }
}
