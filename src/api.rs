// SPDX-License-Identifier: MPL-2.0
//! Public operation surface exposed to the host application.
//!
//! A [`Container`] wires one registry to one bus; [`Toaster`] is the
//! cheap handle hosts pass around to enqueue notifications. Several
//! containers can coexist in one process without cross-talk because
//! nothing here is global: each container owns its bus, its registry,
//! and its id counter.

use crate::bus::{AddPayload, Event, LocalBus, NotificationBus, UpdatePayload};
use crate::content::ToastContent;
use crate::drag::DragOutcome;
use crate::options::{ContainerOptions, ContainerUpdate, ToastOptions, ToastType};
use crate::registry::Registry;
use crate::toast::ToastId;
use crate::ui::Message;
use std::rc::Rc;
use std::time::Instant;

/// One notification area: a registry attached to a bus.
pub struct Container {
    registry: Registry,
    bus: Rc<dyn NotificationBus>,
}

impl Container {
    /// Creates a container with its own [`LocalBus`].
    #[must_use]
    pub fn new(options: ContainerOptions) -> Self {
        Self::with_bus(options, Rc::new(LocalBus::new()))
    }

    /// Creates a container over a caller-supplied bus implementation.
    #[must_use]
    pub fn with_bus(options: ContainerOptions, bus: Rc<dyn NotificationBus>) -> Self {
        let registry = Registry::new(options);
        registry.attach(bus.as_ref());
        Self { registry, bus }
    }

    /// Hands out an enqueueing handle for this container.
    #[must_use]
    pub fn toaster(&self) -> Toaster {
        Toaster {
            registry: self.registry.clone(),
            bus: Rc::clone(&self.bus),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn bus(&self) -> &Rc<dyn NotificationBus> {
        &self.bus
    }

    /// Applies one UI message to the registry.
    ///
    /// Dismissals always travel over the bus so the registry's event
    /// handlers remain the only mutators on the removal path.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.bus.emit(&Event::Dismiss(*id)),
            Message::Clicked(id) => {
                if self.registry.click(*id) {
                    self.bus.emit(&Event::Dismiss(*id));
                }
            }
            Message::HoverEntered(id) => self.registry.hover_enter(*id, Instant::now()),
            Message::HoverLeft(id) => self.registry.hover_leave(*id, Instant::now()),
            Message::FocusChanged(focused) => {
                self.registry.focus_changed(*focused, Instant::now());
            }
            Message::DragStarted { id, origin, bounds } => {
                self.registry.drag_start(*id, *origin, *bounds, Instant::now());
            }
            Message::DragMoved { id, position } => self.registry.drag_move(*id, *position),
            Message::DragEnded { id, position } => {
                if let Some(DragOutcome::Dismiss) =
                    self.registry.drag_end(*id, *position, Instant::now())
                {
                    self.bus.emit(&Event::Dismiss(*id));
                }
            }
            Message::Tick(now) => {
                for id in self.registry.expired(*now) {
                    self.bus.emit(&Event::Dismiss(id));
                }
            }
        }
    }

    /// Detaches the registry from the bus. After this no event reaches
    /// the registry; countdown and gesture state go away with the
    /// entries when the container is dropped.
    pub fn close(&self) {
        self.registry.detach(self.bus.as_ref());
    }
}

/// Cheap enqueueing handle. Clone freely.
#[derive(Clone)]
pub struct Toaster {
    registry: Registry,
    bus: Rc<dyn NotificationBus>,
}

impl Toaster {
    /// Enqueues a toast and synchronously returns its assigned id.
    pub fn create(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        let id = self.registry.allocate_id();
        self.bus.emit(&Event::Add(AddPayload {
            id,
            content: content.into(),
            options,
        }));
        id
    }

    /// Enqueues a toast under a caller-supplied id. Re-using a live id
    /// overwrites that toast (last write wins).
    pub fn create_with_id(
        &self,
        id: ToastId,
        content: impl Into<ToastContent>,
        options: ToastOptions,
    ) -> ToastId {
        self.bus.emit(&Event::Add(AddPayload {
            id,
            content: content.into(),
            options,
        }));
        id
    }

    /// Enqueues a dismissal. Unknown ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        self.bus.emit(&Event::Dismiss(id));
    }

    /// Enqueues a dismissal of every registered toast.
    pub fn clear(&self) {
        self.bus.emit(&Event::Clear);
    }

    /// Enqueues an in-place update of a registered toast. With
    /// `create_if_missing`, an unknown id synthesizes a new toast
    /// instead.
    pub fn update(
        &self,
        id: ToastId,
        content: Option<ToastContent>,
        options: ToastOptions,
        create_if_missing: bool,
    ) {
        self.bus.emit(&Event::Update(UpdatePayload {
            id,
            content,
            options,
            create: create_if_missing,
        }));
    }

    /// Enqueues a change to the container defaults, affecting future
    /// toasts only.
    pub fn update_defaults(&self, update: ContainerUpdate) {
        self.bus.emit(&Event::UpdateDefaults(update));
    }

    /// Enqueues a success toast.
    pub fn success(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(content, options.toast_type(ToastType::Success))
    }

    /// Enqueues an info toast.
    pub fn info(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(content, options.toast_type(ToastType::Info))
    }

    /// Enqueues a warning toast.
    pub fn warning(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(content, options.toast_type(ToastType::Warning))
    }

    /// Enqueues an error toast.
    pub fn error(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(content, options.toast_type(ToastType::Error))
    }
}
