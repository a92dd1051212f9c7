// SPDX-License-Identifier: MPL-2.0
//! Toast body content, normalized into a tagged variant.
//!
//! Callers can hand the engine plain text, a full component descriptor, or
//! a bare component name. All three shapes are resolved into
//! [`ToastContent`] exactly once, at creation time, so the rest of the
//! engine never re-inspects the raw input.

use std::collections::BTreeMap;

/// Canonical toast body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastContent {
    /// Plain text rendered by the built-in toast view.
    Text(String),
    /// A host-rendered component with optional props and listeners.
    Component(ComponentSpec),
}

impl ToastContent {
    /// Creates component content from a bare component name.
    pub fn component(name: impl Into<String>) -> Self {
        Self::Component(ComponentSpec::new(name))
    }

    /// Returns the plain text, if this is text content.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            ToastContent::Text(text) => Some(text),
            ToastContent::Component(_) => None,
        }
    }

    /// Returns the component descriptor, if this is component content.
    #[must_use]
    pub fn component_spec(&self) -> Option<&ComponentSpec> {
        match self {
            ToastContent::Text(_) => None,
            ToastContent::Component(spec) => Some(spec),
        }
    }
}

/// Descriptor for host-rendered toast content.
///
/// The engine stores the descriptor verbatim; resolving `name` to an actual
/// widget and wiring `listeners` back up is the host's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentSpec {
    /// Host-side component identifier.
    pub name: String,
    /// String props passed through to the component.
    pub props: BTreeMap<String, String>,
    /// Names of events the host should listen for on the component.
    pub listeners: Vec<String>,
}

impl ComponentSpec {
    /// Creates a descriptor for the named component with no props.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: BTreeMap::new(),
            listeners: Vec::new(),
        }
    }

    /// Adds a prop passed through to the component.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Adds an event name the host should listen for.
    #[must_use]
    pub fn with_listener(mut self, event: impl Into<String>) -> Self {
        self.listeners.push(event.into());
        self
    }
}

impl From<&str> for ToastContent {
    fn from(text: &str) -> Self {
        ToastContent::Text(text.to_string())
    }
}

impl From<String> for ToastContent {
    fn from(text: String) -> Self {
        ToastContent::Text(text)
    }
}

impl From<ComponentSpec> for ToastContent {
    fn from(spec: ComponentSpec) -> Self {
        ToastContent::Component(spec)
    }
}
