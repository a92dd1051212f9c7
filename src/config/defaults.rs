// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timeout**: Auto-dismiss countdown duration
//! - **Drag**: Drag-to-dismiss threshold bounds
//! - **Display**: Per-position display limits and tick cadence
//! - **Accessibility**: Default ARIA-style labels

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Default auto-dismiss countdown duration (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default exit transition duration (in milliseconds).
///
/// The engine does not animate; this is handed to the host so removal
/// animations and countdown state agree on timing.
pub const DEFAULT_TRANSITION_MS: u64 = 750;

/// Cadence at which hosts should sweep expired countdowns (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Default fraction of the toast width a drag must cover to dismiss.
pub const DEFAULT_DRAGGABLE_PERCENT: f32 = 0.6;

/// Minimum allowed drag-dismiss fraction.
pub const MIN_DRAGGABLE_PERCENT: f32 = 0.01;

/// Maximum allowed drag-dismiss fraction (the full toast width).
pub const MAX_DRAGGABLE_PERCENT: f32 = 1.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default maximum number of toasts rendered per position.
///
/// This is a display limit, not a storage limit: the registry may hold
/// more entries than are rendered.
pub const DEFAULT_MAX_TOASTS: usize = 20;

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Default role announced for a toast.
pub const DEFAULT_TOAST_ROLE: &str = "alert";

/// Default label for the close button.
pub const DEFAULT_CLOSE_BUTTON_LABEL: &str = "close";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timeout validation
    assert!(DEFAULT_TIMEOUT_MS > 0);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_TIMEOUT_MS);

    // Drag validation
    assert!(MIN_DRAGGABLE_PERCENT > 0.0);
    assert!(MAX_DRAGGABLE_PERCENT <= 1.0);
    assert!(DEFAULT_DRAGGABLE_PERCENT >= MIN_DRAGGABLE_PERCENT);
    assert!(DEFAULT_DRAGGABLE_PERCENT <= MAX_DRAGGABLE_PERCENT);

    // Display validation
    assert!(DEFAULT_MAX_TOASTS > 0);
};
