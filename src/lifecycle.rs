// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown state machine.
//!
//! A toast is RUNNING while its countdown burns down and PAUSED while any
//! pause source (hover, window focus loss, an active drag) is held.
//! Removal from the registry is the terminal transition; there is no third
//! state. Time spent paused contributes zero progress: the countdown banks
//! its exact remainder on pause and continues from it on resume, so the
//! dismiss time is equivalent to elapsed-running-time reaching the
//! timeout.
//!
//! All transitions take an explicit `now` so tests can drive time
//! deterministically.

use crate::options::Timeout;
use std::time::{Duration, Instant};

/// Reason a toast's countdown is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSource {
    /// Pointer is over the toast (requires `pause_on_hover`).
    Hover,
    /// The host window lost focus (requires `pause_on_focus_loss`).
    FocusLoss,
    /// A drag gesture is in progress. Always pauses.
    Drag,
}

/// The set of currently held pause sources.
///
/// A toast resumes only once every source has been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PauseSources {
    hover: bool,
    focus_loss: bool,
    drag: bool,
}

impl PauseSources {
    #[must_use]
    pub fn any(self) -> bool {
        self.hover || self.focus_loss || self.drag
    }

    #[must_use]
    pub fn holds(self, source: PauseSource) -> bool {
        match source {
            PauseSource::Hover => self.hover,
            PauseSource::FocusLoss => self.focus_loss,
            PauseSource::Drag => self.drag,
        }
    }

    pub(crate) fn set(&mut self, source: PauseSource, held: bool) {
        match source {
            PauseSource::Hover => self.hover = held,
            PauseSource::FocusLoss => self.focus_loss = held,
            PauseSource::Drag => self.drag = held,
        }
    }
}

/// A fixed-duration countdown that can be paused and resumed without
/// losing its remainder.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
    /// `Some` while running; the instant the current running stretch began.
    resumed_at: Option<Instant>,
}

impl Countdown {
    /// Starts a running countdown.
    #[must_use]
    pub fn running(total: Duration, now: Instant) -> Self {
        Self {
            total,
            remaining: total,
            resumed_at: Some(now),
        }
    }

    /// Creates a countdown that starts paused.
    #[must_use]
    pub fn paused(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            resumed_at: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Banks the exact remainder. No-op while already paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(resumed_at) = self.resumed_at.take() {
            let ran = now.saturating_duration_since(resumed_at);
            self.remaining = self.remaining.saturating_sub(ran);
        }
    }

    /// Continues from the banked remainder. No-op while already running.
    pub fn resume(&mut self, now: Instant) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(now);
        }
    }

    /// Remaining running time as of `now`.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(resumed_at)),
            None => self.remaining,
        }
    }

    /// Fraction of the countdown still remaining, in `[0, 1]`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining_at(now).as_secs_f32() / self.total.as_secs_f32()
    }

    /// Whether the countdown has completed. Only a running countdown
    /// expires; a paused one holds its remainder indefinitely.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.is_running() && self.remaining_at(now).is_zero()
    }
}

/// Combined countdown and pause-source state for one toast.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifecycle {
    countdown: Option<Countdown>,
    paused_by: PauseSources,
}

impl Lifecycle {
    /// Initial state: RUNNING iff the timeout is enabled and no pause
    /// source is held at creation time.
    #[must_use]
    pub fn new(timeout: Timeout, paused_by: PauseSources, now: Instant) -> Self {
        let countdown = timeout.as_duration().map(|total| {
            if paused_by.any() {
                Countdown::paused(total)
            } else {
                Countdown::running(total, now)
            }
        });
        Self {
            countdown,
            paused_by,
        }
    }

    /// Whether the countdown is currently burning down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.countdown.is_some_and(|countdown| countdown.is_running())
    }

    #[must_use]
    pub fn paused_by(&self) -> PauseSources {
        self.paused_by
    }

    /// Holds a pause source, pausing the countdown if it was running.
    pub fn hold(&mut self, source: PauseSource, now: Instant) {
        self.paused_by.set(source, true);
        if let Some(countdown) = &mut self.countdown {
            countdown.pause(now);
        }
    }

    /// Releases a pause source; resumes only once no source remains held.
    pub fn release(&mut self, source: PauseSource, now: Instant) {
        self.paused_by.set(source, false);
        if !self.paused_by.any() {
            if let Some(countdown) = &mut self.countdown {
                countdown.resume(now);
            }
        }
    }

    /// Re-arms the countdown from a fresh timeout, keeping held sources.
    pub fn restart(&mut self, timeout: Timeout, now: Instant) {
        let paused = self.paused_by.any();
        self.countdown = timeout.as_duration().map(|total| {
            if paused {
                Countdown::paused(total)
            } else {
                Countdown::running(total, now)
            }
        });
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.countdown
            .is_some_and(|countdown| countdown.is_expired_at(now))
    }

    /// Remaining running time, or `None` when the timeout is disabled.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.countdown.map(|countdown| countdown.remaining_at(now))
    }

    /// Countdown fraction remaining, or `None` when the timeout is disabled.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Option<f32> {
        self.countdown.map(|countdown| countdown.progress_at(now))
    }
}
