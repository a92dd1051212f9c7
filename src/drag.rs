// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss gesture recognizer.
//!
//! Each draggable toast owns at most one active gesture at a time; move
//! and end events arriving with no active gesture are ignored by the
//! registry. Horizontal displacement past the removal distance commits a
//! dismissal; anything short of it snaps back.

use crate::options::DraggablePercent;
use iced::{Point, Rectangle};

/// Result of ending a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Displacement reached the removal distance. The caller dismisses the
    /// toast and suppresses the normal exit transition so the element
    /// keeps its trajectory off-screen instead of snapping.
    Dismiss,
    /// Displacement fell short; the toast returns to its neutral position
    /// and full opacity.
    Snapback {
        /// Whether the release point still lies within the bounding box
        /// recorded at the start of the gesture.
        released_inside: bool,
    },
}

/// State of one in-flight drag gesture.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    start: Point,
    current: Point,
    bounds: Rectangle,
    removal_distance: f32,
}

impl DragGesture {
    /// Starts a gesture at `origin` over a toast with the given bounds.
    #[must_use]
    pub fn begin(origin: Point, bounds: Rectangle, percent: DraggablePercent) -> Self {
        Self {
            start: origin,
            current: origin,
            bounds,
            removal_distance: bounds.width * percent.value(),
        }
    }

    /// Records the latest pointer position.
    pub fn update(&mut self, position: Point) {
        self.current = position;
    }

    /// Horizontal displacement since the gesture started.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.current.x - self.start.x
    }

    /// Pixel threshold at which the gesture commits to dismissal.
    #[must_use]
    pub fn removal_distance(&self) -> f32 {
        self.removal_distance
    }

    /// Rendering opacity proportional to the displacement, in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.removal_distance <= f32::EPSILON {
            return 0.0;
        }
        (1.0 - self.delta().abs() / self.removal_distance).clamp(0.0, 1.0)
    }

    /// Whether the current displacement has reached the removal distance.
    #[must_use]
    pub fn would_dismiss(&self) -> bool {
        self.delta().abs() >= self.removal_distance
    }

    /// Ends the gesture at the release point.
    #[must_use]
    pub fn finish(mut self, release: Point) -> DragOutcome {
        self.update(release);
        if self.would_dismiss() {
            DragOutcome::Dismiss
        } else {
            DragOutcome::Snapback {
                released_inside: self.bounds.contains(release),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounds_100_wide() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), iced::Size::new(100.0, 40.0))
    }

    fn gesture() -> DragGesture {
        DragGesture::begin(
            Point::new(50.0, 20.0),
            bounds_100_wide(),
            DraggablePercent::new(0.6),
        )
    }

    #[test]
    fn removal_distance_scales_with_width() {
        assert_relative_eq!(gesture().removal_distance(), 60.0, epsilon = 1e-6);
    }

    #[test]
    fn delta_tracks_horizontal_motion_only() {
        let mut gesture = gesture();
        gesture.update(Point::new(80.0, 500.0));
        assert_relative_eq!(gesture.delta(), 30.0, epsilon = 1e-6);
    }

    #[test]
    fn opacity_fades_proportionally_to_displacement() {
        let mut gesture = gesture();
        gesture.update(Point::new(80.0, 20.0));
        assert_relative_eq!(gesture.opacity(), 0.5, epsilon = 1e-6);

        // Far past the threshold the opacity bottoms out at zero.
        gesture.update(Point::new(250.0, 20.0));
        assert_relative_eq!(gesture.opacity(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn delta_at_threshold_dismisses() {
        let outcome = gesture().finish(Point::new(110.0, 20.0));
        assert_eq!(outcome, DragOutcome::Dismiss);
    }

    #[test]
    fn delta_below_threshold_snaps_back() {
        let outcome = gesture().finish(Point::new(109.0, 20.0));
        assert_eq!(
            outcome,
            DragOutcome::Snapback {
                released_inside: false
            }
        );
    }

    #[test]
    fn leftward_drag_dismisses_too() {
        let outcome = gesture().finish(Point::new(-10.0, 20.0));
        assert_eq!(outcome, DragOutcome::Dismiss);
    }

    #[test]
    fn snapback_reports_release_inside_bounds() {
        let outcome = gesture().finish(Point::new(70.0, 20.0));
        assert_eq!(
            outcome,
            DragOutcome::Snapback {
                released_inside: true
            }
        );
    }

    #[test]
    fn release_below_box_counts_as_outside() {
        let outcome = gesture().finish(Point::new(70.0, 200.0));
        assert_eq!(
            outcome,
            DragOutcome::Snapback {
                released_inside: false
            }
        );
    }
}
