// SPDX-License-Identifier: MPL-2.0
//! Position-bucketed toast overlay.
//!
//! Renders the six anchor regions from the registry's display read path,
//! stacked over the host's content. Each bucket reflects the container's
//! `max_toasts` truncation and `newest_on_top` ordering.

use super::style::spacing;
use super::{toast_view, Message};
use crate::options::Position;
use crate::registry::Registry;
use iced::widget::{text, Column, Container, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Renders every position bucket with at least one visible toast.
pub fn view(registry: &Registry, now: Instant) -> Element<'static, Message> {
    let mut stack = Stack::new();
    let mut any_visible = false;

    for position in Position::ALL {
        let toasts = registry.position_toasts(position);
        if toasts.is_empty() {
            continue;
        }
        any_visible = true;

        let mut column = Column::new()
            .spacing(spacing::XS)
            .align_x(horizontal(position));
        for toast in &toasts {
            column = column.push(toast_view::view(toast, now));
        }

        stack = stack.push(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal(position))
                .align_y(vertical(position))
                .padding(spacing::MD),
        );
    }

    if any_visible {
        stack.into()
    } else {
        // An empty container that takes no space.
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    }
}

fn horizontal(position: Position) -> alignment::Horizontal {
    match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    }
}

fn vertical(position: Position) -> alignment::Vertical {
    if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    }
}
