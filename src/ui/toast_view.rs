// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering a single toast card.
//!
//! Cards show a severity accent, an optional icon, the body content, an
//! optional close button, and a progress bar reflecting the remaining
//! countdown. Component content is rendered as a placeholder label; hosts
//! that register their own components swap this view out entirely.

use super::style::{self, sizing, spacing, typography};
use super::Message;
use crate::content::ToastContent;
use crate::options::{CloseButtonSetting, IconSetting, ToastType};
use crate::toast::Toast;
use iced::widget::{button, mouse_area, progress_bar, text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Renders one toast.
pub fn view(toast: &Toast, now: Instant) -> Element<'static, Message> {
    let id = toast.id();
    let accent = style::accent(toast.toast_type());
    let opacity = toast.drag_opacity();

    let mut cells: Vec<Element<'static, Message>> = Vec::new();

    if let Some(glyph) = icon_glyph(toast) {
        let icon = text(glyph).size(sizing::ICON).style(move |_theme: &Theme| {
            iced::widget::text::Style {
                color: Some(accent),
            }
        });
        cells.push(Container::new(icon).padding(spacing::XXS).into());
    }

    let body_alignment = if toast.rtl() {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };
    let body = text(body_text(toast.content()))
        .size(typography::BODY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.palette().text),
        });
    cells.push(
        Container::new(body)
            .width(Length::Fill)
            .align_x(body_alignment)
            .into(),
    );

    if shows_close_button(toast) {
        let close = button(text("×").size(sizing::CLOSE))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(style::close_button_style);
        cells.push(close.into());
    }

    // Mirror the cell order for right-to-left layouts.
    if toast.rtl() {
        cells.reverse();
    }
    let row = Row::with_children(cells)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    let mut column = Column::new().push(row);
    if let Some(progress) = toast.progress_at(now) {
        if !toast.hide_progress_bar() {
            column = column.push(progress_bar(0.0..=1.0, progress));
        }
    }

    let card = Container::new(column)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| style::toast_container_style(theme, accent, opacity));

    // Hover and click wiring exists only while the toast needs it; the
    // listeners disappear with the widget on unmount.
    let mut area = mouse_area(card);
    if toast.pause_on_hover() || toast.show_close_button_on_hover() {
        area = area
            .on_enter(Message::HoverEntered(id))
            .on_exit(Message::HoverLeft(id));
    }
    if toast.close_on_click() {
        area = area.on_press(Message::Clicked(id));
    }
    area.into()
}

/// Text glyph for the leading icon, or `None` to render no icon.
fn icon_glyph(toast: &Toast) -> Option<String> {
    match toast.icon() {
        IconSetting::Auto => Some(default_glyph(toast.toast_type()).to_string()),
        IconSetting::Text(glyph) => Some(glyph.clone()),
        // Host-rendered icon components are not drawn by the built-in view.
        IconSetting::Component(_) => None,
        IconSetting::Hidden => None,
    }
}

fn default_glyph(toast_type: ToastType) -> &'static str {
    match toast_type {
        ToastType::Default => "•",
        ToastType::Success => "✓",
        ToastType::Error => "✕",
        ToastType::Warning => "⚠",
        ToastType::Info => "ℹ",
    }
}

fn body_text(content: &ToastContent) -> String {
    match content {
        ToastContent::Text(body) => body.clone(),
        // Placeholder for host-rendered components: prefer a `title` prop,
        // fall back to the component name.
        ToastContent::Component(spec) => spec
            .props
            .get("title")
            .cloned()
            .unwrap_or_else(|| spec.name.clone()),
    }
}

fn shows_close_button(toast: &Toast) -> bool {
    match toast.close_button() {
        CloseButtonSetting::Hidden => false,
        // Host-rendered close buttons are not drawn by the built-in view.
        CloseButtonSetting::Component(_) => false,
        CloseButtonSetting::Auto => !toast.show_close_button_on_hover() || toast.is_hovered(),
    }
}
