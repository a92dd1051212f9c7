// SPDX-License-Identifier: MPL-2.0
//! Accent palette, sizing constants, and style functions for the
//! built-in toast widgets.

use crate::options::ToastType;
use iced::widget::{button, container};
use iced::{Color, Theme};

/// Base colors for toast accents.
pub mod palette {
    use iced::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const NEUTRAL_500: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Spacing scale (8px baseline grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

/// Component sizes.
pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const ICON: f32 = 20.0;
    pub const CLOSE: f32 = 14.0;
}

/// Font size scale.
pub mod typography {
    pub const BODY: f32 = 14.0;
}

/// Accent color for a toast type.
#[must_use]
pub fn accent(toast_type: ToastType) -> Color {
    match toast_type {
        ToastType::Default => palette::NEUTRAL_500,
        ToastType::Success => palette::SUCCESS_500,
        ToastType::Error => palette::ERROR_500,
        ToastType::Warning => palette::WARNING_500,
        ToastType::Info => palette::INFO_500,
    }
}

/// Style function for the toast card container.
///
/// `opacity` carries the drag feedback: it fades the card as the gesture
/// approaches the removal distance.
#[must_use]
pub fn toast_container_style(theme: &Theme, accent_color: Color, opacity: f32) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: base.color.a * opacity,
            ..base.color
        })),
        border: iced::Border {
            color: Color {
                a: accent_color.a * opacity,
                ..accent_color
            },
            width: 2.0,
            radius: 4.0.into(),
        },
        text_color: Some(Color {
            a: base.text.a * opacity,
            ..base.text
        }),
        ..Default::default()
    }
}

/// Style function for the close button.
pub fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.2,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..button::Style::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            ..button::Style::default()
        },
    }
}
