// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action button (open gift details, open envelope).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::GOLD_500)),
            text_color: WHITE,
            border: Border {
                color: palette::GOLD_700,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GOLD_700)),
            text_color: WHITE,
            border: Border {
                color: palette::GOLD_700,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::SAND)),
            text_color: palette::INK_MUTED,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Round translucent buttons over the lightbox (close, previous, next).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::BACKDROP,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Navigation link; the active section is underlined in the accent color.
pub fn nav_link(
    colors: &ColorScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = colors.text_secondary;
    let accent = colors.accent;
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            _ if active => accent,
            button::Status::Hovered | button::Status::Pressed => accent,
            _ => idle,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { accent } else { Color::TRANSPARENT },
                width: if active { 1.0 } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text button (menu toggle, copy actions).
pub fn ghost(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = colors.text_primary;
    let accent = colors.accent_strong;
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            _ => text,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Polaroid card acting as a button; no chrome of its own.
pub fn card(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::INK,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
