// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Whole-page background.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Alternate background for every other section.
pub fn section(colors: &ColorScheme, alternate: bool) -> impl Fn(&Theme) -> container::Style {
    let background = if alternate {
        colors.surface_secondary
    } else {
        colors.surface_primary
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Navbar bar. Transparent at the top of the page, solid once scrolled.
pub fn navbar(colors: &ColorScheme, scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    let base = colors.surface_primary;
    move |_theme: &Theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::SURFACE,
                    ..base
                })),
                shadow: shadow::SM,
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

/// Raised card used for timeline entries, people and the modal body.
///
/// `alpha` fades the whole card while it is being revealed.
pub fn card(colors: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let background = fade(colors.surface_primary, alpha);
    let edge = fade(colors.accent, alpha);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: faded_shadow(shadow::SM, alpha),
        ..Default::default()
    }
}

/// White polaroid frame around a gallery photo.
pub fn polaroid(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(palette::WHITE, alpha))),
        text_color: Some(fade(palette::INK, alpha)),
        border: Border {
            color: fade(palette::SAND, alpha),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: faded_shadow(shadow::MD, alpha),
        ..Default::default()
    }
}

/// Scales the alpha channel of `color`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn faded_shadow(shadow: Shadow, alpha: f32) -> Shadow {
    Shadow {
        color: fade(shadow.color, alpha),
        ..shadow
    }
}

/// Dimmed layer behind the lightbox and the gift modal.
pub fn backdrop(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.backdrop;
    let text = colors.overlay_text;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Small pill confirming a copy to the clipboard.
pub fn badge(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.success;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
