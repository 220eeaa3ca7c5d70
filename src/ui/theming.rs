// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the invitation.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub card_surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Accents
    pub accent: Color,
    pub accent_strong: Color,
    pub highlight: Color,
    pub success: Color,

    // Overlay colors
    pub backdrop: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::IVORY,
            surface_secondary: palette::CREAM,
            card_surface: palette::WHITE,

            text_primary: palette::INK,
            text_secondary: palette::INK_SOFT,
            text_tertiary: palette::INK_MUTED,

            accent: palette::GOLD_500,
            accent_strong: palette::GOLD_700,
            highlight: palette::ROSE_500,
            success: palette::SAGE_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NIGHT,
            surface_secondary: palette::NIGHT_RAISED,
            card_surface: palette::CREAM,

            text_primary: palette::IVORY,
            text_secondary: palette::SAND,
            text_tertiary: palette::INK_MUTED,

            accent: palette::GOLD_300,
            accent_strong: palette::GOLD_500,
            highlight: palette::ROSE_300,
            success: palette::SAGE_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            Self::light() // Paper look unless the system asks for dark
        }
    }
}

/// Resolved theme for the running app.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Matching built-in iced theme for default widget styling.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.mode.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
