// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Card tilt range, redraw budget and resize debounce
//! - `[lightbox]` - Transition replay tick
//! - `[intro]` - Envelope intro and preloader
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_INVITE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_invite::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("tilt up to {} degrees", config.gallery.max_tilt_deg());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery card settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Cards are tilted by up to this many degrees either way.
    #[serde(default = "default_max_tilt_deg", skip_serializing_if = "Option::is_none")]
    pub max_tilt_deg: Option<f32>,

    /// Redraws allowed per card when its tilt is already used in the pass.
    #[serde(
        default = "default_tilt_max_attempts",
        skip_serializing_if = "Option::is_none"
    )]
    pub tilt_max_attempts: Option<u32>,

    /// Quiet period after the last window resize before re-tilting.
    #[serde(
        default = "default_resize_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_debounce_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: default_max_tilt_deg(),
            tilt_max_attempts: default_tilt_max_attempts(),
            resize_debounce_ms: default_resize_debounce_ms(),
        }
    }
}

impl GalleryConfig {
    /// Maximum tilt clamped to the supported range.
    #[must_use]
    pub fn max_tilt_deg(&self) -> f32 {
        let value = self.max_tilt_deg.unwrap_or(DEFAULT_MAX_TILT_DEG);
        if value.is_finite() {
            value.clamp(MIN_MAX_TILT_DEG, MAX_MAX_TILT_DEG)
        } else {
            DEFAULT_MAX_TILT_DEG
        }
    }

    #[must_use]
    pub fn tilt_max_attempts(&self) -> u32 {
        self.tilt_max_attempts
            .unwrap_or(DEFAULT_TILT_MAX_ATTEMPTS)
            .min(MAX_TILT_MAX_ATTEMPTS)
    }

    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(
            self.resize_debounce_ms
                .unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS)
                .min(MAX_RESIZE_DEBOUNCE_MS),
        )
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Delay between suspending and replaying the image enter animation.
    #[serde(
        default = "default_transition_tick_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_tick_ms: Option<u64>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            transition_tick_ms: default_transition_tick_ms(),
        }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn transition_tick(&self) -> Duration {
        Duration::from_millis(
            self.transition_tick_ms
                .unwrap_or(DEFAULT_TRANSITION_TICK_MS)
                .clamp(MIN_TRANSITION_TICK_MS, MAX_TRANSITION_TICK_MS),
        )
    }
}

/// Intro envelope and preloader settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntroConfig {
    /// Whether the envelope intro is shown on first launch.
    #[serde(default = "default_intro_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Minimum time the preloader stays on screen.
    #[serde(default = "default_preloader_ms", skip_serializing_if = "Option::is_none")]
    pub preloader_ms: Option<u64>,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: default_intro_enabled(),
            preloader_ms: default_preloader_ms(),
        }
    }
}

impl IntroConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn preloader(&self) -> Duration {
        Duration::from_millis(
            self.preloader_ms
                .unwrap_or(DEFAULT_PRELOADER_MS)
                .min(MAX_PRELOADER_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub intro: IntroConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_tilt_deg() -> Option<f32> {
    Some(DEFAULT_MAX_TILT_DEG)
}

fn default_tilt_max_attempts() -> Option<u32> {
    Some(DEFAULT_TILT_MAX_ATTEMPTS)
}

fn default_resize_debounce_ms() -> Option<u64> {
    Some(DEFAULT_RESIZE_DEBOUNCE_MS)
}

fn default_transition_tick_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_TICK_MS)
}

fn default_intro_enabled() -> Option<bool> {
    Some(true)
}

fn default_preloader_ms() -> Option<u64> {
    Some(DEFAULT_PRELOADER_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
