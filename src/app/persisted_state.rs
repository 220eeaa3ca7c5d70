// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state that should survive restarts but is not a user preference
//! (unlike `settings.toml`). Today that is only whether the envelope intro
//! has already been played.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Whether the envelope intro already played once.
    #[serde(default)]
    pub intro_seen: bool,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning); the warning is an i18n key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from `base_dir`, or the default location.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "state file is corrupt");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to `base_dir`, or the default location.
    ///
    /// Returns an i18n warning key if the state could not be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(path = %path.display(), error = %err, "cannot write state file");
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_not_seen_intro() {
        assert!(!AppState::default().intro_seen);
    }

    #[test]
    fn save_and_load_preserve_intro_flag() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let state = AppState { intro_seen: true };
        assert!(state.save_to(base.clone()).is_none());

        let (loaded, warning) = AppState::load_from(base);
        assert!(warning.is_none());
        assert!(loaded.intro_seen);
    }

    #[test]
    fn missing_file_loads_default_without_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_loads_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\xff not cbor").expect("write");

        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }
}
