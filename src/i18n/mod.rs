// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! All user-visible strings are looked up in embedded Fluent bundles.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Visible `MISSING:` marker for absent keys

pub mod fluent;
