// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: each component
//! owns a small state type, a `Message` enum and a `view(ViewContext)`.
//!
//! # Components
//!
//! - [`page`] - The scrolling invitation page and its fixed geometry
//! - [`lightbox`] - Full-window photo overlay with previous/next navigation
//! - [`gift`] - Gift modal with copyable bank details
//! - [`intro`] - Preloader and one-time envelope intro
//! - [`navbar`] - Navigation bar with collapsible menu
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pure state (debounce, scroll lock, tilt, reveal, sections)
//! - [`widgets`] - Custom Iced widgets (scroll lock guard)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, layout)
//! - [`theming`] - Light/Dark/System color schemes

pub mod design_tokens;
pub mod gift;
pub mod intro;
pub mod lightbox;
pub mod navbar;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
