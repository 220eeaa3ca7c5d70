// SPDX-License-Identifier: MPL-2.0
//! `iced_invite` is a wedding invitation page built with the Iced GUI framework.
//!
//! The page scrolls through the couple's story, the wedding party and a
//! gallery of tilted polaroid cards. Pressing a card opens a lightbox with
//! keyboard navigation; a gift modal offers copyable bank details. Text is
//! localized with Fluent and preferences live in a `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_invite/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
