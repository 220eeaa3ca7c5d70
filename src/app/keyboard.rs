// SPDX-License-Identifier: MPL-2.0
//! Global key routing.
//!
//! Key presses are routed according to which overlay is up. Only one mode is
//! active at a time, so a key can never act on two overlays at once.

use iced::keyboard::{key::Named, Key};

/// Which overlay currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Nothing is open; keys are inert.
    #[default]
    Idle,
    LightboxOpen,
    ModalOpen,
}

impl KeyMode {
    /// Derives the mode from overlay visibility. The lightbox wins if both
    /// report open.
    #[must_use]
    pub fn from_overlays(lightbox_open: bool, modal_open: bool) -> Self {
        if lightbox_open {
            KeyMode::LightboxOpen
        } else if modal_open {
            KeyMode::ModalOpen
        } else {
            KeyMode::Idle
        }
    }
}

/// What a key press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseLightbox,
    PreviousPhoto,
    NextPhoto,
    CloseModal,
}

/// Maps a key press to an action for the given mode.
#[must_use]
pub fn dispatch(mode: KeyMode, key: &Key) -> Option<KeyAction> {
    let Key::Named(named) = key else {
        return None;
    };
    match (mode, named) {
        (KeyMode::LightboxOpen, Named::Escape) => Some(KeyAction::CloseLightbox),
        (KeyMode::LightboxOpen, Named::ArrowLeft) => Some(KeyAction::PreviousPhoto),
        (KeyMode::LightboxOpen, Named::ArrowRight) => Some(KeyAction::NextPhoto),
        (KeyMode::ModalOpen, Named::Escape) => Some(KeyAction::CloseModal),
        _ => None,
    }
}
