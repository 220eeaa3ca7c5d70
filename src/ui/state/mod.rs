// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Toolkit-independent state used by the page views. Everything here is
//! plain data plus pure transitions so it can be tested without a window.

pub mod debounce;
pub mod reveal;
pub mod rotation;
pub mod scroll_lock;
pub mod sections;

pub use debounce::{Debouncer, Ticket};
pub use reveal::{RevealTracker, Span};
pub use rotation::{CardPose, CardTilt, TiltSampler};
pub use scroll_lock::ScrollLock;
pub use sections::{SectionId, SectionSpan};
