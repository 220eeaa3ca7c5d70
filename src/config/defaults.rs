// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Card tilt range, resample bound and resize debounce
//! - **Lightbox**: Transition replay tick
//! - **Intro**: Preloader and envelope timings

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default maximum card tilt, in degrees, on either side of upright.
pub const DEFAULT_MAX_TILT_DEG: f32 = 8.0;

/// Minimum allowed maximum tilt (cards always upright).
pub const MIN_MAX_TILT_DEG: f32 = 0.0;

/// Maximum allowed maximum tilt.
pub const MAX_MAX_TILT_DEG: f32 = 45.0;

/// Default number of redraws allowed when a tilt is already taken in a pass.
pub const DEFAULT_TILT_MAX_ATTEMPTS: u32 = 16;

/// Upper bound for the tilt redraw budget.
pub const MAX_TILT_MAX_ATTEMPTS: u32 = 1000;

/// Default quiet period after the last resize before cards are re-tilted.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Upper bound for the resize debounce delay.
pub const MAX_RESIZE_DEBOUNCE_MS: u64 = 5000;

/// Maximum horizontal card jitter in pixels (either direction).
pub const CARD_JITTER_X_PX: f32 = 10.0;

/// Maximum vertical card jitter in pixels (either direction).
pub const CARD_JITTER_Y_PX: f32 = 6.0;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between suspending and replaying the lightbox enter animation.
pub const DEFAULT_TRANSITION_TICK_MS: u64 = 10;

/// Minimum transition tick.
pub const MIN_TRANSITION_TICK_MS: u64 = 1;

/// Maximum transition tick.
pub const MAX_TRANSITION_TICK_MS: u64 = 500;

/// Duration of the lightbox image enter animation.
pub const LIGHTBOX_ENTER_MS: u64 = 300;

// ==========================================================================
// Intro Defaults
// ==========================================================================

/// Default minimum time the preloader stays on screen.
pub const DEFAULT_PRELOADER_MS: u64 = 800;

/// Maximum preloader duration.
pub const MAX_PRELOADER_MS: u64 = 10_000;

/// Duration of the envelope opening animation.
pub const ENVELOPE_OPENING_MS: u64 = 1200;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f32 = 100.0;

/// Space left above a section when scrolling to it from the menu.
pub const NAVBAR_SCROLL_OFFSET_PX: f32 = 80.0;

/// Offset applied to section tops when picking the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f32 = 100.0;

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom margin subtracted from the viewport for reveal checks.
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0;

/// Vertical distance revealed elements travel while fading in.
pub const REVEAL_TRAVEL_PX: f32 = 30.0;

/// Duration of the reveal animation.
pub const REVEAL_DURATION_MS: u64 = 600;

/// How long the "copied" badge stays visible in the gift modal.
pub const COPIED_BADGE_MS: u64 = 2000;

// ==========================================================================
// Timers
// ==========================================================================

/// Frame interval while something is animating (~60 fps).
pub const ANIMATION_FRAME_MS: u64 = 16;

/// Countdown refresh interval.
pub const COUNTDOWN_TICK_MS: u64 = 1000;
