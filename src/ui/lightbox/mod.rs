// SPDX-License-Identifier: MPL-2.0
//! Full-window photo overlay for the gallery.
//!
//! The [`Lightbox`] owns the gallery items and the overlay state: which item
//! is current, whether the overlay is open, and what the overlay currently
//! displays. Opening locks background scrolling through the shared
//! [`ScrollLock`]; closing releases it.
//!
//! Moving to another photo suspends the image's enter animation and hands
//! back a [`Ticket`]. The caller delivers the ticket after one short tick
//! (see [`Lightbox::replay_delay`]) to [`Lightbox::resume`], which renders
//! the new photo with a fresh animation. Only the latest ticket counts, so
//! rapid key presses never replay a stale photo.

pub mod view;

use crate::config::LIGHTBOX_ENTER_MS;
use crate::gallery::{Gallery, GalleryItem};
use crate::ui::state::{Debouncer, ScrollLock, Ticket};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// What a pointer press inside the open overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the photo.
    Backdrop,
    /// The photo or its caption.
    Content,
}

/// The photo and caption currently shown in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Displayed {
    pub index: usize,
    pub source: PathBuf,
    pub caption: Option<String>,
}

impl Displayed {
    fn from_item(index: usize, item: &GalleryItem) -> Self {
        Self {
            index,
            source: item.source().to_path_buf(),
            caption: item.caption().map(str::to_string),
        }
    }

    /// The caption line is only shown for captioned photos.
    #[must_use]
    pub fn caption_visible(&self) -> bool {
        self.caption.is_some()
    }
}

/// State of the photo's enter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterAnimation {
    /// Cleared while waiting for the replay tick.
    Suspended,
    Playing { started: Instant },
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    gallery: Gallery,
    current_index: usize,
    is_open: bool,
    displayed: Option<Displayed>,
    animation: EnterAnimation,
    replay: Debouncer,
}

impl Lightbox {
    /// Creates a closed lightbox positioned on the first item.
    #[must_use]
    pub fn new(gallery: Gallery, replay_delay: Duration) -> Self {
        Self {
            gallery,
            current_index: 0,
            is_open: false,
            displayed: None,
            animation: EnterAnimation::Suspended,
            replay: Debouncer::new(replay_delay),
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gallery.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// What the overlay shows, if it has rendered anything yet.
    pub fn displayed(&self) -> Option<&Displayed> {
        self.displayed.as_ref()
    }

    pub fn animation(&self) -> EnterAnimation {
        self.animation
    }

    /// How long callers wait before delivering a replay ticket.
    pub fn replay_delay(&self) -> Duration {
        self.replay.delay()
    }

    /// Opens the overlay on the item at `index`.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn open(&mut self, index: usize, scroll: &mut ScrollLock) -> bool {
        if index >= self.gallery.len() {
            return false;
        }
        self.current_index = index;
        self.is_open = true;
        scroll.lock();
        self.replay.cancel();
        self.show_current();
        true
    }

    /// Renders the current item into the overlay and restarts its enter
    /// animation. Returns the rendered item.
    pub fn show_current(&mut self) -> Option<&Displayed> {
        let item = self.gallery.get(self.current_index)?;
        self.displayed = Some(Displayed::from_item(self.current_index, item));
        self.animation = EnterAnimation::Playing {
            started: Instant::now(),
        };
        self.displayed.as_ref()
    }

    /// Advances to the next item, wrapping from last to first.
    pub fn next(&mut self) -> Option<Ticket> {
        self.step(1)
    }

    /// Goes back to the previous item, wrapping from first to last.
    pub fn previous(&mut self) -> Option<Ticket> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<Ticket> {
        let len = self.gallery.len();
        if len == 0 {
            return None;
        }
        self.current_index = wrap_index(self.current_index, delta, len);
        self.animation = EnterAnimation::Suspended;
        Some(self.replay.schedule())
    }

    /// Delivers a replay ticket after the transition tick.
    ///
    /// Renders the current item if `ticket` is the latest one and the
    /// overlay is still open. Returns whether anything was rendered.
    pub fn resume(&mut self, ticket: Ticket) -> bool {
        if !self.replay.fire(ticket) || !self.is_open {
            return false;
        }
        self.show_current().is_some()
    }

    /// Hides the overlay and releases the scroll lock. Idempotent.
    pub fn close(&mut self, scroll: &mut ScrollLock) {
        self.is_open = false;
        self.replay.cancel();
        scroll.release();
    }

    /// Handles a pointer press inside the overlay.
    ///
    /// Only presses on the backdrop dismiss the overlay. Returns whether
    /// the overlay was closed.
    pub fn press(&mut self, target: PointerTarget, scroll: &mut ScrollLock) -> bool {
        if self.is_open && target == PointerTarget::Backdrop {
            self.close(scroll);
            true
        } else {
            false
        }
    }

    /// Opacity of the displayed photo at `now`, in `0.0..=1.0`.
    pub fn image_opacity(&self, now: Instant) -> f32 {
        match self.animation {
            EnterAnimation::Suspended => 1.0,
            EnterAnimation::Playing { started } => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                (elapsed / enter_duration().as_secs_f32()).min(1.0)
            }
        }
    }

    /// True while the enter animation still needs frames.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_open
            && matches!(
                self.animation,
                EnterAnimation::Playing { started }
                    if now.saturating_duration_since(started) < enter_duration()
            )
    }
}

fn enter_duration() -> Duration {
    Duration::from_millis(LIGHTBOX_ENTER_MS)
}

/// `(index + delta) mod len`, always in `0..len`. `len` must be non-zero.
#[must_use]
pub fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as isize;
    (index as isize % len + delta % len).rem_euclid(len) as usize
}
