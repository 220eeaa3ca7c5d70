// SPDX-License-Identifier: MPL-2.0
//! One-way "fade in when scrolled into view" tracking.

use crate::config::{
    REVEAL_BOTTOM_MARGIN_PX, REVEAL_DURATION_MS, REVEAL_THRESHOLD, REVEAL_TRAVEL_PX,
};
use std::time::{Duration, Instant};

/// Vertical extent of something on the page, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }
}

/// Whether enough of `element` is inside `viewport` to reveal it.
///
/// The viewport is shrunk by a bottom margin so elements start appearing
/// slightly after they cross the lower edge.
#[must_use]
pub fn is_in_view(element: Span, viewport: Span) -> bool {
    if element.height <= 0.0 {
        return false;
    }
    let visible_top = viewport.top;
    let visible_bottom = viewport.bottom() - REVEAL_BOTTOM_MARGIN_PX;
    let overlap = element.bottom().min(visible_bottom) - element.top.max(visible_top);
    overlap > 0.0 && overlap / element.height >= REVEAL_THRESHOLD
}

/// Remembers when each tracked element was first revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed_at: Vec<Option<Instant>>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            revealed_at: vec![None; count],
        }
    }

    /// Marks newly visible elements as revealed. Returns how many were new.
    pub fn observe(&mut self, elements: &[Span], viewport: Span, now: Instant) -> usize {
        if self.revealed_at.len() < elements.len() {
            self.revealed_at.resize(elements.len(), None);
        }

        let mut newly_revealed = 0;
        for (slot, element) in self.revealed_at.iter_mut().zip(elements) {
            if slot.is_none() && is_in_view(*element, viewport) {
                *slot = Some(now);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.revealed_at.get(index), Some(Some(_)))
    }

    /// Animation progress in `0.0..=1.0` for the element at `index`.
    #[must_use]
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        match self.revealed_at.get(index) {
            Some(Some(started)) => {
                let elapsed = now.saturating_duration_since(*started);
                (elapsed.as_secs_f32() / reveal_duration().as_secs_f32()).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Opacity and downward offset for the element at `index`.
    #[must_use]
    pub fn style(&self, index: usize, now: Instant) -> (f32, f32) {
        let t = ease_out(self.progress(index, now));
        (t, REVEAL_TRAVEL_PX * (1.0 - t))
    }

    /// True while some revealed element is still animating.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed_at.iter().flatten().any(|started| {
            now.saturating_duration_since(*started) < reveal_duration()
        })
    }
}

fn reveal_duration() -> Duration {
    Duration::from_millis(REVEAL_DURATION_MS)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(2)
}
