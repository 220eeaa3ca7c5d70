// SPDX-License-Identifier: MPL-2.0
//! Page-wide background scroll lock.
//!
//! Overlays (lightbox, gift modal) lock the page while they are visible.
//! The page scrollable is wrapped in a
//! [`ScrollLockGuard`](crate::ui::widgets::ScrollLockGuard) that drops
//! scroll input whenever the lock is held.

/// Whether background scrolling is currently suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        self.locked
    }
}
