// SPDX-License-Identifier: MPL-2.0
//! Cancel-on-reschedule timer bookkeeping.
//!
//! The runtime owns the actual sleeping: each call to [`Debouncer::schedule`]
//! hands out a [`Ticket`] that the caller attaches to a delayed message. When
//! the message comes back, [`Debouncer::fire`] accepts it only if no newer
//! ticket was issued in the meantime, so only the most recent schedule wins.

use std::time::Duration;

/// Identifies one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: false,
        }
    }

    /// Quiet period callers should wait before delivering the ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a new callback, superseding any pending one.
    pub fn schedule(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    /// Returns `true` if `ticket` is the latest pending one, consuming it.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drops the pending callback, if any.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_schedule_fires_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let ticket = debouncer.schedule();
        assert!(debouncer.is_pending());
        assert!(debouncer.fire(ticket));
        assert!(!debouncer.fire(ticket));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn only_latest_schedule_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        let third = debouncer.schedule();

        assert!(!debouncer.fire(first));
        assert!(!debouncer.fire(second));
        assert!(debouncer.fire(third));
    }

    #[test]
    fn cancel_discards_pending_ticket() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.fire(ticket));
    }

    #[test]
    fn delay_is_reported() {
        let debouncer = Debouncer::new(Duration::from_millis(42));
        assert_eq!(debouncer.delay(), Duration::from_millis(42));
    }
}
