// SPDX-License-Identifier: MPL-2.0
//! Time remaining until the event.

use chrono::NaiveDateTime;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// The event date has passed.
    pub elapsed: bool,
}

impl Countdown {
    /// Computes the time left from `now` until `target` (both local time).
    #[must_use]
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let remaining_ms = (target - now).num_milliseconds();
        if remaining_ms < 0 {
            return Self {
                elapsed: true,
                ..Self::default()
            };
        }

        let total_secs = remaining_ms / 1000;
        Self {
            days: total_secs / SECS_PER_DAY,
            hours: (total_secs % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total_secs % SECS_PER_MINUTE,
            elapsed: false,
        }
    }

    /// Display strings for days, hours, minutes and seconds.
    ///
    /// Days are padded to three digits, the rest to two. Once elapsed the
    /// display reads `0 / 00 / 00 / 00`.
    #[must_use]
    pub fn display(&self) -> [String; 4] {
        if self.elapsed {
            return [
                "0".to_string(),
                "00".to_string(),
                "00".to_string(),
                "00".to_string(),
            ];
        }
        [
            format!("{:03}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}
