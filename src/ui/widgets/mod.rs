// SPDX-License-Identifier: MPL-2.0
pub mod scroll_lock_guard;

pub use scroll_lock_guard::{scroll_lock_guard, ScrollLockGuard};
