// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and window events are always routed. The animation tick only
//! runs while something on screen is moving, so an idle page costs nothing.

use super::Message;
use crate::config::{ANIMATION_FRAME_MS, COUNTDOWN_TICK_MS};
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Key presses and window resizes.
pub fn native_events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::KeyPressed(key))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Frame tick used by the intro, lightbox fade, reveals and copy badge.
pub fn animation(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Once-per-second refresh of the countdown.
pub fn countdown(elapsed: bool) -> Subscription<Message> {
    if elapsed {
        Subscription::none()
    } else {
        time::every(Duration::from_millis(COUNTDOWN_TICK_MS)).map(|_| Message::CountdownTick)
    }
}
