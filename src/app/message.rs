// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Invitation;
use crate::ui::state::Ticket;
use crate::ui::{gift, intro, lightbox, navbar, page};
use iced::keyboard;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Lightbox(lightbox::view::Message),
    Gift(gift::Message),
    Intro(intro::Message),
    /// The transition tick after a lightbox step has elapsed.
    LightboxReplay(Ticket),
    KeyPressed(keyboard::Key),
    WindowResized(Size),
    /// The resize quiet period has elapsed.
    ResizeSettled(Ticket),
    PageScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    /// Animation frame while something is moving.
    Tick(Instant),
    /// Once per second, for the countdown.
    CountdownTick,
    DismissWarning(usize),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Page content, already loaded and validated.
    pub invitation: Invitation,
    /// Show the envelope even if it was already opened once.
    pub replay_intro: bool,
}
