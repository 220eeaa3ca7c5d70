// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the invitation content and every piece of UI state
//! (intro, page layout, card poses, lightbox, gift modal) and translates
//! messages into state changes and timer tasks. Overlay handling lives in
//! `update`, rendering in `view` and timers in `subscription`.

mod keyboard;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::PAGE_SCROLLABLE_ID;

use crate::config::{self, Config};
use crate::content::Invitation;
use crate::countdown::Countdown;
use crate::i18n::fluent::I18n;
use crate::ui::gift::GiftModal;
use crate::ui::intro::{self, Intro, Outcome};
use crate::ui::lightbox::Lightbox;
use crate::ui::navbar;
use crate::ui::page::{self, ElementCounts, PageLayout};
use crate::ui::state::{
    sections, CardPose, Debouncer, RevealTracker, ScrollLock, Span, TiltSampler,
};
use crate::ui::theming::AppTheme;
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::Id;
use iced::{window, Element, Size, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    invitation: Invitation,
    intro: Intro,
    lightbox: Lightbox,
    gift: GiftModal,
    scroll_lock: ScrollLock,
    tilt: TiltSampler,
    /// One pose per gallery card, redrawn after each resize.
    poses: Vec<CardPose>,
    resize: Debouncer,
    layout: PageLayout,
    reveal: RevealTracker,
    /// Visible part of the page, in page coordinates.
    viewport: Span,
    menu_open: bool,
    countdown: Countdown,
    app_state: AppState,
    /// Where `app_state` is saved; `None` uses the default data directory.
    state_dir: Option<PathBuf>,
    /// i18n keys of startup and persistence warnings.
    warnings: Vec<String>,
    /// Time of the latest update, shared by every animation.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("intro", &self.intro.phase())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("gift_open", &self.gift.is_open())
            .field("viewport", &self.viewport)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and persisted state from disk, then builds the app.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut warnings = Vec::new();
        let (config, config_warning) = config::load();
        warnings.extend(config_warning);
        let (app_state, state_warning) = AppState::load();
        warnings.extend(state_warning);

        let mut app = Self::with_config(flags, &config, app_state, Instant::now());
        app.warnings = warnings;
        (app, Task::none())
    }

    /// Builds the app from already loaded preferences.
    fn with_config(flags: Flags, config: &Config, app_state: AppState, now: Instant) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let invitation = flags.invitation;

        let tilt = TiltSampler::new(
            config.gallery.max_tilt_deg(),
            config.gallery.tilt_max_attempts(),
        );
        let poses = tilt.pose_pass(invitation.gallery.len(), &mut rand::rng());

        let show_envelope = Intro::wants_envelope(
            config.intro.enabled(),
            app_state.intro_seen,
            flags.replay_intro,
        );
        let intro = Intro::new(show_envelope, config.intro.preloader(), now);

        let counts = ElementCounts {
            timeline: invitation.timeline.len(),
            people: invitation.people.len(),
            gallery: invitation.gallery.len(),
        };
        let layout = PageLayout::compute(WINDOW_DEFAULT_WIDTH, counts);
        let reveal = RevealTracker::new(layout.reveal_spans().len());

        tracing::info!(
            photos = invitation.gallery.len(),
            envelope = show_envelope,
            "invitation ready"
        );

        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            lightbox: Lightbox::new(
                invitation.gallery.clone(),
                config.lightbox.transition_tick(),
            ),
            gift: GiftModal::default(),
            intro,
            scroll_lock: ScrollLock::default(),
            tilt,
            poses,
            resize: Debouncer::new(config.gallery.resize_debounce()),
            layout,
            reveal,
            viewport: Span::new(0.0, WINDOW_DEFAULT_HEIGHT),
            menu_open: false,
            countdown: Countdown::until(invitation.event.date, local_now()),
            app_state,
            state_dir: None,
            warnings: Vec::new(),
            now,
            invitation,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr_with_args(
            "window-title",
            &[
                ("first", self.invitation.couple.partner_one.as_str()),
                ("second", self.invitation.couple.partner_two.as_str()),
            ],
        )
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn is_animating(&self) -> bool {
        self.intro.needs_ticks()
            || self.lightbox.is_animating(self.now)
            || self.reveal.is_animating(self.now)
            || self.gift.needs_ticks(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::native_events(),
            subscription::animation(self.is_animating()),
            subscription::countdown(self.countdown.elapsed),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match message {
            Message::Tick(at) => at,
            _ => Instant::now(),
        };

        match message {
            Message::Navbar(message) => match navbar::update(message, &mut self.menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::ScrollTo(section) => self.scroll_to(section),
            },
            Message::Page(page::Message::OpenPhoto(index)) => {
                if self.intro.is_done() && !self.gift.is_open() {
                    self.menu_open = false;
                    self.lightbox.open(index, &mut self.scroll_lock);
                }
                Task::none()
            }
            Message::Page(page::Message::OpenGifts) => {
                self.menu_open = false;
                update::handle_gift_message(&mut self.update_context(), crate::ui::gift::Message::Open)
            }
            Message::Lightbox(message) => {
                update::handle_lightbox_message(&mut self.update_context(), message)
            }
            Message::Gift(message) => update::handle_gift_message(&mut self.update_context(), message),
            Message::Intro(intro::Message::OpenEnvelope) => {
                self.intro.open_envelope(self.now);
                Task::none()
            }
            Message::LightboxReplay(ticket) => {
                self.lightbox.resume(ticket);
                Task::none()
            }
            Message::KeyPressed(key) => {
                if !self.intro.is_done() {
                    return Task::none();
                }
                update::handle_key(&mut self.update_context(), &key)
            }
            Message::WindowResized(size) => self.handle_resize(size),
            Message::ResizeSettled(ticket) => {
                if self.resize.fire(ticket) {
                    self.poses = self
                        .tilt
                        .pose_pass(self.invitation.gallery.len(), &mut rand::rng());
                    tracing::debug!(cards = self.poses.len(), "re-tilted gallery cards");
                }
                Task::none()
            }
            Message::PageScrolled {
                offset_y,
                viewport_height,
            } => {
                self.viewport = Span::new(offset_y, viewport_height);
                self.observe_reveals();
                Task::none()
            }
            Message::Tick(now) => {
                if let Some(Outcome::Revealed { mark_seen }) = self.intro.tick(now) {
                    self.on_page_revealed(mark_seen);
                }
                Task::none()
            }
            Message::CountdownTick => {
                self.countdown = Countdown::until(self.invitation.event.date, local_now());
                Task::none()
            }
            Message::DismissWarning(index) => {
                if index < self.warnings.len() {
                    self.warnings.remove(index);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            invitation: &self.invitation,
            intro: &self.intro,
            lightbox: &self.lightbox,
            gift: &self.gift,
            layout: &self.layout,
            reveal: &self.reveal,
            poses: &self.poses,
            countdown: self.countdown,
            scroll_locked: self.scroll_lock.is_locked(),
            scroll_y: self.viewport.top,
            menu_open: self.menu_open,
            warnings: &self.warnings,
            now: self.now,
        })
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            lightbox: &mut self.lightbox,
            gift: &mut self.gift,
            scroll_lock: &mut self.scroll_lock,
            invitation: &self.invitation,
            now: self.now,
        }
    }

    fn scroll_to(&self, section: sections::SectionId) -> Task<Message> {
        if self.scroll_lock.is_locked() {
            return Task::none();
        }
        match sections::scroll_target(self.layout.sections(), section) {
            Some(y) => operation::scroll_to(
                Id::new(PAGE_SCROLLABLE_ID),
                AbsoluteOffset { x: 0.0, y },
            ),
            None => Task::none(),
        }
    }

    /// Relayouts immediately; card poses are redrawn once resizing settles.
    fn handle_resize(&mut self, size: Size) -> Task<Message> {
        let counts = self.layout.counts();
        self.layout = PageLayout::compute(size.width, counts);
        self.viewport = Span::new(self.viewport.top, size.height);
        if size.width >= crate::ui::design_tokens::sizing::NAV_COLLAPSE_WIDTH {
            self.menu_open = false;
        }
        self.observe_reveals();

        let ticket = self.resize.schedule();
        update::deliver_after(self.resize.delay(), ticket, Message::ResizeSettled)
    }

    fn observe_reveals(&mut self) {
        if !self.intro.is_done() {
            return;
        }
        let revealed = self
            .reveal
            .observe(self.layout.reveal_spans(), self.viewport, self.now);
        if revealed > 0 {
            tracing::trace!(revealed, "elements scrolled into view");
        }
    }

    fn on_page_revealed(&mut self, mark_seen: bool) {
        self.observe_reveals();
        if mark_seen && !self.app_state.intro_seen {
            self.app_state.intro_seen = true;
            if let Some(warning) = self.app_state.save_to(self.state_dir.clone()) {
                self.warnings.push(warning);
            }
        }
    }
}

fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
