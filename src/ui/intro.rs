// SPDX-License-Identifier: MPL-2.0
//! Startup preloader and the one-time envelope intro.
//!
//! The preloader always shows first. After it, the sealed envelope appears
//! unless the intro is disabled or was already seen. Pressing the envelope
//! plays a short opening animation and then reveals the page.

use crate::config::ENVELOPE_OPENING_MS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Container, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, Element, Length, Theme,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preloading { until: Instant },
    Envelope,
    Opening { started: Instant },
    Done,
}

/// What the caller must do after a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page is now visible.
    Revealed {
        /// The envelope was opened; remember it so it is not shown again.
        mark_seen: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenEnvelope,
}

#[derive(Debug, Clone)]
pub struct Intro {
    phase: Phase,
    show_envelope: bool,
}

impl Intro {
    /// `show_envelope` is true when the envelope should follow the preloader.
    #[must_use]
    pub fn new(show_envelope: bool, preloader: Duration, now: Instant) -> Self {
        Self {
            phase: Phase::Preloading {
                until: now + preloader,
            },
            show_envelope,
        }
    }

    /// Decides whether the envelope plays this run.
    #[must_use]
    pub fn wants_envelope(enabled: bool, already_seen: bool, replay: bool) -> bool {
        enabled && (replay || !already_seen)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// True while timed phases need ticks to advance.
    pub fn needs_ticks(&self) -> bool {
        matches!(self.phase, Phase::Preloading { .. } | Phase::Opening { .. })
    }

    /// Advances timed phases.
    pub fn tick(&mut self, now: Instant) -> Option<Outcome> {
        match self.phase {
            Phase::Preloading { until } if now >= until => {
                if self.show_envelope {
                    self.phase = Phase::Envelope;
                    None
                } else {
                    self.phase = Phase::Done;
                    Some(Outcome::Revealed { mark_seen: false })
                }
            }
            Phase::Opening { started }
                if now.saturating_duration_since(started) >= opening_duration() =>
            {
                self.phase = Phase::Done;
                Some(Outcome::Revealed { mark_seen: true })
            }
            _ => None,
        }
    }

    /// Starts the opening animation. Ignored outside the envelope phase.
    pub fn open_envelope(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Envelope {
            self.phase = Phase::Opening { started: now };
            true
        } else {
            false
        }
    }

    /// Opening animation progress in `0.0..=1.0`.
    pub fn opening_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Opening { started } => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                (elapsed / opening_duration().as_secs_f32()).min(1.0)
            }
            Phase::Done => 1.0,
            _ => 0.0,
        }
    }
}

fn opening_duration() -> Duration {
    Duration::from_millis(ENVELOPE_OPENING_MS)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub intro: &'a Intro,
    pub colors: &'a ColorScheme,
    pub initials: String,
    pub now: Instant,
}

/// Full-window intro screen. Returns `None` once the page is revealed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let body: Element<'a, Message> = match ctx.intro.phase() {
        Phase::Done => return None,
        Phase::Preloading { .. } => Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.initials)
                    .size(typography::TITLE_LG)
                    .color(ctx.colors.accent),
            )
            .push(
                Text::new(ctx.i18n.tr("intro-loading"))
                    .size(typography::BODY)
                    .color(ctx.colors.text_secondary),
            )
            .into(),
        Phase::Envelope => Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(
                button(envelope(ctx.colors, ctx.initials, 0.0))
                    .on_press(Message::OpenEnvelope)
                    .padding(0)
                    .style(styles::button::card),
            )
            .push(
                Text::new(ctx.i18n.tr("intro-envelope-hint"))
                    .size(typography::BODY)
                    .color(ctx.colors.text_secondary),
            )
            .into(),
        Phase::Opening { .. } => {
            envelope(ctx.colors, ctx.initials, ctx.intro.opening_progress(ctx.now))
        }
    };

    Some(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::page(ctx.colors))
            .into(),
    )
}

/// Envelope body with a seal; the seal fades and the flap lifts as
/// `progress` goes to 1.
fn envelope<'a>(colors: &ColorScheme, initials: String, progress: f32) -> Element<'a, Message> {
    let fade = 1.0 - progress;
    let seal_color = Color {
        a: fade,
        ..colors.highlight
    };
    let paper = colors.surface_secondary;
    let edge = colors.accent;
    let flap_height = sizing::ENVELOPE_HEIGHT * 0.45 * fade;

    let flap = Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fixed(flap_height))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color { a: 0.6, ..edge })),
            ..Default::default()
        });

    let seal = Container::new(
        Text::new(initials)
            .size(typography::TITLE_SM)
            .color(Color { a: fade, ..Color::WHITE }),
    )
    .padding(spacing::SM)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(seal_color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let inner = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .push(flap)
        .push(seal);

    Container::new(inner)
        .width(Length::Fixed(sizing::ENVELOPE_WIDTH))
        .height(Length::Fixed(sizing::ENVELOPE_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(paper)),
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        })
        .into()
}
