// SPDX-License-Identifier: MPL-2.0
//! The scrolling invitation page: hero, story, couple, gallery and gifts.

pub mod layout;
mod sections;

pub use layout::{ElementCounts, PageLayout, RevealGroup};

use crate::content::Invitation;
use crate::countdown::Countdown;
use crate::i18n::fluent::I18n;
use crate::ui::state::{CardPose, RevealTracker, SectionId};
use crate::ui::theming::ColorScheme;
use iced::widget::Column;
use iced::{Element, Length};
use std::time::Instant;

/// Messages emitted by the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A gallery card was pressed.
    OpenPhoto(usize),
    OpenGifts,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub invitation: &'a Invitation,
    pub layout: &'a PageLayout,
    pub reveal: &'a RevealTracker,
    pub poses: &'a [CardPose],
    pub countdown: Countdown,
    pub now: Instant,
}

impl ViewContext<'_> {
    /// Opacity and downward offset of an animated element.
    fn reveal_style(&self, group: RevealGroup, index: usize) -> (f32, f32) {
        self.reveal
            .style(self.layout.reveal_index(group, index), self.now)
    }

    fn section_height(&self, id: SectionId) -> Length {
        Length::Fixed(self.layout.section_height(id))
    }
}

/// Renders the full page body. The caller wraps it in the page scrollable.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(sections::hero(&ctx))
        .push(sections::story(&ctx))
        .push(sections::couple(&ctx))
        .push(sections::gallery(&ctx))
        .push(sections::gifts(&ctx))
        .into()
}
