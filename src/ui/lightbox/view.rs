// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering for the lightbox.

use super::{Lightbox, PointerTarget};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::time::Instant;

/// Messages emitted by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Previous,
    Next,
    Pressed(PointerTarget),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: &'a Lightbox,
    pub colors: &'a ColorScheme,
    pub now: Instant,
}

/// Renders the overlay, or nothing while the lightbox is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.lightbox.is_open() {
        return None;
    }
    let displayed = ctx.lightbox.displayed()?;

    // Presses that reach the backdrop layer missed the photo.
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(ctx.colors)),
    )
    .on_press(Message::Pressed(PointerTarget::Backdrop));

    let photo = image::Image::new(Handle::from_path(&displayed.source))
        .content_fit(ContentFit::Contain)
        .opacity(ctx.lightbox.image_opacity(ctx.now))
        .width(Length::Shrink)
        .height(Length::Fill);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(photo);

    if let Some(caption) = displayed.caption.as_deref() {
        content = content.push(
            Container::new(Text::new(caption.to_string()).size(typography::BODY_LG))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::MD)),
        );
    }

    let content = Container::new(
        mouse_area(content).on_press(Message::Pressed(PointerTarget::Content)),
    )
    .padding(spacing::XXL)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    let position = ctx.i18n.tr_with_args(
        "lightbox-position",
        &[
            ("current", &(ctx.lightbox.current_index() + 1).to_string()),
            ("total", &ctx.lightbox.len().to_string()),
        ],
    );

    let top_bar = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(position).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::FULL)),
        )
        .push(Space::new().width(Length::Fill))
        .push(control("\u{00d7}", ctx.i18n.tr("lightbox-close"), Message::Close));

    let nav_row = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(control("\u{2039}", ctx.i18n.tr("lightbox-previous"), Message::Previous))
        .push(Space::new().width(Length::Fill))
        .push(control("\u{203a}", ctx.i18n.tr("lightbox-next"), Message::Next));

    let controls = Column::new().push(top_bar).push(nav_row);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(content)
            .push(controls)
            .into(),
    )
}

/// Overlay button with a large glyph over a small text label.
fn control<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let face = Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(glyph).size(typography::TITLE_LG).color(WHITE))
        .push(Text::new(label).size(typography::CAPTION).color(WHITE));

    button(face)
        .on_press(message)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::ICON_LG * 2.0))
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .into()
}
