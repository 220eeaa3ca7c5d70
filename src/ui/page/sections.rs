// SPDX-License-Identifier: MPL-2.0
//! Section builders for the page.

use super::layout::rows;
use super::{Message, RevealGroup, ViewContext};
use crate::config::{CARD_JITTER_X_PX, CARD_JITTER_Y_PX};
use crate::content::{Person, TimelineEntry};
use crate::gallery::GalleryItem;
use crate::ui::design_tokens::{layout, palette, spacing, typography};
use crate::ui::state::{CardPose, SectionId};
use crate::ui::styles;
use crate::ui::styles::container::fade;
use iced::widget::image::{self, Handle};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding, Radians, Rotation,
};

// -----------------------------------------------------------------------------
// Shared pieces
// -----------------------------------------------------------------------------

/// Section shell: fixed height, alternating background, title header.
fn section<'a>(
    ctx: &ViewContext<'a>,
    id: SectionId,
    title_key: &str,
    alternate: bool,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Container::new(
        Text::new(ctx.i18n.tr(title_key))
            .size(typography::TITLE_LG)
            .color(ctx.colors.accent_strong),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout::SECTION_HEADER_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(Padding {
        bottom: spacing::LG,
        ..Padding::ZERO
    });

    let column = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(header)
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .height(ctx.section_height(id))
        .padding([0.0, layout::PAGE_GUTTER])
        .clip(true)
        .style(styles::container::section(ctx.colors, alternate))
        .into()
}

/// Slot of fixed height whose content slides up while it is revealed.
fn reveal_slot<'a>(
    content: impl Into<Element<'a, Message>>,
    offset: f32,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    Container::new(content)
        .width(width)
        .height(Length::Fixed(height))
        .padding(Padding {
            top: offset,
            ..Padding::ZERO
        })
        .clip(true)
        .into()
}

/// Lays `cards` out in rows of `columns`, one row per grid pitch.
fn grid<'a>(
    cards: Vec<Element<'a, Message>>,
    columns: usize,
    card_width: f32,
    card_height: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let row_count = rows(cards.len(), columns);
    let mut cards = cards.into_iter();
    let mut grid = Column::new().align_x(Horizontal::Center);

    for _ in 0..row_count {
        let row = cards
            .by_ref()
            .take(columns)
            .fold(Row::new().spacing(layout::GALLERY_GAP), |row, card| row.push(card));
        grid = grid.push(
            Container::new(row)
                .width(Length::Fill)
                .height(Length::Fixed(card_height + layout::GALLERY_GAP))
                .align_x(Horizontal::Center),
        );
    }

    Container::new(grid)
        .width(Length::Fill)
        .max_width(columns as f32 * (card_width + layout::GALLERY_GAP))
        .into()
}

// -----------------------------------------------------------------------------
// Hero
// -----------------------------------------------------------------------------

pub(super) fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let invitation = ctx.invitation;
    let colors = ctx.colors;

    let names = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(invitation.couple.partner_one.as_str())
                .size(typography::DISPLAY)
                .color(colors.text_primary),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-and"))
                .size(typography::TITLE_LG)
                .color(colors.accent),
        )
        .push(
            Text::new(invitation.couple.partner_two.as_str())
                .size(typography::DISPLAY)
                .color(colors.text_primary),
        );

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("hero-save-the-date"))
                .size(typography::BODY_LG)
                .color(colors.highlight),
        )
        .push(names);

    if let Some(tagline) = invitation.couple.tagline.as_deref() {
        column = column.push(
            Text::new(tagline)
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        );
    }

    column = column
        .push(
            Text::new(invitation.event.date.format("%d.%m.%Y  %H:%M").to_string())
                .size(typography::TITLE_SM)
                .color(colors.accent_strong),
        )
        .push(
            Text::new(invitation.event.venue.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_primary),
        );

    if let Some(address) = invitation.event.address.as_deref() {
        column = column.push(
            Text::new(address)
                .size(typography::BODY)
                .color(colors.text_tertiary),
        );
    }

    column = column.push(Space::new().height(Length::Fixed(spacing::LG)));
    column = column.push(countdown(ctx));

    Container::new(column)
        .width(Length::Fill)
        .height(ctx.section_height(SectionId::Home))
        .padding(Padding {
            top: layout::NAVBAR_HEIGHT,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::section(ctx.colors, false))
        .into()
}

fn countdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.countdown.elapsed {
        return Text::new(ctx.i18n.tr("countdown-elapsed"))
            .size(typography::TITLE_MD)
            .color(ctx.colors.highlight)
            .into();
    }

    let labels = [
        "countdown-days",
        "countdown-hours",
        "countdown-minutes",
        "countdown-seconds",
    ];

    ctx.countdown
        .display()
        .into_iter()
        .zip(labels)
        .fold(Row::new().spacing(spacing::MD), |row, (value, label)| {
            let unit = Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .push(
                    Text::new(value)
                        .size(typography::TITLE_LG)
                        .color(ctx.colors.text_primary),
                )
                .push(
                    Text::new(ctx.i18n.tr(label))
                        .size(typography::CAPTION)
                        .color(ctx.colors.text_tertiary),
                );
            row.push(
                Container::new(unit)
                    .padding([spacing::SM, spacing::MD])
                    .style(styles::container::card(ctx.colors, 1.0)),
            )
        })
        .into()
}

// -----------------------------------------------------------------------------
// Story
// -----------------------------------------------------------------------------

pub(super) fn story<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries = ctx
        .invitation
        .timeline
        .iter()
        .enumerate()
        .fold(Column::new().width(Length::Fill), |column, (i, entry)| {
            column.push(timeline_entry(ctx, i, entry))
        });

    section(ctx, SectionId::Story, "section-story-title", true, entries.into())
}

fn timeline_entry<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    entry: &'a TimelineEntry,
) -> Element<'a, Message> {
    let (alpha, offset) = ctx.reveal_style(RevealGroup::Timeline, index);
    let colors = ctx.colors;

    let card = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(entry.when.as_str())
                .size(typography::CAPTION)
                .color(fade(colors.highlight, alpha)),
        )
        .push(
            Text::new(entry.title.as_str())
                .size(typography::TITLE_SM)
                .color(fade(colors.text_primary, alpha)),
        )
        .push(
            Text::new(entry.text.as_str())
                .size(typography::BODY)
                .color(fade(colors.text_secondary, alpha)),
        );

    let card = Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .max_width(560.0)
        .style(styles::container::card(colors, alpha));

    // Entries alternate sides of the center line.
    let row = if index % 2 == 0 {
        Row::new().push(card).push(Space::new().width(Length::Fill))
    } else {
        Row::new().push(Space::new().width(Length::Fill)).push(card)
    };

    reveal_slot(
        row.width(Length::Fill).padding([spacing::XS, 0.0]),
        offset,
        Length::Fill,
        layout::TIMELINE_ITEM_HEIGHT,
    )
}

// -----------------------------------------------------------------------------
// Couple
// -----------------------------------------------------------------------------

pub(super) fn couple<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .invitation
        .people
        .iter()
        .enumerate()
        .map(|(i, person)| person_card(ctx, i, person))
        .collect();

    section(
        ctx,
        SectionId::Couple,
        "section-couple-title",
        false,
        grid(
            cards,
            ctx.layout.people_columns(),
            layout::PERSON_CARD_WIDTH,
            layout::PERSON_CARD_HEIGHT,
        ),
    )
}

fn person_card<'a>(ctx: &ViewContext<'a>, index: usize, person: &'a Person) -> Element<'a, Message> {
    let (alpha, offset) = ctx.reveal_style(RevealGroup::People, index);
    let colors = ctx.colors;

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    if let Some(photo) = &person.photo {
        column = column.push(
            image::Image::new(Handle::from_path(photo))
                .content_fit(ContentFit::Cover)
                .opacity(alpha)
                .width(Length::Fixed(120.0))
                .height(Length::Fixed(120.0)),
        );
    }

    column = column.push(
        Text::new(person.name.as_str())
            .size(typography::TITLE_MD)
            .color(fade(colors.text_primary, alpha)),
    );
    if let Some(role) = person.role.as_deref() {
        column = column.push(
            Text::new(role)
                .size(typography::CAPTION)
                .color(fade(colors.accent_strong, alpha)),
        );
    }
    if let Some(bio) = person.bio.as_deref() {
        column = column.push(
            Text::new(bio)
                .size(typography::BODY)
                .color(fade(colors.text_secondary, alpha)),
        );
    }

    let card = Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::card(colors, alpha));

    reveal_slot(
        card,
        offset,
        Length::Fixed(layout::PERSON_CARD_WIDTH),
        layout::PERSON_CARD_HEIGHT,
    )
}

// -----------------------------------------------------------------------------
// Gallery
// -----------------------------------------------------------------------------

pub(super) fn gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .invitation
        .gallery
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let pose = ctx.poses.get(i).copied().unwrap_or_default();
            polaroid(ctx, i, item, pose)
        })
        .collect();

    let body = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(grid(
            cards,
            ctx.layout.gallery_columns(),
            layout::GALLERY_CARD_WIDTH,
            layout::GALLERY_CARD_HEIGHT,
        ));

    section(ctx, SectionId::Gallery, "section-gallery-title", true, body.into())
}

/// Polaroid card: white frame, tilted photo, handwritten-style caption.
fn polaroid<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    item: &'a GalleryItem,
    pose: CardPose,
) -> Element<'a, Message> {
    let (alpha, offset) = ctx.reveal_style(RevealGroup::Gallery, index);

    let photo = image::Image::new(Handle::from_path(item.source()))
        .content_fit(ContentFit::Cover)
        .rotation(Rotation::Floating(Radians(pose.tilt.radians())))
        .opacity(alpha)
        .width(Length::Fill)
        .height(Length::Fixed(layout::GALLERY_PHOTO_HEIGHT));

    let caption = Text::new(item.caption().unwrap_or_default())
        .size(typography::BODY)
        .color(fade(palette::INK_SOFT, alpha));

    let frame = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(photo)
            .push(caption),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::polaroid(alpha));

    let card = button(frame)
        .on_press(Message::OpenPhoto(index))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::button::card);

    // The jitter lives inside a margin so neighbouring cards never shift.
    let jittered = Container::new(card).padding(Padding {
        top: CARD_JITTER_Y_PX + pose.offset_y,
        bottom: CARD_JITTER_Y_PX - pose.offset_y,
        left: CARD_JITTER_X_PX + pose.offset_x,
        right: CARD_JITTER_X_PX - pose.offset_x,
    });

    reveal_slot(
        jittered,
        offset,
        Length::Fixed(layout::GALLERY_CARD_WIDTH),
        layout::GALLERY_CARD_HEIGHT,
    )
}

// -----------------------------------------------------------------------------
// Gifts
// -----------------------------------------------------------------------------

pub(super) fn gifts<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some(details) = &ctx.invitation.gifts {
        if let Some(message) = details.message.as_deref() {
            column = column.push(
                Text::new(message)
                    .size(typography::BODY_LG)
                    .color(ctx.colors.text_secondary),
            );
        }
        column = column.push(
            button(Text::new(ctx.i18n.tr("gifts-open-button")))
                .on_press(Message::OpenGifts)
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary),
        );
    }

    let body = Container::new(column)
        .width(Length::Fill)
        .max_width(640.0)
        .height(Length::Fixed(layout::GIFTS_BODY_HEIGHT))
        .align_y(Vertical::Center);

    section(ctx, SectionId::Gifts, "section-gifts-title", false, body.into())
}
