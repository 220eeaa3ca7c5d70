// SPDX-License-Identifier: MPL-2.0
//! Gift modal with copyable bank details.

use crate::config::COPIED_BADGE_MS;
use crate::content::GiftDetails;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::ScrollLock;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use std::time::{Duration, Instant};

/// A copyable line of the bank details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bank,
    Holder,
    Account,
    Reference,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Bank, Field::Holder, Field::Account, Field::Reference];

    fn label_key(self) -> &'static str {
        match self {
            Field::Bank => "gift-bank",
            Field::Holder => "gift-holder",
            Field::Account => "gift-account",
            Field::Reference => "gift-reference",
        }
    }

    /// The text copied for this field, if the invitation provides it.
    #[must_use]
    pub fn value(self, details: &GiftDetails) -> Option<&str> {
        match self {
            Field::Bank => Some(details.bank.as_str()),
            Field::Holder => Some(details.holder.as_str()),
            Field::Account => Some(details.account.as_str()),
            Field::Reference => details.reference.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    Close,
    BackdropPressed,
    /// Swallows presses on the dialog so they do not reach the backdrop.
    DialogPressed,
    Copy(Field),
}

#[derive(Debug, Clone, Default)]
pub struct GiftModal {
    open: bool,
    copied: Option<(Field, Instant)>,
}

impl GiftModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, scroll: &mut ScrollLock) {
        self.open = true;
        self.copied = None;
        scroll.lock();
    }

    /// Idempotent.
    pub fn close(&mut self, scroll: &mut ScrollLock) {
        self.open = false;
        scroll.release();
    }

    pub fn mark_copied(&mut self, field: Field, now: Instant) {
        self.copied = Some((field, now));
    }

    /// The field whose "copied" badge is still showing.
    pub fn copied_field(&self, now: Instant) -> Option<Field> {
        self.copied
            .filter(|(_, at)| now.saturating_duration_since(*at) < badge_duration())
            .map(|(field, _)| field)
    }

    /// True while a badge needs a tick to disappear.
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.open && self.copied_field(now).is_some()
    }
}

fn badge_duration() -> Duration {
    Duration::from_millis(COPIED_BADGE_MS)
}

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description when no system clipboard is reachable, e.g. on a
/// headless session. Callers then fall back to the toolkit clipboard.
pub fn copy_to_system_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text).map_err(|e| e.to_string())
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub modal: &'a GiftModal,
    pub details: &'a GiftDetails,
    pub colors: &'a ColorScheme,
    pub now: Instant,
}

/// Renders the modal, or nothing while it is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.modal.is_open() {
        return None;
    }

    let copied = ctx.modal.copied_field(ctx.now);

    let mut rows = Column::new().spacing(spacing::MD).push(
        Text::new(ctx.i18n.tr("gift-modal-title"))
            .size(typography::TITLE_MD)
            .color(ctx.colors.accent_strong),
    );

    if let Some(message) = ctx.details.message.as_deref() {
        rows = rows.push(
            Text::new(message.to_string())
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        );
    }

    for field in Field::ALL {
        let Some(value) = field.value(ctx.details) else {
            continue;
        };
        rows = rows.push(detail_row(&ctx, field, value, copied == Some(field)));
    }

    rows = rows.push(
        Container::new(
            button(Text::new(ctx.i18n.tr("gift-close")))
                .on_press(Message::Close)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Right),
    );

    let dialog = mouse_area(
        Container::new(rows)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .style(styles::container::card(ctx.colors, 1.0)),
    )
    .on_press(Message::DialogPressed);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(ctx.colors)),
    )
    .on_press(Message::BackdropPressed);

    let centered = Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Some(Stack::new().push(backdrop).push(centered).into())
}

fn detail_row<'a>(
    ctx: &ViewContext<'a>,
    field: Field,
    value: &str,
    show_badge: bool,
) -> Element<'a, Message> {
    let text = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr(field.label_key()))
                .size(typography::CAPTION)
                .color(ctx.colors.text_tertiary),
        )
        .push(
            Text::new(value.to_string())
                .size(typography::BODY_LG)
                .color(ctx.colors.text_primary),
        );

    let action: Element<'a, Message> = if show_badge {
        Container::new(Text::new(ctx.i18n.tr("gift-copied")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(ctx.colors))
            .into()
    } else {
        button(Text::new(ctx.i18n.tr("gift-copy")).size(typography::CAPTION))
            .on_press(Message::Copy(field))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::ghost(ctx.colors))
            .into()
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text)
        .push(action)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> GiftDetails {
        GiftDetails {
            message: None,
            bank: "Bank".to_string(),
            holder: "A & B".to_string(),
            account: "FR76 0000".to_string(),
            reference: None,
        }
    }

    #[test]
    fn open_and_close_drive_scroll_lock() {
        let mut modal = GiftModal::default();
        let mut scroll = ScrollLock::default();
        modal.open(&mut scroll);
        assert!(modal.is_open());
        assert!(scroll.is_locked());

        modal.close(&mut scroll);
        modal.close(&mut scroll);
        assert!(!modal.is_open());
        assert!(!scroll.is_locked());
    }

    #[test]
    fn copied_badge_expires() {
        let mut modal = GiftModal::default();
        let mut scroll = ScrollLock::default();
        modal.open(&mut scroll);

        let now = Instant::now();
        modal.mark_copied(Field::Account, now);
        assert_eq!(modal.copied_field(now), Some(Field::Account));
        assert!(modal.needs_ticks(now));

        let later = now + badge_duration();
        assert_eq!(modal.copied_field(later), None);
        assert!(!modal.needs_ticks(later));
    }

    #[test]
    fn reopening_clears_badge() {
        let mut modal = GiftModal::default();
        let mut scroll = ScrollLock::default();
        let now = Instant::now();
        modal.mark_copied(Field::Bank, now);
        modal.open(&mut scroll);
        assert_eq!(modal.copied_field(now), None);
    }

    #[test]
    fn optional_reference_is_skipped() {
        let mut details = details();
        assert_eq!(Field::Reference.value(&details), None);
        details.reference = Some("REF".to_string());
        assert_eq!(Field::Reference.value(&details), Some("REF"));
        assert_eq!(Field::Account.value(&details), Some("FR76 0000"));
    }

    #[test]
    fn view_renders_only_when_open() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let details = details();
        let mut modal = GiftModal::default();
        let now = Instant::now();

        let closed = ViewContext {
            i18n: &i18n,
            modal: &modal,
            details: &details,
            colors: &colors,
            now,
        };
        assert!(view(closed).is_none());

        let mut scroll = ScrollLock::default();
        modal.open(&mut scroll);
        let open = ViewContext {
            i18n: &i18n,
            modal: &modal,
            details: &details,
            colors: &colors,
            now,
        };
        assert!(view(open).is_some());
    }
}
