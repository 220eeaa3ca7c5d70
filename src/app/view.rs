// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! While the intro runs it owns the whole window. Afterwards the page
//! scrollable sits at the bottom of a stack, with the navbar, the warning
//! banner and the two overlays layered above it.

use super::Message;
use crate::content::{Couple, Invitation};
use crate::countdown::Countdown;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gift::{self, GiftModal};
use crate::ui::intro::{self, Intro};
use crate::ui::lightbox::{self, Lightbox};
use crate::ui::navbar;
use crate::ui::page::{self, PageLayout};
use crate::ui::state::{sections, CardPose, RevealTracker};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_lock_guard;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, mouse_area, Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use std::time::Instant;

/// Id of the page scrollable, used to scroll to sections.
pub const PAGE_SCROLLABLE_ID: &str = "invitation-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub invitation: &'a Invitation,
    pub intro: &'a Intro,
    pub lightbox: &'a Lightbox,
    pub gift: &'a GiftModal,
    pub layout: &'a PageLayout,
    pub reveal: &'a RevealTracker,
    pub poses: &'a [CardPose],
    pub countdown: Countdown,
    pub scroll_locked: bool,
    pub scroll_y: f32,
    pub menu_open: bool,
    /// i18n keys of warnings not yet dismissed.
    pub warnings: &'a [String],
    pub now: Instant,
}

/// "C & J" style monogram for the couple.
pub fn initials(couple: &Couple) -> String {
    let first = |name: &str| name.chars().next().map(String::from).unwrap_or_default();
    format!("{} & {}", first(&couple.partner_one), first(&couple.partner_two))
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let intro_screen = intro::view(intro::ViewContext {
        i18n: ctx.i18n,
        intro: ctx.intro,
        colors: ctx.colors,
        initials: initials(&ctx.invitation.couple),
        now: ctx.now,
    });
    if let Some(screen) = intro_screen {
        return screen.map(Message::Intro);
    }

    let compact = ctx.layout.width() < sizing::NAV_COLLAPSE_WIDTH;

    let body = page::view(page::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        invitation: ctx.invitation,
        layout: ctx.layout,
        reveal: ctx.reveal,
        poses: ctx.poses,
        countdown: ctx.countdown,
        now: ctx.now,
    })
    .map(Message::Page);

    let scrollable = Scrollable::new(body)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(scroll_lock_guard(scrollable, ctx.scroll_locked))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page(ctx.colors)),
        );

    // Presses anywhere outside the open dropdown close it.
    if compact && ctx.menu_open {
        layers = layers.push(
            mouse_area(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .on_press(Message::Navbar(navbar::Message::CloseMenu)),
        );
    }

    layers = layers.push(
        navbar::view(navbar::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            brand: initials(&ctx.invitation.couple),
            menu_open: ctx.menu_open,
            scrolled: sections::navbar_is_scrolled(ctx.scroll_y),
            compact,
            active: sections::active_section(ctx.layout.sections(), ctx.scroll_y),
        })
        .map(Message::Navbar),
    );

    if let Some(banner) = warnings_banner(&ctx) {
        layers = layers.push(banner);
    }

    if let Some(overlay) = lightbox::view::view(lightbox::view::ViewContext {
        i18n: ctx.i18n,
        lightbox: ctx.lightbox,
        colors: ctx.colors,
        now: ctx.now,
    }) {
        layers = layers.push(overlay.map(Message::Lightbox));
    }

    if let Some(details) = ctx.invitation.gifts.as_ref() {
        if let Some(overlay) = gift::view(gift::ViewContext {
            i18n: ctx.i18n,
            modal: ctx.gift,
            details,
            colors: ctx.colors,
            now: ctx.now,
        }) {
            layers = layers.push(overlay.map(Message::Gift));
        }
    }

    layers.into()
}

/// Bottom banner listing startup warnings, each with a dismiss button.
fn warnings_banner<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.warnings.is_empty() {
        return None;
    }

    let rows = ctx
        .warnings
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, key)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(
                        Text::new(ctx.i18n.tr(key))
                            .size(typography::BODY)
                            .color(ctx.colors.text_primary)
                            .width(Length::Fill),
                    )
                    .push(
                        button(Text::new(ctx.i18n.tr("notification-dismiss")).size(typography::CAPTION))
                            .on_press(Message::DismissWarning(index))
                            .padding([spacing::XXS, spacing::SM])
                            .style(styles::button::ghost(ctx.colors)),
                    ),
            )
        });

    let card = Container::new(rows)
        .padding(spacing::MD)
        .max_width(sizing::MODAL_WIDTH)
        .style(styles::container::card(ctx.colors, 1.0));

    Some(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_use_first_letters() {
        let couple = Couple {
            partner_one: "Camille".to_string(),
            partner_two: "Julien".to_string(),
            tagline: None,
        };
        assert_eq!(initials(&couple), "C & J");
    }

    #[test]
    fn initials_tolerate_empty_names() {
        let couple = Couple {
            partner_one: String::new(),
            partner_two: "Élodie".to_string(),
            tagline: None,
        };
        assert_eq!(initials(&couple), " & É");
    }
}
