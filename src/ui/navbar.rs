// SPDX-License-Identifier: MPL-2.0
//! Navigation bar floating over the page.
//!
//! Wide windows show every section link inline. Narrow windows collapse the
//! links behind a menu toggle; choosing a link closes the menu and scrolls
//! to the section.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, radius, spacing, typography};
use crate::ui::state::SectionId;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Background, Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Couple initials shown as the brand.
    pub brand: String,
    pub menu_open: bool,
    /// The page has scrolled past the threshold.
    pub scrolled: bool,
    /// Links are collapsed behind the toggle.
    pub compact: bool,
    pub active: Option<SectionId>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.clone())
        .size(typography::TITLE_SM)
        .color(ctx.colors.accent_strong);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(layout::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let label = if ctx.menu_open {
            ctx.i18n.tr("nav-menu-close")
        } else {
            ctx.i18n.tr("nav-menu-open")
        };
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost(ctx.colors)),
        );
    } else {
        for section in SectionId::ALL {
            row = row.push(build_link(ctx, section));
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar(ctx.colors, ctx.scrolled))
        .into()
}

/// Dropdown with one link per section.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_column = SectionId::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(build_link(ctx, section))
        });

    let background = ctx.colors.surface_primary;
    let edge = ctx.colors.accent;
    Container::new(menu_column)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: edge,
            },
            ..Default::default()
        })
        .into()
}

fn build_link<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    let active = ctx.active == Some(section);
    let mut link = button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
        .on_press(Message::Navigate(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(ctx.colors, active));

    if ctx.compact {
        link = link
            .width(Length::Fill)
            .height(Length::Fixed(layout::MENU_ITEM_HEIGHT));
    }
    link.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(i18n: &'a I18n, colors: &'a ColorScheme, compact: bool, menu_open: bool) -> ViewContext<'a> {
        ViewContext {
            i18n,
            colors,
            brand: "C & J".to_string(),
            menu_open,
            scrolled: false,
            compact,
            active: Some(SectionId::Story),
        }
    }

    #[test]
    fn navbar_view_renders_wide() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let _element = view(ctx(&i18n, &colors, false, false));
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let _element = view(ctx(&i18n, &colors, true, true));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn navigate_closes_menu_and_scrolls() {
        let mut menu_open = true;
        let event = update(Message::Navigate(SectionId::Gallery), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ScrollTo(SectionId::Gallery));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = true;
        update(Message::CloseMenu, &mut menu_open);
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }
}
