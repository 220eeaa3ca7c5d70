// SPDX-License-Identifier: MPL-2.0
//! Page sections, active-section highlighting and scroll targets.

use super::reveal::Span;
use crate::config::{
    ACTIVE_SECTION_OFFSET_PX, NAVBAR_SCROLLED_THRESHOLD_PX, NAVBAR_SCROLL_OFFSET_PX,
};

/// Sections reachable from the navigation menu, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Story,
    Couple,
    Gallery,
    Gifts,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Story,
        SectionId::Couple,
        SectionId::Gallery,
        SectionId::Gifts,
    ];

    /// i18n key of the navigation link.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::Story => "nav-story",
            SectionId::Couple => "nav-couple",
            SectionId::Gallery => "nav-gallery",
            SectionId::Gifts => "nav-gifts",
        }
    }
}

/// Where a section sits on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub span: Span,
}

/// Returns the section containing `scroll_y`, if any.
///
/// Section tops are pulled up by a fixed offset so a section becomes active
/// slightly before it reaches the top of the window. When spans overlap the
/// later section wins.
#[must_use]
pub fn active_section(sections: &[SectionSpan], scroll_y: f32) -> Option<SectionId> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.span.top - ACTIVE_SECTION_OFFSET_PX;
            scroll_y >= top && scroll_y < top + section.span.height
        })
        .map(|section| section.id)
}

/// Scroll offset that brings `id` just below the navbar.
#[must_use]
pub fn scroll_target(sections: &[SectionSpan], id: SectionId) -> Option<f32> {
    sections
        .iter()
        .find(|section| section.id == id)
        .map(|section| (section.span.top - NAVBAR_SCROLL_OFFSET_PX).max(0.0))
}

/// Whether the navbar should use its compact "scrolled" style.
#[must_use]
pub fn navbar_is_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD_PX
}
