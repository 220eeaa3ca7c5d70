// SPDX-License-Identifier: MPL-2.0
//! Page geometry derived from the window width and the content counts.
//!
//! The page view gives every section and every animated element a fixed
//! height, so their positions can be computed here instead of being measured.
//! The view reads the same numbers back to stay in sync.

use crate::ui::design_tokens::layout;
use crate::ui::state::{SectionId, SectionSpan, Span};

/// How many elements of each animated kind the page holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts {
    pub timeline: usize,
    pub people: usize,
    pub gallery: usize,
}

/// Animated element groups, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealGroup {
    Timeline,
    People,
    Gallery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    width: f32,
    counts: ElementCounts,
    people_columns: usize,
    gallery_columns: usize,
    sections: Vec<SectionSpan>,
    reveal_spans: Vec<Span>,
}

impl PageLayout {
    #[must_use]
    pub fn compute(width: f32, counts: ElementCounts) -> Self {
        let people_columns = columns(
            width,
            layout::PERSON_CARD_WIDTH,
            layout::GALLERY_GAP,
        );
        let gallery_columns = columns(
            width,
            layout::GALLERY_CARD_WIDTH,
            layout::GALLERY_GAP,
        );

        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut reveal_spans = Vec::with_capacity(counts.timeline + counts.people + counts.gallery);
        let mut top = 0.0;

        for id in SectionId::ALL {
            let body_top = top + layout::SECTION_HEADER_HEIGHT;
            let height = match id {
                SectionId::Home => layout::HERO_HEIGHT,
                SectionId::Story => {
                    for i in 0..counts.timeline {
                        reveal_spans.push(Span::new(
                            body_top + i as f32 * layout::TIMELINE_ITEM_HEIGHT,
                            layout::TIMELINE_ITEM_HEIGHT,
                        ));
                    }
                    framed(counts.timeline as f32 * layout::TIMELINE_ITEM_HEIGHT)
                }
                SectionId::Couple => framed(grid(
                    &mut reveal_spans,
                    body_top,
                    counts.people,
                    people_columns,
                    layout::PERSON_CARD_HEIGHT,
                )),
                SectionId::Gallery => framed(grid(
                    &mut reveal_spans,
                    body_top,
                    counts.gallery,
                    gallery_columns,
                    layout::GALLERY_CARD_HEIGHT,
                )),
                SectionId::Gifts => framed(layout::GIFTS_BODY_HEIGHT),
            };
            sections.push(SectionSpan {
                id,
                span: Span::new(top, height),
            });
            top += height;
        }

        Self {
            width,
            counts,
            people_columns,
            gallery_columns,
            sections,
            reveal_spans,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn counts(&self) -> ElementCounts {
        self.counts
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    /// Height of a section as laid out.
    pub fn section_height(&self, id: SectionId) -> f32 {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map_or(0.0, |section| section.span.height)
    }

    pub fn total_height(&self) -> f32 {
        self.sections.last().map_or(0.0, |section| section.span.bottom())
    }

    pub fn people_columns(&self) -> usize {
        self.people_columns
    }

    pub fn gallery_columns(&self) -> usize {
        self.gallery_columns
    }

    /// Page spans of every animated element, timeline first, then people,
    /// then gallery cards.
    pub fn reveal_spans(&self) -> &[Span] {
        &self.reveal_spans
    }

    /// Position of an element in [`reveal_spans`](Self::reveal_spans).
    pub fn reveal_index(&self, group: RevealGroup, index: usize) -> usize {
        match group {
            RevealGroup::Timeline => index,
            RevealGroup::People => self.counts.timeline + index,
            RevealGroup::Gallery => self.counts.timeline + self.counts.people + index,
        }
    }
}

/// How many cards of `item_width` fit across the page, at least one.
#[must_use]
pub fn columns(window_width: f32, item_width: f32, gap: f32) -> usize {
    let available = window_width - 2.0 * layout::PAGE_GUTTER;
    let fit = ((available + gap) / (item_width + gap)).floor();
    if fit.is_finite() && fit >= 1.0 {
        fit as usize
    } else {
        1
    }
}

/// Number of grid rows for `count` items.
#[must_use]
pub fn rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

fn framed(body_height: f32) -> f32 {
    layout::SECTION_HEADER_HEIGHT + body_height + layout::SECTION_FOOTER_HEIGHT
}

/// Pushes one span per grid item and returns the grid height. Every row is
/// followed by a gap.
fn grid(
    spans: &mut Vec<Span>,
    top: f32,
    count: usize,
    columns: usize,
    item_height: f32,
) -> f32 {
    let row_pitch = item_height + layout::GALLERY_GAP;
    for i in 0..count {
        let row = i / columns.max(1);
        spans.push(Span::new(top + row as f32 * row_pitch, item_height));
    }
    rows(count, columns) as f32 * row_pitch
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTS: ElementCounts = ElementCounts {
        timeline: 4,
        people: 4,
        gallery: 6,
    };

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let page = PageLayout::compute(1200.0, COUNTS);
        let sections = page.sections();
        assert_eq!(sections.len(), SectionId::ALL.len());
        assert_eq!(sections[0].span.top, 0.0);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].span.bottom(), pair[1].span.top);
        }
        assert_eq!(page.total_height(), sections[4].span.bottom());
    }

    #[test]
    fn hero_has_fixed_height() {
        let page = PageLayout::compute(800.0, COUNTS);
        assert_eq!(page.section_height(SectionId::Home), layout::HERO_HEIGHT);
    }

    #[test]
    fn story_height_follows_entry_count() {
        let page = PageLayout::compute(800.0, COUNTS);
        let expected = layout::SECTION_HEADER_HEIGHT
            + 4.0 * layout::TIMELINE_ITEM_HEIGHT
            + layout::SECTION_FOOTER_HEIGHT;
        assert_eq!(page.section_height(SectionId::Story), expected);
    }

    #[test]
    fn narrow_window_stacks_single_column() {
        let page = PageLayout::compute(200.0, COUNTS);
        assert_eq!(page.gallery_columns(), 1);
        assert_eq!(page.people_columns(), 1);
    }

    #[test]
    fn wide_window_fits_several_columns() {
        // 1200 - 64 gutter = 1136; (1136 + 40) / 280 = 4.2
        let page = PageLayout::compute(1200.0, COUNTS);
        assert_eq!(page.gallery_columns(), 4);
    }

    #[test]
    fn reveal_spans_cover_every_element() {
        let page = PageLayout::compute(1200.0, COUNTS);
        assert_eq!(page.reveal_spans().len(), 14);
        assert_eq!(page.reveal_index(RevealGroup::Timeline, 2), 2);
        assert_eq!(page.reveal_index(RevealGroup::People, 0), 4);
        assert_eq!(page.reveal_index(RevealGroup::Gallery, 5), 13);
    }

    #[test]
    fn gallery_cards_on_second_row_sit_lower() {
        let page = PageLayout::compute(1200.0, COUNTS);
        let first = page.reveal_spans()[page.reveal_index(RevealGroup::Gallery, 0)];
        let fifth = page.reveal_spans()[page.reveal_index(RevealGroup::Gallery, 4)];
        assert_eq!(
            fifth.top - first.top,
            layout::GALLERY_CARD_HEIGHT + layout::GALLERY_GAP
        );
        let gallery = page
            .sections()
            .iter()
            .find(|s| s.id == SectionId::Gallery)
            .expect("gallery section");
        assert_eq!(
            first.top,
            gallery.span.top + layout::SECTION_HEADER_HEIGHT
        );
    }

    #[test]
    fn empty_content_still_has_headers() {
        let page = PageLayout::compute(800.0, ElementCounts::default());
        assert!(page.reveal_spans().is_empty());
        assert_eq!(
            page.section_height(SectionId::Gallery),
            layout::SECTION_HEADER_HEIGHT + layout::SECTION_FOOTER_HEIGHT
        );
    }

    #[test]
    fn rows_round_up() {
        assert_eq!(rows(0, 3), 0);
        assert_eq!(rows(3, 3), 1);
        assert_eq!(rows(4, 3), 2);
        assert_eq!(rows(4, 0), 4);
    }
}
