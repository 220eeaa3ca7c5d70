// SPDX-License-Identifier: MPL-2.0
//! Property-based and end-to-end tests for the lightbox and card tilts.

use iced_invite::gallery::{Gallery, GalleryItem};
use iced_invite::ui::lightbox::{wrap_index, Lightbox, PointerTarget};
use iced_invite::ui::state::{CardTilt, ScrollLock, TiltSampler};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;

// ============================================================================
// Helpers
// ============================================================================

fn gallery(len: usize) -> Gallery {
    (0..len)
        .map(|i| {
            let caption = (i % 2 == 0).then(|| format!("Photo {i}"));
            GalleryItem::new(format!("photos/{i:02}.jpg"), caption)
        })
        .collect()
}

fn lightbox(len: usize) -> Lightbox {
    Lightbox::new(gallery(len), Duration::from_millis(10))
}

/// Steps and lets the replay tick land, as the event loop would.
fn next_and_render(lightbox: &mut Lightbox) {
    if let Some(ticket) = lightbox.next() {
        assert!(lightbox.resume(ticket));
    }
}

fn previous_and_render(lightbox: &mut Lightbox) {
    if let Some(ticket) = lightbox.previous() {
        assert!(lightbox.resume(ticket));
    }
}

fn displayed_index(lightbox: &Lightbox) -> Option<usize> {
    lightbox.displayed().map(|displayed| displayed.index)
}

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Next,
    Previous,
    Close,
    PressBackdrop,
    PressContent,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (0..12usize).prop_map(Op::Open),
        3 => Just(Op::Next),
        3 => Just(Op::Previous),
        1 => Just(Op::Close),
        1 => Just(Op::PressBackdrop),
        1 => Just(Op::PressContent),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N steps forward from any index come back to it.
    #[test]
    fn next_is_cyclic(len in 1..40usize, start in 0..40usize) {
        let start = start % len;
        let mut scroll = ScrollLock::default();
        let mut lightbox = lightbox(len);
        lightbox.open(start, &mut scroll);

        for _ in 0..len {
            lightbox.next();
        }
        prop_assert_eq!(lightbox.current_index(), start);
    }

    /// Previous undoes next and the other way round.
    #[test]
    fn previous_inverts_next(len in 1..40usize, start in 0..40usize) {
        let start = start % len;
        prop_assert_eq!(wrap_index(wrap_index(start, 1, len), -1, len), start);
        prop_assert_eq!(wrap_index(wrap_index(start, -1, len), 1, len), start);

        let mut scroll = ScrollLock::default();
        let mut lightbox = lightbox(len);
        lightbox.open(start, &mut scroll);
        lightbox.next();
        lightbox.previous();
        prop_assert_eq!(lightbox.current_index(), start);
    }

    /// Opening at k and rendering shows item k.
    #[test]
    fn open_then_show_displays_item(len in 1..40usize, k in 0..40usize) {
        let k = k % len;
        let mut scroll = ScrollLock::default();
        let mut lightbox = lightbox(len);
        prop_assert!(lightbox.open(k, &mut scroll));

        let shown = lightbox.show_current().map(|displayed| displayed.index);
        prop_assert_eq!(shown, Some(k));
        let expected = gallery(len).get(k).map(|item| item.source().to_path_buf());
        prop_assert_eq!(lightbox.displayed().map(|d| d.source.clone()), expected);
    }

    /// The scroll lock mirrors the open flag in every reachable state.
    #[test]
    fn scroll_lock_tracks_open_flag(len in 1..10usize, ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut scroll = ScrollLock::default();
        let mut lightbox = lightbox(len);

        for op in ops {
            match op {
                Op::Open(index) => {
                    lightbox.open(index, &mut scroll);
                }
                Op::Next => {
                    if let Some(ticket) = lightbox.next() {
                        lightbox.resume(ticket);
                    }
                }
                Op::Previous => {
                    if let Some(ticket) = lightbox.previous() {
                        lightbox.resume(ticket);
                    }
                }
                Op::Close => lightbox.close(&mut scroll),
                Op::PressBackdrop => {
                    lightbox.press(PointerTarget::Backdrop, &mut scroll);
                }
                Op::PressContent => {
                    lightbox.press(PointerTarget::Content, &mut scroll);
                }
            }
            prop_assert_eq!(lightbox.is_open(), scroll.is_locked());
            prop_assert!(lightbox.current_index() < len);
        }
    }

    /// Tilts stay in range, are rounded to tenths, and do not repeat while
    /// there are far more angles than cards.
    #[test]
    fn tilts_are_bounded_and_mostly_distinct(
        count in 0..30usize,
        max_degrees in 0.0f32..20.0,
        seed in any::<u64>(),
    ) {
        let sampler = TiltSampler::new(max_degrees, 200);
        let mut rng = StdRng::seed_from_u64(seed);
        let tilts = sampler.sample_pass(count, &mut rng);
        prop_assert_eq!(tilts.len(), count);

        let bound = CardTilt::from_degrees(sampler.max_degrees()).tenths();
        for tilt in &tilts {
            prop_assert!(tilt.tenths().abs() <= bound);
            prop_assert_eq!(CardTilt::from_degrees(tilt.degrees()), *tilt);
        }

        // With at least 161 possible angles and 200 redraws per card, collisions in a
        // pass of at most 30 cards are vanishingly unlikely.
        if sampler.max_degrees() >= 8.0 {
            let distinct: HashSet<_> = tilts.iter().collect();
            prop_assert_eq!(distinct.len(), count);
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn close_is_idempotent() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(3);
    lightbox.open(1, &mut scroll);

    lightbox.close(&mut scroll);
    assert!(!lightbox.is_open());
    assert!(!scroll.is_locked());

    lightbox.close(&mut scroll);
    assert!(!lightbox.is_open());
    assert!(!scroll.is_locked());
}

#[test]
fn five_items_wrap_forward() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(5);

    lightbox.open(2, &mut scroll);
    assert_eq!(displayed_index(&lightbox), Some(2));

    next_and_render(&mut lightbox);
    assert_eq!(displayed_index(&lightbox), Some(3));

    for _ in 0..3 {
        next_and_render(&mut lightbox);
    }
    assert_eq!(displayed_index(&lightbox), Some(1));

    // Fifth step completes the cycle.
    next_and_render(&mut lightbox);
    assert_eq!(displayed_index(&lightbox), Some(2));
}

#[test]
fn previous_from_first_shows_last() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(7);

    lightbox.open(0, &mut scroll);
    previous_and_render(&mut lightbox);
    assert_eq!(displayed_index(&lightbox), Some(6));
}

#[test]
fn content_press_does_not_dismiss() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(2);
    lightbox.open(0, &mut scroll);

    assert!(!lightbox.press(PointerTarget::Content, &mut scroll));
    assert!(lightbox.is_open());
    assert!(lightbox.press(PointerTarget::Backdrop, &mut scroll));
    assert!(!lightbox.is_open());
}

#[test]
fn only_latest_replay_renders() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(4);
    lightbox.open(0, &mut scroll);

    let stale = lightbox.next().expect("non-empty gallery");
    let latest = lightbox.next().expect("non-empty gallery");
    assert!(!lightbox.resume(stale));
    assert_eq!(displayed_index(&lightbox), Some(0));

    assert!(lightbox.resume(latest));
    assert_eq!(displayed_index(&lightbox), Some(2));
}

#[test]
fn replay_after_close_does_not_reopen() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(4);
    lightbox.open(0, &mut scroll);
    let ticket = lightbox.next().expect("non-empty gallery");
    lightbox.close(&mut scroll);

    assert!(!lightbox.resume(ticket));
    assert!(!lightbox.is_open());
    assert!(!scroll.is_locked());
}

#[test]
fn empty_gallery_never_opens() {
    let mut scroll = ScrollLock::default();
    let mut lightbox = lightbox(0);
    assert!(lightbox.is_empty());
    assert!(!lightbox.open(0, &mut scroll));
    assert!(lightbox.next().is_none());
    assert!(!scroll.is_locked());
}
