// SPDX-License-Identifier: MPL-2.0
//! Random tilt for the polaroid gallery cards.
//!
//! Each card gets a small rotation angle, rounded to one decimal place, plus
//! a little positional jitter so the stack looks scattered by hand. A pass
//! over all cards tries not to reuse an angle, but only for a bounded number
//! of redraws; after that a duplicate is accepted.

use crate::config::{CARD_JITTER_X_PX, CARD_JITTER_Y_PX};
use rand::Rng;
use std::collections::HashSet;

/// Card rotation in tenths of a degree.
///
/// # Example
///
/// ```
/// use iced_invite::ui::state::CardTilt;
///
/// let tilt = CardTilt::from_degrees(-3.14);
/// assert_eq!(tilt.degrees(), -3.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardTilt(i16);

impl CardTilt {
    pub const UPRIGHT: Self = Self(0);

    /// Rounds `degrees` to one decimal place.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        // The cast saturates; config clamps the range far below i16 limits.
        Self((degrees * 10.0).round() as i16)
    }

    #[must_use]
    pub fn tenths(self) -> i16 {
        self.0
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        f32::from(self.0) / 10.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        self.degrees().to_radians()
    }
}

/// Tilt and offset applied to one card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardPose {
    pub tilt: CardTilt,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Draws tilts uniformly within `[-max, max]` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSampler {
    max_tenths: i16,
    max_attempts: u32,
}

impl TiltSampler {
    /// `max_attempts` bounds how many redraws a single card may use when
    /// its angle is already taken in the current pass.
    #[must_use]
    pub fn new(max_degrees: f32, max_attempts: u32) -> Self {
        Self {
            max_tenths: CardTilt::from_degrees(max_degrees.abs()).tenths(),
            max_attempts,
        }
    }

    #[must_use]
    pub fn max_degrees(&self) -> f32 {
        f32::from(self.max_tenths) / 10.0
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draws a single tilt.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CardTilt {
        if self.max_tenths == 0 {
            return CardTilt::UPRIGHT;
        }
        let max = self.max_degrees();
        let tilt = CardTilt::from_degrees(rng.random_range(-max..=max));
        // Rounding cannot leave the range, but keep the bound explicit.
        CardTilt(tilt.0.clamp(-self.max_tenths, self.max_tenths))
    }

    /// Draws one tilt per card, avoiding repeats within the pass.
    pub fn sample_pass<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<CardTilt> {
        let mut used = HashSet::with_capacity(count);
        let mut tilts = Vec::with_capacity(count);

        for _ in 0..count {
            let mut tilt = self.sample(rng);
            let mut attempts = 0;
            while used.contains(&tilt) && attempts < self.max_attempts {
                tilt = self.sample(rng);
                attempts += 1;
            }
            used.insert(tilt);
            tilts.push(tilt);
        }

        tilts
    }

    /// Draws a full pose (tilt and jitter) for every card.
    pub fn pose_pass<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<CardPose> {
        self.sample_pass(count, rng)
            .into_iter()
            .map(|tilt| CardPose {
                tilt,
                offset_x: rng.random_range(-CARD_JITTER_X_PX..=CARD_JITTER_X_PX).round(),
                offset_y: rng.random_range(-CARD_JITTER_Y_PX..=CARD_JITTER_Y_PX).round(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_degrees_rounds_to_one_decimal() {
        assert_eq!(CardTilt::from_degrees(2.04).tenths(), 20);
        assert_eq!(CardTilt::from_degrees(2.06).tenths(), 21);
        assert_eq!(CardTilt::from_degrees(-7.96).degrees(), -8.0);
    }

    #[test]
    fn samples_stay_within_range() {
        let sampler = TiltSampler::new(8.0, 16);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let tilt = sampler.sample(&mut rng);
            assert!((-80..=80).contains(&tilt.tenths()), "out of range: {tilt:?}");
        }
    }

    #[test]
    fn zero_range_keeps_cards_upright() {
        let sampler = TiltSampler::new(0.0, 16);
        let mut rng = StdRng::seed_from_u64(1);
        let tilts = sampler.sample_pass(4, &mut rng);
        assert!(tilts.iter().all(|tilt| *tilt == CardTilt::UPRIGHT));
    }

    #[test]
    fn pass_avoids_duplicates_when_values_remain() {
        // Three possible values (-0.1, 0.0, 0.1) and three cards: with a
        // generous redraw budget every card ends up distinct.
        let sampler = TiltSampler::new(0.1, 10_000);
        let mut rng = StdRng::seed_from_u64(42);
        let tilts = sampler.sample_pass(3, &mut rng);
        let unique: HashSet<_> = tilts.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn pass_terminates_when_values_run_out() {
        let sampler = TiltSampler::new(0.1, 50);
        let mut rng = StdRng::seed_from_u64(3);
        let tilts = sampler.sample_pass(10, &mut rng);
        assert_eq!(tilts.len(), 10);
        assert!(tilts.iter().all(|tilt| tilt.tenths().abs() <= 1));
    }

    #[test]
    fn zero_attempts_accepts_first_draw() {
        let sampler = TiltSampler::new(8.0, 0);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(sampler.sample_pass(20, &mut rng).len(), 20);
    }

    #[test]
    fn negative_range_is_mirrored() {
        let sampler = TiltSampler::new(-5.0, 1);
        assert_eq!(sampler.max_degrees(), 5.0);
    }

    #[test]
    fn poses_jitter_within_bounds() {
        let sampler = TiltSampler::new(8.0, 16);
        let mut rng = StdRng::seed_from_u64(11);
        for pose in sampler.pose_pass(50, &mut rng) {
            assert!(pose.offset_x.abs() <= CARD_JITTER_X_PX);
            assert!(pose.offset_y.abs() <= CARD_JITTER_Y_PX);
        }
    }
}
