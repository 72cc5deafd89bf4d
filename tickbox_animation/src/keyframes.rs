// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Scalar values spread evenly over an effect's progress.
///
/// Two values are a plain tween; more describe an overshoot-and-settle curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    values: SmallVec<[f64; 4]>,
}

impl Keyframes {
    /// A tween from `from` to `to`.
    #[must_use]
    pub fn tween(from: f64, to: f64) -> Self {
        Self {
            values: SmallVec::from_slice(&[from, to]),
        }
    }

    /// Keyframes from a list of values.
    ///
    /// An empty list behaves like a constant `0.0`, and a single value like a constant.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    /// A growth curve that overshoots `1.0` by `amplitude`, then settles in
    /// `bounces` alternating, halving swings.
    ///
    /// With `reverse` the same curve runs backwards, ending at `0.0`.
    #[must_use]
    pub fn wiggle(bounces: u32, amplitude: f64, reverse: bool) -> Self {
        let mut values: SmallVec<[f64; 4]> = SmallVec::new();
        values.push(0.0);
        let mut swing = amplitude;
        for _ in 0..bounces {
            values.push(1.0 + swing);
            swing *= -0.5;
        }
        values.push(1.0);
        if reverse {
            values.reverse();
        }
        Self { values }
    }

    /// The values in order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The value shown before the effect begins.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// The value shown after the effect ends.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Linearly interpolates between neighbouring keyframes at `progress`.
    ///
    /// `progress` outside `0.0..=1.0` (from overshooting easing) extrapolates the
    /// first or last segment.
    #[must_use]
    pub fn sample(&self, progress: f64) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return self.first();
        }
        let segments = (n - 1) as f64;
        let position = progress * segments;
        let index = if position <= 0.0 {
            0
        } else {
            // Truncation picks the segment `position` falls in.
            #[expect(
                clippy::cast_possible_truncation,
                reason = "position is clamped to the segment count"
            )]
            let i = position.min(segments) as usize;
            i.min(n - 2)
        };
        let local = position - index as f64;
        let a = self.values[index];
        let b = self.values[index + 1];
        a + (b - a) * local
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn tween_interpolates() {
        let k = Keyframes::tween(1.0, 0.0);
        assert_eq!(k.sample(0.0), 1.0);
        assert_eq!(k.sample(0.25), 0.75);
        assert_eq!(k.sample(1.0), 0.0);
    }

    #[test]
    fn wiggle_overshoots_then_settles() {
        let k = Keyframes::wiggle(1, 0.18, false);
        assert_eq!(k.values(), &[0.0, 1.18, 1.0]);
        assert_eq!(k.sample(0.5), 1.18);

        let k = Keyframes::wiggle(2, 0.2, false);
        assert_eq!(k.values(), &[0.0, 1.2, 0.9, 1.0]);

        let k = Keyframes::wiggle(1, 0.35, true);
        assert_eq!(k.first(), 1.0);
        assert_eq!(k.last(), 0.0);
    }

    #[test]
    fn degenerate_lists_are_constant() {
        assert_eq!(Keyframes::from_values(&[]).sample(0.4), 0.0);
        assert_eq!(Keyframes::from_values(&[0.7]).sample(0.4), 0.7);
    }
}
