// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;

use crate::{Effect, EffectKind, Keyframes, MorphError, PathMorph, TimingFunction};

/// Fraction of the base duration a quick opacity flip lasts.
pub const QUICK_OPACITY_FRACTION: f64 = 0.1;

/// Builds the stock effects from a base duration.
///
/// `reverse` flips an effect from "appear" to "disappear". Every effect starts at
/// the batch start with [`FillMode::Forwards`](crate::FillMode::Forwards); callers
/// retime them with the `Effect::with_*` builders.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EffectGenerator {
    duration: f64,
}

impl Default for EffectGenerator {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl EffectGenerator {
    /// Creates a generator with a base duration in seconds.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
        }
    }

    /// The base duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Duration of a quick opacity flip.
    #[must_use]
    pub fn quick_duration(&self) -> f64 {
        self.duration * QUICK_OPACITY_FRACTION
    }

    /// Draws (or erases, with `reverse`) the outline over the full duration.
    #[must_use]
    pub fn stroke(&self, reverse: bool) -> Effect {
        let (kind, easing) = if reverse {
            (Keyframes::tween(1.0, 0.0), TimingFunction::EaseIn)
        } else {
            (Keyframes::tween(0.0, 1.0), TimingFunction::EaseOut)
        };
        Effect::new(EffectKind::StrokeEnd(kind), self.duration).with_easing(easing)
    }

    /// Fades in (or out, with `reverse`) over the full duration.
    #[must_use]
    pub fn opacity(&self, reverse: bool) -> Effect {
        Effect::new(EffectKind::Opacity(fade(reverse)), self.duration)
    }

    /// Flips opacity over a small fraction of the duration.
    #[must_use]
    pub fn quick_opacity(&self, reverse: bool) -> Effect {
        Effect::new(EffectKind::Opacity(fade(reverse)), self.quick_duration())
    }

    /// Scales up from nothing with overshoot (or down to nothing, with `reverse`).
    #[must_use]
    pub fn fill(&self, bounces: u32, amplitude: f64, reverse: bool) -> Effect {
        Effect::new(
            EffectKind::Scale(Keyframes::wiggle(bounces, amplitude, reverse)),
            self.duration,
        )
        .with_easing(TimingFunction::EaseOut)
    }

    /// Scales from zero to full size (or back, with `reverse`) without overshoot.
    #[must_use]
    pub fn expand(&self, reverse: bool) -> Effect {
        let (kind, easing) = if reverse {
            (Keyframes::tween(1.0, 0.0), TimingFunction::EaseIn)
        } else {
            (Keyframes::tween(0.0, 1.0), TimingFunction::EaseOut)
        };
        Effect::new(EffectKind::Scale(kind), self.duration).with_easing(easing)
    }

    /// Interpolates between two paths of matching topology.
    pub fn morph(&self, from: BezPath, to: BezPath) -> Result<Effect, MorphError> {
        let morph = PathMorph::new(from, to)?;
        Ok(Effect::new(EffectKind::Morph(morph), self.duration)
            .with_easing(TimingFunction::EaseInOut))
    }
}

fn fade(reverse: bool) -> Keyframes {
    if reverse {
        Keyframes::tween(1.0, 0.0)
    } else {
        Keyframes::tween(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::Sample;

    #[test]
    fn directions_swap_endpoints() {
        let generator = EffectGenerator::new(0.3);
        let draw = generator.stroke(false);
        assert_eq!(draw.sample(0.0), Some(Sample::StrokeEnd(0.0)));
        assert_eq!(draw.sample(0.3), Some(Sample::StrokeEnd(1.0)));
        let erase = generator.stroke(true);
        assert_eq!(erase.sample(0.3), Some(Sample::StrokeEnd(0.0)));
    }

    #[test]
    fn quick_opacity_is_short() {
        let generator = EffectGenerator::new(0.5);
        let quick = generator.quick_opacity(true);
        assert!((quick.timing().duration - 0.05).abs() < 1e-12, "duration");
        assert_eq!(quick.sample(0.05), Some(Sample::Opacity(0.0)));
    }

    #[test]
    fn fill_settles_at_full_scale() {
        let generator = EffectGenerator::new(0.3);
        let grow = generator.fill(1, 0.18, false);
        assert_eq!(grow.sample(0.3), Some(Sample::Scale(1.0)));
        let shrink = generator.fill(1, 0.18, true);
        assert_eq!(shrink.sample(0.3), Some(Sample::Scale(0.0)));
    }

    #[test]
    fn negative_duration_is_clamped() {
        assert_eq!(EffectGenerator::new(-1.0).duration(), 0.0);
    }
}
