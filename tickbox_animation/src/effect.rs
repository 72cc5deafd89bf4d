// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;

use crate::{FillMode, Keyframes, PathMorph, Phase, Timing, TimingFunction};

/// A layer property an effect can drive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// Layer opacity in `0.0..=1.0`.
    Opacity,
    /// Fraction of the outline that is drawn, from its start.
    StrokeEnd,
    /// Uniform scale about the layer centre.
    Scale,
    /// The layer's path.
    Path,
}

/// What an effect animates.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectKind {
    /// Opacity keyframes.
    Opacity(Keyframes),
    /// Stroke-end keyframes.
    StrokeEnd(Keyframes),
    /// Uniform scale keyframes.
    Scale(Keyframes),
    /// Path interpolation.
    Morph(PathMorph),
}

impl EffectKind {
    /// The property this kind drives.
    #[must_use]
    pub fn property(&self) -> Property {
        match self {
            Self::Opacity(_) => Property::Opacity,
            Self::StrokeEnd(_) => Property::StrokeEnd,
            Self::Scale(_) => Property::Scale,
            Self::Morph(_) => Property::Path,
        }
    }

    fn at(&self, progress: f64) -> Sample {
        match self {
            Self::Opacity(k) => Sample::Opacity(k.sample(progress)),
            Self::StrokeEnd(k) => Sample::StrokeEnd(k.sample(progress)),
            Self::Scale(k) => Sample::Scale(k.sample(progress)),
            Self::Morph(m) => Sample::Path(m.at(progress)),
        }
    }

    fn initial(&self) -> Sample {
        match self {
            Self::Opacity(k) => Sample::Opacity(k.first()),
            Self::StrokeEnd(k) => Sample::StrokeEnd(k.first()),
            Self::Scale(k) => Sample::Scale(k.first()),
            Self::Morph(m) => Sample::Path(m.from().clone()),
        }
    }

    fn terminal(&self) -> Sample {
        match self {
            Self::Opacity(k) => Sample::Opacity(k.last()),
            Self::StrokeEnd(k) => Sample::StrokeEnd(k.last()),
            Self::Scale(k) => Sample::Scale(k.last()),
            Self::Morph(m) => Sample::Path(m.to().clone()),
        }
    }
}

/// The value an effect presents at some instant.
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    /// An opacity.
    Opacity(f64),
    /// A stroke end.
    StrokeEnd(f64),
    /// A uniform scale.
    Scale(f64),
    /// A path.
    Path(BezPath),
}

/// One timed change to one property.
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    kind: EffectKind,
    timing: Timing,
}

impl Effect {
    /// Creates an effect that starts with its batch and runs for `duration` seconds.
    #[must_use]
    pub fn new(kind: EffectKind, duration: f64) -> Self {
        Self {
            kind,
            timing: Timing::new(duration),
        }
    }

    /// Sets the offset from the batch start.
    #[must_use]
    pub fn with_begin(mut self, begin: f64) -> Self {
        self.timing.begin = begin;
        self
    }

    /// Sets the active duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.timing.duration = duration;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: TimingFunction) -> Self {
        self.timing.easing = easing;
        self
    }

    /// Sets the fill mode.
    #[must_use]
    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.timing.fill = fill;
        self
    }

    /// What this effect animates.
    #[must_use]
    pub fn kind(&self) -> &EffectKind {
        &self.kind
    }

    /// When this effect runs.
    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The property this effect drives.
    #[must_use]
    pub fn property(&self) -> Property {
        self.kind.property()
    }

    /// The value this effect presents at batch-relative time `t`.
    ///
    /// Returns `None` when the effect does not govern its property at `t`, so the
    /// layer's own value shows through.
    #[must_use]
    pub fn sample(&self, t: f64) -> Option<Sample> {
        match self.timing.phase(t) {
            Phase::Before => self
                .timing
                .fill
                .holds_before()
                .then(|| self.kind.initial()),
            Phase::Active(progress) => Some(self.kind.at(progress)),
            Phase::After => self.timing.fill.holds_after().then(|| self.kind.terminal()),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn fade_in() -> Effect {
        Effect::new(EffectKind::Opacity(Keyframes::tween(0.0, 1.0)), 0.2).with_begin(0.1)
    }

    #[test]
    fn samples_follow_fill_mode() {
        let forwards = fade_in();
        assert_eq!(forwards.sample(0.0), None);
        assert_eq!(forwards.sample(0.2), Some(Sample::Opacity(0.5)));
        assert_eq!(forwards.sample(1.0), Some(Sample::Opacity(1.0)));

        let both = fade_in().with_fill(FillMode::Both);
        assert_eq!(both.sample(0.0), Some(Sample::Opacity(0.0)));

        let removed = fade_in().with_fill(FillMode::Removed);
        assert_eq!(removed.sample(1.0), None);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let effect = Effect::new(EffectKind::StrokeEnd(Keyframes::tween(1.0, 0.0)), 0.0);
        assert_eq!(effect.sample(0.0), Some(Sample::StrokeEnd(0.0)));
        assert_eq!(effect.property(), Property::StrokeEnd);
    }
}
