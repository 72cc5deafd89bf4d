// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing functions (easing curves) and effect scheduling.
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve

/// Timing function that controls the animation curve.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed).
    #[default]
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    EaseOut,
    /// Starts slow, speeds up, then slows down.
    EaseInOut,
    /// CSS cubic-bezier curve `(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl TimingFunction {
    /// Evaluates the timing function at `t` in `0.0..=1.0`.
    ///
    /// Bezier curves with control points outside the unit square may return values
    /// outside `0.0..=1.0`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Solves the curve's x for `t` with Newton-Raphson, then returns y.
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut current = t;
    for _ in 0..8 {
        let x = bezier_component(current, x1, x2);
        let slope = bezier_slope(current, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        current -= (x - t) / slope;
    }
    bezier_component(current, y1, y2)
}

fn bezier_component(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Whether an effect's end values hold outside its active interval.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    /// The layer's own value shows before and after the effect.
    Removed,
    /// The final value holds after the effect ends.
    #[default]
    Forwards,
    /// The initial value holds before the effect begins.
    Backwards,
    /// Both [`FillMode::Forwards`] and [`FillMode::Backwards`].
    Both,
}

impl FillMode {
    /// Whether the initial value shows before `begin`.
    #[must_use]
    pub const fn holds_before(self) -> bool {
        matches!(self, Self::Backwards | Self::Both)
    }

    /// Whether the final value shows after the end.
    #[must_use]
    pub const fn holds_after(self) -> bool {
        matches!(self, Self::Forwards | Self::Both)
    }
}

/// When an effect runs, relative to the start of its batch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timing {
    /// Offset from the batch start, in seconds.
    pub begin: f64,
    /// Length of the active interval, in seconds.
    pub duration: f64,
    /// Easing applied to progress through the active interval.
    pub easing: TimingFunction,
    /// Hold behavior outside the active interval.
    pub fill: FillMode,
}

/// Where a batch-relative time falls with respect to a [`Timing`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    /// Before `begin`.
    Before,
    /// Inside the active interval, with eased progress.
    Active(f64),
    /// At or after `begin + duration`.
    After,
}

impl Timing {
    /// Creates a timing that starts with the batch and runs for `duration` seconds.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            begin: 0.0,
            duration,
            easing: TimingFunction::Linear,
            fill: FillMode::Forwards,
        }
    }

    /// The batch-relative time at which the effect ends.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.begin + self.duration.max(0.0)
    }

    /// Classifies batch-relative time `t`.
    #[must_use]
    pub fn phase(&self, t: f64) -> Phase {
        let local = t - self.begin;
        if local < 0.0 {
            Phase::Before
        } else if self.duration <= 0.0 || local >= self.duration {
            Phase::After
        } else {
            Phase::Active(self.easing.evaluate(local / self.duration))
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_is_identity() {
        let tf = TimingFunction::Linear;
        assert_eq!(tf.evaluate(0.0), 0.0);
        assert_eq!(tf.evaluate(0.5), 0.5);
        assert_eq!(tf.evaluate(1.0), 1.0);
    }

    #[test]
    fn ease_curves_hit_endpoints() {
        for tf in [
            TimingFunction::EaseIn,
            TimingFunction::EaseOut,
            TimingFunction::EaseInOut,
            TimingFunction::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert!(tf.evaluate(0.0).abs() < 1e-6, "{tf:?} at 0");
            assert!((tf.evaluate(1.0) - 1.0).abs() < 1e-6, "{tf:?} at 1");
        }
        assert!(TimingFunction::EaseIn.evaluate(0.5) < 0.5, "ease in lags");
        assert!(TimingFunction::EaseOut.evaluate(0.5) > 0.5, "ease out leads");
    }

    #[test]
    fn bezier_diagonal_matches_linear() {
        let tf = TimingFunction::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for t in [0.1, 0.3, 0.6, 0.9] {
            assert!((tf.evaluate(t) - t).abs() < 1e-3, "t = {t}");
        }
    }

    #[test]
    fn phases_respect_begin_and_duration() {
        let timing = Timing {
            begin: 0.1,
            ..Timing::new(0.2)
        };
        assert_eq!(timing.phase(0.05), Phase::Before);
        assert_eq!(timing.phase(0.2), Phase::Active(0.5));
        assert_eq!(timing.phase(0.35), Phase::After);
        assert_eq!(Timing::new(0.0).phase(0.0), Phase::After);
        assert!((timing.end() - 0.3).abs() < 1e-12, "end = {}", timing.end());
    }
}
