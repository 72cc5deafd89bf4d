// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settled layer values per animation.
//!
//! A transition always ends on the preset of its target state, so what a host shows
//! after a batch completes is exactly what a non-animated change would show.

use crate::{Animation, Layer};

/// The animatable values of one layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerValues {
    /// Opacity.
    pub opacity: f64,
    /// Fraction of the path that is stroked.
    pub stroke_end: f64,
    /// Scale about the frame centre.
    pub scale: f64,
}

impl LayerValues {
    /// Fully shown.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        stroke_end: 1.0,
        scale: 1.0,
    };

    #[must_use]
    const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    const fn with_stroke_end(mut self, stroke_end: f64) -> Self {
        self.stroke_end = stroke_end;
        self
    }

    #[must_use]
    const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Writes these values into `layer`.
    pub fn apply(&self, layer: &mut Layer) {
        layer.opacity = self.opacity;
        layer.stroke_end = self.stroke_end;
        layer.scale = self.scale;
    }

    /// Reads these values from `layer`.
    #[must_use]
    pub fn of(layer: &Layer) -> Self {
        Self {
            opacity: layer.opacity,
            stroke_end: layer.stroke_end,
            scale: layer.scale,
        }
    }
}

/// Settled values for all three layers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerPreset {
    /// The unselected box.
    pub unselected_box: LayerValues,
    /// The selected box.
    pub selected_box: LayerValues,
    /// The mark.
    pub mark: LayerValues,
}

/// The settled values of `animation` when the shown state has a mark (`selected`)
/// or has none.
#[must_use]
pub fn preset_for(animation: Animation, selected: bool) -> LayerPreset {
    let on = if selected { 1.0 } else { 0.0 };
    let shown = LayerValues::SHOWN;
    let (unselected_box, selected_box, mark) = match animation {
        Animation::Stroke | Animation::Spiral => (
            shown,
            shown.with_opacity(on).with_stroke_end(on),
            shown.with_opacity(on).with_stroke_end(on),
        ),
        Animation::Fill => (shown, shown.with_scale(on), shown.with_opacity(on)),
        Animation::Bounce(_) => (shown, shown.with_opacity(on), shown.with_scale(on)),
        Animation::Expand(_) => (shown, shown.with_scale(on), shown.with_scale(on)),
        Animation::Flat(_) | Animation::Fade(_) => {
            (shown, shown.with_opacity(on), shown.with_opacity(on))
        }
        Animation::Dot(_) => (
            shown.with_opacity(1.0 - on),
            shown.with_scale(on),
            shown.with_opacity(on),
        ),
    };
    LayerPreset {
        unselected_box,
        selected_box,
        mark,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn marks_are_shown_only_when_selected() {
        for animation in Animation::ALL {
            let on = preset_for(animation, true);
            let off = preset_for(animation, false);
            assert_eq!(on.mark, LayerValues::SHOWN, "{animation}");
            assert_eq!(on.selected_box, LayerValues::SHOWN, "{animation}");
            assert_ne!(off.mark, LayerValues::SHOWN, "{animation}");
            assert_ne!(off.selected_box, LayerValues::SHOWN, "{animation}");
        }
    }

    #[test]
    fn only_dot_hides_the_unselected_box() {
        for animation in Animation::ALL {
            let on = preset_for(animation, true);
            let expected = if matches!(animation, Animation::Dot(_)) {
                0.0
            } else {
                1.0
            };
            assert_eq!(on.unselected_box.opacity, expected, "{animation}");
            assert_eq!(
                preset_for(animation, false).unselected_box.opacity,
                1.0,
                "{animation}"
            );
        }
    }
}
