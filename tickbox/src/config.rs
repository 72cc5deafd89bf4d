// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use tickbox_geometry::{BoxType, CheckState, MarkType};

use crate::{Animation, Appearance};

/// Every setting of a [`Checkbox`](crate::Checkbox), for declaring one up front.
///
/// ```
/// use tickbox::{Animation, AnimationStyle, CheckState, Checkbox, CheckboxConfig};
///
/// let config = CheckboxConfig::default()
///     .with_animation(Animation::Bounce(AnimationStyle::Fill))
///     .with_check_state(CheckState::Checked)
///     .with_animation_duration(0.5);
/// let checkbox: Checkbox = Checkbox::with_config(config);
/// assert_eq!(checkbox.check_state(), CheckState::Checked);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CheckboxConfig {
    /// How state changes animate.
    pub animation: Animation,
    /// The glyph inside the box.
    pub mark_type: MarkType,
    /// The outline shape.
    pub box_type: BoxType,
    /// The initial state.
    pub check_state: CheckState,
    /// Base transition duration in seconds.
    pub animation_duration: f64,
    /// Stroke width of the mark.
    pub checkmark_line_width: f64,
    /// Stroke width of the box.
    pub box_line_width: f64,
    /// Corner radius of square boxes.
    pub corner_radius: f64,
    /// Colours and box visibility.
    pub appearance: Appearance,
    /// Whether changes between two marks morph.
    pub enable_morphing: bool,
}

impl Default for CheckboxConfig {
    fn default() -> Self {
        Self {
            animation: Animation::Stroke,
            mark_type: MarkType::Checkmark,
            box_type: BoxType::Circle,
            check_state: CheckState::Unchecked,
            animation_duration: 0.3,
            checkmark_line_width: 1.0,
            box_line_width: 1.0,
            corner_radius: 3.0,
            appearance: Appearance::default(),
            enable_morphing: true,
        }
    }
}

impl CheckboxConfig {
    /// The default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the animation.
    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the mark type.
    #[must_use]
    pub fn with_mark_type(mut self, mark_type: MarkType) -> Self {
        self.mark_type = mark_type;
        self
    }

    /// Sets the box type.
    #[must_use]
    pub fn with_box_type(mut self, box_type: BoxType) -> Self {
        self.box_type = box_type;
        self
    }

    /// Sets the initial state.
    #[must_use]
    pub fn with_check_state(mut self, state: CheckState) -> Self {
        self.check_state = state;
        self
    }

    /// Sets the base transition duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: f64) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets the mark stroke width.
    #[must_use]
    pub fn with_checkmark_line_width(mut self, width: f64) -> Self {
        self.checkmark_line_width = width;
        self
    }

    /// Sets the box stroke width.
    #[must_use]
    pub fn with_box_line_width(mut self, width: f64) -> Self {
        self.box_line_width = width;
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the tint colour.
    #[must_use]
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.appearance.tint = tint;
        self
    }

    /// Sets colours and box visibility at once.
    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Turns mark morphing on or off.
    #[must_use]
    pub fn with_enable_morphing(mut self, enable: bool) -> Self {
        self.enable_morphing = enable;
        self
    }
}
