// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Whether the selected state reads as an outline or as a solid shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationStyle {
    /// The selected box is stroked; the mark is drawn in the tint colour.
    #[default]
    Stroke,
    /// The selected box is filled with the tint colour; the mark is drawn on top
    /// in the secondary mark tint.
    Fill,
}

/// How a checkbox moves between states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Box and mark are drawn along their outlines.
    #[default]
    Stroke,
    /// The box fills from the centre with a slight overshoot.
    Fill,
    /// The mark springs in; the box fades.
    Bounce(AnimationStyle),
    /// Box and mark grow from the centre, the mark slightly later.
    Expand(AnimationStyle),
    /// The mark flattens into the mixed dash before it fades.
    Flat(AnimationStyle),
    /// Box and mark are drawn as one continuous stroke.
    Spiral,
    /// Box and mark cross-fade.
    Fade(AnimationStyle),
    /// The box grows out of a dot.
    Dot(AnimationStyle),
}

/// Error returned when parsing an animation raw name fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseAnimationError {
    /// The string is not the raw name of any [`Animation`].
    UnknownAnimation,
}

impl Animation {
    /// Every animation, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Stroke,
        Self::Fill,
        Self::Bounce(AnimationStyle::Stroke),
        Self::Bounce(AnimationStyle::Fill),
        Self::Expand(AnimationStyle::Stroke),
        Self::Expand(AnimationStyle::Fill),
        Self::Flat(AnimationStyle::Stroke),
        Self::Flat(AnimationStyle::Fill),
        Self::Spiral,
        Self::Fade(AnimationStyle::Stroke),
        Self::Fade(AnimationStyle::Fill),
        Self::Dot(AnimationStyle::Stroke),
        Self::Dot(AnimationStyle::Fill),
    ];

    /// The paint style the animation settles into.
    #[must_use]
    pub const fn style(self) -> AnimationStyle {
        match self {
            Self::Stroke | Self::Spiral => AnimationStyle::Stroke,
            Self::Fill => AnimationStyle::Fill,
            Self::Bounce(style)
            | Self::Expand(style)
            | Self::Flat(style)
            | Self::Fade(style)
            | Self::Dot(style) => style,
        }
    }

    /// Returns the raw name, e.g. `"BounceFill"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        use AnimationStyle::{Fill, Stroke};
        match self {
            Self::Stroke => "Stroke",
            Self::Fill => "Fill",
            Self::Bounce(Stroke) => "BounceStroke",
            Self::Bounce(Fill) => "BounceFill",
            Self::Expand(Stroke) => "ExpandStroke",
            Self::Expand(Fill) => "ExpandFill",
            Self::Flat(Stroke) => "FlatStroke",
            Self::Flat(Fill) => "FlatFill",
            Self::Spiral => "Spiral",
            Self::Fade(Stroke) => "FadeStroke",
            Self::Fade(Fill) => "FadeFill",
            Self::Dot(Stroke) => "DotStroke",
            Self::Dot(Fill) => "DotFill",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Animation {
    type Err = ParseAnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|animation| animation.as_str() == s)
            .ok_or(ParseAnimationError::UnknownAnimation)
    }
}
