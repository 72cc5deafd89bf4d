// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette::css;
use tickbox_geometry::{MarkType, PathGeometry};

use crate::{AnimationStyle, LayerSet};

/// Colours and box visibility of a checkbox.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Appearance {
    /// The selected box and, in stroke style, the mark.
    pub tint: Color,
    /// The unselected box.
    pub secondary_tint: Color,
    /// The mark in fill style, drawn on top of the tinted box.
    pub secondary_mark_tint: Color,
    /// Hides both box layers, leaving only the mark.
    pub hide_box: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            tint: css::BLACK,
            secondary_tint: Color::from_rgb8(0xaa, 0xaa, 0xaa),
            secondary_mark_tint: css::WHITE,
            hide_box: false,
        }
    }
}

impl Appearance {
    /// Sets the tint colour.
    #[must_use]
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Sets the unselected box colour.
    #[must_use]
    pub fn with_secondary_tint(mut self, color: Color) -> Self {
        self.secondary_tint = color;
        self
    }

    /// Sets the fill-style mark colour.
    #[must_use]
    pub fn with_secondary_mark_tint(mut self, color: Color) -> Self {
        self.secondary_mark_tint = color;
        self
    }

    /// Hides or shows the box layers.
    #[must_use]
    pub fn with_hide_box(mut self, hide_box: bool) -> Self {
        self.hide_box = hide_box;
        self
    }

    /// Writes paints, line widths and visibility into `layers`.
    ///
    /// Radio marks are solid dots, so they get a fill in the mark colour as well.
    pub fn paint(
        &self,
        layers: &mut LayerSet,
        style: AnimationStyle,
        mark_type: MarkType,
        geometry: &PathGeometry,
    ) {
        let (box_fill, mark_color) = match style {
            AnimationStyle::Stroke => (None, self.tint),
            AnimationStyle::Fill => (Some(self.tint), self.secondary_mark_tint),
        };

        let unselected = &mut layers.unselected_box;
        unselected.stroke = Some(self.secondary_tint);
        unselected.fill = None;
        unselected.line_width = geometry.box_line_width;
        unselected.hidden = self.hide_box;

        let selected = &mut layers.selected_box;
        selected.stroke = Some(self.tint);
        selected.fill = box_fill;
        selected.line_width = geometry.box_line_width;
        selected.hidden = self.hide_box;

        let mark = &mut layers.mark;
        mark.stroke = Some(mark_color);
        mark.fill = (mark_type == MarkType::Radio).then_some(mark_color);
        mark.line_width = geometry.checkmark_line_width;
        mark.hidden = false;
    }
}
