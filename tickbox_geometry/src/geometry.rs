// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::BoxType;

/// The measurements every path generator is parameterized by.
///
/// All lengths are in the control's local coordinate space, where the box occupies
/// `[0, size] × [0, size]` with the y axis pointing down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathGeometry {
    /// The side length of the square the paths are generated in.
    pub size: f64,
    /// Stroke width of the mark.
    pub checkmark_line_width: f64,
    /// Stroke width of the box outline.
    pub box_line_width: f64,
    /// Corner radius of the box when `box_type` is [`BoxType::Square`].
    pub corner_radius: f64,
    /// The outline shape.
    pub box_type: BoxType,
}

impl Default for PathGeometry {
    fn default() -> Self {
        Self {
            size: 0.0,
            checkmark_line_width: 1.0,
            box_line_width: 1.0,
            corner_radius: 3.0,
            box_type: BoxType::Circle,
        }
    }
}

impl PathGeometry {
    /// Creates a geometry of the given size with default line widths and corner radius.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the side length.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
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

    /// Sets the corner radius used by square boxes.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the box shape.
    #[must_use]
    pub fn with_box_type(mut self, box_type: BoxType) -> Self {
        self.box_type = box_type;
        self
    }

    /// Half the box stroke width; the outline is inset by this so the stroke stays in bounds.
    pub(crate) fn line_offset(&self) -> f64 {
        self.box_line_width / 2.0
    }

    /// Radius of the circular box outline.
    pub(crate) fn circle_radius(&self) -> f64 {
        (self.size - self.box_line_width) / 2.0
    }

    /// Scales a fraction of `size` into local coordinates.
    pub(crate) fn at(&self, fx: f64, fy: f64) -> kurbo::Point {
        kurbo::Point::new(self.size * fx, self.size * fy)
    }
}
