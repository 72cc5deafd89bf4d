// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Rect, Vec2};
use peniko::Color;

/// One of the three stacked shape layers of a checkbox, bottom to top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// The outline shown while nothing is selected.
    UnselectedBox,
    /// The outline (or filled shape) shown while selected.
    SelectedBox,
    /// The glyph for the current state.
    Mark,
}

impl LayerRole {
    /// All roles in draw order.
    pub const ALL: [Self; 3] = [Self::UnselectedBox, Self::SelectedBox, Self::Mark];
}

/// Declarative values for a single shape layer.
///
/// `stroke_end` trims the stroke to a fraction of the path length, starting at the
/// path's first point. `scale` is applied about the centre of `frame`.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// The layer bounds in control coordinates.
    pub frame: Rect,
    /// The shape, or `None` for an empty layer.
    pub path: Option<BezPath>,
    /// Stroke paint.
    pub stroke: Option<Color>,
    /// Fill paint.
    pub fill: Option<Color>,
    /// Stroke width.
    pub line_width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Fraction of the path that is stroked.
    pub stroke_end: f64,
    /// Uniform scale about the frame centre.
    pub scale: f64,
    /// Whether the layer is skipped entirely.
    pub hidden: bool,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            path: None,
            stroke: None,
            fill: None,
            line_width: 1.0,
            opacity: 1.0,
            stroke_end: 1.0,
            scale: 1.0,
            hidden: false,
        }
    }
}

impl Layer {
    /// The transform that maps path coordinates into control coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let origin = self.frame.origin().to_vec2();
        let center = Vec2::new(self.frame.width() / 2.0, self.frame.height() / 2.0);
        Affine::translate(origin + center) * Affine::scale(self.scale) * Affine::translate(-center)
    }

    /// Whether anything of this layer reaches the screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.opacity > 0.0 && self.scale != 0.0 && self.path.is_some()
    }
}

/// The unselected box, selected box and mark of a checkbox.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerSet {
    /// The bottom layer.
    pub unselected_box: Layer,
    /// The middle layer.
    pub selected_box: Layer,
    /// The top layer.
    pub mark: Layer,
}

impl LayerSet {
    /// The layer for `role`.
    #[must_use]
    pub fn get(&self, role: LayerRole) -> &Layer {
        match role {
            LayerRole::UnselectedBox => &self.unselected_box,
            LayerRole::SelectedBox => &self.selected_box,
            LayerRole::Mark => &self.mark,
        }
    }

    /// The layer for `role`, mutably.
    pub fn get_mut(&mut self, role: LayerRole) -> &mut Layer {
        match role {
            LayerRole::UnselectedBox => &mut self.unselected_box,
            LayerRole::SelectedBox => &mut self.selected_box,
            LayerRole::Mark => &mut self.mark,
        }
    }

    /// The layers paired with their roles, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerRole, &Layer)> {
        LayerRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use kurbo::Point;

    #[test]
    fn scale_is_about_the_frame_centre() {
        let layer = Layer {
            frame: Rect::new(0.0, 0.0, 20.0, 20.0),
            scale: 0.5,
            ..Layer::default()
        };
        let transform = layer.transform();
        assert_eq!(
            transform * Point::new(10.0, 10.0),
            Point::new(10.0, 10.0),
            "centre is fixed"
        );
        assert_eq!(
            transform * Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            "corner moves in"
        );
    }

    #[test]
    fn roles_address_their_layers() {
        let mut layers = LayerSet::default();
        layers.get_mut(LayerRole::Mark).opacity = 0.25;
        assert_eq!(layers.mark.opacity, 0.25, "mark opacity");
        let roles: std::vec::Vec<_> = layers.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, LayerRole::ALL, "draw order");
    }
}
