// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio geometry: the mark is an inset copy of the box outline.

use kurbo::{Affine, BezPath, Vec2};

use crate::PathGeometry;
use crate::checkmark::polyline;

/// Scale of the inset dot relative to the box.
pub const RADIO_MARK_SCALE: f64 = 0.665;

/// Offset of the inset dot, as a fraction of `size`, after scaling.
pub const RADIO_MARK_INSET: f64 = 0.1675;

pub(crate) fn mark(geometry: &PathGeometry, box_path: &BezPath) -> BezPath {
    let inset = geometry.size * RADIO_MARK_INSET;
    let transform = Affine::translate(Vec2::new(inset, inset)) * Affine::scale(RADIO_MARK_SCALE);
    transform * box_path.clone()
}

/// Drawn right to left so it reads as the reverse of the dot outline.
pub(crate) fn mixed_mark(geometry: &PathGeometry) -> BezPath {
    polyline(&[geometry.at(0.75, 0.5), geometry.at(0.25, 0.5)])
}
