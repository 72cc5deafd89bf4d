// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Add/remove geometry: a plus sign when unchecked, a minus sign when checked.
//!
//! Both shapes are two sub-paths so they interpolate against each other; the minus
//! keeps its vertical stroke collapsed to the centre point.

use kurbo::{BezPath, Point};

use crate::PathGeometry;

fn horizontal(geometry: &PathGeometry, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(geometry.at(0.75, 0.5));
    path.line_to(end);
    path
}

pub(crate) fn remove_mark(geometry: &PathGeometry) -> BezPath {
    let mut path = horizontal(geometry, geometry.at(0.25, 0.5));
    path.move_to(geometry.at(0.5, 0.5));
    path.line_to(geometry.at(0.5, 0.5));
    path
}

pub(crate) fn add_mark(geometry: &PathGeometry) -> BezPath {
    let mut path = horizontal(geometry, geometry.at(0.25, 0.5));
    path.move_to(geometry.at(0.5, 0.25));
    path.line_to(geometry.at(0.5, 0.75));
    path
}

pub(crate) fn long_add_mark(geometry: &PathGeometry) -> BezPath {
    let mut path = horizontal(
        geometry,
        Point::new(geometry.box_line_width, geometry.size * 0.5),
    );
    path.move_to(geometry.at(0.5, 0.25));
    path.line_to(geometry.at(0.5, 0.75));
    path
}
