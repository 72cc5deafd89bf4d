// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box outline construction.
//!
//! Outlines are traversed clockwise (increasing angle in y-down space). Where the
//! outline starts matters: marks that morph or stroke out of the box begin at the
//! same point the outline does.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use kurbo::{Arc, BezPath, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{BoxType, PathGeometry};

/// Maximum deviation of arc approximations, in local units.
pub(crate) const ARC_TOLERANCE: f64 = 0.1;

/// Where a box outline begins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum OutlineStart {
    /// Top centre.
    Top,
    /// Middle of the left edge.
    Left,
    /// The point where the checkmark's long arm meets the box.
    ///
    /// Circles start at `-angle`; rounded rects start on the 45° point of the
    /// top-right corner.
    LongArm(f64),
}

pub(crate) fn box_outline(geometry: &PathGeometry, start: OutlineStart) -> BezPath {
    match geometry.box_type {
        BoxType::Circle => circle(geometry, start),
        BoxType::Square => rounded_rect(geometry, start),
    }
}

fn circle(geometry: &PathGeometry, start: OutlineStart) -> BezPath {
    let center = geometry.at(0.5, 0.5);
    let radius = geometry.circle_radius();
    let start_angle = match start {
        OutlineStart::Top => -FRAC_PI_2,
        OutlineStart::Left => -PI,
        OutlineStart::LongArm(angle) => -angle,
    };
    let mut path = BezPath::new();
    append_arc(&mut path, center, radius, start_angle, TAU);
    path.close_path();
    path
}

/// Corner centres in clockwise order: top-right, bottom-right, bottom-left, top-left.
fn corner_centers(geometry: &PathGeometry) -> [Point; 4] {
    let inset = geometry.line_offset() + geometry.corner_radius;
    let far = geometry.size - inset;
    [
        Point::new(far, inset),
        Point::new(far, far),
        Point::new(inset, far),
        Point::new(inset, inset),
    ]
}

/// Angle at which the clockwise quarter arc of each corner begins.
const CORNER_START: [f64; 4] = [-FRAC_PI_2, 0.0, FRAC_PI_2, PI];

fn rounded_rect(geometry: &PathGeometry, start: OutlineStart) -> BezPath {
    let radius = geometry.corner_radius;
    let centers = corner_centers(geometry);
    let mut path = BezPath::new();

    let corner = |path: &mut BezPath, index: usize| {
        path.line_to(polar(centers[index], radius, CORNER_START[index]));
        if radius != 0.0 {
            append_arc(path, centers[index], radius, CORNER_START[index], FRAC_PI_2);
        }
    };

    match start {
        OutlineStart::Top => {
            let [tr, _, _, tl] = centers;
            path.move_to(Point::new((tl.x + tr.x) / 2.0, tl.y - radius));
            for index in 0..4 {
                corner(&mut path, index);
            }
        }
        OutlineStart::Left => {
            let [_, _, bl, tl] = centers;
            path.move_to(Point::new(tl.x - radius, (tl.y + bl.y) / 2.0));
            for index in [3, 0, 1, 2] {
                corner(&mut path, index);
            }
        }
        OutlineStart::LongArm(_) => {
            let tr = centers[0];
            path.move_to(polar(tr, radius, -FRAC_PI_4));
            if radius != 0.0 {
                append_arc(&mut path, tr, radius, -FRAC_PI_4, FRAC_PI_4);
            }
            for index in 1..4 {
                corner(&mut path, index);
            }
            path.line_to(polar(tr, radius, -FRAC_PI_2));
            if radius != 0.0 {
                append_arc(&mut path, tr, radius, -FRAC_PI_2, FRAC_PI_4);
            }
        }
    }
    path.close_path();
    path
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Appends a circular arc, starting a new sub-path if `path` is empty.
pub(crate) fn append_arc(path: &mut BezPath, center: Point, radius: f64, start: f64, sweep: f64) {
    let from = polar(center, radius, start);
    match path.elements().last().and_then(|el| el.end_point()) {
        None => path.move_to(from),
        Some(current) if current.distance_squared(from) > 1e-18 => path.line_to(from),
        Some(_) => {}
    }
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    for el in arc.append_iter(ARC_TOLERANCE) {
        path.push(el);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{PathEl, Shape};

    use super::*;

    fn square(size: f64, line: f64, radius: f64) -> PathGeometry {
        PathGeometry::new(size)
            .with_box_line_width(line)
            .with_corner_radius(radius)
            .with_box_type(BoxType::Square)
    }

    #[test]
    fn sharp_rect_has_no_curves() {
        let path = box_outline(&square(40.0, 2.0, 0.0), OutlineStart::Top);
        assert!(
            path.elements()
                .iter()
                .all(|el| !matches!(el, PathEl::CurveTo(..))),
            "zero corner radius must not emit arcs"
        );
        let bounds = path.bounding_box();
        assert_eq!(bounds, kurbo::Rect::new(1.0, 1.0, 39.0, 39.0));
    }

    #[test]
    fn outlines_start_where_requested() {
        let geometry = square(40.0, 2.0, 4.0);
        let first = |start| match box_outline(&geometry, start).elements()[0] {
            PathEl::MoveTo(p) => p,
            ref other => panic!("outline must begin with a move, got {other:?}"),
        };
        assert_eq!(first(OutlineStart::Top), Point::new(20.0, 1.0));
        assert_eq!(first(OutlineStart::Left), Point::new(1.0, 20.0));

        let diagonal = first(OutlineStart::LongArm(FRAC_PI_4));
        let expected = polar(Point::new(35.0, 5.0), 4.0, -FRAC_PI_4);
        assert!(diagonal.distance(expected) < 1e-12, "{diagonal:?}");
    }

    #[test]
    fn circle_starts_on_long_arm_angle() {
        let geometry = PathGeometry::new(100.0).with_box_line_width(4.0);
        let path = box_outline(&geometry, OutlineStart::LongArm(FRAC_PI_4));
        let PathEl::MoveTo(p) = path.elements()[0] else {
            panic!("outline must begin with a move");
        };
        let r = 48.0 * core::f64::consts::FRAC_1_SQRT_2;
        assert!((p.x - (50.0 + r)).abs() < 1e-9, "x = {}", p.x);
        assert!((p.y - (50.0 - r)).abs() < 1e-9, "y = {}", p.y);
    }
}
