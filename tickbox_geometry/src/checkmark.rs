// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkmark geometry.
//!
//! The checkmark is three points: the short arm end, the middle vertex and the long
//! arm end. The long arm is aimed at the point where a ray at
//! [`CheckmarkProperties::long_arm_box_intersection_angle`] meets the box outline,
//! so the "long" variant of the mark can run straight into the box stroke.

use core::f64::consts::FRAC_PI_4;

use kurbo::{BezPath, Point};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{BoxType, PathGeometry};

/// A tuning constant with separate values for circle and square boxes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerBox {
    /// Value used with [`BoxType::Circle`].
    pub circle: f64,
    /// Value used with [`BoxType::Square`].
    pub square: f64,
}

impl PerBox {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(circle: f64, square: f64) -> Self {
        Self { circle, square }
    }

    /// Picks the value for `box_type`.
    #[must_use]
    pub const fn get(self, box_type: BoxType) -> f64 {
        match box_type {
            BoxType::Circle => self.circle,
            BoxType::Square => self.square,
        }
    }
}

/// How the end of the checkmark's long arm is placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LongArmSolver {
    /// `long_arm_radius` from the centre along the intersection angle.
    Direct,
    /// On the segment from the middle vertex toward the box intersection point,
    /// solved in closed form.
    #[default]
    Intersection,
}

/// The empirically tuned constants that shape the checkmark.
///
/// Radii and offsets are fractions of `size`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CheckmarkProperties {
    /// Angle, in radians, between the x axis and the ray from the centre to where the
    /// extended long arm meets the box.
    pub long_arm_box_intersection_angle: f64,
    /// Distance the long arm reaches.
    pub long_arm_radius: PerBox,
    /// Vertical distance of the middle vertex below the centre.
    pub middle_point_radius: PerBox,
    /// Horizontal offset of the middle vertex from the centre.
    pub middle_point_offset: PerBox,
    /// Horizontal distance of the short arm end left of the centre.
    pub short_arm_radius: PerBox,
    /// Vertical offset of the short arm end from the centre.
    pub short_arm_offset: PerBox,
    /// How the long arm end is placed.
    pub solver: LongArmSolver,
}

impl Default for CheckmarkProperties {
    fn default() -> Self {
        Self {
            long_arm_box_intersection_angle: FRAC_PI_4,
            long_arm_radius: PerBox::new(0.22, 0.33),
            middle_point_radius: PerBox::new(0.133, 0.1995),
            middle_point_offset: PerBox::new(-0.04, -0.06),
            short_arm_radius: PerBox::new(0.17, 0.255),
            short_arm_offset: PerBox::new(0.02, 0.03),
            solver: LongArmSolver::Intersection,
        }
    }
}

impl CheckmarkProperties {
    /// Sets the long arm solver.
    #[must_use]
    pub fn with_solver(mut self, solver: LongArmSolver) -> Self {
        self.solver = solver;
        self
    }

    /// The left end of the short arm.
    #[must_use]
    pub fn short_arm_end_point(&self, geometry: &PathGeometry) -> Point {
        let s = geometry.size;
        let r = self.short_arm_radius.get(geometry.box_type);
        let o = self.short_arm_offset.get(geometry.box_type);
        Point::new(s / 2.0 - s * r, s / 2.0 + s * o)
    }

    /// The vertex where both arms meet.
    #[must_use]
    pub fn middle_point(&self, geometry: &PathGeometry) -> Point {
        let s = geometry.size;
        let r = self.middle_point_radius.get(geometry.box_type);
        let o = self.middle_point_offset.get(geometry.box_type);
        Point::new(s / 2.0 + s * o, s / 2.0 + s * r)
    }

    /// Where the extended long arm meets the box outline.
    #[must_use]
    pub fn long_arm_box_intersection_point(&self, geometry: &PathGeometry) -> Point {
        let size = geometry.size;
        let blw = geometry.box_line_width;
        let theta = self.long_arm_box_intersection_angle;

        if geometry.box_type == BoxType::Circle {
            let radius = geometry.circle_radius();
            return Point::new(
                size / 2.0 + radius * theta.cos(),
                size / 2.0 - radius * theta.sin(),
            );
        }

        let cr = geometry.corner_radius;
        let lo = geometry.line_offset();
        let circle_x = size - lo - cr;
        let circle_y = lo + cr;
        let edge_x = size / 2.0 + 0.5 * (size - blw) / theta.tan();
        let edge_y = size / 2.0 - 0.5 * (size - blw) * theta.tan();

        if edge_x <= circle_x {
            // Top edge.
            Point::new(edge_x, lo)
        } else if edge_y >= circle_y {
            // Right edge.
            Point::new(size - lo, edge_y)
        } else {
            // Top-right corner arc.
            let (sin, cos) = (theta.sin(), theta.cos());
            let sin2 = (2.0 * theta).sin();
            let cos2 = (2.0 * theta).cos();
            let a = size * (3.0 + cos2 + sin2);
            let b = -2.0 * cr * (cos + sin);
            let c = (4.0 * cr - size) * size + sq(size - 2.0 * cr) * sin2;
            let d = size * cos * (cos - sin);
            let e = 2.0 * cr * sin * (cos + sin);
            let root = c.sqrt();
            Point::new(
                0.25 * (a + 2.0 * (b + root) * cos) - blw,
                0.5 * (d + e - root * sin) + blw,
            )
        }
    }

    /// The upper right end of the checkmark.
    #[must_use]
    pub fn long_arm_end_point(&self, geometry: &PathGeometry) -> Point {
        match self.solver {
            LongArmSolver::Direct => {
                let s = geometry.size;
                let r = s * self.long_arm_radius.get(geometry.box_type);
                let theta = self.long_arm_box_intersection_angle;
                Point::new(s / 2.0 + r * theta.cos(), s / 2.0 - r * theta.sin())
            }
            LongArmSolver::Intersection => self.solve_long_arm_end(geometry),
        }
    }

    fn solve_long_arm_end(&self, geometry: &PathGeometry) -> Point {
        let size = geometry.size;
        let blw = geometry.box_line_width;
        let Point { x: x2, y: y2 } = self.long_arm_box_intersection_point(geometry);
        let Point { x: x1, y: y1 } = self.middle_point(geometry);
        let r = size * self.long_arm_radius.get(geometry.box_type);

        let a1 = size * sq(x1) - 2.0 * size * x1 * x2 + size * sq(x2) + size * x1 * y1
            - size * x2 * y1;
        let a2 = 2.0 * x2 * sq(y1) - size * x1 * y2 + size * x2 * y2 - 2.0 * x1 * y1 * y2
            - 2.0 * x2 * y1 * y2
            + 2.0 * x1 * sq(y2);
        let b = -16.0 * (sq(x1) - 2.0 * x1 * x2 + sq(x2) + sq(y1) - 2.0 * y1 * y2 + sq(y2));
        let c1 = sq(r) * (-sq(x1) + 2.0 * x1 * x2 - sq(x2));
        let c2 = sq(size) * (0.5 * sq(x1) - x1 * x2 + 0.5 * sq(x2));
        let d1 = sq(x2) * sq(y1) - 2.0 * x1 * x2 * y1 * y2 + sq(x1) * sq(y2);
        let d2 = size * (x1 * x2 * y1 - sq(x2) * y1 - sq(x1) * y2 + x1 * x2 * y2);
        let cd = c1 + c2 + d1 + d2;
        let e1 = x1 * (4.0 * y1 - 4.0 * y2) * y2 + x2 * y1 * (-4.0 * y1 + 4.0 * y2);
        let e2 = size
            * (-2.0 * sq(x1) + x2 * (-2.0 * x2 + 2.0 * y1 - 2.0 * y2)
                + x1 * (4.0 * x2 - 2.0 * y1 + 2.0 * y2));
        let f = sq(x1) - 2.0 * x1 * x2 + sq(x2) + sq(y1) - 2.0 * y1 * y2 + sq(y2);
        // Middle point and box intersection coincide; the mark has collapsed.
        if f.abs() < 1e-12 {
            return Point::new(x2, y2);
        }
        let g1 = 0.5 * size * x1 * y1 - 0.5 * size * x2 * y1 - x1 * x2 * y1 + sq(x2) * y1
            + 0.5 * size * sq(y1);
        let g2 = -0.5 * size * x1 * y2 + sq(x1) * y2 + 0.5 * size * x2 * y2 - x1 * x2 * y2
            - size * y1 * y2
            + 0.5 * size * sq(y2);
        let h1 = -4.0 * sq(x2) * y1 - 4.0 * sq(x1) * y2 + x1 * x2 * (4.0 * y1 + 4.0 * y2);
        let h2 = size
            * (-2.0 * x1 * y1 + 2.0 * x2 * y1 - 2.0 * sq(y1) + 2.0 * x1 * y2 - 2.0 * x2 * y2
                + 4.0 * y1 * y2
                - 2.0 * sq(y2));
        let i = sq(r) * (-sq(y1) + 2.0 * y1 * y2 - sq(y2))
            + sq(size) * (0.5 * sq(y1) - y1 * y2 + 0.5 * sq(y2));
        let j = size * (x1 * (y1 - y2) * y2 + x2 * y1 * (-y1 + y2));

        let x_root = (b * cd + sq(e1 + e2)).sqrt();
        let y_root = (sq(h1 + h2) + b * (d1 + i + j)).sqrt();

        Point::new(
            (0.5 * (a1 + a2 + 0.5 * x_root) + blw / 2.0) / f,
            (g1 + g2 - 0.25 * y_root + blw / 2.0) / f,
        )
    }
}

fn sq(v: f64) -> f64 {
    v * v
}

pub(crate) fn mark(geometry: &PathGeometry, props: &CheckmarkProperties) -> BezPath {
    polyline(&[
        props.short_arm_end_point(geometry),
        props.middle_point(geometry),
        props.long_arm_end_point(geometry),
    ])
}

pub(crate) fn long_mark(geometry: &PathGeometry, props: &CheckmarkProperties) -> BezPath {
    polyline(&[
        props.short_arm_end_point(geometry),
        props.middle_point(geometry),
        props.long_arm_box_intersection_point(geometry),
    ])
}

pub(crate) fn mixed_mark(geometry: &PathGeometry) -> BezPath {
    polyline(&[
        geometry.at(0.25, 0.5),
        geometry.at(0.5, 0.5),
        geometry.at(0.75, 0.5),
    ])
}

pub(crate) fn long_mixed_mark(geometry: &PathGeometry) -> BezPath {
    polyline(&[
        geometry.at(0.25, 0.5),
        geometry.at(0.5, 0.5),
        Point::new(geometry.size - geometry.box_line_width, geometry.size * 0.5),
    ])
}

/// An open path through `points`.
pub(crate) fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}
