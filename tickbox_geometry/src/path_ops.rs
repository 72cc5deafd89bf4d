// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point};

/// Reverses the drawing direction of every sub-path in `path`.
///
/// Element kinds are preserved (a cubic stays a cubic with swapped control
/// points), so a reversed path still interpolates against another reversed path
/// of the same shape. Sub-path order is kept.
#[must_use]
pub fn reverse_path(path: &BezPath) -> BezPath {
    let mut out = BezPath::new();
    let mut start = 0;
    let elements = path.elements();
    for (index, el) in elements.iter().enumerate() {
        if index > start && matches!(el, PathEl::MoveTo(_)) {
            reverse_subpath(&elements[start..index], &mut out);
            start = index;
        }
    }
    if start < elements.len() {
        reverse_subpath(&elements[start..], &mut out);
    }
    out
}

fn reverse_subpath(elements: &[PathEl], out: &mut BezPath) {
    let closed = matches!(elements.last(), Some(PathEl::ClosePath));
    // `starts[i]` is where segment `i` begins.
    let mut starts: Vec<Point> = Vec::with_capacity(elements.len());
    let mut current = Point::ZERO;
    for el in elements {
        match el {
            PathEl::MoveTo(p) => current = *p,
            PathEl::ClosePath => {}
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                starts.push(current);
                current = *p;
            }
        }
    }
    out.move_to(current);
    let segments = elements
        .iter()
        .filter(|el| !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath));
    for (el, from) in segments.rev().zip(starts.iter().rev()) {
        match el {
            PathEl::LineTo(_) => out.line_to(*from),
            PathEl::QuadTo(c, _) => out.quad_to(*c, *from),
            PathEl::CurveTo(c1, c2, _) => out.curve_to(*c2, *c1, *from),
            PathEl::MoveTo(_) | PathEl::ClosePath => {}
        }
    }
    if closed {
        out.close_path();
    }
}
