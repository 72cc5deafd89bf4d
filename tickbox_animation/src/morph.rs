// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-to-path interpolation.
//!
//! Two paths morph element by element, so they must have the same number of
//! elements and the same element kind at every index. Start points and winding
//! must also line up, or the shape turns inside out mid-flight; callers reverse
//! one side when needed.

use kurbo::{BezPath, PathEl, Point};

/// Why two paths cannot be interpolated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MorphError {
    /// The paths have different element counts.
    ElementCount {
        /// Elements in the source path.
        from: usize,
        /// Elements in the target path.
        to: usize,
    },
    /// The element kinds differ at `index`.
    ElementKind {
        /// Index of the first mismatching element.
        index: usize,
    },
}

/// A validated pair of paths that can be interpolated.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMorph {
    from: BezPath,
    to: BezPath,
}

impl PathMorph {
    /// Pairs two paths, checking that their topologies match.
    pub fn new(from: BezPath, to: BezPath) -> Result<Self, MorphError> {
        let (a, b) = (from.elements(), to.elements());
        if a.len() != b.len() {
            return Err(MorphError::ElementCount {
                from: a.len(),
                to: b.len(),
            });
        }
        if let Some(index) = a
            .iter()
            .zip(b)
            .position(|(x, y)| core::mem::discriminant(x) != core::mem::discriminant(y))
        {
            return Err(MorphError::ElementKind { index });
        }
        Ok(Self { from, to })
    }

    /// The path at progress `0.0`.
    #[must_use]
    pub fn from(&self) -> &BezPath {
        &self.from
    }

    /// The path at progress `1.0`.
    #[must_use]
    pub fn to(&self) -> &BezPath {
        &self.to
    }

    /// The interpolated path at `progress`.
    #[must_use]
    pub fn at(&self, progress: f64) -> BezPath {
        let lerp = |a: Point, b: Point| a.lerp(b, progress);
        self.from
            .elements()
            .iter()
            .zip(self.to.elements())
            .map(|(a, b)| match (*a, *b) {
                (PathEl::MoveTo(a), PathEl::MoveTo(b)) => PathEl::MoveTo(lerp(a, b)),
                (PathEl::LineTo(a), PathEl::LineTo(b)) => PathEl::LineTo(lerp(a, b)),
                (PathEl::QuadTo(a1, a2), PathEl::QuadTo(b1, b2)) => {
                    PathEl::QuadTo(lerp(a1, b1), lerp(a2, b2))
                }
                (PathEl::CurveTo(a1, a2, a3), PathEl::CurveTo(b1, b2, b3)) => {
                    PathEl::CurveTo(lerp(a1, b1), lerp(a2, b2), lerp(a3, b3))
                }
                // Kinds were checked in `new`; close paths and any mismatch take the target.
                (_, target) => target,
            })
            .collect()
    }
}
