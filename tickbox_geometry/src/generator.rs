// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Vec2};

use crate::outline::{OutlineStart, box_outline};
use crate::{CheckState, CheckmarkProperties, MarkType, PathGeometry};
use crate::{add_remove, checkmark, disclosure, radio};

/// Scale of the dot relative to the box.
const DOT_SCALE: f64 = 1.0 / 20.0;

/// Produces every path a checkbox draws, for one mark type.
///
/// A `None` mark means the state shows no mark content. That is a valid state, and
/// transitions use it to choose between revealing a mark and morphing one.
#[derive(Clone, Debug, PartialEq)]
pub struct PathGenerator {
    geometry: PathGeometry,
    mark_type: MarkType,
    checkmark: CheckmarkProperties,
}

impl Default for PathGenerator {
    fn default() -> Self {
        Self::new(MarkType::default())
    }
}

impl PathGenerator {
    /// Creates a generator for `mark_type` with default geometry.
    #[must_use]
    pub fn new(mark_type: MarkType) -> Self {
        Self {
            geometry: PathGeometry::default(),
            mark_type,
            checkmark: CheckmarkProperties::default(),
        }
    }

    /// Sets the geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: PathGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the checkmark tuning constants.
    #[must_use]
    pub fn with_checkmark_properties(mut self, properties: CheckmarkProperties) -> Self {
        self.checkmark = properties;
        self
    }

    /// Returns a generator for another mark type sharing this geometry.
    #[must_use]
    pub fn for_mark_type(&self, mark_type: MarkType) -> Self {
        Self {
            mark_type,
            ..self.clone()
        }
    }

    /// The current geometry.
    #[must_use]
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// Mutable access to the geometry.
    pub fn geometry_mut(&mut self) -> &mut PathGeometry {
        &mut self.geometry
    }

    /// The mark type this generator draws.
    #[must_use]
    pub fn mark_type(&self) -> MarkType {
        self.mark_type
    }

    /// The checkmark tuning constants.
    #[must_use]
    pub fn checkmark_properties(&self) -> &CheckmarkProperties {
        &self.checkmark
    }

    fn outline_start(&self) -> OutlineStart {
        match self.mark_type {
            MarkType::Checkmark => {
                OutlineStart::LongArm(self.checkmark.long_arm_box_intersection_angle)
            }
            MarkType::AddRemove => OutlineStart::Left,
            MarkType::Radio | MarkType::Disclosure => OutlineStart::Top,
        }
    }

    /// The closed box outline.
    #[must_use]
    pub fn box_path(&self) -> BezPath {
        box_outline(&self.geometry, self.outline_start())
    }

    /// The box outline shrunk to a small dot at the centre.
    #[must_use]
    pub fn dot_path(&self) -> BezPath {
        let size = self.geometry.size;
        let offset = (size - size * DOT_SCALE) / 2.0;
        let transform = Affine::translate(Vec2::new(offset, offset)) * Affine::scale(DOT_SCALE);
        transform * self.box_path()
    }

    /// The mark for `state`; `None` for no state or a state without a mark.
    #[must_use]
    pub fn mark_path(&self, state: Option<CheckState>) -> Option<BezPath> {
        match state? {
            CheckState::Unchecked => self.unselected_mark(),
            CheckState::Checked => self.mark(),
            CheckState::Mixed => self.mixed_mark(),
        }
    }

    /// The animation-only keyframe variant of [`Self::mark_path`].
    #[must_use]
    pub fn long_mark_path(&self, state: Option<CheckState>) -> Option<BezPath> {
        match state? {
            CheckState::Unchecked => self.long_unselected_mark(),
            CheckState::Checked => self.long_mark(),
            CheckState::Mixed => self.long_mixed_mark(),
        }
    }

    /// The checked mark.
    #[must_use]
    pub fn mark(&self) -> Option<BezPath> {
        let g = &self.geometry;
        Some(match self.mark_type {
            MarkType::Checkmark => checkmark::mark(g, &self.checkmark),
            MarkType::Radio => radio::mark(g, &self.box_path()),
            MarkType::AddRemove => add_remove::remove_mark(g),
            MarkType::Disclosure => disclosure::expanded(g),
        })
    }

    /// The mixed mark.
    #[must_use]
    pub fn mixed_mark(&self) -> Option<BezPath> {
        let g = &self.geometry;
        Some(match self.mark_type {
            MarkType::Checkmark => checkmark::mixed_mark(g),
            MarkType::Radio => radio::mixed_mark(g),
            MarkType::AddRemove => add_remove::add_mark(g),
            MarkType::Disclosure => disclosure::flat(g),
        })
    }

    /// The unchecked mark.
    #[must_use]
    pub fn unselected_mark(&self) -> Option<BezPath> {
        match self.mark_type {
            MarkType::Checkmark | MarkType::Radio => None,
            MarkType::AddRemove => Some(add_remove::add_mark(&self.geometry)),
            MarkType::Disclosure => Some(disclosure::collapsed(&self.geometry)),
        }
    }

    /// The checked mark extended to touch the box outline.
    #[must_use]
    pub fn long_mark(&self) -> Option<BezPath> {
        match self.mark_type {
            MarkType::Checkmark => Some(checkmark::long_mark(&self.geometry, &self.checkmark)),
            MarkType::Radio => Some(self.box_path()),
            MarkType::AddRemove | MarkType::Disclosure => self.mark(),
        }
    }

    /// The mixed mark extended to touch the box outline.
    #[must_use]
    pub fn long_mixed_mark(&self) -> Option<BezPath> {
        match self.mark_type {
            MarkType::Checkmark => Some(checkmark::long_mixed_mark(&self.geometry)),
            MarkType::Radio => Some(self.box_path()),
            MarkType::AddRemove => Some(add_remove::long_add_mark(&self.geometry)),
            MarkType::Disclosure => self.mixed_mark(),
        }
    }

    /// The unchecked mark extended to touch the box outline.
    #[must_use]
    pub fn long_unselected_mark(&self) -> Option<BezPath> {
        match self.mark_type {
            MarkType::Checkmark | MarkType::Radio => None,
            MarkType::AddRemove => Some(add_remove::long_add_mark(&self.geometry)),
            MarkType::Disclosure => self.unselected_mark(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{PathEl, Shape};

    use super::*;
    use crate::BoxType;

    const MARKS: [MarkType; 4] = [
        MarkType::Checkmark,
        MarkType::Radio,
        MarkType::AddRemove,
        MarkType::Disclosure,
    ];
    const STATES: [CheckState; 3] = [CheckState::Unchecked, CheckState::Checked, CheckState::Mixed];

    fn topology(path: &BezPath) -> std::vec::Vec<u8> {
        path.elements()
            .iter()
            .map(|el| match el {
                PathEl::MoveTo(_) => 0,
                PathEl::LineTo(_) => 1,
                PathEl::QuadTo(..) => 2,
                PathEl::CurveTo(..) => 3,
                PathEl::ClosePath => 4,
            })
            .collect()
    }

    #[test]
    fn box_stays_within_bounds() {
        for mark_type in MARKS {
            for box_type in [BoxType::Circle, BoxType::Square] {
                for (size, line, radius) in [
                    (100.0, 2.0, 4.0),
                    (24.0, 0.0, 0.0),
                    (30.0, 3.0, 15.0),
                    (1.0, 0.5, 0.2),
                    (0.0, 0.0, 0.0),
                ] {
                    let geometry = PathGeometry::new(size)
                        .with_box_line_width(line)
                        .with_corner_radius(radius)
                        .with_box_type(box_type);
                    let path = PathGenerator::new(mark_type).with_geometry(geometry).box_path();
                    assert!(
                        matches!(path.elements().last(), Some(PathEl::ClosePath)),
                        "{mark_type:?}/{box_type:?} box must be closed"
                    );
                    let b = path.bounding_box();
                    let eps = 1e-3 * size.max(1.0);
                    assert!(
                        b.x0 >= -eps && b.y0 >= -eps && b.x1 <= size + eps && b.y1 <= size + eps,
                        "{mark_type:?}/{box_type:?} size {size}: {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn mark_presence_per_type() {
        for mark_type in MARKS {
            let generator = PathGenerator::new(mark_type).with_geometry(PathGeometry::new(40.0));
            for state in STATES {
                if let Some(path) = generator.mark_path(Some(state)) {
                    assert!(!path.elements().is_empty(), "{mark_type:?}/{state:?}");
                }
            }
            let unselected = generator.mark_path(Some(CheckState::Unchecked));
            let shows_dash = matches!(mark_type, MarkType::AddRemove | MarkType::Disclosure);
            assert_eq!(unselected.is_some(), shows_dash, "{mark_type:?}");
            assert!(generator.mark_path(Some(CheckState::Checked)).is_some());
            assert!(generator.mark_path(None).is_none());
            assert!(generator.long_mark_path(None).is_none());
        }
    }

    #[test]
    fn morph_partners_share_topology() {
        for mark_type in MARKS {
            let generator = PathGenerator::new(mark_type).with_geometry(
                PathGeometry::new(60.0)
                    .with_box_line_width(2.0)
                    .with_box_type(BoxType::Square),
            );
            let marks: std::vec::Vec<_> = STATES
                .iter()
                .filter_map(|s| generator.mark_path(Some(*s)))
                .collect();
            if mark_type != MarkType::Radio {
                for pair in marks.windows(2) {
                    assert_eq!(topology(&pair[0]), topology(&pair[1]), "{mark_type:?}");
                }
            }
            for state in STATES {
                if let (Some(a), Some(b)) = (
                    generator.mark_path(Some(state)),
                    generator.long_mark_path(Some(state)),
                ) {
                    if mark_type != MarkType::Radio {
                        assert_eq!(topology(&a), topology(&b), "{mark_type:?}/{state:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let geometry = PathGeometry::new(100.0)
            .with_box_line_width(2.0)
            .with_corner_radius(4.0)
            .with_box_type(BoxType::Square);
        for mark_type in MARKS {
            let a = PathGenerator::new(mark_type).with_geometry(geometry);
            let b = PathGenerator::new(mark_type).with_geometry(geometry);
            assert_eq!(a.box_path(), b.box_path());
            for state in STATES {
                assert_eq!(a.mark_path(Some(state)), b.mark_path(Some(state)));
                assert_eq!(a.long_mark_path(Some(state)), b.long_mark_path(Some(state)));
            }
        }
    }

    #[test]
    fn long_checkmark_ends_where_box_starts() {
        let generator = PathGenerator::new(MarkType::Checkmark).with_geometry(
            PathGeometry::new(100.0).with_box_line_width(2.0),
        );
        let long = generator.long_mark().expect("checkmark has a long mark");
        let end = long.elements().last().and_then(|el| el.end_point());
        let start = match generator.box_path().elements()[0] {
            PathEl::MoveTo(p) => Some(p),
            _ => None,
        };
        let (Some(end), Some(start)) = (end, start) else {
            panic!("paths must have endpoints");
        };
        assert!(end.distance(start) < 1e-9, "{end:?} != {start:?}");
    }

    #[test]
    fn radio_mark_is_inset_box() {
        let generator = PathGenerator::new(MarkType::Radio).with_geometry(PathGeometry::new(100.0));
        let mark = generator.mark().expect("radio has a checked mark");
        let b = mark.bounding_box();
        // Box radius 49.5 scaled by 0.665, centred on 0.665 * 50 + 16.75.
        let center = 50.0 * 0.665 + 16.75;
        assert!((b.center().x - center).abs() < 0.05, "{b:?}");
        assert!((b.width() - 99.0 * 0.665).abs() < 0.1, "{b:?}");
        assert_eq!(topology(&mark), topology(&generator.box_path()));
    }

    #[test]
    fn dot_is_a_small_centred_box() {
        let generator =
            PathGenerator::new(MarkType::Checkmark).with_geometry(PathGeometry::new(100.0));
        let b = generator.dot_path().bounding_box();
        assert!((b.center().x - 50.0).abs() < 0.05, "{b:?}");
        assert!(b.width() < 5.1, "{b:?}");
    }

    #[test]
    fn switching_mark_type_keeps_geometry() {
        let geometry = PathGeometry::new(32.0).with_corner_radius(6.0);
        let generator = PathGenerator::new(MarkType::Checkmark).with_geometry(geometry);
        let radio = generator.for_mark_type(MarkType::Radio);
        assert_eq!(radio.mark_type(), MarkType::Radio);
        assert_eq!(radio.geometry(), &geometry);
    }
}
