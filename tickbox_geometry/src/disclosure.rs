// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure geometry: a chevron that points right when collapsed and down when
//! expanded, flattening to a dash for the mixed state.

use kurbo::BezPath;

use crate::PathGeometry;
use crate::checkmark::polyline;

pub(crate) fn collapsed(geometry: &PathGeometry) -> BezPath {
    polyline(&[
        geometry.at(0.375, 0.25),
        geometry.at(0.625, 0.5),
        geometry.at(0.375, 0.75),
    ])
}

pub(crate) fn expanded(geometry: &PathGeometry) -> BezPath {
    polyline(&[
        geometry.at(0.25, 0.375),
        geometry.at(0.5, 0.625),
        geometry.at(0.75, 0.375),
    ])
}

pub(crate) fn flat(geometry: &PathGeometry) -> BezPath {
    polyline(&[
        geometry.at(0.25, 0.5),
        geometry.at(0.5, 0.5),
        geometry.at(0.75, 0.5),
    ])
}
