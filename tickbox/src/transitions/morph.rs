// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Vec2};
use tickbox_geometry::{CheckState, MarkType, RADIO_MARK_SCALE};

use super::{Context, Plan};
use crate::LayerRole;

/// Vertical scale of a radio dot squashed into a dash.
const SQUASH: f64 = 0.002;

/// Morphs the mark between two states that both have one.
///
/// Radio dots and the mixed dash have different topology, so the dot is squashed
/// into a dash-shaped ellipse instead: going to mixed the dot flattens, and coming
/// from mixed a flattened dot grows out. The final reset swaps in the real dash.
pub(super) fn direct(
    cx: &Context<'_>,
    (_, from): (CheckState, BezPath),
    (to_state, to): (CheckState, BezPath),
    plan: &mut Plan,
) {
    let (from, to) = if cx.generator.mark_type() == MarkType::Radio {
        if to_state == CheckState::Mixed {
            let squashed = squash(cx, &from);
            (from, squashed)
        } else {
            (squash(cx, &to), to)
        }
    } else {
        (from, to)
    };
    match cx.effects.morph(from, to) {
        Ok(effect) => plan.push(LayerRole::Mark, effect),
        Err(err) => log::debug!("mark morph skipped: {err:?}"),
    }
}

fn squash(cx: &Context<'_>, dot: &BezPath) -> BezPath {
    let geometry = cx.generator.geometry();
    let size = geometry.size;
    let scale = 0.5 / RADIO_MARK_SCALE;
    let offset = Vec2::new(
        (RADIO_MARK_SCALE * size - 0.5 * size) * scale,
        size / 2.0 - geometry.box_line_width * 0.5 * scale,
    );
    Affine::translate(offset) * Affine::scale_non_uniform(scale, SQUASH) * dot.clone()
}
