// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use tickbox_geometry::{BoxType, CheckState};

use super::{Context, Plan};
use crate::LayerRole;

/// The box fade takes this fraction of the full duration.
const BOX_FADE_FRACTION: f64 = 1.0 / 1.5;

/// Round boxes leave more room for the mark to spring.
fn amplitude(cx: &Context<'_>) -> f64 {
    match cx.generator.geometry().box_type {
        BoxType::Square => 0.20,
        BoxType::Circle => 0.35,
    }
}

pub(super) fn reveal(cx: &Context<'_>, _state: CheckState, mark: BezPath, plan: &mut Plan) {
    plan.layers.mark.path = Some(mark);
    let fade = cx.duration() * BOX_FADE_FRACTION;
    plan.push(
        LayerRole::SelectedBox,
        cx.effects.opacity(false).with_duration(fade),
    );
    plan.push(LayerRole::Mark, cx.effects.fill(1, amplitude(cx), false));
}

pub(super) fn conceal(cx: &Context<'_>, _state: CheckState, _mark: BezPath, plan: &mut Plan) {
    let fade = cx.duration() * BOX_FADE_FRACTION;
    plan.push(
        LayerRole::SelectedBox,
        cx.effects
            .opacity(true)
            .with_begin(cx.duration() - fade)
            .with_duration(fade),
    );
    plan.push(LayerRole::Mark, cx.effects.fill(1, amplitude(cx), true));
}
