// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use tickbox_animation::FillMode;
use tickbox_geometry::CheckState;

use super::{Context, Plan};
use crate::LayerRole;

pub(super) fn reveal(cx: &Context<'_>, _state: CheckState, mark: BezPath, plan: &mut Plan) {
    plan.layers.mark.path = Some(mark);
    let delay = cx.duration() / 4.0;
    plan.push(LayerRole::SelectedBox, cx.effects.expand(false));
    plan.push(
        LayerRole::Mark,
        cx.effects
            .expand(false)
            .with_begin(delay)
            .with_duration(cx.duration() - delay)
            .with_fill(FillMode::Both),
    );
}

pub(super) fn conceal(cx: &Context<'_>, _state: CheckState, _mark: BezPath, plan: &mut Plan) {
    let delay = cx.duration() / 4.0;
    plan.push(
        LayerRole::Mark,
        cx.effects
            .expand(true)
            .with_duration(cx.duration() - delay),
    );
    plan.push(LayerRole::SelectedBox, cx.effects.expand(true));
}
