// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use tickbox_geometry::CheckState;

use super::{BOX_OVERSHOOT, Context, Plan};
use crate::{AnimationStyle, LayerRole};

pub(super) fn reveal(cx: &Context<'_>, _state: CheckState, mark: BezPath, plan: &mut Plan) {
    plan.layers.mark.path = Some(mark);
    plan.push(
        LayerRole::SelectedBox,
        cx.effects.fill(1, BOX_OVERSHOOT, false),
    );
    plan.push(LayerRole::Mark, cx.effects.opacity(false));
    // A filled box covers the dot, so it can stay until the end.
    let hide_dot = match cx.style {
        AnimationStyle::Stroke => 0.0,
        AnimationStyle::Fill => cx.last_moment(),
    };
    plan.push(
        LayerRole::UnselectedBox,
        cx.effects.quick_opacity(true).with_begin(hide_dot),
    );
}

pub(super) fn conceal(cx: &Context<'_>, _state: CheckState, _mark: BezPath, plan: &mut Plan) {
    plan.push(
        LayerRole::SelectedBox,
        cx.effects.fill(1, BOX_OVERSHOOT, true),
    );
    plan.push(LayerRole::Mark, cx.effects.opacity(true));
    plan.layers.unselected_box.opacity = 0.0;
    plan.push(
        LayerRole::UnselectedBox,
        cx.effects.quick_opacity(false).with_begin(cx.last_moment()),
    );
}
