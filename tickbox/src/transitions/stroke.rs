// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use tickbox_geometry::CheckState;

use super::{Context, Plan};
use crate::LayerRole;

const DRAWN: [LayerRole; 2] = [LayerRole::SelectedBox, LayerRole::Mark];

pub(super) fn reveal(cx: &Context<'_>, _state: CheckState, mark: BezPath, plan: &mut Plan) {
    plan.layers.mark.path = Some(mark);
    for role in DRAWN {
        plan.push(role, cx.effects.stroke(false));
        plan.push(role, cx.effects.quick_opacity(false));
    }
}

pub(super) fn conceal(cx: &Context<'_>, _state: CheckState, _mark: BezPath, plan: &mut Plan) {
    for role in DRAWN {
        plan.push(role, cx.effects.stroke(true));
        plan.push(
            role,
            cx.effects.quick_opacity(true).with_begin(cx.last_moment()),
        );
    }
}
