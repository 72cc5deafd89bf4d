// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use tickbox_geometry::CheckState;

use super::{Context, Plan};
use crate::LayerRole;

pub(super) fn reveal(cx: &Context<'_>, _state: CheckState, mark: BezPath, plan: &mut Plan) {
    plan.layers.mark.path = Some(mark);
    plan.push(LayerRole::SelectedBox, cx.effects.opacity(false));
    plan.push(LayerRole::Mark, cx.effects.opacity(false));
}

pub(super) fn conceal(cx: &Context<'_>, _state: CheckState, _mark: BezPath, plan: &mut Plan) {
    plan.push(LayerRole::SelectedBox, cx.effects.opacity(true));
    plan.push(LayerRole::Mark, cx.effects.opacity(true));
}
