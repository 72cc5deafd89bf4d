// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use tickbox_animation::TimingFunction;
use tickbox_geometry::CheckState;

use super::{Context, Plan};
use crate::LayerRole;

/// The mark flips opacity over this many quick durations.
const FLIP_QUICKS: f64 = 4.0;

/// The mixed mark, unless `state` already shows it.
fn flattened(cx: &Context<'_>, state: CheckState) -> Option<BezPath> {
    if state == CheckState::Mixed {
        return None;
    }
    cx.generator.mark_path(Some(CheckState::Mixed))
}

pub(super) fn reveal(cx: &Context<'_>, state: CheckState, mark: BezPath, plan: &mut Plan) {
    let flip = cx.effects.quick_duration() * FLIP_QUICKS;
    plan.push(LayerRole::SelectedBox, cx.effects.opacity(false));
    plan.push(
        LayerRole::Mark,
        cx.effects.quick_opacity(false).with_duration(flip),
    );
    plan.layers.mark.path = Some(mark.clone());
    let Some(flat) = flattened(cx, state) else {
        return;
    };
    match cx.effects.morph(flat.clone(), mark) {
        Ok(effect) => {
            plan.layers.mark.path = Some(flat);
            plan.push(
                LayerRole::Mark,
                effect
                    .with_easing(TimingFunction::EaseOut)
                    .with_begin(flip)
                    .with_duration(cx.duration() - flip),
            );
        }
        Err(err) => log::debug!("flat reveal without unfolding: {err:?}"),
    }
}

pub(super) fn conceal(cx: &Context<'_>, state: CheckState, mark: BezPath, plan: &mut Plan) {
    let flip = cx.effects.quick_duration() * FLIP_QUICKS;
    plan.push(LayerRole::SelectedBox, cx.effects.opacity(true));
    if let Some(flat) = flattened(cx, state) {
        match cx.effects.morph(mark, flat) {
            Ok(effect) => plan.push(
                LayerRole::Mark,
                effect
                    .with_easing(TimingFunction::EaseIn)
                    .with_duration(cx.duration() - flip),
            ),
            Err(err) => log::debug!("flat conceal without flattening: {err:?}"),
        }
    }
    plan.push(
        LayerRole::Mark,
        cx.effects
            .quick_opacity(true)
            .with_begin(cx.duration() - flip)
            .with_duration(flip),
    );
}
