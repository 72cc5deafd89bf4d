// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box and mark drawn as one stroke.
//!
//! The mark runs reversed and in its long form, which starts on the box outline
//! where the box stroke ends. Erasing it from its end therefore leads straight into
//! erasing the box, and drawing it picks up where the box stopped.

use kurbo::BezPath;
use tickbox_animation::{FillMode, TimingFunction};
use tickbox_geometry::{CheckState, reverse_path};

use super::{Context, Plan};
use crate::LayerRole;

/// Opacity flips that should read as instant.
const BLINK: f64 = 0.001;

pub(super) fn reveal(cx: &Context<'_>, state: CheckState, mark: BezPath, plan: &mut Plan) {
    let half = cx.duration() / 2.0;
    let quarter = cx.duration() / 4.0;
    let reversed = reverse_path(&mark);
    let long = cx
        .generator
        .long_mark_path(Some(state))
        .map(|long| reverse_path(&long));

    plan.push(LayerRole::SelectedBox, cx.effects.quick_opacity(false));
    plan.push(
        LayerRole::SelectedBox,
        cx.effects
            .stroke(false)
            .with_easing(TimingFunction::EaseIn)
            .with_duration(half),
    );
    plan.push(
        LayerRole::Mark,
        cx.effects
            .quick_opacity(false)
            .with_begin(half)
            .with_duration(BLINK),
    );
    plan.push(
        LayerRole::Mark,
        cx.effects
            .stroke(false)
            .with_easing(TimingFunction::Linear)
            .with_begin(half)
            .with_duration(quarter),
    );

    plan.layers.mark.path = Some(reversed.clone());
    let Some(long) = long else {
        return;
    };
    match cx.effects.morph(long.clone(), reversed) {
        Ok(effect) => {
            plan.layers.mark.path = Some(long);
            plan.push(
                LayerRole::Mark,
                effect
                    .with_easing(TimingFunction::EaseOut)
                    .with_begin(half + quarter)
                    .with_duration(quarter),
            );
        }
        Err(err) => log::debug!("spiral reveal without retracting: {err:?}"),
    }
}

pub(super) fn conceal(cx: &Context<'_>, state: CheckState, mark: BezPath, plan: &mut Plan) {
    let half = cx.duration() / 2.0;
    let quarter = cx.duration() / 4.0;
    let reversed = reverse_path(&mark);

    plan.layers.mark.path = Some(reversed.clone());
    if let Some(long) = cx.generator.long_mark_path(Some(state)) {
        let long = reverse_path(&long);
        match cx.effects.morph(reversed, long.clone()) {
            Ok(effect) => {
                plan.layers.mark.path = Some(long);
                plan.push(
                    LayerRole::Mark,
                    effect
                        .with_easing(TimingFunction::EaseIn)
                        .with_duration(quarter)
                        .with_fill(FillMode::Backwards),
                );
            }
            Err(err) => log::debug!("spiral conceal without extending: {err:?}"),
        }
    }

    plan.push(
        LayerRole::Mark,
        cx.effects
            .stroke(true)
            .with_easing(TimingFunction::Linear)
            .with_begin(quarter)
            .with_duration(quarter),
    );
    plan.push(
        LayerRole::Mark,
        cx.effects
            .quick_opacity(true)
            .with_begin(half)
            .with_duration(BLINK),
    );
    plan.push(
        LayerRole::SelectedBox,
        cx.effects
            .stroke(true)
            .with_easing(TimingFunction::EaseOut)
            .with_begin(half)
            .with_duration(half),
    );
    plan.push(
        LayerRole::SelectedBox,
        cx.effects
            .quick_opacity(true)
            .with_begin(cx.last_moment()),
    );
}
