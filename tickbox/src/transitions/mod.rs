// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect plans, one module per animation.
//!
//! A plan starts from the layers reset to the source state. Depending on which
//! side of the change has a mark, the animation's `reveal` or `conceal` step runs,
//! or the shared mark morph when both sides have one. Steps may rewrite model
//! values; whatever a step leaves in the plan is what the host shows wherever no
//! effect presents a value.

use kurbo::BezPath;
use tickbox_animation::{Effect, EffectGenerator, Transaction};
use tickbox_geometry::{CheckState, PathGenerator};

use crate::{Animation, AnimationStyle, LayerRole, LayerSet};

mod bounce;
mod dot;
mod expand;
mod fade;
mod fill;
mod flat;
mod morph;
mod spiral;
mod stroke;

/// Overshoot of the growing box in the fill and dot animations.
const BOX_OVERSHOOT: f64 = 0.18;

/// What a step may read.
pub(crate) struct Context<'a> {
    pub(crate) generator: &'a PathGenerator,
    pub(crate) effects: EffectGenerator,
    pub(crate) style: AnimationStyle,
}

impl Context<'_> {
    fn duration(&self) -> f64 {
        self.effects.duration()
    }

    /// Start of a quick flip that ends with the batch.
    fn last_moment(&self) -> f64 {
        self.effects.duration() - self.effects.quick_duration()
    }
}

/// Model layers plus the effects that run over them.
#[derive(Debug)]
pub(crate) struct Plan {
    pub(crate) layers: LayerSet,
    pub(crate) effects: Transaction<LayerRole>,
}

impl Plan {
    fn push(&mut self, role: LayerRole, effect: Effect) {
        self.effects.push(role, effect);
    }
}

type Step = fn(&Context<'_>, CheckState, BezPath, &mut Plan);

struct Steps {
    reveal: Step,
    conceal: Step,
}

fn steps(animation: Animation) -> Steps {
    match animation {
        Animation::Stroke => Steps {
            reveal: stroke::reveal,
            conceal: stroke::conceal,
        },
        Animation::Fill => Steps {
            reveal: fill::reveal,
            conceal: fill::conceal,
        },
        Animation::Bounce(_) => Steps {
            reveal: bounce::reveal,
            conceal: bounce::conceal,
        },
        Animation::Expand(_) => Steps {
            reveal: expand::reveal,
            conceal: expand::conceal,
        },
        Animation::Flat(_) => Steps {
            reveal: flat::reveal,
            conceal: flat::conceal,
        },
        Animation::Spiral => Steps {
            reveal: spiral::reveal,
            conceal: spiral::conceal,
        },
        Animation::Fade(_) => Steps {
            reveal: fade::reveal,
            conceal: fade::conceal,
        },
        Animation::Dot(_) => Steps {
            reveal: dot::reveal,
            conceal: dot::conceal,
        },
    }
}

/// Plans the change `from -> to` over `layers`, which show `from` at rest.
///
/// The plan has no effects when neither side has a mark, or when a morph between
/// the two marks is impossible.
pub(crate) fn plan(
    animation: Animation,
    cx: &Context<'_>,
    from: Option<CheckState>,
    to: Option<CheckState>,
    layers: LayerSet,
) -> Plan {
    let mut plan = Plan {
        layers,
        effects: Transaction::new(),
    };
    let steps = steps(animation);
    match (mark_of(cx, from), mark_of(cx, to)) {
        (None, None) => {}
        (None, Some((state, mark))) => (steps.reveal)(cx, state, mark, &mut plan),
        (Some((state, mark)), None) => (steps.conceal)(cx, state, mark, &mut plan),
        (Some(from), Some(to)) => morph::direct(cx, from, to, &mut plan),
    }
    log::trace!(
        "{animation} plan {from:?} -> {to:?}: {} effects",
        plan.effects.effects().len()
    );
    plan
}

fn mark_of(cx: &Context<'_>, state: Option<CheckState>) -> Option<(CheckState, BezPath)> {
    let state = state?;
    Some((state, cx.generator.mark_path(Some(state))?))
}
