// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-animation state machine behind a checkbox.
//!
//! A [`Controller`] owns the three layers and decides what they look like for each
//! state. Every change goes through one of two paths:
//!
//! - **Reset** writes the settled look of a state (paths, paints, preset values)
//!   and emits [`LayerUpdate::Snap`].
//! - **Animate** resets to the source state, plans a batch of effects towards the
//!   target and emits [`LayerUpdate::Begin`]. When the host reports the batch
//!   finished, the controller resets to the target and runs any follow-up.
//!
//! A new request always supersedes the batch in flight; the superseded batch's
//! completion report is then ignored.

use alloc::vec::Vec;

use kurbo::Rect;
use tickbox_animation::EffectGenerator;
use tickbox_geometry::{CheckState, MarkType, PathGenerator, PathGeometry};

use crate::transitions::{self, Context};
use crate::{
    Animation, Appearance, BatchId, LayerSet, LayerUpdate, TransitionBatch, preset_for,
};

/// What happens after a batch settles.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Followup {
    Settle,
    /// Optionally swap the mark type, then bring in the mark for `state`.
    Enter {
        swap: Option<MarkType>,
        state: CheckState,
    },
}

#[derive(Copy, Clone, Debug)]
struct InFlight {
    id: BatchId,
    settle: Option<CheckState>,
    followup: Followup,
}

/// Drives the layers of one checkbox for one [`Animation`].
#[derive(Clone, Debug)]
pub struct Controller {
    animation: Animation,
    generator: PathGenerator,
    appearance: Appearance,
    effects: EffectGenerator,
    enable_morphing: bool,
    state: CheckState,
    shown: Option<CheckState>,
    layers: LayerSet,
    in_flight: Option<InFlight>,
    next_batch: u64,
    updates: Vec<LayerUpdate>,
}

impl Controller {
    /// Creates a controller for `animation` with default geometry and appearance,
    /// showing the unchecked state.
    #[must_use]
    pub fn new(animation: Animation) -> Self {
        let mut controller = Self {
            animation,
            generator: PathGenerator::default(),
            appearance: Appearance::default(),
            effects: EffectGenerator::default(),
            enable_morphing: true,
            state: CheckState::Unchecked,
            shown: Some(CheckState::Unchecked),
            layers: LayerSet::default(),
            in_flight: None,
            next_batch: 0,
            updates: Vec::new(),
        };
        controller.reset_layers(Some(CheckState::Unchecked));
        controller
    }

    /// Creates a controller for `animation` that carries over every setting of
    /// `previous` and shows its state at rest.
    ///
    /// A mark type swap still in flight on `previous` is carried over as done.
    #[must_use]
    pub fn replacing(previous: &Self, animation: Animation) -> Self {
        let generator = previous
            .generator
            .for_mark_type(previous.settled_mark_type());
        let mut controller = Self {
            animation,
            generator,
            appearance: previous.appearance,
            effects: previous.effects,
            enable_morphing: previous.enable_morphing,
            state: previous.state,
            shown: Some(previous.state),
            layers: LayerSet::default(),
            in_flight: None,
            next_batch: previous.next_batch,
            updates: Vec::new(),
        };
        log::debug!(
            "replacing {} controller with {animation}",
            previous.animation
        );
        controller.reset_layers(Some(previous.state));
        controller
    }

    /// The animation this controller plays.
    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// The logical state.
    #[must_use]
    pub fn state(&self) -> CheckState {
        self.state
    }

    /// The path generator, including geometry and mark type.
    #[must_use]
    pub fn generator(&self) -> &PathGenerator {
        &self.generator
    }

    /// The current geometry.
    #[must_use]
    pub fn geometry(&self) -> &PathGeometry {
        self.generator.geometry()
    }

    /// The current mark type.
    #[must_use]
    pub fn mark_type(&self) -> MarkType {
        self.generator.mark_type()
    }

    /// The mark type once a swap in flight, if any, has finished.
    #[must_use]
    pub fn settled_mark_type(&self) -> MarkType {
        match self.in_flight {
            Some(InFlight {
                followup:
                    Followup::Enter {
                        swap: Some(mark_type),
                        ..
                    },
                ..
            }) => mark_type,
            _ => self.generator.mark_type(),
        }
    }

    /// Colours and box visibility.
    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The base duration of a transition in seconds.
    #[must_use]
    pub fn animation_duration(&self) -> f64 {
        self.effects.duration()
    }

    /// Whether changes between two states with marks morph the mark.
    #[must_use]
    pub fn enable_morphing(&self) -> bool {
        self.enable_morphing
    }

    /// The model layers.
    #[must_use]
    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    /// The batch the controller is waiting on, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<BatchId> {
        self.in_flight.map(|flight| flight.id)
    }

    /// Sets the base transition duration; negative values become zero.
    pub fn set_animation_duration(&mut self, duration: f64) {
        self.effects = EffectGenerator::new(duration);
    }

    /// Turns mark morphing on or off.
    pub fn set_enable_morphing(&mut self, enable: bool) {
        self.enable_morphing = enable;
    }

    /// Sets colours and box visibility and restyles the layers in place.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.paint();
        self.updates.push(LayerUpdate::Restyle(self.layers.clone()));
    }

    /// Sets the geometry. Takes effect on the next reset or layout.
    pub fn set_geometry(&mut self, geometry: PathGeometry) {
        *self.generator.geometry_mut() = geometry;
    }

    /// Re-derives frames and paths from the geometry without touching preset
    /// values or a running batch.
    ///
    /// While a batch is in flight the mark path is left alone; the settle at the
    /// end of the batch picks up the new geometry.
    pub fn layout_layers(&mut self) {
        self.shape();
        self.paint();
        self.updates.push(LayerUpdate::Restyle(self.layers.clone()));
    }

    /// Shows `state` at rest, superseding any batch in flight.
    ///
    /// `None` shows the layers as if no state had a mark; the logical state stays.
    pub fn reset_layers(&mut self, state: Option<CheckState>) {
        self.cancel_transition();
        if let Some(state) = state {
            self.state = state;
        }
        self.shown = state;
        self.shape();
        self.paint();
        let has_mark = self.generator.mark_path(state).is_some();
        let preset = preset_for(self.animation, has_mark);
        preset.unselected_box.apply(&mut self.layers.unselected_box);
        preset.selected_box.apply(&mut self.layers.selected_box);
        preset.mark.apply(&mut self.layers.mark);
        self.updates.push(LayerUpdate::Snap(self.layers.clone()));
    }

    /// Animates from `from` to `to`; `None` on either side means "no mark".
    ///
    /// The logical state becomes `to` right away when `to` is a state.
    pub fn animate(&mut self, from: Option<CheckState>, to: Option<CheckState>) {
        self.animate_then(from, to, Followup::Settle);
    }

    /// Animates the current mark out, switches to `state`, then animates the new
    /// mark in.
    pub fn exit_then_enter(&mut self, state: CheckState) {
        let current = self.state;
        self.animate_then(
            Some(current),
            None,
            Followup::Enter { swap: None, state },
        );
    }

    /// Switches the mark type, optionally animating the old mark out and the new
    /// one in.
    ///
    /// The latest request wins over a swap still in flight.
    pub fn set_mark_type(&mut self, mark_type: MarkType, animated: bool) {
        if mark_type == self.settled_mark_type() {
            return;
        }
        if let Some(InFlight {
            followup: Followup::Enter { swap, .. },
            ..
        }) = &mut self.in_flight
        {
            *swap = None;
        }
        if mark_type == self.generator.mark_type() {
            // The exit in flight now brings the current mark back in.
            if !animated {
                self.reset_layers(Some(self.state));
            }
            return;
        }
        let next = self.generator.for_mark_type(mark_type);
        let state = self.state;
        if animated && self.generator.mark_path(Some(state)).is_some() {
            self.animate_then(
                Some(state),
                None,
                Followup::Enter {
                    swap: Some(mark_type),
                    state,
                },
            );
        } else if animated && next.mark_path(Some(state)).is_some() {
            self.generator = next;
            self.reset_layers(None);
            self.animate(None, Some(state));
        } else {
            self.generator = next;
            self.reset_layers(Some(state));
        }
    }

    /// Reports that the host finished playing batch `id`.
    ///
    /// Returns `false`, and does nothing, for a batch that is no longer current.
    pub fn complete(&mut self, id: BatchId) -> bool {
        match self.in_flight {
            Some(flight) if flight.id == id => {
                self.in_flight = None;
                self.settle(flight.settle, flight.followup);
                true
            }
            _ => {
                log::trace!("ignoring stale completion of batch {}", id.get());
                false
            }
        }
    }

    /// Drops the batch in flight without resetting layers.
    ///
    /// A pending mark type swap is applied immediately so it is never lost.
    pub fn cancel_transition(&mut self) {
        let Some(flight) = self.in_flight.take() else {
            return;
        };
        log::debug!("batch {} superseded", flight.id.get());
        if let Followup::Enter {
            swap: Some(mark_type),
            ..
        } = flight.followup
        {
            self.generator = self.generator.for_mark_type(mark_type);
        }
    }

    /// Takes the updates produced since the last call, oldest first.
    pub fn take_updates(&mut self) -> Vec<LayerUpdate> {
        core::mem::take(&mut self.updates)
    }

    fn animate_then(
        &mut self,
        from: Option<CheckState>,
        to: Option<CheckState>,
        followup: Followup,
    ) {
        self.reset_layers(from);
        match (followup, to) {
            (Followup::Enter { state, .. }, _) | (Followup::Settle, Some(state)) => {
                self.state = state;
            }
            (Followup::Settle, None) => {}
        }

        if self.effects.duration() <= 0.0 {
            self.settle(to, followup);
            return;
        }

        let cx = Context {
            generator: &self.generator,
            effects: self.effects,
            style: self.animation.style(),
        };
        let plan = transitions::plan(self.animation, &cx, from, to, self.layers.clone());
        if plan.effects.is_empty() {
            self.settle(to, followup);
            return;
        }

        let id = BatchId::from_raw(self.next_batch);
        self.next_batch += 1;
        self.layers = plan.layers;
        self.in_flight = Some(InFlight {
            id,
            settle: to,
            followup,
        });
        self.updates.push(LayerUpdate::Begin(TransitionBatch {
            id,
            layers: self.layers.clone(),
            effects: plan.effects,
        }));
    }

    fn settle(&mut self, state: Option<CheckState>, followup: Followup) {
        self.reset_layers(state);
        if let Followup::Enter { swap, state } = followup {
            if let Some(mark_type) = swap {
                self.generator = self.generator.for_mark_type(mark_type);
            }
            if self.generator.mark_path(Some(state)).is_some() {
                self.animate(None, Some(state));
            } else {
                self.reset_layers(Some(state));
            }
        }
    }

    /// Frames and paths for the shown state.
    fn shape(&mut self) {
        let size = self.generator.geometry().size;
        let frame = Rect::new(0.0, 0.0, size, size);
        let box_path = self.generator.box_path();
        let unselected = if matches!(self.animation, Animation::Dot(_)) {
            self.generator.dot_path()
        } else {
            box_path.clone()
        };
        self.layers.unselected_box.path = Some(unselected);
        self.layers.selected_box.path = Some(box_path);
        // A batch in flight owns the mark path of its model.
        if self.in_flight.is_none() {
            self.layers.mark.path = self.generator.mark_path(self.shown);
        }
        self.layers.unselected_box.frame = frame;
        self.layers.selected_box.frame = frame;
        self.layers.mark.frame = frame;
    }

    fn paint(&mut self) {
        self.appearance.paint(
            &mut self.layers,
            self.animation.style(),
            self.generator.mark_type(),
            self.generator.geometry(),
        );
    }
}
