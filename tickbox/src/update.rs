// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tickbox_animation::{Property, Sample, Transaction};

use crate::{LayerRole, LayerSet};

/// Identifies one batch of effects handed to a host.
///
/// Ids are unique per controller and only ever increase, so a completion report for
/// a batch that has since been superseded is recognized and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchId(u64);

impl BatchId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Effects to run together over a set of model layers.
///
/// Where no effect presents a value, the host shows the model layers.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionBatch {
    pub(crate) id: BatchId,
    pub(crate) layers: LayerSet,
    pub(crate) effects: Transaction<LayerRole>,
}

impl TransitionBatch {
    /// The batch id to report back once the batch has finished.
    #[must_use]
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// The model layers.
    #[must_use]
    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    /// The effects, keyed by the layer they drive.
    #[must_use]
    pub fn effects(&self) -> &Transaction<LayerRole> {
        &self.effects
    }

    /// Batch-relative time at which every effect has finished.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.effects.end_time()
    }

    /// The layers presented at batch-relative time `t`.
    #[must_use]
    pub fn sample(&self, t: f64) -> LayerSet {
        let mut layers = self.layers.clone();
        for role in LayerRole::ALL {
            let layer = layers.get_mut(role);
            for property in [
                Property::Opacity,
                Property::StrokeEnd,
                Property::Scale,
                Property::Path,
            ] {
                match self.effects.sample(role, property, t) {
                    Some(Sample::Opacity(value)) => layer.opacity = value,
                    Some(Sample::StrokeEnd(value)) => layer.stroke_end = value,
                    Some(Sample::Scale(value)) => layer.scale = value,
                    Some(Sample::Path(path)) => layer.path = Some(path),
                    None => {}
                }
            }
        }
        layers
    }
}

/// An instruction for the host that draws the layers.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerUpdate {
    /// Replace every layer immediately, dropping any running batch.
    Snap(LayerSet),
    /// Paint, line width or layout changed; keep any running batch and swap its
    /// model layers for these.
    Restyle(LayerSet),
    /// Start a batch now.
    Begin(TransitionBatch),
}
