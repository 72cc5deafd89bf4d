// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for drawing checkbox layers.
//!
//! Tickbox owns state and plans; a host owns the clock and the pixels. The host
//! implements [`Compositor`] and, once per frame or event:
//!
//! ```rust,ignore
//! checkbox.flush(&mut compositor);
//! if let Some(id) = compositor_finished_batch() {
//!     checkbox.complete_transition(id);
//!     checkbox.flush(&mut compositor);
//! }
//! ```
//!
//! [`Timeline`] is a complete in-memory host, used by tests and by the demo.

use crate::{BatchId, LayerSet, LayerUpdate, TransitionBatch};

/// Applies layer updates to a presentation tree.
pub trait Compositor {
    /// Replaces all layers immediately and drops any running batch.
    fn snap(&mut self, layers: &LayerSet);

    /// Updates paints, line widths and layout without disturbing a running batch.
    fn restyle(&mut self, layers: &LayerSet);

    /// Starts `batch` now, replacing any running batch.
    fn begin(&mut self, batch: &TransitionBatch);

    /// Dispatches a single update.
    fn apply(&mut self, update: &LayerUpdate) {
        match update {
            LayerUpdate::Snap(layers) => self.snap(layers),
            LayerUpdate::Restyle(layers) => self.restyle(layers),
            LayerUpdate::Begin(batch) => self.begin(batch),
        }
    }
}

#[derive(Clone, Debug)]
struct Running {
    batch: TransitionBatch,
    elapsed: f64,
    reported: bool,
}

/// A reference [`Compositor`] that plays batches against a manual clock.
///
/// A finished batch keeps presenting its final values until the next snap, which
/// normally arrives right after the completion is reported.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    model: LayerSet,
    running: Option<Running>,
}

impl Timeline {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a batch is running and has not been reported finished.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running.as_ref().is_some_and(|running| !running.reported)
    }

    /// The id of the running batch, if any.
    #[must_use]
    pub fn running_batch(&self) -> Option<BatchId> {
        self.running.as_ref().map(|running| running.batch.id())
    }

    /// Advances the clock by `dt` seconds.
    ///
    /// Returns the running batch's id the first time the clock passes its end.
    pub fn advance(&mut self, dt: f64) -> Option<BatchId> {
        let running = self.running.as_mut()?;
        running.elapsed = (running.elapsed + dt).min(running.batch.end_time());
        if running.reported || running.elapsed < running.batch.end_time() {
            return None;
        }
        running.reported = true;
        Some(running.batch.id())
    }

    /// The layers as they should be drawn now.
    #[must_use]
    pub fn present(&self) -> LayerSet {
        match &self.running {
            Some(running) => running.batch.sample(running.elapsed),
            None => self.model.clone(),
        }
    }
}

impl Compositor for Timeline {
    fn snap(&mut self, layers: &LayerSet) {
        self.model = layers.clone();
        self.running = None;
    }

    fn restyle(&mut self, layers: &LayerSet) {
        self.model = layers.clone();
        if let Some(running) = &mut self.running {
            running.batch.layers = layers.clone();
        }
    }

    fn begin(&mut self, batch: &TransitionBatch) {
        log::trace!(
            "timeline begins batch {} lasting {}s",
            batch.id().get(),
            batch.end_time()
        );
        self.model = batch.layers().clone();
        self.running = Some(Running {
            batch: batch.clone(),
            elapsed: 0.0,
            reported: false,
        });
    }
}
