// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::{Effect, Property, Sample};

/// A batch of effects that start together and finish together.
///
/// `K` names the target each effect applies to (a layer, typically). When several
/// effects drive the same property of the same target, the one pushed last wins
/// wherever it presents a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction<K> {
    effects: SmallVec<[(K, Effect); 8]>,
}

impl<K> Default for Transaction<K> {
    fn default() -> Self {
        Self {
            effects: SmallVec::new(),
        }
    }
}

impl<K: Copy + PartialEq> Transaction<K> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an effect for `target`.
    pub fn push(&mut self, target: K, effect: Effect) {
        self.effects.push((target, effect));
    }

    /// Adds an effect for `target`, builder style.
    #[must_use]
    pub fn with(mut self, target: K, effect: Effect) -> Self {
        self.push(target, effect);
        self
    }

    /// All effects, in push order.
    #[must_use]
    pub fn effects(&self) -> &[(K, Effect)] {
        &self.effects
    }

    /// Whether the batch has no effects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Batch-relative time at which the last effect ends.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.effects
            .iter()
            .map(|(_, effect)| effect.timing().end())
            .fold(0.0, f64::max)
    }

    /// The value presented for `property` of `target` at batch-relative time `t`.
    #[must_use]
    pub fn sample(&self, target: K, property: Property, t: f64) -> Option<Sample> {
        self.effects
            .iter()
            .rev()
            .filter(|(k, effect)| *k == target && effect.property() == property)
            .find_map(|(_, effect)| effect.sample(t))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{EffectGenerator, FillMode};

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Target {
        Box,
        Mark,
    }

    #[test]
    fn end_time_covers_offsets() {
        let generator = EffectGenerator::new(0.4);
        let batch = Transaction::new()
            .with(Target::Box, generator.stroke(false).with_duration(0.2))
            .with(Target::Mark, generator.stroke(false).with_begin(0.2).with_duration(0.1));
        assert!((batch.end_time() - 0.3).abs() < 1e-12, "{}", batch.end_time());
        assert!(Transaction::<Target>::new().end_time() == 0.0, "empty batch");
    }

    #[test]
    fn later_effects_win() {
        let generator = EffectGenerator::new(1.0);
        let batch = Transaction::new()
            .with(Target::Mark, generator.opacity(false))
            .with(
                Target::Mark,
                generator
                    .quick_opacity(true)
                    .with_begin(0.5)
                    .with_fill(FillMode::Removed),
            );
        assert_eq!(
            batch.sample(Target::Mark, Property::Opacity, 0.25),
            Some(Sample::Opacity(0.25))
        );
        assert_eq!(
            batch.sample(Target::Mark, Property::Opacity, 0.5),
            Some(Sample::Opacity(1.0))
        );
        assert_eq!(
            batch.sample(Target::Mark, Property::Opacity, 0.7),
            Some(Sample::Opacity(0.7))
        );
        assert_eq!(batch.sample(Target::Box, Property::Opacity, 0.25), None);
        assert_eq!(batch.sample(Target::Mark, Property::Scale, 0.25), None);
    }
}
