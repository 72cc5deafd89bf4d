// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative timed effects for layered shape animation.
//!
//! Effects are plain values: nothing here owns a clock or a render loop. A host
//! starts a [`Transaction`], samples it at batch-relative times, and treats the
//! batch as finished once [`Transaction::end_time`] has passed.
//!
//! - [`EffectGenerator`] builds the stock effects (opacity, quick opacity, stroke
//!   reveal, scale overshoot, path morph) from a base duration and a direction.
//! - [`Timing`] and [`FillMode`] position an effect inside its batch.
//! - [`PathMorph`] validates that two paths can be interpolated.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tickbox_animation requires either the `std` or `libm` feature");

mod effect;
mod generator;
mod keyframes;
mod morph;
mod timing;
mod transaction;

pub use effect::{Effect, EffectKind, Property, Sample};
pub use generator::{EffectGenerator, QUICK_OPACITY_FRACTION};
pub use keyframes::Keyframes;
pub use morph::{MorphError, PathMorph};
pub use timing::{FillMode, Phase, Timing, TimingFunction};
pub use transaction::Transaction;
