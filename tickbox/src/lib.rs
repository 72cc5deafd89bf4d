// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless checkbox and radio control.
//!
//! A checkbox is drawn as three stacked shape layers (see [`LayerRole`]): the
//! unselected box, the selected box and the mark. Each [`Animation`] has a
//! [`Controller`] behaviour that decides the settled look of every state
//! ([`preset_for`]) and the effect batch that moves between two states.
//!
//! The crate is split the way a host drives it:
//! - [`Checkbox`] is the control: state, settings, value payloads, press handling.
//! - [`LayerUpdate`]s carry declarative layer values and timed batches out.
//! - A [`Compositor`] applies them; [`Timeline`] is an in-memory one.
//!
//! Geometry comes from `tickbox_geometry` and effects from `tickbox_animation`;
//! the types a host needs from both are re-exported here.
//!
//! ## Features
//!
//! - `std`: use the standard library for float math.
//! - `libm` (default): use `libm` for float math in `no_std` builds.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod animation;
mod appearance;
mod checkbox;
mod compositor;
mod config;
mod controller;
mod event;
mod layer;
mod preset;
mod transitions;
mod update;

#[cfg(test)]
mod controller_tests;

pub use animation::{Animation, AnimationStyle, ParseAnimationError};
pub use appearance::Appearance;
pub use checkbox::Checkbox;
pub use compositor::{Compositor, Timeline};
pub use config::CheckboxConfig;
pub use controller::Controller;
pub use event::{CheckboxEvent, ConfigWarning, PressPhase};
pub use layer::{Layer, LayerRole, LayerSet};
pub use preset::{LayerPreset, LayerValues, preset_for};
pub use update::{BatchId, LayerUpdate, TransitionBatch};

pub use tickbox_animation::{Effect, Property, Sample, Transaction};
pub use tickbox_geometry::{BoxType, CheckState, MarkType, PathGenerator, PathGeometry};
