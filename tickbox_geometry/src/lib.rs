// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path generation for checkbox and radio controls.
//!
//! This crate is the geometry layer of `tickbox`:
//! - **Boxes** are circles or rounded rects inset by half the box line width, so
//!   the stroked outline stays inside `[0, size] × [0, size]`.
//! - **Marks** (checkmark, radio dot, add/remove, disclosure) are computed per
//!   [`CheckState`]; a state may have no mark at all.
//! - **Long marks** are keyframe-only variants that reach the box outline, so a
//!   transition can draw box and mark as one continuous stroke.
//!
//! Everything here is a pure function of [`PathGeometry`], [`MarkType`] and
//! [`CheckmarkProperties`]. Rendering and animation live in other crates.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod add_remove;
mod checkmark;
mod disclosure;
#[cfg(not(feature = "std"))]
mod float;
mod generator;
mod geometry;
mod kinds;
mod outline;
mod path_ops;
mod radio;

pub use checkmark::{CheckmarkProperties, LongArmSolver, PerBox};
pub use generator::PathGenerator;
pub use geometry::PathGeometry;
pub use kinds::{BoxType, CheckState, MarkType, ParseError};
pub use path_ops::reverse_path;
pub use radio::{RADIO_MARK_INSET, RADIO_MARK_SCALE};
