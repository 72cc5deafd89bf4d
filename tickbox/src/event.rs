// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tickbox_geometry::CheckState;

/// The phase of a pointer press delivered to [`Checkbox::press`](crate::Checkbox::press).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// The pointer went down.
    Began,
    /// The pointer moved while down.
    Moved,
    /// The pointer was released.
    Ended,
    /// The system took the press away.
    Cancelled,
}

/// A settings combination that was adjusted because it cannot be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// The spiral animation cannot draw radio marks; the stroke animation is used.
    SpiralWithRadio,
}

/// Something a host may want to react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckboxEvent {
    /// A press toggled the checkbox to this state.
    ValueChanged(CheckState),
    /// A setting was adjusted.
    Warning(ConfigWarning),
}
