// Copyright 2025 the Tickbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The small closed enums shared by every tickbox crate.
//!
//! Each enum has a stable raw name (`Display` / `FromStr`) so hosts can persist
//! or declare settings as plain strings.

use core::fmt;
use core::str::FromStr;

/// The logical state of a checkbox.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckState {
    /// No selection.
    #[default]
    Unchecked,
    /// Selected.
    Checked,
    /// Partially selected (for example a parent of mixed children).
    Mixed,
}

/// The outline drawn around the mark.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxType {
    /// A circle inscribed in the control bounds.
    #[default]
    Circle,
    /// A square with rounded corners.
    Square,
}

/// The glyph drawn inside the box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkType {
    /// A checkmark, with a dash for the mixed state.
    #[default]
    Checkmark,
    /// A filled inset dot.
    Radio,
    /// A plus sign that turns into a minus sign.
    AddRemove,
    /// A chevron that points right, then down.
    Disclosure,
}

/// Error returned when parsing a raw name fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not one of `Unchecked`, `Checked` or `Mixed`.
    UnknownCheckState,
    /// The string is not one of `Circle` or `Square`.
    UnknownBoxType,
    /// The string is not one of `Checkmark`, `Radio`, `AddRemove` or `Disclosure`.
    UnknownMarkType,
}

impl CheckState {
    /// Returns the raw name of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "Unchecked",
            Self::Checked => "Checked",
            Self::Mixed => "Mixed",
        }
    }

    /// Returns the state a tap moves to.
    ///
    /// Mixed returns to unchecked.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Checked | Self::Mixed => Self::Unchecked,
            Self::Unchecked => Self::Checked,
        }
    }
}

impl BoxType {
    /// Returns the raw name of this box type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
        }
    }
}

impl MarkType {
    /// Returns the raw name of this mark type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkmark => "Checkmark",
            Self::Radio => "Radio",
            Self::AddRemove => "AddRemove",
            Self::Disclosure => "Disclosure",
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unchecked" => Ok(Self::Unchecked),
            "Checked" => Ok(Self::Checked),
            "Mixed" => Ok(Self::Mixed),
            _ => Err(ParseError::UnknownCheckState),
        }
    }
}

impl FromStr for BoxType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Circle" => Ok(Self::Circle),
            "Square" => Ok(Self::Square),
            _ => Err(ParseError::UnknownBoxType),
        }
    }
}

impl FromStr for MarkType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Checkmark" => Ok(Self::Checkmark),
            "Radio" => Ok(Self::Radio),
            "AddRemove" => Ok(Self::AddRemove),
            "Disclosure" => Ok(Self::Disclosure),
            _ => Err(ParseError::UnknownMarkType),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn raw_names_parse_back() {
        for state in [CheckState::Unchecked, CheckState::Checked, CheckState::Mixed] {
            assert_eq!(state.to_string().parse::<CheckState>(), Ok(state));
        }
        for mark in [
            MarkType::Checkmark,
            MarkType::Radio,
            MarkType::AddRemove,
            MarkType::Disclosure,
        ] {
            assert_eq!(mark.as_str().parse::<MarkType>(), Ok(mark));
        }
        assert_eq!("Square".parse::<BoxType>(), Ok(BoxType::Square));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "checked".parse::<CheckState>(),
            Err(ParseError::UnknownCheckState)
        );
        assert_eq!("Rounded".parse::<BoxType>(), Err(ParseError::UnknownBoxType));
        assert_eq!("Tick".parse::<MarkType>(), Err(ParseError::UnknownMarkType));
    }

    #[test]
    fn toggle_sends_mixed_to_unchecked() {
        assert_eq!(CheckState::Unchecked.toggled(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggled(), CheckState::Unchecked);
        assert_eq!(CheckState::Mixed.toggled(), CheckState::Unchecked);
    }
}
