// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World axis selector.

use core::fmt;
use core::str::FromStr;

use glam::DVec3;

/// One of the three world axes.
///
/// Every operation in this crate works along exactly one axis at a time; there
/// is no multi-axis batch form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Axis {
    /// The X axis (component `0`).
    #[default]
    X,
    /// The Y axis (component `1`).
    Y,
    /// The Z axis (component `2`).
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the component index (`0`, `1` or `2`).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Returns the axis for a component index, if it is in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    /// Returns the unit vector along this axis.
    #[must_use]
    #[inline]
    pub const fn unit(self) -> DVec3 {
        match self {
            Self::X => DVec3::X,
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }

    /// Reads this axis' component of `v`.
    #[must_use]
    #[inline]
    pub fn get(self, v: DVec3) -> f64 {
        v[self.index()]
    }

    /// Returns `v` with this axis' component replaced by `value`.
    #[must_use]
    #[inline]
    pub fn with(self, mut v: DVec3, value: f64) -> DVec3 {
        v[self.index()] = value;
        v
    }

    /// The axis that follows this one in `X -> Y -> Z -> X` order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
        }
    }

    /// Upper-case letter naming the axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`Axis`] from a string fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseAxisError;

impl fmt::Display for ParseAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `X`, `Y` or `Z`")
    }
}

impl core::error::Error for ParseAxisError {}

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Self::X),
            "Y" | "y" => Ok(Self::Y),
            "Z" | "z" => Ok(Self::Z),
            _ => Err(ParseAxisError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
    }

    #[test]
    fn with_replaces_only_one_component() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::Y.with(v, 9.0), DVec3::new(1.0, 9.0, 3.0));
        assert_eq!(Axis::Z.get(v), 3.0);
    }

    #[test]
    fn parses_either_case() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("Z".parse::<Axis>(), Ok(Axis::Z));
        assert_eq!("W".parse::<Axis>(), Err(ParseAxisError));
    }
}
