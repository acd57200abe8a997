// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Increment rounding and edge-to-edge snapping.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::axis::Axis;
use crate::bounds::AxisBounds;
use crate::target::{BoundSide, align_delta};

/// Rounds `value` to the nearest multiple of `increment`.
///
/// Halfway cases round away from zero. A non-positive increment leaves the
/// value as it is.
#[must_use]
pub fn snap_to_increment(value: f64, increment: f64) -> f64 {
    if increment > 0.0 {
        (value / increment).round() * increment
    } else {
        value
    }
}

/// A face of an item's bounds along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum EdgeSide {
    /// The minimum face.
    #[default]
    Min,
    /// The maximum face.
    Max,
}

impl From<EdgeSide> for BoundSide {
    fn from(side: EdgeSide) -> Self {
        match side {
            EdgeSide::Min => Self::Min,
            EdgeSide::Max => Self::Max,
        }
    }
}

impl EdgeSide {
    /// Reads this face of `bounds` along `axis`.
    #[must_use]
    pub fn pick(self, bounds: &AxisBounds, axis: Axis) -> f64 {
        BoundSide::from(self).pick(bounds, axis)
    }
}

/// Translation along `axis` that lands the `side` face of `source` on `target`.
#[must_use]
pub fn snap_edge_delta(source: &AxisBounds, axis: Axis, side: EdgeSide, target: f64) -> f64 {
    align_delta(source, axis, side.into(), target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn rounds_to_increment() {
        assert!((snap_to_increment(0.26, 0.1) - 0.3).abs() < 1e-12);
        assert!((snap_to_increment(-0.26, 0.1) + 0.3).abs() < 1e-12);
        assert_eq!(snap_to_increment(7.0, 5.0), 5.0);
        assert_eq!(snap_to_increment(7.5, 5.0), 10.0);
    }

    #[test]
    fn non_positive_increment_is_identity() {
        assert_eq!(snap_to_increment(1.234, 0.0), 1.234);
        assert_eq!(snap_to_increment(1.234, -1.0), 1.234);
    }

    #[test]
    fn edge_delta_moves_chosen_face() {
        let b = AxisBounds::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(3.0, 1.0, 1.0));
        assert_eq!(snap_edge_delta(&b, Axis::X, EdgeSide::Min, 5.0), 4.0);
        assert_eq!(snap_edge_delta(&b, Axis::X, EdgeSide::Max, 5.0), 2.0);
    }
}
