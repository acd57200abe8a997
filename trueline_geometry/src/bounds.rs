// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned world bounds of objects and vertex selections.

use glam::{DAffine3, DVec3};

use crate::axis::Axis;
use crate::placement::Extent;

/// An axis-aligned box described by its minimum and maximum corners.
///
/// A degenerate input (a single point, or an item with no geometric extent)
/// yields `min == max`. The union of an empty set is [`AxisBounds::ORIGIN`]
/// rather than an error, so callers can resolve targets for empty selections
/// without special casing.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBounds {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl AxisBounds {
    /// The degenerate box at the world origin.
    pub const ORIGIN: Self = Self {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };

    /// Creates bounds from explicit corners.
    ///
    /// The corners are taken as given; use [`AxisBounds::from_corners`] when
    /// the ordering of the inputs is unknown.
    #[must_use]
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Degenerate bounds around a single point.
    #[must_use]
    pub const fn from_point(p: DVec3) -> Self {
        Self { min: p, max: p }
    }

    /// Component-wise min/max over a set of points.
    ///
    /// Returns [`AxisBounds::ORIGIN`] when `corners` is empty.
    #[must_use]
    pub fn from_corners<I>(corners: I) -> Self
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = corners.into_iter();
        let Some(first) = iter.next() else {
            return Self::ORIGIN;
        };
        iter.fold(Self::from_point(first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    /// Union of any number of boxes.
    ///
    /// The union of nothing is [`AxisBounds::ORIGIN`].
    #[must_use]
    pub fn union<I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        boxes
            .into_iter()
            .reduce(Self::union_with)
            .unwrap_or(Self::ORIGIN)
    }

    /// Union of `self` and `other`.
    #[must_use]
    pub fn union_with(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The eight corners of the box.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(b.x, b.y, b.z),
            DVec3::new(b.x, b.y, a.z),
        ]
    }

    /// Re-bounds this (local) box after transforming its eight corners.
    ///
    /// This turns an object's local bounding box into its world-space AABB.
    #[must_use]
    pub fn transformed(&self, matrix: &DAffine3) -> Self {
        Self::from_corners(self.corners().map(|c| matrix.transform_point3(c)))
    }

    /// The box moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: DVec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        0.5 * (self.min + self.max)
    }

    /// Edge lengths.
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Minimum along `axis`.
    #[must_use]
    #[inline]
    pub fn min_on(&self, axis: Axis) -> f64 {
        axis.get(self.min)
    }

    /// Maximum along `axis`.
    #[must_use]
    #[inline]
    pub fn max_on(&self, axis: Axis) -> f64 {
        axis.get(self.max)
    }

    /// Midpoint along `axis`.
    #[must_use]
    #[inline]
    pub fn center_on(&self, axis: Axis) -> f64 {
        0.5 * (self.min_on(axis) + self.max_on(axis))
    }

    /// Size along `axis`.
    #[must_use]
    #[inline]
    pub fn size_on(&self, axis: Axis) -> f64 {
        self.max_on(axis) - self.min_on(axis)
    }

    /// Spacing extent along `axis` for an item whose pivot sits at `position`.
    #[must_use]
    pub fn extent_on(&self, axis: Axis, position: f64) -> Extent {
        Extent::new(position, self.min_on(axis), self.size_on(axis))
    }

    /// Returns `true` if `other` lies entirely inside `self` (boundary included).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    #[test]
    fn corners_of_a_single_point_are_degenerate() {
        let p = DVec3::new(1.0, -2.0, 3.0);
        let b = AxisBounds::from_corners([p; 8]);
        assert_eq!(b.min, b.max);
        assert_eq!(b, AxisBounds::from_point(p));
    }

    #[test]
    fn empty_union_is_origin() {
        assert_eq!(AxisBounds::union([]), AxisBounds::ORIGIN);
        assert_eq!(AxisBounds::from_corners([]), AxisBounds::ORIGIN);
    }

    #[test]
    fn union_takes_componentwise_extremes() {
        let a = AxisBounds::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 1.0));
        let b = AxisBounds::new(DVec3::new(-1.0, 0.5, 2.0), DVec3::new(0.5, 3.0, 4.0));
        let u = AxisBounds::union([a, b]);
        assert_eq!(u.min, DVec3::new(-1.0, 0.0, 0.0));
        assert_eq!(u.max, DVec3::new(1.0, 3.0, 4.0));
        assert!(u.contains(&a));
        assert!(u.contains(&b));
    }

    #[test]
    fn rotated_unit_cube_grows_its_aabb() {
        let cube = AxisBounds::new(DVec3::splat(-1.0), DVec3::splat(1.0));
        let m = DAffine3::from_rotation_translation(
            DQuat::from_rotation_z(core::f64::consts::FRAC_PI_4),
            DVec3::new(10.0, 0.0, 0.0),
        );
        let w = cube.transformed(&m);
        let r = core::f64::consts::SQRT_2;
        assert!((w.max_on(Axis::X) - (10.0 + r)).abs() < 1e-12);
        assert!((w.min_on(Axis::Y) + r).abs() < 1e-12);
        assert!((w.size_on(Axis::Z) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn extent_reports_min_and_width() {
        let b = AxisBounds::new(DVec3::new(2.0, 0.0, 0.0), DVec3::new(5.0, 1.0, 1.0));
        let e = b.extent_on(Axis::X, 3.0);
        assert_eq!(e.position, 3.0);
        assert_eq!(e.min, 2.0);
        assert_eq!(e.width, 3.0);
    }
}
