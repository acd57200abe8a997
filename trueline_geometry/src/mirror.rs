// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reflection across an axis-aligned plane.
//!
//! The plane is given by an axis and the plane's coordinate on that axis (the
//! plane origin). Callers handle any local/world conversion around the call.

use glam::DVec3;

use crate::axis::Axis;

/// Reflects `value` across the plane at `origin`: `2 * origin - value`.
#[must_use]
#[inline]
pub fn mirror_scalar(value: f64, origin: f64) -> f64 {
    2.0 * origin - value
}

/// Reflects one component of `point` across the plane at `origin` on `axis`.
#[must_use]
pub fn mirror_point(point: DVec3, axis: Axis, origin: f64) -> DVec3 {
    axis.with(point, mirror_scalar(axis.get(point), origin))
}

/// Flips the sign of the `axis` scale component.
///
/// Applied to an object alongside [`mirror_scalar`] on its translation so that
/// its geometry is reflected too, not just moved.
#[must_use]
pub fn mirror_scale(scale: DVec3, axis: Axis) -> DVec3 {
    axis.with(scale, -axis.get(scale))
}
