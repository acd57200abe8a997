// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aiming and size matching.

use core::fmt;

use glam::{DMat3, DQuat, DVec3};

use crate::axis::Axis;

/// Error returned by [`aim_rotation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AimError {
    /// The tracking axis and the up axis are the same, so the rotation is
    /// under-determined.
    SameAxis(Axis),
}

impl fmt::Display for AimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameAxis(axis) => {
                write!(f, "local axis and up axis must differ (both are {axis})")
            }
        }
    }
}

impl core::error::Error for AimError {}

/// Below this squared cross-product length the direction counts as parallel
/// to the up reference.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Rotation that points the local `local` axis along `direction`.
///
/// The local `up` axis is kept as close as possible to the world axis of the
/// same name. When `direction` is parallel to that world axis, the next world
/// axis (`X -> Y -> Z -> X`) is used as the up reference instead.
///
/// Returns `Ok(None)` for a zero-length direction: the item has nothing to aim
/// at and keeps its rotation.
///
/// # Errors
///
/// Returns [`AimError::SameAxis`] when `local == up`.
pub fn aim_rotation(
    direction: DVec3,
    local: Axis,
    up: Axis,
    invert: bool,
) -> Result<Option<DQuat>, AimError> {
    if local == up {
        return Err(AimError::SameAxis(local));
    }
    let direction = if invert { -direction } else { direction };
    if direction.length_squared() == 0.0 {
        return Ok(None);
    }
    let forward = direction.normalize();

    let mut reference = up.unit();
    if forward.cross(reference).length_squared() < PARALLEL_EPSILON {
        reference = up.next().unit();
    }
    let up_dir = (reference - forward * forward.dot(reference)).normalize();

    let mut cols = [DVec3::ZERO; 3];
    cols[local.index()] = forward;
    cols[up.index()] = up_dir;
    // x = y * z, y = z * x, z = x * y keeps the basis right-handed.
    let side = 3 - local.index() - up.index();
    cols[side] = cols[(side + 1) % 3].cross(cols[(side + 2) % 3]);

    Ok(Some(DQuat::from_mat3(&DMat3::from_cols(
        cols[0], cols[1], cols[2],
    ))))
}

/// Scale factor that brings `current_size` to `target_size`.
///
/// Returns `None` for zero-thickness or otherwise non-positive sizes; such
/// items are skipped rather than treated as an error.
#[must_use]
pub fn match_size_factor(current_size: f64, target_size: f64) -> Option<f64> {
    (current_size > 0.0).then(|| target_size / current_size)
}

/// Applies a size factor to an object scale.
///
/// With `uniform` every component is multiplied; otherwise only `axis`.
#[must_use]
pub fn apply_size_factor(scale: DVec3, axis: Axis, factor: f64, uniform: bool) -> DVec3 {
    if uniform {
        scale * factor
    } else {
        axis.with(scale, axis.get(scale) * factor)
    }
}
