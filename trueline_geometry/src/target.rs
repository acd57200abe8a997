// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving symbolic alignment targets to coordinates.

use glam::DVec3;

use crate::axis::Axis;
use crate::bounds::AxisBounds;

/// Where an alignment, mirror plane or aim target sits.
///
/// This is a closed set. [`resolve_target`] is exhaustive over it, so adding a
/// variant is a deliberate, checked change rather than a silent fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TargetMode {
    /// The world origin.
    World,
    /// Minimum of the union of the item bounds.
    Min,
    /// Center of the union of the item bounds.
    #[default]
    Center,
    /// Maximum of the union of the item bounds.
    Max,
    /// The host's 3D cursor.
    Cursor,
    /// Center of the active item's bounds.
    Active,
    /// Center of the selection bounds; resolves like [`TargetMode::Center`].
    Selection,
}

impl TargetMode {
    /// All modes, in the order they are usually presented.
    pub const ALL: [Self; 7] = [
        Self::World,
        Self::Min,
        Self::Center,
        Self::Max,
        Self::Cursor,
        Self::Active,
        Self::Selection,
    ];

    /// Returns `true` if this mode is derived from item bounds.
    #[must_use]
    pub const fn needs_bounds(self) -> bool {
        !matches!(self, Self::World | Self::Cursor)
    }
}

/// Which side of an item's bounds is used when moving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum BoundSide {
    /// The minimum face.
    Min,
    /// The midpoint.
    #[default]
    Center,
    /// The maximum face.
    Max,
}

impl BoundSide {
    /// Reads this side of `bounds` along `axis`.
    #[must_use]
    pub fn pick(self, bounds: &AxisBounds, axis: Axis) -> f64 {
        match self {
            Self::Min => bounds.min_on(axis),
            Self::Center => bounds.center_on(axis),
            Self::Max => bounds.max_on(axis),
        }
    }
}

/// Resolves `mode` to a coordinate along `axis`.
///
/// | mode | result |
/// |---|---|
/// | `World` | `0.0` |
/// | `Cursor` | `cursor[axis]`, or `0.0` without a cursor |
/// | any other, `items` empty | `0.0` |
/// | `Active` | center of `active`, falling back to `items[0]` |
/// | `Min` / `Max` | min / max of the union of `items` |
/// | `Center` / `Selection` | midpoint of the union of `items` |
#[must_use]
pub fn resolve_target(
    axis: Axis,
    mode: TargetMode,
    items: &[AxisBounds],
    active: Option<&AxisBounds>,
    cursor: Option<DVec3>,
) -> f64 {
    match mode {
        TargetMode::World => 0.0,
        TargetMode::Cursor => cursor.map_or(0.0, |c| axis.get(c)),
        _ if items.is_empty() => 0.0,
        TargetMode::Active => active.unwrap_or(&items[0]).center_on(axis),
        TargetMode::Min => AxisBounds::union(items.iter().copied()).min_on(axis),
        TargetMode::Max => AxisBounds::union(items.iter().copied()).max_on(axis),
        TargetMode::Center | TargetMode::Selection => {
            AxisBounds::union(items.iter().copied()).center_on(axis)
        }
    }
}

/// Resolves `mode` to a point, for targets that are used in all three axes.
///
/// `Active` uses the active item's pivot (not its bounds), matching how aim
/// targets are picked. Bounds modes return the matching corner or center of
/// the union of `items`, or the origin for an empty set.
#[must_use]
pub fn origin_point(
    mode: TargetMode,
    items: &[AxisBounds],
    active_origin: Option<DVec3>,
    cursor: Option<DVec3>,
) -> DVec3 {
    match mode {
        TargetMode::World => DVec3::ZERO,
        TargetMode::Cursor => cursor.unwrap_or(DVec3::ZERO),
        TargetMode::Active => active_origin.unwrap_or(DVec3::ZERO),
        _ if items.is_empty() => DVec3::ZERO,
        TargetMode::Min => AxisBounds::union(items.iter().copied()).min,
        TargetMode::Max => AxisBounds::union(items.iter().copied()).max,
        TargetMode::Center | TargetMode::Selection => {
            AxisBounds::union(items.iter().copied()).center()
        }
    }
}

/// Translation along `axis` that puts `side` of `bounds` on `target`.
#[must_use]
pub fn align_delta(bounds: &AxisBounds, axis: Axis, side: BoundSide, target: f64) -> f64 {
    target - side.pick(bounds, axis)
}
