// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trueline_geometry --heading-base-level=0

//! Trueline Geometry: the pure math behind alignment tools.
//!
//! This crate computes *where things should go*; it never moves anything. A
//! host editor collects world-space bounds and positions of the selected
//! objects (or mesh vertices), hands them to the functions here, and applies
//! the returned coordinates to its own scene as a single undoable step.
//!
//! It is organized around four components:
//! - **Bounds**: [`AxisBounds`] for a single item (from its transformed
//!   corners) and for unions of items.
//! - **Targets**: [`resolve_target`] maps a [`TargetMode`] plus an [`Axis`]
//!   to a coordinate (world origin, cursor, selection min/center/max, active
//!   item center).
//! - **Placement**: [`distribute`], [`distribute_by_distance`],
//!   [`space_inside`] and [`grid_layout`] compute new per-item positions for
//!   equal-center, equal-gap, fixed-distance, range-confined and grid spacing.
//! - **Mirror/orient**: [`mirror_scalar`], [`aim_rotation`] and
//!   [`match_size_factor`].
//!
//! Small snapping helpers ([`snap_to_increment`], [`snap_edge_delta`]) round
//! out the set.
//!
//! It does **not** own any scene graph, selection model or undo stack.
//! Callers are expected to:
//! - Compute world bounds for their objects (or pass a single point for items
//!   without geometry).
//! - Pass items in whatever order they have: planners sort by position
//!   themselves and return results aligned with the caller's order.
//! - Refuse to run a planner with fewer items than the operation needs; the
//!   planners return positions unchanged in that case.
//!
//! ## Minimal example
//!
//! ```rust
//! use trueline_geometry::{Axis, AxisBounds, Extent, SpacingMode, TargetMode};
//! use trueline_geometry::{distribute, resolve_target};
//! use trueline_geometry::glam::DVec3;
//!
//! let boxes = [
//!     AxisBounds::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 1.0)),
//!     AxisBounds::new(DVec3::new(9.0, 0.0, 0.0), DVec3::new(10.0, 1.0, 1.0)),
//!     AxisBounds::new(DVec3::new(2.0, 0.0, 0.0), DVec3::new(3.0, 1.0, 1.0)),
//! ];
//!
//! // Align target: center of the selection along X.
//! let center = resolve_target(Axis::X, TargetMode::Center, &boxes, None, None);
//! assert_eq!(center, 5.0);
//!
//! // Equal gaps along X. Pivots sit at each box center.
//! let extents: Vec<Extent> = boxes
//!     .iter()
//!     .map(|b| b.extent_on(Axis::X, b.center_on(Axis::X)))
//!     .collect();
//! let placed = distribute(&extents, SpacingMode::Gap);
//! assert_eq!(placed, vec![0.5, 9.5, 5.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod bounds;
mod mirror;
mod orient;
mod placement;
mod snap;
mod target;

pub use axis::{Axis, ParseAxisError};
pub use bounds::AxisBounds;
pub use mirror::{mirror_point, mirror_scalar, mirror_scale};
pub use orient::{AimError, aim_rotation, apply_size_factor, match_size_factor};
pub use placement::{
    Extent, GridItem, GridSpec, PlacementError, SpacingMode, distribute, distribute_by_distance,
    grid_cell, grid_layout, sort_by_position, space_inside,
};
pub use snap::{EdgeSide, snap_edge_delta, snap_to_increment};
pub use target::{BoundSide, TargetMode, align_delta, origin_point, resolve_target};

pub use glam;
pub use kurbo;
