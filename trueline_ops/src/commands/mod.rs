// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in commands.
//!
//! Each command is a plain struct whose public fields are its parameters.
//! `Default` gives the parameter defaults a freshly registered command uses;
//! `from_settings` builds the command a panel button would invoke.

mod align;
mod cursor;
mod distribute;
mod mirror;
mod orient;
mod snap;
mod spacing;

pub use align::{AlignActiveToSelection, AlignMeshVertices, AlignObjects};
pub use cursor::{OriginToCursorAxis, SetCursor};
pub use distribute::{DistributeByDistance, DistributeGrid, DistributeObjects};
pub use mirror::{MirrorMesh, MirrorObjects};
pub use orient::{MatchSizeAxis, OrientToPoint};
pub use snap::{SnapEdgeToEdge, SnapTarget, SnapToIncrement};
pub use spacing::SpaceInsideRange;

use trueline_geometry::{Axis, AxisBounds, TargetMode, resolve_target};

use crate::command::Command;
use crate::scene::{ObjectId, Scene, world_bounds};

/// Every built-in command with default parameters, in registration order.
pub(crate) fn builtin() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(AlignObjects::default()),
        Box::new(AlignActiveToSelection::default()),
        Box::new(AlignMeshVertices::default()),
        Box::new(DistributeObjects::default()),
        Box::new(DistributeByDistance::default()),
        Box::new(DistributeGrid::default()),
        Box::new(MirrorObjects::default()),
        Box::new(MirrorMesh::default()),
        Box::new(SetCursor::default()),
        Box::new(OriginToCursorAxis::default()),
        Box::new(OrientToPoint::default()),
        Box::new(MatchSizeAxis::default()),
        Box::new(SnapEdgeToEdge::default()),
        Box::new(SnapToIncrement::default()),
        Box::new(SpaceInsideRange::default()),
    ]
}

/// Selected objects together with their world bounds.
fn selection_with_bounds(scene: &dyn Scene) -> (Vec<ObjectId>, Vec<AxisBounds>) {
    let ids = scene.selected();
    let bounds = ids.iter().map(|&id| world_bounds(scene, id)).collect();
    (ids, bounds)
}

/// Resolves an object-level target: items are the selection, the active
/// object and cursor come from the scene.
fn object_target(scene: &dyn Scene, axis: Axis, mode: TargetMode, items: &[AxisBounds]) -> f64 {
    let active = scene.active().map(|id| world_bounds(scene, id));
    resolve_target(axis, mode, items, active.as_ref(), Some(scene.cursor()))
}

/// Resolves a target for vertex editing.
///
/// World, cursor and active targets refer to objects; the bounds modes refer
/// to the selected vertices.
fn mesh_target(scene: &dyn Scene, axis: Axis, mode: TargetMode, vertices: AxisBounds) -> f64 {
    match mode {
        TargetMode::World | TargetMode::Cursor | TargetMode::Active => {
            let (_, items) = selection_with_bounds(scene);
            object_target(scene, axis, mode, &items)
        }
        TargetMode::Min | TargetMode::Center | TargetMode::Max | TargetMode::Selection => {
            resolve_target(axis, mode, &[vertices], None, None)
        }
    }
}
