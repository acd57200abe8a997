// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;
use trueline_geometry::{Axis, BoundSide, TargetMode, align_delta};

use super::{mesh_target, object_target, selection_with_bounds};
use crate::command::{Command, Outcome, poll_edit_mesh, poll_objects};
use crate::error::{OpError, Result};
use crate::scene::{Scene, map_vertices_on_axis, nudge, selected_vertex_bounds, world_bounds};
use crate::settings::PanelSettings;

/// Moves every selected object onto a common coordinate along one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignObjects {
    /// Axis to align along.
    pub axis: Axis,
    /// Target coordinate.
    pub mode: TargetMode,
    /// Align a side of each object's bounds instead of its pivot.
    pub use_bounds: bool,
    /// Which side of the bounds lands on the target.
    pub which_bound: BoundSide,
    /// Added to the resolved target.
    pub offset: f64,
}

impl Default for AlignObjects {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            mode: TargetMode::Center,
            use_bounds: false,
            which_bound: BoundSide::Center,
            offset: 0.0,
        }
    }
}

impl AlignObjects {
    /// The command behind the panel's "Align" button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        let s = &settings.align;
        Self {
            axis,
            mode: s.mode,
            use_bounds: s.use_bounds,
            which_bound: s.which_bound,
            offset: s.offset,
        }
    }
}

impl Command for AlignObjects {
    fn id(&self) -> &'static str {
        "trueline.align_objects"
    }

    fn label(&self) -> &'static str {
        "Align Objects"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let (ids, bounds) = selection_with_bounds(scene);
        if ids.is_empty() {
            return Ok(Outcome::Cancelled);
        }
        let target = object_target(scene, self.axis, self.mode, &bounds) + self.offset;
        for (&id, b) in ids.iter().zip(&bounds) {
            let delta = if self.use_bounds {
                align_delta(b, self.axis, self.which_bound, target)
            } else {
                target - self.axis.get(scene.world_matrix(id).translation)
            };
            trace!(?id, delta, "align");
            nudge(scene, id, self.axis, delta);
        }
        Ok(Outcome::Finished)
    }
}

/// Moves the active object onto the center of the selection bounds.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AlignActiveToSelection {
    /// Axis to align along.
    pub axis: Axis,
    /// Which side of the active object's bounds lands on the center.
    pub which_bound: BoundSide,
}

impl AlignActiveToSelection {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            which_bound: settings.align.which_bound,
        }
    }
}

impl Command for AlignActiveToSelection {
    fn id(&self) -> &'static str {
        "trueline.align_active_to_selection"
    }

    fn label(&self) -> &'static str {
        "Align Active To Selection"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 2)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let (ids, bounds) = selection_with_bounds(scene);
        let Some(active) = scene.active() else {
            return Ok(Outcome::Cancelled);
        };
        if ids.is_empty() {
            return Ok(Outcome::Cancelled);
        }
        let target = object_target(scene, self.axis, TargetMode::Center, &bounds);
        let delta = align_delta(
            &world_bounds(scene, active),
            self.axis,
            self.which_bound,
            target,
        );
        nudge(scene, active, self.axis, delta);
        Ok(Outcome::Finished)
    }
}

/// Flattens the selected vertices of the edited mesh onto one coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignMeshVertices {
    /// Axis to align along.
    pub axis: Axis,
    /// Target coordinate; bounds modes use the selected vertices.
    pub mode: TargetMode,
}

impl Default for AlignMeshVertices {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            mode: TargetMode::Center,
        }
    }
}

impl AlignMeshVertices {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            mode: settings.align.mode,
        }
    }
}

impl Command for AlignMeshVertices {
    fn id(&self) -> &'static str {
        "trueline.align_mesh_vertices"
    }

    fn label(&self) -> &'static str {
        "Align Vertices"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_edit_mesh(scene)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let (vertices, vertex_bounds) = {
            let mesh = scene.edit_mesh().ok_or(OpError::NoEditMesh)?;
            (mesh.selected_vertices(), selected_vertex_bounds(mesh))
        };
        if vertices.is_empty() {
            return Ok(Outcome::Cancelled);
        }
        let target = mesh_target(scene, self.axis, self.mode, vertex_bounds);
        let mesh = scene.edit_mesh().ok_or(OpError::NoEditMesh)?;
        map_vertices_on_axis(mesh, &vertices, self.axis, |_| target)?;
        Ok(Outcome::Finished)
    }
}
