// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;
use trueline_geometry::{Axis, TargetMode, mirror_scalar, mirror_scale};

use super::{mesh_target, object_target, selection_with_bounds};
use crate::command::{Command, Outcome, poll_edit_mesh, poll_objects};
use crate::error::{OpError, Result};
use crate::scene::{Scene, map_vertices_on_axis, nudge, selected_vertex_bounds, world_location};
use crate::settings::PanelSettings;

/// Reflects selected objects across a plane perpendicular to one axis.
///
/// Position is reflected and the object's scale on that axis is negated.
#[derive(Clone, Debug, PartialEq)]
pub struct MirrorObjects {
    /// Normal of the mirror plane.
    pub axis: Axis,
    /// Where the plane sits along `axis`.
    pub plane_origin: TargetMode,
    /// Mirror copies and leave the originals in place.
    pub duplicate: bool,
}

impl Default for MirrorObjects {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            plane_origin: TargetMode::World,
            duplicate: true,
        }
    }
}

impl MirrorObjects {
    /// The command behind the panel's "Mirror" button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            plane_origin: settings.mirror.plane_origin,
            duplicate: settings.mirror.duplicate,
        }
    }
}

impl Command for MirrorObjects {
    fn id(&self) -> &'static str {
        "trueline.mirror_objects"
    }

    fn label(&self) -> &'static str {
        "Mirror Objects"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let (ids, bounds) = selection_with_bounds(scene);
        if ids.is_empty() {
            return Ok(Outcome::Cancelled);
        }
        let origin = object_target(scene, self.axis, self.plane_origin, &bounds);
        for id in ids {
            let target = if self.duplicate {
                scene.duplicate(id)
            } else {
                id
            };
            let current = self.axis.get(world_location(scene, target));
            nudge(scene, target, self.axis, mirror_scalar(current, origin) - current);
            let scale = mirror_scale(scene.scale(target), self.axis);
            scene.set_scale(target, scale);
            trace!(source = ?id, ?target, origin, "mirrored");
        }
        Ok(Outcome::Finished)
    }
}

/// Reflects the selected vertices of the edited mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct MirrorMesh {
    /// Normal of the mirror plane.
    pub axis: Axis,
    /// Where the plane sits; bounds modes use the selected vertices.
    pub plane_origin: TargetMode,
    /// Mirror a copy of the selected geometry.
    pub duplicate: bool,
}

impl Default for MirrorMesh {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            plane_origin: TargetMode::World,
            duplicate: false,
        }
    }
}

impl MirrorMesh {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            plane_origin: settings.mirror.plane_origin,
            duplicate: settings.mirror.duplicate,
        }
    }
}

impl Command for MirrorMesh {
    fn id(&self) -> &'static str {
        "trueline.mirror_mesh"
    }

    fn label(&self) -> &'static str {
        "Mirror Vertices"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_edit_mesh(scene)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let (selected, vertex_bounds) = {
            let mesh = scene.edit_mesh().ok_or(OpError::NoEditMesh)?;
            (mesh.selected_vertices(), selected_vertex_bounds(mesh))
        };
        if selected.is_empty() {
            return Ok(Outcome::Cancelled);
        }
        let origin = mesh_target(scene, self.axis, self.plane_origin, vertex_bounds);
        let mesh = scene.edit_mesh().ok_or(OpError::NoEditMesh)?;
        if mesh.world_matrix().matrix3.determinant() == 0.0 {
            return Err(OpError::SingularMatrix);
        }
        // The originals stay put; only the copy is reflected.
        let vertices = if self.duplicate {
            mesh.duplicate_selected()
        } else {
            selected
        };
        map_vertices_on_axis(mesh, &vertices, self.axis, |v| mirror_scalar(v, origin))?;
        Ok(Outcome::Finished)
    }
}
