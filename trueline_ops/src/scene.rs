// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host services consumed by the commands.
//!
//! The host owns every object, the selection, the 3D cursor and the mesh
//! being edited. Commands read snapshots through [`Scene`] and [`EditMesh`],
//! compute new values with `trueline_geometry`, and write them back through
//! the same traits. Conversions between world space and whatever the host
//! stores (parent-relative locations, Euler rotations, ...) happen behind
//! these traits.

use trueline_geometry::glam::{DAffine3, DQuat, DVec3};
use trueline_geometry::{Axis, AxisBounds};

/// Opaque handle to a host object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Opaque handle to a mesh vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Which editing context the host is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Whole objects are selected and transformed.
    #[default]
    Object,
    /// The vertices of one mesh are being edited.
    EditMesh,
}

/// Read/write access to the host scene.
pub trait Scene {
    /// Current editing context.
    fn mode(&self) -> InteractionMode;

    /// Selected objects, in the host's selection order.
    fn selected(&self) -> Vec<ObjectId>;

    /// The active object, if any. It need not be selected.
    fn active(&self) -> Option<ObjectId>;

    /// World-space location of the 3D cursor.
    fn cursor(&self) -> DVec3;

    /// Moves the 3D cursor.
    fn set_cursor(&mut self, location: DVec3);

    /// Object-to-world matrix. Its translation is the object's world pivot.
    fn world_matrix(&self, id: ObjectId) -> DAffine3;

    /// Moves an object by a world-space offset.
    fn translate_world(&mut self, id: ObjectId, delta: DVec3);

    /// The object's own scale factors.
    fn scale(&self, id: ObjectId) -> DVec3;

    /// Replaces the object's own scale factors.
    fn set_scale(&mut self, id: ObjectId, scale: DVec3);

    /// Replaces the object's own rotation.
    fn set_rotation(&mut self, id: ObjectId, rotation: DQuat);

    /// Bounding box of the object's geometry in its local space.
    ///
    /// `None` for objects without geometry (empties, lights, cameras).
    fn local_bounds(&self, id: ObjectId) -> Option<AxisBounds>;

    /// Scaled size of the object's bounding box.
    fn dimensions(&self, id: ObjectId) -> DVec3;

    /// Copies an object, including its data, into the same collection.
    fn duplicate(&mut self, id: ObjectId) -> ObjectId;

    /// The mesh being edited, when in [`InteractionMode::EditMesh`].
    fn edit_mesh(&mut self) -> Option<&mut dyn EditMesh>;
}

/// Read/write access to the mesh being edited.
pub trait EditMesh {
    /// Object-to-world matrix of the mesh's object.
    fn world_matrix(&self) -> DAffine3;

    /// Currently selected vertices.
    fn selected_vertices(&self) -> Vec<VertexId>;

    /// Local-space coordinate of a vertex.
    fn vertex(&self, id: VertexId) -> DVec3;

    /// Replaces the local-space coordinate of a vertex.
    fn set_vertex(&mut self, id: VertexId, co: DVec3);

    /// Duplicates the selected geometry and moves the selection onto the copy.
    ///
    /// Returns the new vertices.
    fn duplicate_selected(&mut self) -> Vec<VertexId>;

    /// Signals that vertex data changed and the host should refresh.
    fn update(&mut self);
}

/// World-space bounds of an object.
///
/// Objects without geometry get degenerate bounds at their world pivot.
pub fn world_bounds(scene: &dyn Scene, id: ObjectId) -> AxisBounds {
    let matrix = scene.world_matrix(id);
    match scene.local_bounds(id) {
        Some(local) => local.transformed(&matrix),
        None => AxisBounds::from_point(matrix.translation),
    }
}

/// World-space pivot of an object.
pub fn world_location(scene: &dyn Scene, id: ObjectId) -> DVec3 {
    scene.world_matrix(id).translation
}

/// Moves an object along one world axis.
pub fn nudge(scene: &mut dyn Scene, id: ObjectId, axis: Axis, delta: f64) {
    if delta != 0.0 {
        scene.translate_world(id, axis.unit() * delta);
    }
}

/// World-space bounds of the selected vertices, or
/// [`AxisBounds::ORIGIN`] when nothing is selected.
pub fn selected_vertex_bounds(mesh: &dyn EditMesh) -> AxisBounds {
    let matrix = mesh.world_matrix();
    AxisBounds::from_corners(
        mesh.selected_vertices()
            .into_iter()
            .map(|v| matrix.transform_point3(mesh.vertex(v))),
    )
}

/// Rewrites one world-space component of each vertex in `vertices`.
///
/// `f` maps the current world coordinate on `axis` to the new one.
///
/// # Errors
///
/// Returns [`OpError::SingularMatrix`](crate::OpError::SingularMatrix) when
/// the mesh's world matrix cannot be inverted; no vertex is touched then.
pub fn map_vertices_on_axis(
    mesh: &mut dyn EditMesh,
    vertices: &[VertexId],
    axis: Axis,
    mut f: impl FnMut(f64) -> f64,
) -> crate::Result<()> {
    let matrix = mesh.world_matrix();
    if matrix.matrix3.determinant() == 0.0 {
        return Err(crate::OpError::SingularMatrix);
    }
    let inverse = matrix.inverse();
    for &v in vertices {
        let world = matrix.transform_point3(mesh.vertex(v));
        let moved = axis.with(world, f(axis.get(world)));
        mesh.set_vertex(v, inverse.transform_point3(moved));
    }
    mesh.update();
    Ok(())
}
