// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory scene for command integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(dead_code, reason = "Not every test file uses every helper.")]

use trueline_ops::geometry::AxisBounds;
use trueline_ops::geometry::glam::{DAffine3, DQuat, DVec3};
use trueline_ops::{EditMesh, InteractionMode, ObjectId, Scene, VertexId};

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_vec_close(actual: DVec3, expected: DVec3) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[derive(Clone, Debug)]
pub struct MemoryObject {
    pub location: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
    pub local_bounds: Option<AxisBounds>,
}

#[derive(Clone, Debug)]
pub struct MemoryMesh {
    pub matrix: DAffine3,
    pub vertices: Vec<DVec3>,
    pub selected: Vec<VertexId>,
    pub updates: usize,
}

impl MemoryMesh {
    pub fn new(matrix: DAffine3, vertices: Vec<DVec3>, selected: &[u32]) -> Self {
        Self {
            matrix,
            vertices,
            selected: selected.iter().map(|&i| VertexId(i)).collect(),
            updates: 0,
        }
    }
}

impl EditMesh for MemoryMesh {
    fn world_matrix(&self) -> DAffine3 {
        self.matrix
    }

    fn selected_vertices(&self) -> Vec<VertexId> {
        self.selected.clone()
    }

    fn vertex(&self, id: VertexId) -> DVec3 {
        self.vertices[id.0 as usize]
    }

    fn set_vertex(&mut self, id: VertexId, co: DVec3) {
        self.vertices[id.0 as usize] = co;
    }

    fn duplicate_selected(&mut self) -> Vec<VertexId> {
        let copies: Vec<VertexId> = self
            .selected
            .iter()
            .map(|&v| {
                self.vertices.push(self.vertices[v.0 as usize]);
                VertexId((self.vertices.len() - 1) as u32)
            })
            .collect();
        self.selected = copies.clone();
        copies
    }

    fn update(&mut self) {
        self.updates += 1;
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    pub objects: Vec<MemoryObject>,
    pub selected: Vec<ObjectId>,
    pub active: Option<ObjectId>,
    pub cursor: DVec3,
    pub mode: InteractionMode,
    pub mesh: Option<MemoryMesh>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an axis-aligned box of `size`, centered on its pivot, and
    /// selects it.
    pub fn add_box(&mut self, location: DVec3, size: DVec3) -> ObjectId {
        let half = size * 0.5;
        self.add(location, Some(AxisBounds::new(-half, half)))
    }

    /// Adds an object without geometry and selects it.
    pub fn add_empty(&mut self, location: DVec3) -> ObjectId {
        self.add(location, None)
    }

    fn add(&mut self, location: DVec3, local_bounds: Option<AxisBounds>) -> ObjectId {
        self.objects.push(MemoryObject {
            location,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
            local_bounds,
        });
        let id = ObjectId((self.objects.len() - 1) as u64);
        self.selected.push(id);
        id
    }

    pub fn object(&self, id: ObjectId) -> &MemoryObject {
        &self.objects[id.0 as usize]
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut MemoryObject {
        &mut self.objects[id.0 as usize]
    }

    pub fn location(&self, id: ObjectId) -> DVec3 {
        self.object(id).location
    }

    pub fn enter_edit_mode(&mut self, mesh: MemoryMesh) {
        self.mode = InteractionMode::EditMesh;
        self.mesh = Some(mesh);
    }

    pub fn mesh(&self) -> &MemoryMesh {
        self.mesh.as_ref().expect("scene has an edit mesh")
    }
}

impl Scene for MemoryScene {
    fn mode(&self) -> InteractionMode {
        self.mode
    }

    fn selected(&self) -> Vec<ObjectId> {
        self.selected.clone()
    }

    fn active(&self) -> Option<ObjectId> {
        self.active
    }

    fn cursor(&self) -> DVec3 {
        self.cursor
    }

    fn set_cursor(&mut self, location: DVec3) {
        self.cursor = location;
    }

    fn world_matrix(&self, id: ObjectId) -> DAffine3 {
        let o = self.object(id);
        DAffine3::from_scale_rotation_translation(o.scale, o.rotation, o.location)
    }

    fn translate_world(&mut self, id: ObjectId, delta: DVec3) {
        self.object_mut(id).location += delta;
    }

    fn scale(&self, id: ObjectId) -> DVec3 {
        self.object(id).scale
    }

    fn set_scale(&mut self, id: ObjectId, scale: DVec3) {
        self.object_mut(id).scale = scale;
    }

    fn set_rotation(&mut self, id: ObjectId, rotation: DQuat) {
        self.object_mut(id).rotation = rotation;
    }

    fn local_bounds(&self, id: ObjectId) -> Option<AxisBounds> {
        self.object(id).local_bounds
    }

    fn dimensions(&self, id: ObjectId) -> DVec3 {
        let o = self.object(id);
        o.local_bounds
            .map_or(DVec3::ZERO, |b| b.size() * o.scale.abs())
    }

    fn duplicate(&mut self, id: ObjectId) -> ObjectId {
        let copy = self.object(id).clone();
        self.objects.push(copy);
        ObjectId((self.objects.len() - 1) as u64)
    }

    fn edit_mesh(&mut self) -> Option<&mut dyn EditMesh> {
        if self.mode != InteractionMode::EditMesh {
            return None;
        }
        self.mesh.as_mut().map(|m| m as &mut dyn EditMesh)
    }
}
