// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trueline_geometry::kurbo::{Point, Vec2};
use trueline_geometry::{
    Axis, Extent, GridItem, GridSpec, SpacingMode, distribute, distribute_by_distance,
    grid_layout,
};

use crate::command::{Command, Outcome, poll_objects};
use crate::error::Result;
use crate::scene::{ObjectId, Scene, nudge, world_bounds, world_location};
use crate::settings::PanelSettings;

/// Spacing extents of `ids` along `axis`, pivots at their world locations.
pub(super) fn extents_on(scene: &dyn Scene, ids: &[ObjectId], axis: Axis) -> Vec<Extent> {
    ids.iter()
        .map(|&id| {
            let pivot = axis.get(world_location(scene, id));
            world_bounds(scene, id).extent_on(axis, pivot)
        })
        .collect()
}

/// Moves each object's pivot to its planned coordinate.
pub(super) fn apply_positions(
    scene: &mut dyn Scene,
    ids: &[ObjectId],
    extents: &[Extent],
    planned: &[f64],
    axis: Axis,
) {
    for ((&id, e), &p) in ids.iter().zip(extents).zip(planned) {
        nudge(scene, id, axis, p - e.position);
    }
}

/// Evens out the spacing of three or more objects between the outermost two.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributeObjects {
    /// Axis to distribute along.
    pub axis: Axis,
    /// Equal gaps between bounds, or equal pivot distances.
    pub spacing: SpacingMode,
}

impl Default for DistributeObjects {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            spacing: SpacingMode::Gap,
        }
    }
}

impl DistributeObjects {
    /// The command behind the panel's "Distribute" button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            spacing: settings.distribute.spacing_mode,
        }
    }
}

impl Command for DistributeObjects {
    fn id(&self) -> &'static str {
        "trueline.distribute_objects"
    }

    fn label(&self) -> &'static str {
        "Distribute Objects"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 3)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let ids = scene.selected();
        if ids.len() < 3 {
            return Ok(Outcome::Cancelled);
        }
        let extents = extents_on(scene, &ids, self.axis);
        let planned = distribute(&extents, self.spacing);
        apply_positions(scene, &ids, &extents, &planned, self.axis);
        Ok(Outcome::Finished)
    }
}

/// Spaces objects a fixed distance apart, starting from the first one.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributeByDistance {
    /// Axis to distribute along.
    pub axis: Axis,
    /// Whether `distance` is between pivots or between bounds.
    pub mode: SpacingMode,
    /// Distance between consecutive objects; non-negative.
    pub distance: f64,
}

impl Default for DistributeByDistance {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            mode: SpacingMode::Center,
            distance: 1.0,
        }
    }
}

impl DistributeByDistance {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            mode: settings.distribute.distance_mode,
            distance: settings.distribute.distance,
        }
    }
}

impl Command for DistributeByDistance {
    fn id(&self) -> &'static str {
        "trueline.distribute_by_distance"
    }

    fn label(&self) -> &'static str {
        "Distribute By Distance"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 2)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let ids = scene.selected();
        if ids.len() < 2 {
            return Ok(Outcome::Cancelled);
        }
        let extents = extents_on(scene, &ids, self.axis);
        let planned = distribute_by_distance(&extents, self.mode, self.distance.max(0.0));
        apply_positions(scene, &ids, &extents, &planned, self.axis);
        Ok(Outcome::Finished)
    }
}

/// Arranges objects in rows and columns.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributeGrid {
    /// Axis along a row.
    pub primary_axis: Axis,
    /// Axis across rows. When equal to `primary_axis`, the row offset wins.
    pub secondary_axis: Axis,
    /// Objects per row; at least one.
    pub columns: usize,
    /// Pitch along the primary axis.
    pub spacing_primary: f64,
    /// Pitch along the secondary axis.
    pub spacing_secondary: f64,
    /// Axis whose positions decide the layout order.
    pub order_by: Axis,
}

impl Default for DistributeGrid {
    fn default() -> Self {
        Self {
            primary_axis: Axis::X,
            secondary_axis: Axis::Y,
            columns: 3,
            spacing_primary: 1.0,
            spacing_secondary: 1.0,
            order_by: Axis::X,
        }
    }
}

impl DistributeGrid {
    /// The command behind the panel's "Arrange Grid" button.
    #[must_use]
    pub fn from_settings(settings: &PanelSettings) -> Self {
        let g = &settings.grid;
        Self {
            primary_axis: g.primary,
            secondary_axis: g.secondary,
            columns: g.columns,
            spacing_primary: g.spacing_primary,
            spacing_secondary: g.spacing_secondary,
            order_by: g.sort_by,
        }
    }
}

impl Command for DistributeGrid {
    fn id(&self) -> &'static str {
        "trueline.distribute_grid"
    }

    fn label(&self) -> &'static str {
        "Distribute Grid"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 2)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let ids = scene.selected();
        if ids.len() < 2 {
            return Ok(Outcome::Cancelled);
        }
        let locations: Vec<_> = ids.iter().map(|&id| world_location(scene, id)).collect();
        let items: Vec<GridItem> = locations
            .iter()
            .map(|&loc| GridItem {
                order_key: self.order_by.get(loc),
                position: Point::new(
                    self.primary_axis.get(loc),
                    self.secondary_axis.get(loc),
                ),
            })
            .collect();
        let spec = GridSpec {
            columns: self.columns.max(1),
            spacing: Vec2::new(self.spacing_primary, self.spacing_secondary),
        };
        let cells = grid_layout(&items, &spec);
        for ((&id, &loc), cell) in ids.iter().zip(&locations).zip(cells) {
            let moved = self.primary_axis.with(loc, cell.x);
            let moved = self.secondary_axis.with(moved, cell.y);
            scene.translate_world(id, moved - loc);
        }
        Ok(Outcome::Finished)
    }
}
