// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use tracing::trace;
use trueline_geometry::{Axis, EdgeSide, snap_edge_delta, snap_to_increment};

use crate::command::{Command, Outcome, poll_objects};
use crate::error::Result;
use crate::scene::{Scene, nudge, world_bounds, world_location};
use crate::settings::PanelSettings;

/// What an edge snap lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SnapTarget {
    /// A face of the active object's bounds.
    #[default]
    Active,
    /// The 3D cursor.
    Cursor,
    /// The world origin.
    World,
}

/// Moves selected objects so one face of their bounds touches a target.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SnapEdgeToEdge {
    /// Axis to snap along.
    pub axis: Axis,
    /// Face of each moved object that snaps.
    pub source_side: EdgeSide,
    /// Face of the active object snapped to.
    pub target_side: EdgeSide,
    /// What to snap to.
    pub target: SnapTarget,
}

impl SnapEdgeToEdge {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        let s = &settings.snap;
        Self {
            axis,
            source_side: s.source_side,
            target_side: s.target_side,
            target: s.target,
        }
    }

    fn target_coordinate(&self, scene: &dyn Scene) -> f64 {
        match (self.target, scene.active()) {
            (SnapTarget::Active, Some(active)) => {
                self.target_side.pick(&world_bounds(scene, active), self.axis)
            }
            (SnapTarget::Cursor, _) => self.axis.get(scene.cursor()),
            (SnapTarget::Active | SnapTarget::World, _) => 0.0,
        }
    }
}

impl Command for SnapEdgeToEdge {
    fn id(&self) -> &'static str {
        "trueline.snap_edge_to_edge"
    }

    fn label(&self) -> &'static str {
        "Snap Edge To Edge"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let target = self.target_coordinate(scene);
        let anchor = match self.target {
            SnapTarget::Active => scene.active(),
            SnapTarget::Cursor | SnapTarget::World => None,
        };
        for id in scene.selected() {
            if Some(id) == anchor {
                continue;
            }
            let delta = snap_edge_delta(&world_bounds(scene, id), self.axis, self.source_side, target);
            trace!(?id, delta, "snap edge");
            nudge(scene, id, self.axis, delta);
        }
        Ok(Outcome::Finished)
    }
}

/// Rounds each selected object's world location on one axis to an increment.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapToIncrement {
    /// Axis to round.
    pub axis: Axis,
    /// Rounding step; zero leaves locations unchanged.
    pub increment: f64,
}

impl Default for SnapToIncrement {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            increment: 0.1,
        }
    }
}

impl SnapToIncrement {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            increment: settings.snap.increment,
        }
    }
}

impl Command for SnapToIncrement {
    fn id(&self) -> &'static str {
        "trueline.snap_to_increment"
    }

    fn label(&self) -> &'static str {
        "Snap To Increment"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        for id in scene.selected() {
            let current = self.axis.get(world_location(scene, id));
            nudge(
                scene,
                id,
                self.axis,
                snap_to_increment(current, self.increment) - current,
            );
        }
        Ok(Outcome::Finished)
    }
}
