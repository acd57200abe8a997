// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;
use trueline_geometry::{
    AimError, Axis, TargetMode, aim_rotation, apply_size_factor, match_size_factor, origin_point,
};

use super::selection_with_bounds;
use crate::command::{Command, Outcome, poll_objects};
use crate::error::Result;
use crate::scene::{Scene, world_location};
use crate::settings::PanelSettings;

/// Rotates each selected object so one local axis points at a target.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientToPoint {
    /// Local axis that ends up pointing at the target.
    pub local_axis: Axis,
    /// Local axis kept as close as possible to the matching world axis.
    pub up_axis: Axis,
    /// What to aim at.
    pub target: TargetMode,
    /// Point away from the target.
    pub invert: bool,
}

impl Default for OrientToPoint {
    fn default() -> Self {
        Self {
            local_axis: Axis::Y,
            up_axis: Axis::Z,
            target: TargetMode::Selection,
            invert: false,
        }
    }
}

impl OrientToPoint {
    /// The command behind the panel's "Aim" button.
    #[must_use]
    pub fn from_settings(settings: &PanelSettings) -> Self {
        let s = &settings.orient;
        Self {
            local_axis: s.local_axis,
            up_axis: s.up_axis,
            target: s.target,
            invert: s.invert,
        }
    }
}

impl Command for OrientToPoint {
    fn id(&self) -> &'static str {
        "trueline.orient_to_point"
    }

    fn label(&self) -> &'static str {
        "Orient To Point"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        if self.local_axis == self.up_axis {
            return Err(AimError::SameAxis(self.local_axis).into());
        }
        let (ids, bounds) = selection_with_bounds(scene);
        let active = scene.active().map(|id| world_location(scene, id));
        let point = origin_point(self.target, &bounds, active, Some(scene.cursor()));
        for id in ids {
            let direction = point - world_location(scene, id);
            match aim_rotation(direction, self.local_axis, self.up_axis, self.invert)? {
                Some(rotation) => scene.set_rotation(id, rotation),
                None => trace!(?id, "already at aim point, skipped"),
            }
        }
        Ok(Outcome::Finished)
    }
}

/// Scales each selected object so its size on one axis matches a target.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSizeAxis {
    /// Axis whose size is matched.
    pub axis: Axis,
    /// Desired size; non-negative.
    pub size: f64,
    /// Scale every axis by the same factor.
    pub uniform: bool,
}

impl Default for MatchSizeAxis {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            size: 1.0,
            uniform: false,
        }
    }
}

impl MatchSizeAxis {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            size: settings.orient.match_size,
            uniform: settings.orient.match_uniform,
        }
    }
}

impl Command for MatchSizeAxis {
    fn id(&self) -> &'static str {
        "trueline.match_size_axis"
    }

    fn label(&self) -> &'static str {
        "Match Size"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let size = self.size.max(0.0);
        for id in scene.selected() {
            let current = self.axis.get(scene.dimensions(id));
            let Some(factor) = match_size_factor(current, size) else {
                trace!(?id, "zero size on axis, skipped");
                continue;
            };
            let scale = apply_size_factor(scene.scale(id), self.axis, factor, self.uniform);
            scene.set_scale(id, scale);
        }
        Ok(Outcome::Finished)
    }
}
