// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::warn;
use trueline_geometry::{Axis, SpacingMode, space_inside};

use super::distribute::{apply_positions, extents_on};
use crate::command::{Command, Outcome, poll_objects};
use crate::error::Result;
use crate::scene::Scene;
use crate::settings::PanelSettings;

/// Spreads the selection evenly across a fixed coordinate range.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceInsideRange {
    /// Axis to space along.
    pub axis: Axis,
    /// Lower end of the range.
    pub range_min: f64,
    /// Upper end of the range; must exceed `range_min`.
    pub range_max: f64,
    /// Pivots evenly across the range, or equal gaps between bounds.
    pub mode: SpacingMode,
}

impl Default for SpaceInsideRange {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            range_min: 0.0,
            range_max: 10.0,
            mode: SpacingMode::Center,
        }
    }
}

impl SpaceInsideRange {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        let s = &settings.space;
        Self {
            axis,
            range_min: s.range_min,
            range_max: s.range_max,
            mode: s.mode,
        }
    }
}

impl Command for SpaceInsideRange {
    fn id(&self) -> &'static str {
        "trueline.space_inside_range"
    }

    fn label(&self) -> &'static str {
        "Space Inside Range"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 2)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let ids = scene.selected();
        let extents = extents_on(scene, &ids, self.axis);
        let planned = space_inside(&extents, self.mode, self.range_min, self.range_max)
            .inspect_err(|err| warn!(%err, "range rejected"))?;
        apply_positions(scene, &ids, &extents, &planned, self.axis);
        Ok(Outcome::Finished)
    }
}
