// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trueline_geometry::{Axis, TargetMode};

use super::{object_target, selection_with_bounds};
use crate::command::{Command, Outcome, poll_objects};
use crate::error::Result;
use crate::scene::{InteractionMode, Scene, nudge, world_location};
use crate::settings::PanelSettings;

/// Moves one component of the 3D cursor onto a target.
#[derive(Clone, Debug, PartialEq)]
pub struct SetCursor {
    /// Cursor component to set.
    pub axis: Axis,
    /// Target coordinate.
    pub mode: TargetMode,
}

impl Default for SetCursor {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            mode: TargetMode::Center,
        }
    }
}

impl SetCursor {
    /// The command behind the panel button for `axis`.
    #[must_use]
    pub fn from_settings(axis: Axis, settings: &PanelSettings) -> Self {
        Self {
            axis,
            mode: settings.cursor.mode,
        }
    }
}

impl Command for SetCursor {
    fn id(&self) -> &'static str {
        "trueline.set_cursor"
    }

    fn label(&self) -> &'static str {
        "Set Cursor"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        scene.mode() == InteractionMode::Object
            && (!scene.selected().is_empty() || scene.active().is_some())
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let (_, bounds) = selection_with_bounds(scene);
        let value = object_target(scene, self.axis, self.mode, &bounds);
        let cursor = self.axis.with(scene.cursor(), value);
        scene.set_cursor(cursor);
        Ok(Outcome::Finished)
    }
}

/// Moves each selected object's pivot onto the cursor along one axis.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OriginToCursorAxis {
    /// Axis to move along.
    pub axis: Axis,
}

impl Command for OriginToCursorAxis {
    fn id(&self) -> &'static str {
        "trueline.origin_to_cursor_axis"
    }

    fn label(&self) -> &'static str {
        "Move To Cursor Axis"
    }

    fn poll(&self, scene: &dyn Scene) -> bool {
        poll_objects(scene, 1)
    }

    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome> {
        let target = self.axis.get(scene.cursor());
        for id in scene.selected() {
            let current = self.axis.get(world_location(scene, id));
            nudge(scene, id, self.axis, target - current);
        }
        Ok(Outcome::Finished)
    }
}
