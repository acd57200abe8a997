// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The command abstraction shared by every tool.

use core::fmt;

use tracing::{debug, info, warn};

use crate::Result;
use crate::scene::{InteractionMode, Scene};

bitflags::bitflags! {
    /// How the host should treat a command.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CommandFlags: u8 {
        /// Show the command's parameters in the host's "last operation" UI.
        const REGISTER = 0b0000_0001;
        /// Record one undo step per invocation.
        const UNDO     = 0b0000_0010;
    }
}

impl Default for CommandFlags {
    fn default() -> Self {
        Self::REGISTER | Self::UNDO
    }
}

/// How a command invocation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The command ran and may have changed the scene.
    Finished,
    /// The command did nothing; the host should not record an undo step.
    Cancelled,
}

/// A host-invokable operation.
///
/// Commands carry their parameters as plain fields, the way a host exposes
/// operator properties. [`Command::poll`] decides whether the command is
/// available at all; [`Command::execute`] does the work.
pub trait Command: fmt::Debug {
    /// Stable identifier, `namespace.name`.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn label(&self) -> &'static str;

    /// Host treatment flags.
    fn flags(&self) -> CommandFlags {
        CommandFlags::default()
    }

    /// Returns `true` if the command can run in the current scene state.
    fn poll(&self, scene: &dyn Scene) -> bool;

    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns an error when the parameters are inconsistent or the host
    /// state cannot be used. No mutation happens in that case.
    fn execute(&self, scene: &mut dyn Scene) -> Result<Outcome>;
}

/// Object mode with at least `min` selected objects.
pub(crate) fn poll_objects(scene: &dyn Scene, min: usize) -> bool {
    scene.mode() == InteractionMode::Object && scene.selected().len() >= min
}

/// Edit mode on a mesh.
pub(crate) fn poll_edit_mesh(scene: &dyn Scene) -> bool {
    scene.mode() == InteractionMode::EditMesh
}

/// Polls then executes `command`, logging the result.
///
/// A failed poll returns [`Outcome::Cancelled`] without touching the scene.
///
/// # Errors
///
/// Propagates errors from [`Command::execute`].
pub fn run(command: &dyn Command, scene: &mut dyn Scene) -> Result<Outcome> {
    let id = command.id();
    if !command.poll(scene) {
        debug!(command = id, "poll failed");
        return Ok(Outcome::Cancelled);
    }
    debug!(command = id, params = ?command, "executing");
    match command.execute(scene) {
        Ok(Outcome::Finished) => {
            info!(command = id, "finished");
            Ok(Outcome::Finished)
        }
        Ok(Outcome::Cancelled) => {
            warn!(command = id, "cancelled");
            Ok(Outcome::Cancelled)
        }
        Err(err) => {
            warn!(command = id, error = %err, "rejected");
            Err(err)
        }
    }
}
