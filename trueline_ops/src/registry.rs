// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command registry with explicit setup and teardown.
//!
//! The host calls [`CommandRegistry::init`] when the tool set is enabled and
//! [`CommandRegistry::teardown`] when it is disabled. There is no global
//! registration state; the registry is an ordinary value owned by the host
//! adapter.

use hashbrown::HashMap;
use tracing::debug;

use crate::command::{Command, Outcome, run};
use crate::commands;
use crate::error::{OpError, Result};
use crate::scene::Scene;

/// Registered commands, looked up by id.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    by_id: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in command with default
    /// parameters.
    #[must_use]
    pub fn init() -> Self {
        let mut registry = Self::new();
        for command in commands::builtin() {
            // Built-in ids are unique.
            let _ = registry.register(command);
        }
        debug!(count = registry.len(), "registered built-in commands");
        registry
    }

    /// Unregisters every command, most recently registered first.
    pub fn teardown(&mut self) {
        while let Some(command) = self.commands.pop() {
            self.by_id.remove(command.id());
            debug!(command = command.id(), "unregistered");
        }
    }

    /// Registers a command.
    ///
    /// # Errors
    ///
    /// Returns [`OpError::AlreadyRegistered`] if the id is taken.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<()> {
        let id = command.id();
        if self.by_id.contains_key(id) {
            return Err(OpError::AlreadyRegistered(id));
        }
        self.by_id.insert(id, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Removes a command, returning it if it was registered.
    pub fn unregister(&mut self, id: &str) -> Option<Box<dyn Command>> {
        let index = self.by_id.remove(id)?;
        let command = self.commands.remove(index);
        for slot in self.by_id.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(command)
    }

    /// Looks up a command by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Command> {
        self.by_id.get(id).map(|&i| self.commands[i].as_ref())
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.id())
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Polls and runs the command registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`OpError::UnknownCommand`] for an unregistered id, or the
    /// command's own error.
    pub fn invoke(&self, id: &str, scene: &mut dyn Scene) -> Result<Outcome> {
        let command = self
            .get(id)
            .ok_or_else(|| OpError::UnknownCommand(id.to_owned()))?;
        run(command, scene)
    }
}
