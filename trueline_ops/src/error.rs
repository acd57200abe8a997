// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced to the host.

use trueline_geometry::{AimError, PlacementError};

/// Errors returned by commands and the command registry.
///
/// Degenerate per-item inputs (zero-length aim direction, zero-thickness
/// geometry) are not errors; those items are skipped and the command still
/// finishes.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    /// A mesh command ran without a mesh in edit mode.
    #[error("active edit object must be a mesh")]
    NoEditMesh,

    /// The object's world matrix cannot be inverted, so world-space vertex
    /// edits cannot be mapped back to local space.
    #[error("object world matrix is singular")]
    SingularMatrix,

    /// No command is registered under this id.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command with this id is already registered.
    #[error("command already registered: {0}")]
    AlreadyRegistered(&'static str),

    /// Aim parameters are inconsistent.
    #[error(transparent)]
    Aim(#[from] AimError),

    /// Spacing parameters are inconsistent.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// Panel settings could not be parsed.
    #[error("invalid panel settings: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Result alias for command operations.
pub type Result<T> = std::result::Result<T, OpError>;
