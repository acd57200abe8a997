// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trueline Ops: host-facing alignment commands.
//!
//! This crate turns the pure planners in `trueline_geometry` into commands a
//! 3D editor can register and invoke. It owns no scene: every command reads
//! and writes through the [`Scene`] trait, which the host implements over its
//! own object model.
//!
//! ## Core Concepts
//!
//! - [`Command`]: a parameter struct with a stable id, a poll predicate and an
//!   execute step. [`run`] polls, executes and logs.
//! - [`CommandRegistry`]: the set of commands the host exposes, with explicit
//!   [`init`](CommandRegistry::init) and
//!   [`teardown`](CommandRegistry::teardown).
//! - [`PanelSettings`]: the sidebar's persisted parameters. Each command has
//!   a `from_settings` constructor that reads the relevant group.
//!
//! ## Commands
//!
//! | Id | Needs |
//! |----|-------|
//! | `trueline.align_objects` | 1+ objects |
//! | `trueline.align_active_to_selection` | 2+ objects |
//! | `trueline.align_mesh_vertices` | mesh edit mode |
//! | `trueline.distribute_objects` | 3+ objects |
//! | `trueline.distribute_by_distance` | 2+ objects |
//! | `trueline.distribute_grid` | 2+ objects |
//! | `trueline.mirror_objects` | 1+ objects |
//! | `trueline.mirror_mesh` | mesh edit mode |
//! | `trueline.set_cursor` | a selection or an active object |
//! | `trueline.origin_to_cursor_axis` | 1+ objects |
//! | `trueline.orient_to_point` | 1+ objects |
//! | `trueline.match_size_axis` | 1+ objects |
//! | `trueline.snap_edge_to_edge` | 1+ objects |
//! | `trueline.snap_to_increment` | 1+ objects |
//! | `trueline.space_inside_range` | 2+ objects |
//!
//! Object commands require object mode. Every mutation of one invocation is
//! meant to land in a single undo step on the host side.
//!
//! ## Logging
//!
//! Commands log through `tracing`: `debug` for polls and parameters, `info`
//! when a command finishes, `warn` when it is cancelled or rejected and
//! `trace` for per-item details. Install any subscriber to see them.

mod command;
pub mod commands;
mod error;
mod registry;
mod scene;
mod settings;

pub use command::{Command, CommandFlags, Outcome, run};
pub use error::{OpError, Result};
pub use registry::CommandRegistry;
pub use scene::{
    EditMesh, InteractionMode, ObjectId, Scene, VertexId, map_vertices_on_axis, nudge,
    selected_vertex_bounds, world_bounds, world_location,
};
pub use settings::{
    AlignSettings, CursorSettings, DistributeSettings, GridSettings, MirrorSettings,
    OrientSettings, PanelSettings, SnapSettings, SpaceSettings,
};

pub use trueline_geometry as geometry;
