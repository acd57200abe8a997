// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for command registration, lookup and invocation.

mod support;

use support::{MemoryScene, assert_close, init_tracing};
use trueline_ops::commands::SnapToIncrement;
use trueline_ops::geometry::glam::DVec3;
use trueline_ops::{CommandFlags, CommandRegistry, OpError, Outcome};

#[test]
fn init_registers_every_builtin_once() {
    let registry = CommandRegistry::init();
    assert_eq!(registry.len(), 15);

    let mut ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids.first(), Some(&"trueline.align_objects"));
    assert_eq!(ids.last(), Some(&"trueline.space_inside_range"));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 15, "ids are unique");
    assert!(ids.iter().all(|id| id.starts_with("trueline.")));
}

#[test]
fn builtins_use_default_flags() {
    let registry = CommandRegistry::init();
    for id in registry.ids() {
        let command = registry.get(id).unwrap();
        assert_eq!(command.flags(), CommandFlags::REGISTER | CommandFlags::UNDO);
        assert!(!command.label().is_empty());
    }
}

#[test]
fn teardown_unregisters_everything() {
    let mut registry = CommandRegistry::init();
    registry.teardown();
    assert!(registry.is_empty());
    assert!(registry.get("trueline.align_objects").is_none());
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = CommandRegistry::new();
    registry
        .register(Box::new(SnapToIncrement::default()))
        .unwrap();
    let err = registry
        .register(Box::new(SnapToIncrement::default()))
        .unwrap_err();
    assert!(matches!(err, OpError::AlreadyRegistered("trueline.snap_to_increment")));
    assert_eq!(registry.len(), 1);
}

#[test]
fn unregister_keeps_later_lookups_valid() {
    let mut registry = CommandRegistry::init();
    let removed = registry.unregister("trueline.align_mesh_vertices").unwrap();
    assert_eq!(removed.id(), "trueline.align_mesh_vertices");
    assert_eq!(registry.len(), 14);
    assert!(registry.unregister("trueline.align_mesh_vertices").is_none());

    let later = registry.get("trueline.space_inside_range").unwrap();
    assert_eq!(later.id(), "trueline.space_inside_range");
    let earlier = registry.get("trueline.align_objects").unwrap();
    assert_eq!(earlier.id(), "trueline.align_objects");
}

#[test]
fn invoke_unknown_id_fails() {
    init_tracing();
    let registry = CommandRegistry::init();
    let mut scene = MemoryScene::new();
    let err = registry.invoke("trueline.nope", &mut scene).unwrap_err();
    assert!(matches!(err, OpError::UnknownCommand(ref id) if id == "trueline.nope"));
}

#[test]
fn invoke_runs_registered_command() {
    init_tracing();
    let registry = CommandRegistry::init();
    let mut scene = MemoryScene::new();
    scene.add_box(DVec3::new(1.04, 0.0, 0.0), DVec3::ONE);

    let outcome = registry
        .invoke("trueline.snap_to_increment", &mut scene)
        .unwrap();

    assert_eq!(outcome, Outcome::Finished);
    assert_close(scene.objects[0].location.x, 1.0);
}

#[test]
fn invoke_with_failed_poll_is_cancelled() {
    init_tracing();
    let registry = CommandRegistry::init();
    let mut scene = MemoryScene::new();
    let outcome = registry
        .invoke("trueline.distribute_objects", &mut scene)
        .unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
}
