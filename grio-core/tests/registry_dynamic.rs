/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Class registration and runtime-type resolution.

use grio_core::classes::{
    InputStream, MemoryInputStream, Object, Subprocess, SubprocessExt,
};
use grio_core::obj::{GioClass, Obj};
use grio_core::registry;

#[test]
fn bootstrap_registers_the_whole_ancestry() {
    let gtype = MemoryInputStream::static_type();

    let info = registry::lookup(gtype).expect("registered by bootstrap");
    assert_eq!(info.rust_name, "MemoryInputStream");
    assert_eq!(info.native_name, "GMemoryInputStream");
    assert_eq!(info.parent, InputStream::static_type());

    // Bases registered before the derived class.
    assert!(registry::is_registered(InputStream::static_type()));
    assert!(registry::is_registered(Object::static_type()));
}

#[test]
fn bootstrap_is_idempotent() {
    let first = MemoryInputStream::static_type();
    let second = MemoryInputStream::static_type();
    assert_eq!(first, second);
    assert!(registry::is_registered(first));
}

#[test]
fn exact_runtime_type_resolves_to_its_class() {
    let stream: Obj<InputStream> = MemoryInputStream::from_data(b"x").expect("stream").upcast();

    let info = stream.dynamic_class();
    assert_eq!(info.rust_name, "MemoryInputStream");
    assert_eq!(info.gtype, stream.native_type());
}

#[test]
fn inherits_check_accepts_ancestors_only() {
    assert!(MemoryInputStream::inherits::<InputStream>());
    assert!(MemoryInputStream::inherits::<Object>());
    assert!(MemoryInputStream::inherits::<MemoryInputStream>());
    assert!(!InputStream::inherits::<MemoryInputStream>());
}

#[test]
fn unregistered_runtime_type_degrades_to_nearest_ancestor() {
    // Platform-specific pipe streams have no wrapper class of their own; resolution
    // walks up to the registered InputStream base.
    let child = Subprocess::new(
        &["/bin/sh", "-c", "printf dynamic"],
        gio_sys::G_SUBPROCESS_FLAGS_STDOUT_PIPE,
    )
    .expect("spawn");

    let stdout = child.stdout_pipe().expect("stdout pipe requested at spawn");
    assert_ne!(stdout.native_type(), InputStream::static_type());

    let info = stdout.dynamic_class();
    assert_eq!(info.rust_name, "InputStream");

    child.wait_check(None).expect("clean exit");
}

#[test]
fn downcast_to_unrelated_registered_class_fails() {
    let child = Subprocess::new(
        &["/bin/true"],
        gio_sys::G_SUBPROCESS_FLAGS_NONE,
    )
    .expect("spawn");
    let object: Obj<Object> = child.clone().upcast();

    assert!(object.try_cast::<MemoryInputStream>().is_err());
    child.wait(None).expect("wait");
}
