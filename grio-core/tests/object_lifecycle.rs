/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reference-count bridging, observed through the native counter on real objects.

use std::collections::HashSet;

use grio_core::classes::{InputStream, MemoryInputStream, MemoryOutputStream, Object};
use grio_core::obj::Obj;

fn sample_stream() -> Obj<MemoryInputStream> {
    MemoryInputStream::from_data(b"lifecycle").expect("in-memory stream")
}

#[test]
fn adopted_object_owns_single_reference() {
    let stream = sample_stream();
    assert_eq!(stream.ref_count(), 1);
}

#[test]
fn clone_and_drop_are_symmetric() {
    let stream = sample_stream();
    let twin = stream.clone();

    assert_eq!(stream.ref_count(), 2);
    assert_eq!(twin.ref_count(), 2);

    drop(twin);
    assert_eq!(stream.ref_count(), 1);
}

#[test]
fn clones_share_the_native_instance() {
    let stream = sample_stream();
    let twin = stream.clone();

    assert_eq!(stream, twin);
    assert_eq!(stream.native(), twin.native());
    assert_eq!(stream.native_object(), twin.native_object());
}

#[test]
fn borrowing_adds_an_independent_reference() {
    let stream = sample_stream();

    let borrowed = unsafe { Obj::<MemoryInputStream>::from_native_none(stream.native()) }
        .expect("borrow from live pointer");
    assert_eq!(stream.ref_count(), 2);

    drop(borrowed);
    assert_eq!(stream.ref_count(), 1);
}

#[test]
fn parallel_borrows_count_independently() {
    let stream = sample_stream();

    let first = unsafe { Obj::<MemoryInputStream>::from_native_none(stream.native()) }
        .expect("first borrow");
    let second = unsafe { Obj::<MemoryInputStream>::from_native_none(stream.native()) }
        .expect("second borrow");

    assert_eq!(stream.ref_count(), 3);
    assert_eq!(first, second);
    assert_eq!(first.native(), stream.native());

    drop(first);
    assert_eq!(stream.ref_count(), 2);
    drop(second);
    assert_eq!(stream.ref_count(), 1);
}

#[test]
fn adopting_null_is_an_invalid_argument() {
    let err = unsafe { Obj::<MemoryInputStream>::from_native_full(std::ptr::null_mut()) }
        .expect_err("null must not be adopted");
    assert!(err.is_invalid_argument());
    assert!(err.message().contains("MemoryInputStream"));
}

#[test]
fn borrowing_null_is_an_invalid_argument() {
    let err = unsafe { Obj::<MemoryInputStream>::from_native_none(std::ptr::null_mut()) }
        .expect_err("null must not be borrowed");
    assert!(err.is_invalid_argument());
}

#[test]
fn native_pointer_is_stable() {
    let stream = sample_stream();
    let before = stream.native();

    let _twin = stream.clone();
    let upcast: Obj<InputStream> = stream.clone().upcast();

    assert_eq!(stream.native(), before);
    assert_eq!(upcast.native_object(), before.cast());
}

#[test]
fn upcast_keeps_the_reference() {
    let stream = sample_stream();
    let keeper = stream.clone();
    assert_eq!(keeper.ref_count(), 2);

    let base: Obj<InputStream> = stream.upcast();
    assert_eq!(keeper.ref_count(), 2);
    assert_eq!(base.native_object(), keeper.native_object());
}

#[test]
fn downcast_recovers_the_runtime_class() {
    let base: Obj<InputStream> = sample_stream().upcast();

    let down = base
        .try_cast::<MemoryInputStream>()
        .expect("runtime type is MemoryInputStream");
    assert_eq!(down.ref_count(), 1);
}

#[test]
fn failed_downcast_returns_the_original() {
    let object: Obj<Object> = sample_stream().upcast();

    let back = object
        .try_cast::<MemoryOutputStream>()
        .expect_err("an input stream is no output stream");
    assert_eq!(back.ref_count(), 1);

    // The wrapper survives a failed attempt unharmed.
    let down = back.try_cast::<MemoryInputStream>().expect("still an input stream");
    assert_eq!(down.ref_count(), 1);
}

#[test]
#[should_panic(expected = "downcast")]
fn panicking_downcast_names_the_classes() {
    let object: Obj<Object> = sample_stream().upcast();
    let _ = object.cast::<MemoryOutputStream>();
}

#[test]
fn wrappers_hash_by_identity() {
    let stream = sample_stream();
    let other = sample_stream();

    let mut set = HashSet::new();
    set.insert(stream.clone());
    set.insert(stream.clone());
    set.insert(other);

    assert_eq!(set.len(), 2);
    assert!(set.contains(&stream));
}

#[test]
fn distinct_objects_compare_unequal() {
    let a = sample_stream();
    let b = sample_stream();
    assert_ne!(a, b);
}
