/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Class registry: the append-only mapping from native type tags to wrapper classes.
//!
//! Each wrapper class registers itself exactly once, through its
//! [`static_type()`][crate::obj::GioClass::static_type] bootstrap hook, before any
//! instance of the class can be observed. Afterwards the registry is read-mostly:
//! lookups resolve the most-derived registered wrapper class for a runtime type tag,
//! falling back along the native parent chain. A missing registration is never an error.

mod class;

pub use class::{ClassInfo, is_registered, lookup, lookup_nearest, register};
