/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low-level FFI layer of grio.
//!
//! Re-exports the raw `-sys` crates and provides the small amount of glue that every
//! wrapper needs: pointer/string/container marshalling, the pending-error slot for
//! `GError**` out-parameters, and GType introspection helpers.
//!
//! Nothing in this crate owns policy. Ownership rules (adopt vs. borrow, registry
//! lookups, error taxonomy) live in `grio-core`; this crate only makes the raw calls
//! expressible without repeating unsafe boilerplate at every call site.

// Re-export sys crates under their conventional short names.
pub use gio_sys as gio;
pub use glib_sys as glib;
pub use gobject_sys as gobject;

mod conv;
mod error;
mod gtype;

#[macro_use]
mod toolbox;

pub use conv::*;
pub use error::{ErrorSlot, NativeError};
pub use gtype::*;
pub use toolbox::*;

/// Commonly used scalar aliases at the FFI boundary.
pub use glib_sys::{gboolean, gpointer, GQuark, GType};

/// `TRUE`/`FALSE` as the C library defines them.
pub use glib_sys::{GFALSE, GTRUE};
