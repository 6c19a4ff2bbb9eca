/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The **grio** library implements safe Rust wrappers over the GObject/GIO C API.
//!
//! # Type categories
//!
//! GLib is written in C and manages object lifetimes with manual reference counting.
//! This crate distinguishes two kinds of types:
//!
//! 1. **Value types**: plain Rust values such as `i32`, `bool`, `String` and `Vec<u8>`.
//!    Native strings and buffers are copied into owned Rust values at the boundary, so
//!    no GLib allocation ever outlives the call that produced it.
//!
//! 2. **Reference-counted objects**: [`Obj<T>`][crate::obj::Obj], where `T` marks a
//!    wrapped class such as [`MemoryInputStream`][crate::classes::MemoryInputStream].
//!    Every `Obj<T>` owns exactly one strong reference on the native instance.
//!    `Clone` takes an additional reference, `Drop` releases one; the native object is
//!    destroyed when the last reference (from Rust or from C) goes away. Two clones
//!    share the same underlying instance, so changes through one are visible through
//!    the other.
//!
//! # Transfer rules
//!
//! Native functions hand out pointers under one of three ownership conventions, and
//! every wrapper method documents which one it bridges:
//!
//! * *transfer-full*: the caller receives a reference. The wrapper adopts it without
//!   touching the count.
//! * *transfer-none*: the caller borrows. The wrapper takes its own reference so the
//!   returned `Obj<T>` is independently owned.
//! * *transfer-container*: the caller owns the container but borrows the elements.
//!   The wrapper copies the elements out (taking a reference each) and frees the
//!   container.
//!
//! # Ergonomics and panics
//!
//! Fallible native calls return [`Result`][crate::Result]; errors reported through
//! `GError` out-parameters arrive as [`GlibError`][crate::GlibError] with their native
//! domain and code intact. Downcasts come in two flavors:
//! [`try_cast()`][crate::obj::Obj::try_cast] returns the original wrapper on failure,
//! while [`cast()`][crate::obj::Obj::cast] panics with both class names in the message.
//! As in the native API, methods of a class are callable on every subclass; the `*Ext`
//! extension traits in [`classes`] make that work through the
//! [`Inherits`][crate::obj::Inherits] bound.
//!
//! # Thread safety
//!
//! GObject reference counts are atomic, but most GIO classes are not otherwise
//! thread-safe. `Obj<T>` is deliberately neither `Send` nor `Sync`; keep each wrapper
//! on the thread that created it.

#[doc(inline)]
pub use grio_core::{classes, meta, obj, registry};

#[doc(hidden)]
pub use grio_core::sys;

pub use grio_core::{GlibError, Quark, Result};

/// Often-imported symbols.
pub mod prelude {
    pub use super::classes::{
        Application, BufferedInputStream, Cancellable, DBusConnection, DataInputStream,
        FilterInputStream, InetAddress, InputStream, IoStream, MemoryInputStream,
        MemoryOutputStream, Menu, MenuItem, MenuModel, Object, OutputStream, Resolver,
        SocketClient, SocketConnection, Subprocess, TlsCertificate,
    };
    pub use super::obj::{GioClass, Inherits, Obj};
    pub use super::{GlibError, Quark, Result};

    // Make trait methods available.
    pub use super::classes::{
        ApplicationExt as _, BufferedInputStreamExt as _, CancellableExt as _,
        DBusConnectionExt as _, DataInputStreamExt as _, FilterInputStreamExt as _,
        InetAddressExt as _, InputStreamExt as _, IoStreamExt as _, MemoryInputStreamExt as _,
        MemoryOutputStreamExt as _, MenuExt as _, MenuItemExt as _, MenuModelExt as _,
        OutputStreamExt as _, ResolverExt as _, SocketClientExt as _, SocketConnectionExt as _,
        SubprocessExt as _, TlsCertificateExt as _,
    };
}
