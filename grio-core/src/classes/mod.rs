/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The wrapped class surface.
//!
//! One marker type per native class, declared with `declare_class!`. Constructor adapters
//! live in inherent `impl` blocks on the marker type; method forwarders live in `*Ext`
//! extension traits implemented for `Obj<T>` with `T: Inherits<ThatClass>`, so subclasses
//! inherit them without conversions.
//!
//! Transfer rules are annotated on every adapter and forwarder: *transfer-full* returns
//! are adopted, *transfer-none* returns are borrowed, *transfer-container* returns copy
//! the elements out and release the container. Asynchronous native pairs are exposed as
//! the same `*_async`/`*_finish` pair, with the raw C callback passed straight through.

mod macros;

mod application;
mod cancellable;
mod dbus;
mod io_stream;
mod memory_streams;
mod menu;
mod net_address;
mod object;
mod socket;
mod stream_filters;
mod streams;
mod subprocess;
mod tls;

pub(crate) use macros::declare_class;

pub use application::Application;
pub use cancellable::{Cancellable, CancellableExt};
pub use dbus::{DBusConnection, DBusConnectionExt};
pub use io_stream::{IoStream, IoStreamExt};
pub use memory_streams::{
    MemoryInputStream, MemoryInputStreamExt, MemoryOutputStream, MemoryOutputStreamExt,
};
pub use menu::{Menu, MenuExt, MenuItem, MenuItemExt, MenuModel, MenuModelExt};
pub use net_address::{InetAddress, InetAddressExt, Resolver, ResolverExt};
pub use object::Object;
pub use socket::{SocketClient, SocketClientExt, SocketConnection, SocketConnectionExt};
pub use stream_filters::{
    BufferedInputStream, BufferedInputStreamExt, DataInputStream, DataInputStreamExt,
    FilterInputStream, FilterInputStreamExt,
};
pub use streams::{InputStream, InputStreamExt, OutputStream, OutputStreamExt};
pub use subprocess::{Subprocess, SubprocessExt};
pub use tls::{TlsCertificate, TlsCertificateExt};

pub use application::ApplicationExt;

pub(crate) use cancellable::cancellable_arg;
