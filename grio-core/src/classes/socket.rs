/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{from_gboolean, to_gboolean, ErrorSlot};

use crate::classes::{cancellable_arg, declare_class, Cancellable, IoStream, Object};
use crate::meta::{arg_string, error::GlibError};
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// High-level helper for making socket connections.
    SocketClient: Object {
        sys: gio_sys::GSocketClient,
        native: "GSocketClient",
        get_type: gio_sys::g_socket_client_get_type,
        inherits: [Object],
    }
}

declare_class! {
    /// A connected socket, as an [`IoStream`].
    SocketConnection: IoStream {
        sys: gio_sys::GSocketConnection,
        native: "GSocketConnection",
        get_type: gio_sys::g_socket_connection_get_type,
        inherits: [IoStream, Object],
    }
}

impl SocketClient {
    /// [transfer-full] `g_socket_client_new`
    pub fn new() -> Result<Obj<SocketClient>> {
        let ptr = unsafe { gio_sys::g_socket_client_new() };
        unsafe { Obj::returned_full(ptr, "g_socket_client_new") }
    }
}

pub trait SocketClientExt {
    /// Connects to `host_and_port` (e.g. `"example.org:80"`, falling back to
    /// `default_port` if none is given). Blocks per the native contract.
    ///
    /// [transfer-full] return: the connection is adopted.
    fn connect_to_host(
        &self,
        host_and_port: &str,
        default_port: u16,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<Obj<SocketConnection>>;

    /// Timeout in seconds; 0 means none.
    fn timeout(&self) -> u32;
    fn set_timeout(&self, seconds: u32);

    fn tls(&self) -> bool;
    fn set_tls(&self, tls: bool);
}

impl<T: Inherits<SocketClient>> SocketClientExt for Obj<T> {
    fn connect_to_host(
        &self,
        host_and_port: &str,
        default_port: u16,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<Obj<SocketConnection>> {
        let c_host = arg_string(host_and_port)?;
        let mut error = ErrorSlot::new();
        let ptr = unsafe {
            gio_sys::g_socket_client_connect_to_host(
                self.sys_as::<SocketClient>(),
                c_host.as_ptr(),
                default_port,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if ptr.is_null() {
            return Err(GlibError::from_slot(error, "g_socket_client_connect_to_host"));
        }
        GlibError::expect_clear(error, "g_socket_client_connect_to_host")?;
        unsafe { Obj::returned_full(ptr, "g_socket_client_connect_to_host") }
    }

    fn timeout(&self) -> u32 {
        unsafe { gio_sys::g_socket_client_get_timeout(self.sys_as::<SocketClient>()) }
    }

    fn set_timeout(&self, seconds: u32) {
        unsafe { gio_sys::g_socket_client_set_timeout(self.sys_as::<SocketClient>(), seconds) }
    }

    fn tls(&self) -> bool {
        from_gboolean(unsafe { gio_sys::g_socket_client_get_tls(self.sys_as::<SocketClient>()) })
    }

    fn set_tls(&self, tls: bool) {
        unsafe { gio_sys::g_socket_client_set_tls(self.sys_as::<SocketClient>(), to_gboolean(tls)) }
    }
}

pub trait SocketConnectionExt {
    fn is_connected(&self) -> bool;
}

impl<T: Inherits<SocketConnection>> SocketConnectionExt for Obj<T> {
    fn is_connected(&self) -> bool {
        from_gboolean(unsafe {
            gio_sys::g_socket_connection_is_connected(self.sys_as::<SocketConnection>())
        })
    }
}
