/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{from_gboolean, opt_string_from_glib_none, ErrorSlot};

use crate::classes::{cancellable_arg, declare_class, Cancellable, Object};
use crate::meta::error::GlibError;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// A connection to a D-Bus message bus.
    ///
    /// Message and method-call payloads (GVariant) are outside this wrapper layer; the
    /// surface here covers connection lifecycle only.
    DBusConnection: Object {
        sys: gio_sys::GDBusConnection,
        native: "GDBusConnection",
        get_type: gio_sys::g_dbus_connection_get_type,
        inherits: [Object],
    }
}

impl DBusConnection {
    /// [transfer-full] `g_bus_get_sync` — connects to a well-known bus. Blocks.
    pub fn bus_get_sync(
        bus_type: gio_sys::GBusType,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<Obj<DBusConnection>> {
        let mut error = ErrorSlot::new();
        let ptr = unsafe {
            gio_sys::g_bus_get_sync(bus_type, cancellable_arg(cancellable), error.as_out())
        };

        if ptr.is_null() {
            return Err(GlibError::from_slot(error, "g_bus_get_sync"));
        }
        GlibError::expect_clear(error, "g_bus_get_sync")?;
        unsafe { Obj::returned_full(ptr, "g_bus_get_sync") }
    }
}

pub trait DBusConnectionExt {
    fn is_closed(&self) -> bool;

    /// [transfer-none] string return, copied. `None` for peer-to-peer connections.
    fn unique_name(&self) -> Option<String>;

    /// Flushes outgoing messages. Blocks.
    fn flush_sync(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    /// Closes the connection. Blocks.
    fn close_sync(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;
}

impl<T: Inherits<DBusConnection>> DBusConnectionExt for Obj<T> {
    fn is_closed(&self) -> bool {
        from_gboolean(unsafe {
            gio_sys::g_dbus_connection_is_closed(self.sys_as::<DBusConnection>())
        })
    }

    fn unique_name(&self) -> Option<String> {
        let ptr =
            unsafe { gio_sys::g_dbus_connection_get_unique_name(self.sys_as::<DBusConnection>()) };
        unsafe { opt_string_from_glib_none(ptr) }
    }

    fn flush_sync(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_dbus_connection_flush_sync(
                self.sys_as::<DBusConnection>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_dbus_connection_flush_sync"));
        }
        GlibError::expect_clear(error, "g_dbus_connection_flush_sync")
    }

    fn close_sync(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_dbus_connection_close_sync(
                self.sys_as::<DBusConnection>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_dbus_connection_close_sync"));
        }
        GlibError::expect_clear(error, "g_dbus_connection_close_sync")
    }
}
