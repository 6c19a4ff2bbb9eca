/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{collect_glist_container, from_gboolean, string_from_glib_full, ErrorSlot};

use crate::classes::{cancellable_arg, declare_class, Cancellable, Object};
use crate::meta::{arg_string, error::GlibError};
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// An IPv4/IPv6 address.
    InetAddress: Object {
        sys: gio_sys::GInetAddress,
        native: "GInetAddress",
        get_type: gio_sys::g_inet_address_get_type,
        inherits: [Object],
    }
}

declare_class! {
    /// Hostname resolution. Obtained through the process-wide default accessor; the
    /// wrapper holds no such state itself.
    Resolver: Object {
        sys: gio_sys::GResolver,
        native: "GResolver",
        get_type: gio_sys::g_resolver_get_type,
        inherits: [Object],
    }
}

impl InetAddress {
    /// [transfer-full] `g_inet_address_new_from_string`
    ///
    /// The native constructor returns null *without setting an error* for a string that
    /// does not parse; that surfaces as the synthetic null-return failure.
    pub fn from_string(address: &str) -> Result<Obj<InetAddress>> {
        let c_addr = arg_string(address)?;
        let ptr = unsafe { gio_sys::g_inet_address_new_from_string(c_addr.as_ptr()) };
        unsafe { Obj::returned_full(ptr, "g_inet_address_new_from_string") }
    }

    /// [transfer-full] `g_inet_address_new_loopback`
    pub fn loopback(family: gio_sys::GSocketFamily) -> Result<Obj<InetAddress>> {
        let ptr = unsafe { gio_sys::g_inet_address_new_loopback(family) };
        unsafe { Obj::returned_full(ptr, "g_inet_address_new_loopback") }
    }
}

pub trait InetAddressExt {
    /// [transfer-full] string return, copied out and released here.
    fn to_address_string(&self) -> Result<String>;

    fn family(&self) -> gio_sys::GSocketFamily;

    fn is_loopback(&self) -> bool;
}

impl<T: Inherits<InetAddress>> InetAddressExt for Obj<T> {
    fn to_address_string(&self) -> Result<String> {
        let ptr = unsafe { gio_sys::g_inet_address_to_string(self.sys_as::<InetAddress>()) };
        if ptr.is_null() {
            return Err(GlibError::null_returned("g_inet_address_to_string"));
        }
        Ok(unsafe { string_from_glib_full(ptr) })
    }

    fn family(&self) -> gio_sys::GSocketFamily {
        unsafe { gio_sys::g_inet_address_get_family(self.sys_as::<InetAddress>()) }
    }

    fn is_loopback(&self) -> bool {
        from_gboolean(unsafe {
            gio_sys::g_inet_address_get_is_loopback(self.sys_as::<InetAddress>())
        })
    }
}

impl Resolver {
    /// [transfer-full] `g_resolver_get_default` — the process-wide default resolver.
    /// The accessor hands out a reference of its own, which the wrapper adopts.
    pub fn default() -> Result<Obj<Resolver>> {
        let ptr = unsafe { gio_sys::g_resolver_get_default() };
        unsafe { Obj::returned_full(ptr, "g_resolver_get_default") }
    }
}

pub trait ResolverExt {
    /// Resolves `hostname` to a list of addresses. Blocks per the native contract.
    ///
    /// [transfer-full] container return: each element is adopted, the list cells are
    /// released here.
    fn lookup_by_name(
        &self,
        hostname: &str,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<Vec<Obj<InetAddress>>>;
}

impl<T: Inherits<Resolver>> ResolverExt for Obj<T> {
    fn lookup_by_name(
        &self,
        hostname: &str,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<Vec<Obj<InetAddress>>> {
        let c_host = arg_string(hostname)?;
        let mut error = ErrorSlot::new();
        let list = unsafe {
            gio_sys::g_resolver_lookup_by_name(
                self.sys_as::<Resolver>(),
                c_host.as_ptr(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if list.is_null() {
            return Err(GlibError::from_slot(error, "g_resolver_lookup_by_name"));
        }
        GlibError::expect_clear(error, "g_resolver_lookup_by_name")?;

        // SAFETY: the list and its elements were just transferred to us; each element is
        // a live GInetAddress with one owned reference, adopted here.
        let addresses = unsafe {
            collect_glist_container(list, |elem| Obj::<InetAddress>::adopt_unchecked(elem.cast()))
        };
        Ok(addresses)
    }
}
