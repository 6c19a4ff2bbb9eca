/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! GType introspection helpers.
//!
//! The type system itself lives in the native library; these helpers only read from it.

use crate::{from_gboolean, GType};

/// GType value representing "no type". Parent walks terminate here.
pub const TYPE_INVALID: GType = 0;

/// Reads the runtime type tag of a live object instance.
///
/// # Safety
/// `ptr` must point to a live `GObject` (or any `GTypeInstance`).
pub unsafe fn instance_type(ptr: *const gobject_sys::GObject) -> GType {
    let instance = ptr as *const gobject_sys::GTypeInstance;
    unsafe { (*(*instance).g_class).g_type }
}

/// Whether an instance's runtime type is `gtype` or derives from it.
///
/// # Safety
/// `ptr` must point to a live object instance.
pub unsafe fn instance_is_a(ptr: *const gobject_sys::GObject, gtype: GType) -> bool {
    let instance = ptr as *mut gobject_sys::GTypeInstance;
    from_gboolean(unsafe { gobject_sys::g_type_check_instance_is_a(instance, gtype) })
}

/// Whether `gtype` is equal to or derived from `ancestor`. Pure type-tag query, no instance needed.
pub fn type_is_a(gtype: GType, ancestor: GType) -> bool {
    from_gboolean(unsafe { gobject_sys::g_type_is_a(gtype, ancestor) })
}

/// The immediate parent type tag, or [`TYPE_INVALID`] at the root.
pub fn type_parent(gtype: GType) -> GType {
    unsafe { gobject_sys::g_type_parent(gtype) }
}

/// The native name registered for a type tag, e.g. `"GMemoryInputStream"`.
pub fn type_name(gtype: GType) -> String {
    let name = unsafe { gobject_sys::g_type_name(gtype) };
    if name.is_null() {
        format!("<unknown type {gtype}>")
    } else {
        unsafe { crate::string_from_glib_none(name) }
    }
}
