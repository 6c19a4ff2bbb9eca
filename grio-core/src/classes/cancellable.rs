/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::from_gboolean;

use crate::classes::{declare_class, Object};
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// Cancellation token for blocking and asynchronous operations.
    ///
    /// The wrapper carries these through as opaque native objects; cancellation semantics
    /// are entirely those of the native functions that accept them.
    Cancellable: Object {
        sys: gio_sys::GCancellable,
        native: "GCancellable",
        get_type: gio_sys::g_cancellable_get_type,
        inherits: [Object],
    }
}

impl Cancellable {
    /// [transfer-full] `g_cancellable_new`
    pub fn new() -> Result<Obj<Cancellable>> {
        let ptr = unsafe { gio_sys::g_cancellable_new() };
        unsafe { Obj::returned_full(ptr, "g_cancellable_new") }
    }
}

pub trait CancellableExt {
    fn is_cancelled(&self) -> bool;
    fn cancel(&self);
    fn reset(&self);
}

impl<T: Inherits<Cancellable>> CancellableExt for Obj<T> {
    fn is_cancelled(&self) -> bool {
        from_gboolean(unsafe { gio_sys::g_cancellable_is_cancelled(self.sys_as::<Cancellable>()) })
    }

    fn cancel(&self) {
        unsafe { gio_sys::g_cancellable_cancel(self.sys_as::<Cancellable>()) }
    }

    fn reset(&self) {
        unsafe { gio_sys::g_cancellable_reset(self.sys_as::<Cancellable>()) }
    }
}

/// Nullable cancellable argument: absent tokens become a null pointer (the native
/// "not cancellable" convention).
pub(crate) fn cancellable_arg(cancellable: Option<&Obj<Cancellable>>) -> *mut gio_sys::GCancellable {
    cancellable.map_or(std::ptr::null_mut(), Obj::native)
}
