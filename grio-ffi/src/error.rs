/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ownership handling for `GError**` out-parameters.

use std::ffi::c_char;

use crate::{GQuark, string_from_glib_none};

/// Per-call slot for a native error out-parameter.
///
/// Created empty at the call site, passed via [`as_out()`](Self::as_out), and inspected
/// after the call. Whatever ends up in the slot is owned by it: taking the error out
/// transfers ownership to a [`NativeError`], and a slot dropped while still set frees
/// the native error, so no path leaks the `GError`.
pub struct ErrorSlot(*mut glib_sys::GError);

impl ErrorSlot {
    pub fn new() -> Self {
        Self(std::ptr::null_mut())
    }

    /// The `GError**` to pass to the native call.
    ///
    /// Must not be called once the slot is set; a second native call would overwrite
    /// (and leak) the first error.
    pub fn as_out(&mut self) -> *mut *mut glib_sys::GError {
        debug_assert!(self.0.is_null(), "ErrorSlot reused while still set");
        &mut self.0
    }

    pub fn is_set(&self) -> bool {
        !self.0.is_null()
    }

    /// Moves the error out of the slot, if one was set.
    pub fn take(&mut self) -> Option<NativeError> {
        let ptr = std::mem::replace(&mut self.0, std::ptr::null_mut());
        if ptr.is_null() {
            None
        } else {
            Some(NativeError(ptr))
        }
    }
}

impl Default for ErrorSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ErrorSlot {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { glib_sys::g_error_free(self.0) };
        }
    }
}

/// An owned native `GError`, freed on drop.
///
/// Accessors copy out of the native allocation; the error itself never crosses the FFI
/// boundary again.
pub struct NativeError(*mut glib_sys::GError);

impl NativeError {
    /// The error domain, an opaque tag interned by the native library.
    pub fn domain(&self) -> GQuark {
        // SAFETY: self.0 is non-null by construction (ErrorSlot::take).
        unsafe { (*self.0).domain }
    }

    /// The domain-specific error code.
    pub fn code(&self) -> i32 {
        unsafe { (*self.0).code }
    }

    /// Copy of the human-readable message.
    pub fn message(&self) -> String {
        let msg: *const c_char = unsafe { (*self.0).message };
        if msg.is_null() {
            String::new()
        } else {
            unsafe { string_from_glib_none(msg) }
        }
    }
}

impl Drop for NativeError {
    fn drop(&mut self) {
        unsafe { glib_sys::g_error_free(self.0) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_is_inert() {
        let mut slot = ErrorSlot::new();
        assert!(!slot.is_set());
        assert!(slot.take().is_none());
        // Dropping an empty slot must not call into the native library.
    }
}
