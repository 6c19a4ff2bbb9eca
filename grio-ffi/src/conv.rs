/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversions between Rust values and their C representations.
//!
//! Naming follows the GLib transfer annotations: `*_full` takes ownership of the
//! native allocation (and frees it), `*_none` copies without taking ownership.

use std::ffi::{c_char, CStr, CString};

use crate::{gboolean, gpointer, GFALSE, GTRUE};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Booleans

#[inline]
pub fn from_gboolean(b: gboolean) -> bool {
    b != GFALSE
}

#[inline]
pub fn to_gboolean(b: bool) -> gboolean {
    if b { GTRUE } else { GFALSE }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Strings

/// Copies a NUL-terminated C string and releases the native allocation (transfer-full).
///
/// # Safety
/// `ptr` must be a valid NUL-terminated string allocated by GLib, and must not be used afterwards.
pub unsafe fn string_from_glib_full(ptr: *mut c_char) -> String {
    debug_assert!(!ptr.is_null(), "string_from_glib_full: null pointer");

    let copy = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    unsafe { glib_sys::g_free(ptr as gpointer) };
    copy
}

/// Copies a NUL-terminated C string without taking ownership (transfer-none).
///
/// # Safety
/// `ptr` must be a valid NUL-terminated string, alive for the duration of the call.
pub unsafe fn string_from_glib_none(ptr: *const c_char) -> String {
    debug_assert!(!ptr.is_null(), "string_from_glib_none: null pointer");

    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Like [`string_from_glib_none`], but maps null to `None`.
///
/// # Safety
/// If non-null, `ptr` must be a valid NUL-terminated string, alive for the duration of the call.
pub unsafe fn opt_string_from_glib_none(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { string_from_glib_none(ptr) })
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// String arrays (char**)

/// Owned backing storage for a NULL-terminated `char**` argument.
///
/// The C array borrows from this value; it must outlive the native call it is passed to.
/// Typical use:
/// ```no_run
/// # use grio_ffi::CStrv;
/// let argv = CStrv::new(&["echo", "hello"]).unwrap();
/// // pass argv.as_ptr() to the native function, keep `argv` alive across the call
/// ```
pub struct CStrv {
    // Storage must not move or reallocate while `ptrs` borrows from it.
    _storage: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CStrv {
    /// Builds a NULL-terminated pointer array over copies of `items`.
    ///
    /// Fails if any item contains an interior NUL byte.
    pub fn new<S: AsRef<str>>(items: &[S]) -> Result<Self, std::ffi::NulError> {
        let storage: Vec<CString> = items
            .iter()
            .map(|s| CString::new(s.as_ref()))
            .collect::<Result<_, _>>()?;

        let mut ptrs: Vec<*const c_char> = storage.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(std::ptr::null());

        Ok(Self {
            _storage: storage,
            ptrs,
        })
    }

    /// The `char**` to pass to C. Valid as long as `self` is alive.
    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }

    /// Number of entries, excluding the NULL terminator.
    pub fn len(&self) -> usize {
        self.ptrs.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Linked lists (GList)

/// Drains a `GList`, mapping each element through `wrap`, then frees the list cells.
///
/// This implements the *transfer-container* rules: the container is always released here,
/// while element ownership is decided by `wrap` (adopt for transfer-full lists, add a
/// reference for transfer-none lists).
///
/// # Safety
/// `list` must be a valid `GList` or null; element pointers must be valid inputs for `wrap`.
pub unsafe fn collect_glist_container<R>(
    list: *mut glib_sys::GList,
    mut wrap: impl FnMut(gpointer) -> R,
) -> Vec<R> {
    let mut out = Vec::new();

    let mut cursor = list;
    while !cursor.is_null() {
        let cell = unsafe { &*cursor };
        out.push(wrap(cell.data));
        cursor = cell.next;
    }

    if !list.is_null() {
        unsafe { glib_sys::g_list_free(list) };
    }
    out
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gboolean_roundtrip() {
        assert!(!from_gboolean(GFALSE));
        assert!(from_gboolean(GTRUE));

        // Any non-zero value is truthy, like in C.
        assert!(from_gboolean(17));

        assert_eq!(to_gboolean(false), GFALSE);
        assert_eq!(to_gboolean(true), GTRUE);
    }

    #[test]
    fn strv_rejects_interior_nul() {
        assert!(CStrv::new(&["ok", "bad\0arg"]).is_err());
    }

    #[test]
    fn empty_strv_is_just_terminator() {
        let strv = CStrv::new::<&str>(&[]).unwrap();
        assert_eq!(strv.len(), 0);
        assert!(strv.is_empty());
        unsafe {
            assert!((*strv.as_ptr()).is_null());
        }
    }

    proptest! {
        #[test]
        fn strv_layout(items in proptest::collection::vec("[^\0]{0,16}", 0..8)) {
            let strv = CStrv::new(&items).unwrap();
            prop_assert_eq!(strv.len(), items.len());

            unsafe {
                for (i, item) in items.iter().enumerate() {
                    let entry = *strv.as_ptr().add(i);
                    prop_assert!(!entry.is_null());
                    let back = std::ffi::CStr::from_ptr(entry).to_str().unwrap();
                    prop_assert_eq!(back, item.as_str());
                }

                // NULL terminator directly after the last entry.
                prop_assert!((*strv.as_ptr().add(items.len())).is_null());
            }
        }
    }
}
