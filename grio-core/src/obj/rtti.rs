/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi as sys;

use crate::obj::GioClass;

/// Object runtime type information, obtained at creation time.
///
/// Stores the runtime type tag the instance carried when the wrapper was constructed.
/// The native type of an object never changes, so this can be cached for the wrapper's
/// whole lifetime and used for sanity checks without further FFI calls.
#[derive(Clone, Debug)]
pub struct ObjectRtti {
    gtype: sys::GType,
}

impl ObjectRtti {
    /// Reads the runtime type of a live instance.
    ///
    /// # Safety
    /// `ptr` must point to a live native object.
    #[inline]
    pub unsafe fn of_instance(ptr: *const gobject_sys::GObject) -> Self {
        Self {
            gtype: unsafe { sys::instance_type(ptr) },
        }
    }

    #[inline]
    pub fn gtype(&self) -> sys::GType {
        self.gtype
    }

    /// Validates that the recorded runtime type matches or inherits from `T`.
    ///
    /// # Panics (debug)
    /// If the stored type does not inherit from `T`.
    #[inline]
    pub fn check_type<T: GioClass>(&self) {
        debug_assert!(
            sys::type_is_a(self.gtype, T::static_type()),
            "object of type {} accessed as incompatible class {}",
            sys::type_name(self.gtype),
            T::class_name(),
        );
    }
}
