/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use grio_ffi as sys;
use grio_ffi::out;

use crate::obj::rtti::ObjectRtti;
use crate::obj::{GioClass, Inherits};

/// Low-level handle for native object pointers.
///
/// This should not be used directly; use [`Obj<T>`](super::Obj), which upholds the
/// non-null invariant. `RawObj` allows the null state so that failed constructions and
/// moved-out casts have a representation.
///
/// Invariant: if the pointer is non-null, this handle owns exactly one strong reference
/// on the object, released in `Drop`.
#[repr(C)]
pub(crate) struct RawObj<T: GioClass> {
    ptr: *mut gobject_sys::GObject,

    // Must not be changed after initialization.
    rtti: Option<ObjectRtti>,

    _marker: PhantomData<*mut T>,
}

impl<T: GioClass> RawObj<T> {
    /// Initializes this `RawObj<T>` from an object pointer **without touching the
    /// reference counter**: the caller's own reference is adopted (transfer-full).
    ///
    /// If `ptr` is null, the returned handle has the null state.
    ///
    /// # Safety
    /// `ptr` must be a valid object pointer or null. If non-null, the caller must own a
    /// strong reference that it hereby transfers.
    pub unsafe fn from_sys_weak(ptr: *mut gobject_sys::GObject) -> Self {
        // Bootstrap: the class (and transitively its ancestors) must be in the registry
        // before any instance of it is observable.
        T::static_type();

        let rtti = if ptr.is_null() {
            None
        } else {
            Some(unsafe { ObjectRtti::of_instance(ptr) })
        };

        Self {
            ptr,
            rtti,
            _marker: PhantomData,
        }
    }

    /// Initializes this `RawObj<T>` from an object pointer as a **borrow**, adding a
    /// strong reference of its own (transfer-none).
    ///
    /// # Safety
    /// `ptr` must be a valid object pointer or null.
    pub unsafe fn from_sys_strong(ptr: *mut gobject_sys::GObject) -> Self {
        unsafe { Self::from_sys_weak(ptr) }.with_inc_refcount()
    }

    /// Returns `self` with an additional strong reference taken.
    fn with_inc_refcount(self) -> Self {
        if !self.ptr.is_null() {
            // The native counter is atomic; see concurrency notes on Obj.
            unsafe { gobject_sys::g_object_ref(self.ptr) };
        }
        self
    }

    pub fn null() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
            rtti: None,
            _marker: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// The untyped object pointer. No ownership change.
    pub fn obj_sys(&self) -> *mut gobject_sys::GObject {
        self.ptr
    }

    /// The pointer, typed as the `-sys` struct of `Base`.
    ///
    /// Single-inheritance C layout: the instance pointer of a class is simultaneously a
    /// valid instance pointer of each of its base classes, at the same address.
    pub fn sys_as<Base>(&self) -> *mut Base::Sys
    where
        Base: GioClass,
        T: Inherits<Base>,
    {
        self.check_rtti("sys_as");
        self.ptr.cast()
    }

    /// Runtime type tag recorded at construction, or [`sys::TYPE_INVALID`] for null handles.
    pub fn gtype(&self) -> sys::GType {
        self.rtti.as_ref().map_or(sys::TYPE_INVALID, ObjectRtti::gtype)
    }

    /// Returns `Ok(cast_handle)` on success, `Err(self)` on error.
    ///
    /// Ownership moves with the handle; the reference count is unchanged either way. The
    /// pointer is also unchanged: GObject casts are checked reinterpretations, not
    /// pointer adjustments.
    pub fn owned_cast<U>(mut self) -> Result<RawObj<U>, Self>
    where
        U: GioClass,
    {
        // Null can be cast to anything.
        if self.is_null() {
            return Ok(RawObj::null());
        }

        if !sys::type_is_a(self.gtype(), U::static_type()) {
            return Err(self);
        }

        let cast = RawObj::<U> {
            ptr: self.ptr,
            rtti: self.rtti.take(),
            _marker: PhantomData,
        };

        // The reference moved into `cast`; self must not release it.
        std::mem::forget(self);
        Ok(cast)
    }

    /// Current native reference count. Diagnostic only; the value is stale the moment it
    /// is read if other threads hold references.
    pub fn ref_count(&self) -> usize {
        if self.ptr.is_null() {
            return 0;
        }
        unsafe { (*self.ptr).ref_count as usize }
    }

    /// Verify that the handle is non-null and (in debug builds) of a type compatible with `T`.
    pub fn check_rtti(&self, method_name: &'static str) {
        debug_assert!(
            !self.ptr.is_null(),
            "{}::{method_name}: cannot access null object handle",
            T::class_name(),
        );

        if let Some(rtti) = &self.rtti {
            rtti.check_type::<T>();
        }
    }
}

/// Releases exactly one strong reference on the native object. If this was the last
/// remaining reference, the native library destroys the object.
impl<T: GioClass> Drop for RawObj<T> {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }

        out!("RawObj::drop:  {self:?}");
        unsafe { gobject_sys::g_object_unref(self.ptr) };
    }
}

impl<T: GioClass> Clone for RawObj<T> {
    fn clone(&self) -> Self {
        out!("RawObj::clone: {self:?}");

        if self.is_null() {
            Self::null()
        } else {
            let copy = Self {
                ptr: self.ptr,
                rtti: self.rtti.clone(),
                _marker: PhantomData,
            };
            copy.with_inc_refcount()
        }
    }
}

impl<T: GioClass> fmt::Debug for RawObj<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "{}(null)", T::class_name())
        } else {
            write!(
                f,
                "{}({:p}, dyn={})",
                T::class_name(),
                self.ptr,
                sys::type_name(self.gtype())
            )
        }
    }
}
