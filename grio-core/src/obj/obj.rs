/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use grio_ffi as sys;

use crate::meta::error::GlibError;
use crate::obj::{GioClass, Inherits, RawObj};
use crate::registry::{self, ClassInfo};
use crate::Result;

/// Smart pointer to objects owned by the native library.
///
/// `Obj<T>` never holds null objects; if you need nullability, use `Option<Obj<T>>`.
/// For its entire lifetime, the wrapper owns exactly one strong reference on the native
/// object: [`Clone`] adds one, [`Drop`] releases one. Two `Obj` values may point to the
/// same native object; each manages its own reference independently.
///
/// # Construction
///
/// Most values are obtained from the constructor adapters and method forwarders in
/// [`crate::classes`], which encode the correct transfer rule per native function. When
/// bridging with foreign code that hands out raw pointers, the transfer rule must be
/// supplied explicitly:
///
/// * [`from_native_full()`][Self::from_native_full] *adopts* a reference the caller owns
///   (transfer-full): the net reference-count change is zero.
/// * [`from_native_none()`][Self::from_native_none] *borrows*: a new reference is added
///   (transfer-none) and owned by the wrapper.
///
/// # Concurrency
///
/// Reference acquisition and release delegate to the native atomic counter, so wrapper
/// construction is safe against concurrent destruction of the same native object through
/// a *different* wrapper. The wrapper adds no locking beyond that; thread restrictions of
/// individual native classes pass through unchanged.
#[repr(transparent)]
pub struct Obj<T: GioClass> {
    raw: RawObj<T>,
}

impl<T: GioClass> Obj<T> {
    /// Adopts a caller-owned reference (transfer-full). The reference count is not changed.
    ///
    /// Fails with an *invalid argument* error if `ptr` is null; no reference is taken in
    /// that case.
    ///
    /// # Safety
    /// If non-null, `ptr` must point to a live instance of `T` (or a subclass), and the
    /// caller must own a strong reference that it hereby transfers.
    pub unsafe fn from_native_full(ptr: *mut T::Sys) -> Result<Self> {
        if ptr.is_null() {
            return Err(GlibError::invalid_argument(format!(
                "cannot adopt null pointer as {}",
                T::class_name()
            )));
        }
        Ok(unsafe { Self::adopt_unchecked(ptr) })
    }

    /// Borrows a pointer the caller does not own outright (transfer-none): adds one
    /// strong reference and adopts the result.
    ///
    /// Fails with an *invalid argument* error if `ptr` is null; no reference is taken in
    /// that case.
    ///
    /// # Safety
    /// If non-null, `ptr` must point to a live instance of `T` (or a subclass).
    pub unsafe fn from_native_none(ptr: *mut T::Sys) -> Result<Self> {
        if ptr.is_null() {
            return Err(GlibError::invalid_argument(format!(
                "cannot borrow null pointer as {}",
                T::class_name()
            )));
        }
        Ok(Self {
            raw: unsafe { RawObj::from_sys_strong(ptr.cast()) },
        })
    }

    /// Adoption without the null check, for forwarders that have already classified the
    /// return value.
    ///
    /// # Safety
    /// `ptr` must be non-null, live, an instance of `T`, with one owned reference
    /// transferred in.
    pub(crate) unsafe fn adopt_unchecked(ptr: *mut T::Sys) -> Self {
        Self {
            raw: unsafe { RawObj::from_sys_weak(ptr.cast()) },
        }
    }

    /// Wraps a transfer-full return value of `native_fn`.
    ///
    /// A null return is surfaced as a synthetic error naming the native function, per the
    /// "null when non-null expected" convention.
    ///
    /// # Safety
    /// `ptr` must be the just-returned value of `native_fn`, owned by the caller if
    /// non-null.
    pub(crate) unsafe fn returned_full(ptr: *mut T::Sys, native_fn: &'static str) -> Result<Self> {
        if ptr.is_null() {
            return Err(GlibError::null_returned(native_fn));
        }
        Ok(unsafe { Self::adopt_unchecked(ptr) })
    }

    /// Wraps a transfer-none return value of `native_fn` by borrowing it.
    ///
    /// # Safety
    /// `ptr` must be the just-returned value of `native_fn`; the callee retains its
    /// reference.
    pub(crate) unsafe fn returned_none(ptr: *mut T::Sys, native_fn: &'static str) -> Result<Self> {
        if ptr.is_null() {
            return Err(GlibError::null_returned(native_fn));
        }
        Ok(Self {
            raw: unsafe { RawObj::from_sys_strong(ptr.cast()) },
        })
    }

    /// Like [`returned_none`][Self::returned_none] for nullable returns: null maps to `None`.
    ///
    /// # Safety
    /// As for `returned_none`.
    pub(crate) unsafe fn returned_none_opt(ptr: *mut T::Sys) -> Option<Self> {
        sys::ptr_then(ptr, |p| Self {
            raw: unsafe { RawObj::from_sys_strong(p.cast()) },
        })
    }

    /// The underlying native pointer. Stable across the wrapper's lifetime.
    ///
    /// The caller must not retain the pointer beyond the wrapper's lifetime, and must not
    /// release a reference it does not own.
    pub fn native(&self) -> *mut T::Sys {
        self.raw.obj_sys().cast()
    }

    /// The untyped `GObject` pointer, e.g. for property and signal APIs.
    pub fn native_object(&self) -> *mut gobject_sys::GObject {
        self.raw.obj_sys()
    }

    /// The runtime type tag recorded at construction. Never changes.
    pub fn native_type(&self) -> sys::GType {
        self.raw.gtype()
    }

    /// The most-derived *registered* wrapper class for this object's runtime type.
    ///
    /// If the exact runtime type has no registered wrapper class, the nearest registered
    /// ancestor is reported; this never fails (see [`crate::registry`]).
    pub fn dynamic_class(&self) -> ClassInfo {
        registry::lookup_nearest(self.native_type())
    }

    /// The native pointer, typed as base class `Base`. Used by method forwarders.
    pub(crate) fn sys_as<Base>(&self) -> *mut Base::Sys
    where
        Base: GioClass,
        T: Inherits<Base>,
    {
        self.raw.sys_as::<Base>()
    }

    /// **Upcast:** convert into a base-class wrapper. Always succeeds, free of charge.
    pub fn upcast<Base>(self) -> Obj<Base>
    where
        Base: GioClass,
        T: Inherits<Base>,
    {
        self.owned_cast()
            .unwrap_or_else(|_| unreachable!("upcast to base class failed; Inherits impl is wrong"))
    }

    /// **Downcast:** try to convert into a more derived class.
    ///
    /// The check runs against the object's runtime type, so a value statically typed as a
    /// base class succeeds whenever the actual instance is of class `Derived` (or below).
    /// On failure, `Err(self)` returns the original wrapper with its reference intact.
    pub fn try_cast<Derived: GioClass>(self) -> Result<Obj<Derived>, Self> {
        self.owned_cast()
    }

    /// ⚠️ **Downcast:** convert into a more derived class, panicking on failure.
    ///
    /// # Panics
    /// If the object's runtime type is not `Derived` or a subclass of it.
    pub fn cast<Derived: GioClass>(self) -> Obj<Derived> {
        self.owned_cast().unwrap_or_else(|from| {
            panic!(
                "downcast from {} (dyn {}) to {} failed",
                T::class_name(),
                sys::type_name(from.native_type()),
                Derived::class_name()
            )
        })
    }

    fn owned_cast<U: GioClass>(self) -> Result<Obj<U>, Self> {
        // Disassemble and reassemble; the reference moves with the raw handle.
        let Obj { raw } = self;
        match raw.owned_cast::<U>() {
            Ok(raw) => Ok(Obj { raw }),
            Err(raw) => Err(Obj { raw }),
        }
    }

    /// Current native reference count, including the reference owned by this wrapper.
    ///
    /// Diagnostic only: if other threads hold references, the value may be stale as soon
    /// as it is read. Lifecycle tests rely on it in single-threaded scenarios.
    pub fn ref_count(&self) -> usize {
        self.raw.ref_count()
    }
}

impl<T: GioClass> Clone for Obj<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
        }
    }
}

// Identity, not structural equality: two wrappers are equal iff they point to the same
// native object.
impl<T: GioClass> PartialEq for Obj<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw.obj_sys() == other.raw.obj_sys()
    }
}

impl<T: GioClass> Eq for Obj<T> {}

impl<T: GioClass> std::hash::Hash for Obj<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.obj_sys().hash(state);
    }
}

impl<T: GioClass> fmt::Debug for Obj<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.raw)
    }
}
