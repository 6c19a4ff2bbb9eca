/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::any::TypeId;

use grio_ffi as sys;

/// Marks `T` as a wrapped native class, eligible to be held in [`Obj<T>`][crate::obj::Obj] pointers.
///
/// Implementations are generated by the `declare_class!` macro in [`crate::classes`]; the
/// marker types themselves are never instantiated. The associated items record the class's
/// place in the native hierarchy and its raw `-sys` struct.
pub trait GioClass: 'static + Sized {
    /// The immediate superclass. [`NoBase`] only for the hierarchy root, [`Object`][crate::classes::Object].
    type Base: GioClass;

    /// The raw struct from the `-sys` crate that instance pointers of this class point to.
    type Sys;

    /// Rust-side class name, e.g. `"MemoryInputStream"`.
    fn class_name() -> &'static str;

    /// Name under which the native library registers the class, e.g. `"GMemoryInputStream"`.
    fn native_name() -> &'static str;

    /// Returns the native type tag, registering the class in the
    /// [class registry][crate::registry] on first call.
    ///
    /// This is the per-class bootstrap hook: every construction and cast path calls it
    /// before touching an instance, so the registry entry exists before any object of the
    /// class can be observed. Registration also walks up through `Base`, so ancestors are
    /// always registered before their subclasses.
    fn static_type() -> sys::GType;

    /// Returns whether `Self` inherits from `Base`, on the Rust side of the bridge.
    ///
    /// This is reflexive, i.e. `Self` inherits from itself. Purely static; the native type
    /// system is not consulted.
    fn inherits<Base: GioClass>() -> bool {
        if TypeId::of::<Self>() == TypeId::of::<Base>() {
            true
        } else if TypeId::of::<Self::Base>() == TypeId::of::<NoBase>() {
            false
        } else {
            Self::Base::inherits::<Base>()
        }
    }
}

/// Type representing the absence of a base class, at the root of the hierarchy.
///
/// `NoBase` is used as the base class for exactly one class: [`Object`][crate::classes::Object].
///
/// This is an enum without any variants, as we should never construct an instance of this class.
pub enum NoBase {}

impl GioClass for NoBase {
    type Base = NoBase;
    type Sys = std::ffi::c_void;

    fn class_name() -> &'static str {
        "<none>"
    }

    fn native_name() -> &'static str {
        "<none>"
    }

    fn static_type() -> sys::GType {
        sys::TYPE_INVALID
    }
}

/// Non-strict inheritance relationship in the native class hierarchy.
///
/// `Derived: Inherits<Base>` means that either `Derived` is a subclass of `Base`, or the
/// class `Base` itself (hence "non-strict"). The relation is transitive across indirect
/// base classes and reflexive.
///
/// The primary use case is polymorphism: method forwarders for a class are implemented on
/// `Obj<T>` for all `T: Inherits<ThatClass>`, so subclasses get their inherited methods
/// without any conversion at the call site.
///
/// # Safety
/// An impl asserts that an instance pointer of `Self` is a valid instance pointer of
/// `Base` (single-inheritance C layout, same address). Impls are only generated by
/// `declare_class!`, from the ancestor list that mirrors the native hierarchy.
pub unsafe trait Inherits<Base: GioClass>: GioClass {}

// Reflexive: every class inherits itself.
unsafe impl<T: GioClass> Inherits<T> for T {}
