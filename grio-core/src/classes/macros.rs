/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Declares a wrapped native class: marker type, [`GioClass`][crate::obj::GioClass] impl
/// with the registration bootstrap hook, and [`Inherits`][crate::obj::Inherits] impls for
/// the listed ancestors.
///
/// The `inherits` list must name every strict ancestor up to `Object`, mirroring the
/// native hierarchy; the reflexive impl comes from a blanket impl. Constructor adapters
/// and method forwarders are written per class, next to the declaration.
macro_rules! declare_class {
    (
        $(#[$attr:meta])*
        $Class:ident: $Base:ty {
            sys: $Sys:ty,
            native: $native:literal,
            get_type: $get_type:path
            $(, inherits: [$($Ancestor:ty),* $(,)?] )? $(,)?
        }
    ) => {
        $(#[$attr])*
        pub struct $Class {
            // Marker type: only ever used as `Obj<$Class>` parameter, never instantiated.
            _no_instantiate: (),
        }

        impl $crate::obj::GioClass for $Class {
            type Base = $Base;
            type Sys = $Sys;

            fn class_name() -> &'static str {
                stringify!($Class)
            }

            fn native_name() -> &'static str {
                $native
            }

            fn static_type() -> grio_ffi::GType {
                static TYPE: std::sync::OnceLock<grio_ffi::GType> = std::sync::OnceLock::new();

                *TYPE.get_or_init(|| {
                    // Ancestors bootstrap first, so the registry never contains a class
                    // without its base.
                    let parent = <$Base as $crate::obj::GioClass>::static_type();
                    let gtype = unsafe { $get_type() };

                    $crate::registry::register($crate::registry::ClassInfo {
                        gtype,
                        parent,
                        rust_name: stringify!($Class),
                        native_name: $native,
                    });
                    gtype
                })
            }
        }

        $($(
            // SAFETY: single-inheritance C layout; ancestor list mirrors the native hierarchy.
            unsafe impl $crate::obj::Inherits<$Ancestor> for $Class {}
        )*)?
    };
}

pub(crate) use declare_class;
