/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use grio_ffi as sys;
use grio_ffi::out;

use crate::obj::GioClass;

/// One registry entry: the correspondence of a native type tag to a wrapper class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    /// Native type tag of the class.
    pub gtype: sys::GType,

    /// Type tag of the immediate base class; [`sys::TYPE_INVALID`] at the root.
    pub parent: sys::GType,

    /// Rust-side class name, e.g. `"MemoryInputStream"`.
    pub rust_name: &'static str,

    /// Native class name, e.g. `"GMemoryInputStream"`.
    pub native_name: &'static str,
}

fn registry() -> &'static RwLock<HashMap<sys::GType, ClassInfo>> {
    static REGISTRY: OnceLock<RwLock<HashMap<sys::GType, ClassInfo>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Records `(native type tag → wrapper class)`. Called from per-class bootstrap hooks.
///
/// Registering the same pair twice is a no-op; the registry never removes or overwrites
/// entries.
pub fn register(info: ClassInfo) {
    let mut map = registry().write().expect("class registry poisoned");

    match map.get(&info.gtype) {
        None => {
            out!("registry: {} -> {}", info.native_name, info.rust_name);
            map.insert(info.gtype, info);
        }
        Some(existing) => {
            // Append-only: a conflicting re-registration would mean two wrapper classes
            // claim the same native type, which declare_class! cannot produce.
            debug_assert_eq!(
                existing, &info,
                "conflicting registration for native type {}",
                sys::type_name(info.gtype)
            );
        }
    }
}

/// Exact lookup for a native type tag.
pub fn lookup(gtype: sys::GType) -> Option<ClassInfo> {
    registry()
        .read()
        .expect("class registry poisoned")
        .get(&gtype)
        .copied()
}

/// Whether a wrapper class is registered for exactly this type tag.
pub fn is_registered(gtype: sys::GType) -> bool {
    lookup(gtype).is_some()
}

/// Resolves the most-derived registered wrapper class for a runtime type tag.
///
/// Walks the native parent chain until a registered ancestor is found. Degrades to the
/// base [`Object`][crate::classes::Object] class if nothing on the chain is registered;
/// never fails.
pub fn lookup_nearest(gtype: sys::GType) -> ClassInfo {
    {
        let map = registry().read().expect("class registry poisoned");

        let mut cursor = gtype;
        while cursor != sys::TYPE_INVALID {
            if let Some(info) = map.get(&cursor) {
                return *info;
            }
            cursor = sys::type_parent(cursor);
        }
    }
    // Read guard released above: the fallback may need to bootstrap Object, which takes
    // the write lock.

    let object_type = crate::classes::Object::static_type();
    lookup(object_type).unwrap_or(ClassInfo {
        gtype: object_type,
        parent: sys::TYPE_INVALID,
        rust_name: crate::classes::Object::class_name(),
        native_name: crate::classes::Object::native_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{DataInputStream, Object};

    #[test]
    fn register_same_pair_twice_is_noop() {
        let gtype = Object::static_type();
        let info = lookup(gtype).expect("Object registered by bootstrap");

        register(info);
        assert_eq!(lookup(gtype), Some(info));
    }

    #[test]
    fn nearest_lookup_prefers_the_exact_type() {
        let gtype = DataInputStream::static_type();
        assert_eq!(lookup_nearest(gtype).rust_name, "DataInputStream");
    }

    #[test]
    fn nearest_lookup_walks_the_parent_chain() {
        // GFileInputStream has no wrapper class; its parent GInputStream does.
        DataInputStream::static_type();
        let gtype = unsafe { gio_sys::g_file_input_stream_get_type() };

        assert!(!is_registered(gtype));
        assert_eq!(lookup_nearest(gtype).rust_name, "InputStream");
    }

    #[test]
    fn non_object_type_degrades_to_object() {
        // A fundamental type has no parent chain leading to GObject; resolution
        // falls back to the root class rather than failing.
        assert!(!is_registered(gobject_sys::G_TYPE_INT));
        assert_eq!(lookup_nearest(gobject_sys::G_TYPE_INT).rust_name, "Object");
    }
}
