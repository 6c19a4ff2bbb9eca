/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::classes::declare_class;

declare_class! {
    /// Root of the wrapped class hierarchy.
    ///
    /// Every other wrapper class lists `Object` as its (transitive) base. Downcast
    /// lookups that find no registered class degrade to `Object`, never fail.
    Object: crate::obj::NoBase {
        sys: gobject_sys::GObject,
        native: "GObject",
        get_type: gobject_sys::g_object_get_type,
    }
}
