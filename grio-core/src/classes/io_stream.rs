/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{from_gboolean, ErrorSlot};

use crate::classes::{cancellable_arg, declare_class, Cancellable, InputStream, Object, OutputStream};
use crate::meta::error::GlibError;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// Abstract base for objects that bundle an input and an output stream
    /// (connections, open files).
    IoStream: Object {
        sys: gio_sys::GIOStream,
        native: "GIOStream",
        get_type: gio_sys::g_io_stream_get_type,
        inherits: [Object],
    }
}

pub trait IoStreamExt {
    /// [transfer-none] `g_io_stream_get_input_stream` — borrowed; the stream object
    /// keeps ownership, the wrapper adds its own reference.
    fn input_stream(&self) -> Result<Obj<InputStream>>;

    /// [transfer-none] `g_io_stream_get_output_stream`
    fn output_stream(&self) -> Result<Obj<OutputStream>>;

    /// Closes both directions.
    fn close(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    fn is_closed(&self) -> bool;
}

impl<T: Inherits<IoStream>> IoStreamExt for Obj<T> {
    fn input_stream(&self) -> Result<Obj<InputStream>> {
        let ptr = unsafe { gio_sys::g_io_stream_get_input_stream(self.sys_as::<IoStream>()) };
        unsafe { Obj::returned_none(ptr, "g_io_stream_get_input_stream") }
    }

    fn output_stream(&self) -> Result<Obj<OutputStream>> {
        let ptr = unsafe { gio_sys::g_io_stream_get_output_stream(self.sys_as::<IoStream>()) };
        unsafe { Obj::returned_none(ptr, "g_io_stream_get_output_stream") }
    }

    fn close(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_io_stream_close(
                self.sys_as::<IoStream>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_io_stream_close"));
        }
        GlibError::expect_clear(error, "g_io_stream_close")
    }

    fn is_closed(&self) -> bool {
        from_gboolean(unsafe { gio_sys::g_io_stream_is_closed(self.sys_as::<IoStream>()) })
    }
}
