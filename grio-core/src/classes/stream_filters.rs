/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::ErrorSlot;

use crate::classes::{cancellable_arg, declare_class, Cancellable, InputStream, Object};
use crate::meta::error::GlibError;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// Abstract base for input streams that wrap another input stream.
    FilterInputStream: InputStream {
        sys: gio_sys::GFilterInputStream,
        native: "GFilterInputStream",
        get_type: gio_sys::g_filter_input_stream_get_type,
        inherits: [InputStream, Object],
    }
}

declare_class! {
    /// Read-ahead buffering over a base stream.
    BufferedInputStream: FilterInputStream {
        sys: gio_sys::GBufferedInputStream,
        native: "GBufferedInputStream",
        get_type: gio_sys::g_buffered_input_stream_get_type,
        inherits: [FilterInputStream, InputStream, Object],
    }
}

declare_class! {
    /// Line- and record-oriented reading over a base stream.
    DataInputStream: BufferedInputStream {
        sys: gio_sys::GDataInputStream,
        native: "GDataInputStream",
        get_type: gio_sys::g_data_input_stream_get_type,
        inherits: [BufferedInputStream, FilterInputStream, InputStream, Object],
    }
}

pub trait FilterInputStreamExt {
    /// [transfer-none] `g_filter_input_stream_get_base_stream` — the wrapped stream,
    /// borrowed (a new reference is added for the returned wrapper).
    fn base_stream(&self) -> Result<Obj<InputStream>>;
}

impl<T: Inherits<FilterInputStream>> FilterInputStreamExt for Obj<T> {
    fn base_stream(&self) -> Result<Obj<InputStream>> {
        let ptr = unsafe {
            gio_sys::g_filter_input_stream_get_base_stream(self.sys_as::<FilterInputStream>())
        };
        unsafe { Obj::returned_none(ptr, "g_filter_input_stream_get_base_stream") }
    }
}

impl BufferedInputStream {
    /// [transfer-full] `g_buffered_input_stream_new`
    ///
    /// The base stream is passed transfer-none; the native object keeps its own
    /// reference on it.
    pub fn new<S: Inherits<InputStream>>(base: &Obj<S>) -> Result<Obj<BufferedInputStream>> {
        let ptr = unsafe { gio_sys::g_buffered_input_stream_new(base.sys_as::<InputStream>()) };
        unsafe { Obj::returned_full(ptr.cast(), "g_buffered_input_stream_new") }
    }
}

pub trait BufferedInputStreamExt {
    fn buffer_size(&self) -> usize;
    fn set_buffer_size(&self, size: usize);

    /// Bytes currently buffered and readable without touching the base stream.
    fn available(&self) -> usize;

    /// Reads more bytes from the base stream into the buffer; returns the number added,
    /// 0 at end of stream.
    fn fill(&self, count: isize, cancellable: Option<&Obj<Cancellable>>) -> Result<usize>;
}

impl<T: Inherits<BufferedInputStream>> BufferedInputStreamExt for Obj<T> {
    fn buffer_size(&self) -> usize {
        unsafe {
            gio_sys::g_buffered_input_stream_get_buffer_size(self.sys_as::<BufferedInputStream>())
        }
    }

    fn set_buffer_size(&self, size: usize) {
        unsafe {
            gio_sys::g_buffered_input_stream_set_buffer_size(
                self.sys_as::<BufferedInputStream>(),
                size,
            )
        }
    }

    fn available(&self) -> usize {
        unsafe {
            gio_sys::g_buffered_input_stream_get_available(self.sys_as::<BufferedInputStream>())
        }
    }

    fn fill(&self, count: isize, cancellable: Option<&Obj<Cancellable>>) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            gio_sys::g_buffered_input_stream_fill(
                self.sys_as::<BufferedInputStream>(),
                count,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_buffered_input_stream_fill"));
        }
        GlibError::expect_clear(error, "g_buffered_input_stream_fill")?;
        Ok(n as usize)
    }
}

impl DataInputStream {
    /// [transfer-full] `g_data_input_stream_new`
    pub fn new<S: Inherits<InputStream>>(base: &Obj<S>) -> Result<Obj<DataInputStream>> {
        let ptr = unsafe { gio_sys::g_data_input_stream_new(base.sys_as::<InputStream>()) };
        unsafe { Obj::returned_full(ptr, "g_data_input_stream_new") }
    }
}

pub trait DataInputStreamExt {
    /// Reads one line, without the trailing newline. `Ok(None)` at end of stream.
    ///
    /// [transfer-full] return: the native line buffer is copied out and released here.
    fn read_line(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<Option<Vec<u8>>>;

    /// Reads a single byte.
    fn read_byte(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<u8>;
}

impl<T: Inherits<DataInputStream>> DataInputStreamExt for Obj<T> {
    fn read_line(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<Option<Vec<u8>>> {
        let mut length = 0usize;
        let mut error = ErrorSlot::new();
        let ptr = unsafe {
            gio_sys::g_data_input_stream_read_line(
                self.sys_as::<DataInputStream>(),
                &mut length,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if ptr.is_null() {
            // Null return means end-of-stream when no error was set.
            if error.is_set() {
                return Err(GlibError::from_slot(error, "g_data_input_stream_read_line"));
            }
            return Ok(None);
        }
        GlibError::expect_clear(error, "g_data_input_stream_read_line")?;

        let bytes = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), length) }.to_vec();
        unsafe { glib_sys::g_free(ptr.cast()) };
        Ok(Some(bytes))
    }

    fn read_byte(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<u8> {
        let mut error = ErrorSlot::new();
        let byte = unsafe {
            gio_sys::g_data_input_stream_read_byte(
                self.sys_as::<DataInputStream>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        // The sentinel return is 0, which is also a valid byte; the slot decides.
        GlibError::expect_clear(error, "g_data_input_stream_read_byte")?;
        Ok(byte)
    }
}
