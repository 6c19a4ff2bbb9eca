/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{force_mut_ptr, from_gboolean, ErrorSlot};

use crate::classes::{cancellable_arg, declare_class, Cancellable, Object};
use crate::meta::error::GlibError;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// Abstract base class for byte input.
    InputStream: Object {
        sys: gio_sys::GInputStream,
        native: "GInputStream",
        get_type: gio_sys::g_input_stream_get_type,
        inherits: [Object],
    }
}

declare_class! {
    /// Abstract base class for byte output.
    OutputStream: Object {
        sys: gio_sys::GOutputStream,
        native: "GOutputStream",
        get_type: gio_sys::g_output_stream_get_type,
        inherits: [Object],
    }
}

pub trait InputStreamExt {
    /// Reads up to `buffer.len()` bytes; returns the number read, 0 at end of stream.
    fn read(&self, buffer: &mut [u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize>;

    /// Reads exactly `buffer.len()` bytes unless the stream ends first; returns the
    /// number actually read.
    fn read_all(&self, buffer: &mut [u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize>;

    /// Discards up to `count` bytes; returns the number skipped.
    fn skip(&self, count: usize, cancellable: Option<&Obj<Cancellable>>) -> Result<usize>;

    fn close(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    fn is_closed(&self) -> bool;

    /// Begins the asynchronous counterpart of [`read()`][Self::read].
    ///
    /// The raw C callback triple is passed straight through; the wrapper introduces no
    /// suspension of its own.
    ///
    /// # Safety
    /// `buffer` must stay alive and unmoved until `callback` runs; `callback`/`user_data`
    /// follow the native contract and may be invoked on an arbitrary thread.
    unsafe fn read_async(
        &self,
        buffer: &mut [u8],
        io_priority: i32,
        cancellable: Option<&Obj<Cancellable>>,
        callback: gio_sys::GAsyncReadyCallback,
        user_data: glib_sys::gpointer,
    );

    /// Completes an asynchronous read; `result` is the pointer delivered to the callback.
    ///
    /// # Safety
    /// `result` must be the unconsumed result object passed to the callback of a
    /// [`read_async()`][Self::read_async] call on this stream.
    unsafe fn read_finish(&self, result: *mut gio_sys::GAsyncResult) -> Result<usize>;
}

impl<T: Inherits<InputStream>> InputStreamExt for Obj<T> {
    fn read(&self, buffer: &mut [u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            gio_sys::g_input_stream_read(
                self.sys_as::<InputStream>(),
                buffer.as_mut_ptr(),
                buffer.len(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_input_stream_read"));
        }
        GlibError::expect_clear(error, "g_input_stream_read")?;
        Ok(n as usize)
    }

    fn read_all(&self, buffer: &mut [u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize> {
        let mut bytes_read = 0usize;
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_input_stream_read_all(
                self.sys_as::<InputStream>(),
                buffer.as_mut_ptr(),
                buffer.len(),
                &mut bytes_read,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_input_stream_read_all"));
        }
        GlibError::expect_clear(error, "g_input_stream_read_all")?;
        Ok(bytes_read)
    }

    fn skip(&self, count: usize, cancellable: Option<&Obj<Cancellable>>) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            gio_sys::g_input_stream_skip(
                self.sys_as::<InputStream>(),
                count,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_input_stream_skip"));
        }
        GlibError::expect_clear(error, "g_input_stream_skip")?;
        Ok(n as usize)
    }

    fn close(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_input_stream_close(
                self.sys_as::<InputStream>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_input_stream_close"));
        }
        GlibError::expect_clear(error, "g_input_stream_close")
    }

    fn is_closed(&self) -> bool {
        from_gboolean(unsafe { gio_sys::g_input_stream_is_closed(self.sys_as::<InputStream>()) })
    }

    unsafe fn read_async(
        &self,
        buffer: &mut [u8],
        io_priority: i32,
        cancellable: Option<&Obj<Cancellable>>,
        callback: gio_sys::GAsyncReadyCallback,
        user_data: glib_sys::gpointer,
    ) {
        unsafe {
            gio_sys::g_input_stream_read_async(
                self.sys_as::<InputStream>(),
                buffer.as_mut_ptr(),
                buffer.len(),
                io_priority,
                cancellable_arg(cancellable),
                callback,
                user_data,
            )
        }
    }

    unsafe fn read_finish(&self, result: *mut gio_sys::GAsyncResult) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            gio_sys::g_input_stream_read_finish(
                self.sys_as::<InputStream>(),
                result,
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_input_stream_read_finish"));
        }
        GlibError::expect_clear(error, "g_input_stream_read_finish")?;
        Ok(n as usize)
    }
}

pub trait OutputStreamExt {
    /// Writes up to `buffer.len()` bytes; returns the number written.
    fn write(&self, buffer: &[u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize>;

    /// Writes all of `buffer`; returns the number written (equal to `buffer.len()` on success).
    fn write_all(&self, buffer: &[u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize>;

    fn flush(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    fn close(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    fn is_closed(&self) -> bool;

    /// Copies `source` into this stream; returns the number of bytes spliced.
    fn splice<S: Inherits<InputStream>>(
        &self,
        source: &Obj<S>,
        flags: gio_sys::GOutputStreamSpliceFlags,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<usize>;

    /// Begins the asynchronous counterpart of [`write()`][Self::write].
    ///
    /// # Safety
    /// As for [`InputStreamExt::read_async`]: `buffer` outlives the operation, callback
    /// semantics are the native ones.
    unsafe fn write_async(
        &self,
        buffer: &[u8],
        io_priority: i32,
        cancellable: Option<&Obj<Cancellable>>,
        callback: gio_sys::GAsyncReadyCallback,
        user_data: glib_sys::gpointer,
    );

    /// Completes an asynchronous write.
    ///
    /// # Safety
    /// `result` must be the unconsumed result object of a
    /// [`write_async()`][Self::write_async] call on this stream.
    unsafe fn write_finish(&self, result: *mut gio_sys::GAsyncResult) -> Result<usize>;
}

impl<T: Inherits<OutputStream>> OutputStreamExt for Obj<T> {
    fn write(&self, buffer: &[u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            // The native write functions take a mutable buffer pointer; the bytes are
            // never written through.
            gio_sys::g_output_stream_write(
                self.sys_as::<OutputStream>(),
                force_mut_ptr(buffer.as_ptr()),
                buffer.len(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_output_stream_write"));
        }
        GlibError::expect_clear(error, "g_output_stream_write")?;
        Ok(n as usize)
    }

    fn write_all(&self, buffer: &[u8], cancellable: Option<&Obj<Cancellable>>) -> Result<usize> {
        let mut bytes_written = 0usize;
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_output_stream_write_all(
                self.sys_as::<OutputStream>(),
                force_mut_ptr(buffer.as_ptr()),
                buffer.len(),
                &mut bytes_written,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_output_stream_write_all"));
        }
        GlibError::expect_clear(error, "g_output_stream_write_all")?;
        Ok(bytes_written)
    }

    fn flush(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_output_stream_flush(
                self.sys_as::<OutputStream>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_output_stream_flush"));
        }
        GlibError::expect_clear(error, "g_output_stream_flush")
    }

    fn close(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_output_stream_close(
                self.sys_as::<OutputStream>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_output_stream_close"));
        }
        GlibError::expect_clear(error, "g_output_stream_close")
    }

    fn is_closed(&self) -> bool {
        from_gboolean(unsafe { gio_sys::g_output_stream_is_closed(self.sys_as::<OutputStream>()) })
    }

    fn splice<S: Inherits<InputStream>>(
        &self,
        source: &Obj<S>,
        flags: gio_sys::GOutputStreamSpliceFlags,
        cancellable: Option<&Obj<Cancellable>>,
    ) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            gio_sys::g_output_stream_splice(
                self.sys_as::<OutputStream>(),
                source.sys_as::<InputStream>(),
                flags,
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_output_stream_splice"));
        }
        GlibError::expect_clear(error, "g_output_stream_splice")?;
        Ok(n as usize)
    }

    unsafe fn write_async(
        &self,
        buffer: &[u8],
        io_priority: i32,
        cancellable: Option<&Obj<Cancellable>>,
        callback: gio_sys::GAsyncReadyCallback,
        user_data: glib_sys::gpointer,
    ) {
        unsafe {
            gio_sys::g_output_stream_write_async(
                self.sys_as::<OutputStream>(),
                force_mut_ptr(buffer.as_ptr()),
                buffer.len(),
                io_priority,
                cancellable_arg(cancellable),
                callback,
                user_data,
            )
        }
    }

    unsafe fn write_finish(&self, result: *mut gio_sys::GAsyncResult) -> Result<usize> {
        let mut error = ErrorSlot::new();
        let n = unsafe {
            gio_sys::g_output_stream_write_finish(
                self.sys_as::<OutputStream>(),
                result,
                error.as_out(),
            )
        };

        if n < 0 {
            return Err(GlibError::from_slot(error, "g_output_stream_write_finish"));
        }
        GlibError::expect_clear(error, "g_output_stream_write_finish")?;
        Ok(n as usize)
    }
}
