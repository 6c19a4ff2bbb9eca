/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::classes::{declare_class, InputStream, Object, OutputStream};
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// In-memory input stream over caller-supplied chunks.
    MemoryInputStream: InputStream {
        sys: gio_sys::GMemoryInputStream,
        native: "GMemoryInputStream",
        get_type: gio_sys::g_memory_input_stream_get_type,
        inherits: [InputStream, Object],
    }
}

declare_class! {
    /// In-memory output stream backed by a growable buffer.
    MemoryOutputStream: OutputStream {
        sys: gio_sys::GMemoryOutputStream,
        native: "GMemoryOutputStream",
        get_type: gio_sys::g_memory_output_stream_get_type,
        inherits: [OutputStream, Object],
    }
}

impl MemoryInputStream {
    /// [transfer-full] `g_memory_input_stream_new`
    ///
    /// The native constructor returns a base-typed pointer; the runtime type is this
    /// class, so adoption under `MemoryInputStream` is exact.
    pub fn new() -> Result<Obj<MemoryInputStream>> {
        let ptr = unsafe { gio_sys::g_memory_input_stream_new() };
        unsafe { Obj::returned_full(ptr.cast(), "g_memory_input_stream_new") }
    }

    /// [transfer-full] `g_memory_input_stream_new_from_data`
    ///
    /// The bytes are copied into a native allocation whose destroy-notify is the native
    /// free function, so the stream owns its data outright.
    pub fn from_data(data: &[u8]) -> Result<Obj<MemoryInputStream>> {
        let ptr = unsafe {
            let copy = glib_sys::g_memdup2(data.as_ptr().cast(), data.len());
            gio_sys::g_memory_input_stream_new_from_data(
                copy.cast(),
                data.len() as isize,
                Some(glib_sys::g_free),
            )
        };
        unsafe { Obj::returned_full(ptr.cast(), "g_memory_input_stream_new_from_data") }
    }
}

pub trait MemoryInputStreamExt {
    /// Appends a chunk to be read after the existing ones. The bytes are copied.
    fn add_data(&self, data: &[u8]);
}

impl<T: Inherits<MemoryInputStream>> MemoryInputStreamExt for Obj<T> {
    fn add_data(&self, data: &[u8]) {
        unsafe {
            let copy = glib_sys::g_memdup2(data.as_ptr().cast(), data.len());
            gio_sys::g_memory_input_stream_add_data(
                self.sys_as::<MemoryInputStream>(),
                copy.cast(),
                data.len() as isize,
                Some(glib_sys::g_free),
            )
        }
    }
}

impl MemoryOutputStream {
    /// [transfer-full] `g_memory_output_stream_new_resizable`
    pub fn new_resizable() -> Result<Obj<MemoryOutputStream>> {
        let ptr = unsafe { gio_sys::g_memory_output_stream_new_resizable() };
        unsafe { Obj::returned_full(ptr.cast(), "g_memory_output_stream_new_resizable") }
    }
}

pub trait MemoryOutputStreamExt {
    /// Number of bytes written so far.
    fn data_size(&self) -> usize;

    /// Copies the written bytes out and releases the native buffer.
    ///
    /// Only valid after the stream has been closed; the native contract makes the
    /// buffer available at that point.
    fn steal_data(&self) -> Vec<u8>;
}

impl<T: Inherits<MemoryOutputStream>> MemoryOutputStreamExt for Obj<T> {
    fn data_size(&self) -> usize {
        unsafe { gio_sys::g_memory_output_stream_get_data_size(self.sys_as::<MemoryOutputStream>()) }
    }

    fn steal_data(&self) -> Vec<u8> {
        let size = self.data_size();
        let ptr = unsafe {
            gio_sys::g_memory_output_stream_steal_data(self.sys_as::<MemoryOutputStream>())
        };
        if ptr.is_null() {
            return Vec::new();
        }

        let bytes = unsafe { std::slice::from_raw_parts(ptr as *const u8, size) }.to_vec();
        unsafe { glib_sys::g_free(ptr) };
        bytes
    }
}
