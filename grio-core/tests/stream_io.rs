/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The stream class surface, exercised end-to-end against in-memory streams.

use grio_core::classes::{
    BufferedInputStream, BufferedInputStreamExt, Cancellable, CancellableExt, DataInputStream,
    DataInputStreamExt, FilterInputStreamExt, InputStreamExt, MemoryInputStream,
    MemoryInputStreamExt, MemoryOutputStream, MemoryOutputStreamExt, OutputStreamExt,
};
use grio_core::Quark;

#[test]
fn read_returns_the_stored_bytes() {
    let stream = MemoryInputStream::from_data(b"hello gio").expect("stream");

    let mut buffer = [0u8; 32];
    let n = stream.read(&mut buffer, None).expect("read");
    assert_eq!(&buffer[..n], b"hello gio");

    // End of stream.
    let n = stream.read(&mut buffer, None).expect("read at end");
    assert_eq!(n, 0);
}

#[test]
fn add_data_appends_chunks() {
    let stream = MemoryInputStream::new().expect("stream");
    stream.add_data(b"one ");
    stream.add_data(b"two");

    let mut buffer = [0u8; 16];
    let n = stream.read_all(&mut buffer, None).expect("read_all");
    assert_eq!(&buffer[..n], b"one two");
}

#[test]
fn skip_discards_bytes() {
    let stream = MemoryInputStream::from_data(b"0123456789").expect("stream");

    let skipped = stream.skip(4, None).expect("skip");
    assert_eq!(skipped, 4);

    let mut buffer = [0u8; 16];
    let n = stream.read(&mut buffer, None).expect("read");
    assert_eq!(&buffer[..n], b"456789");
}

#[test]
fn close_is_observable_and_sticky() {
    let stream = MemoryInputStream::from_data(b"x").expect("stream");
    assert!(!stream.is_closed());

    stream.close(None).expect("close");
    assert!(stream.is_closed());

    let mut buffer = [0u8; 1];
    let err = stream.read(&mut buffer, None).expect_err("read after close");
    assert!(err.matches(Quark::io_error(), gio_sys::G_IO_ERROR_CLOSED));
}

#[test]
fn write_collects_into_the_buffer() {
    let sink = MemoryOutputStream::new_resizable().expect("sink");

    let n = sink.write(b"written ", None).expect("write");
    assert_eq!(n, 8);
    let n = sink.write_all(b"bytes", None).expect("write_all");
    assert_eq!(n, 5);
    sink.flush(None).expect("flush");

    assert_eq!(sink.data_size(), 13);
    sink.close(None).expect("close");
    assert_eq!(sink.steal_data(), b"written bytes");
}

#[test]
fn splice_copies_a_whole_stream() {
    let source = MemoryInputStream::from_data(b"spliced payload").expect("source");
    let sink = MemoryOutputStream::new_resizable().expect("sink");

    let n = sink
        .splice(
            &source,
            gio_sys::G_OUTPUT_STREAM_SPLICE_CLOSE_SOURCE
                | gio_sys::G_OUTPUT_STREAM_SPLICE_CLOSE_TARGET,
            None,
        )
        .expect("splice");
    assert_eq!(n, 15);
    assert!(source.is_closed());
    assert_eq!(sink.steal_data(), b"spliced payload");
}

#[test]
fn cancelled_token_fails_the_read() {
    let stream = MemoryInputStream::from_data(b"unreachable").expect("stream");
    let token = Cancellable::new().expect("cancellable");

    token.cancel();
    assert!(token.is_cancelled());

    let mut buffer = [0u8; 8];
    let err = stream
        .read(&mut buffer, Some(&token))
        .expect_err("cancelled read");
    assert!(err.matches(Quark::io_error(), gio_sys::G_IO_ERROR_CANCELLED));
    assert_eq!(err.domain(), Some(Quark::io_error()));
    assert_eq!(err.code(), Some(gio_sys::G_IO_ERROR_CANCELLED));

    token.reset();
    assert!(!token.is_cancelled());
    let n = stream.read(&mut buffer, Some(&token)).expect("read after reset");
    assert_eq!(n, 8);
}

unsafe extern "C" fn stash_result(
    _source: *mut gobject_sys::GObject,
    result: *mut gio_sys::GAsyncResult,
    user_data: glib_sys::gpointer,
) {
    // Keep the result alive past the callback so the finish call can consume it later.
    let slot = user_data as *mut *mut gio_sys::GAsyncResult;
    unsafe {
        gobject_sys::g_object_ref(result.cast());
        *slot = result;
    }
}

#[test]
fn async_write_completes_through_the_callback() {
    let sink = MemoryOutputStream::new_resizable().expect("sink");
    let payload = b"async payload";

    let mut slot: *mut gio_sys::GAsyncResult = std::ptr::null_mut();
    unsafe {
        sink.write_async(
            payload,
            glib_sys::G_PRIORITY_DEFAULT,
            None,
            Some(stash_result),
            (&mut slot as *mut *mut gio_sys::GAsyncResult).cast(),
        );
    }

    let ctx = unsafe { glib_sys::g_main_context_default() };
    while slot.is_null() {
        unsafe { glib_sys::g_main_context_iteration(ctx, glib_sys::GTRUE) };
    }

    let n = unsafe { sink.write_finish(slot) }.expect("write_finish");
    assert_eq!(n, payload.len());
    unsafe { gobject_sys::g_object_unref(slot.cast()) };

    sink.close(None).expect("close");
    assert_eq!(sink.steal_data(), payload);
}

#[test]
fn buffered_stream_fills_from_its_base() {
    let base = MemoryInputStream::from_data(b"buffered content").expect("base");
    let buffered = BufferedInputStream::new(&base).expect("buffered");

    buffered.set_buffer_size(64);
    assert_eq!(buffered.buffer_size(), 64);
    assert_eq!(buffered.available(), 0);

    let n = buffered.fill(16, None).expect("fill");
    assert_eq!(n, 16);
    assert_eq!(buffered.available(), 16);

    let mut buffer = [0u8; 32];
    let n = buffered.read(&mut buffer, None).expect("read");
    assert_eq!(&buffer[..n], b"buffered content");
}

#[test]
fn filter_stream_borrows_its_base() {
    let base = MemoryInputStream::from_data(b"x").expect("base");
    assert_eq!(base.ref_count(), 1);

    let buffered = BufferedInputStream::new(&base).expect("buffered");
    // One reference for us, one held by the filter stream.
    assert_eq!(base.ref_count(), 2);

    let borrowed = buffered.base_stream().expect("base stream");
    assert_eq!(borrowed.native_object(), base.native_object());
    assert_eq!(base.ref_count(), 3);

    drop(borrowed);
    drop(buffered);
    assert_eq!(base.ref_count(), 1);
}

#[test]
fn data_stream_reads_lines() {
    let base = MemoryInputStream::from_data(b"first line\nsecond line\n").expect("base");
    let data = DataInputStream::new(&base).expect("data stream");

    assert_eq!(data.read_line(None).expect("line 1"), Some(b"first line".to_vec()));
    assert_eq!(data.read_line(None).expect("line 2"), Some(b"second line".to_vec()));
    assert_eq!(data.read_line(None).expect("eof"), None);
}

#[test]
fn data_stream_reads_single_bytes() {
    let base = MemoryInputStream::from_data(&[0x00, 0xff]).expect("base");
    let data = DataInputStream::new(&base).expect("data stream");

    // 0 is a valid byte, distinguished from the error sentinel by the slot.
    assert_eq!(data.read_byte(None).expect("byte"), 0x00);
    assert_eq!(data.read_byte(None).expect("byte"), 0xff);
}
