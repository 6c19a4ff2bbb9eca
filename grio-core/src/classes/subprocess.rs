/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{force_mut_ptr, from_gboolean, opt_string_from_glib_none, CStrv, ErrorSlot};

use crate::classes::{
    cancellable_arg, declare_class, Cancellable, InputStream, Object, OutputStream,
};
use crate::meta::error::GlibError;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// A child process, with optional pipes to its standard streams.
    ///
    /// The pipe accessors return base-typed stream wrappers; the runtime types are
    /// platform classes this layer does not register, so
    /// [`dynamic_class()`][crate::obj::Obj::dynamic_class] reports the nearest
    /// registered ancestor for them.
    Subprocess: Object {
        sys: gio_sys::GSubprocess,
        native: "GSubprocess",
        get_type: gio_sys::g_subprocess_get_type,
        inherits: [Object],
    }
}

impl Subprocess {
    /// [transfer-full] `g_subprocess_newv`
    ///
    /// `argv` is marshalled to a NULL-terminated `char**`; spawn failures come back
    /// through the error out-parameter.
    pub fn new(argv: &[&str], flags: gio_sys::GSubprocessFlags) -> Result<Obj<Subprocess>> {
        let c_argv = CStrv::new(argv).map_err(|_| {
            GlibError::invalid_argument("argv entry contains NUL byte".to_owned())
        })?;

        let mut error = ErrorSlot::new();
        // The native signature takes a mutable argv for historic reasons; the array is
        // not written through.
        let ptr = unsafe {
            gio_sys::g_subprocess_newv(force_mut_ptr(c_argv.as_ptr()), flags, error.as_out())
        };

        if ptr.is_null() {
            return Err(GlibError::from_slot(error, "g_subprocess_newv"));
        }
        GlibError::expect_clear(error, "g_subprocess_newv")?;
        unsafe { Obj::returned_full(ptr, "g_subprocess_newv") }
    }
}

pub trait SubprocessExt {
    /// Waits for the process to exit. Blocks; cancellation detaches, it does not kill.
    fn wait(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    /// Like [`wait()`][Self::wait], additionally failing on non-zero exit status.
    fn wait_check(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    /// Exit status; only meaningful after the process has exited.
    fn exit_status(&self) -> i32;

    /// [transfer-none] string return, copied. `None` once the process has exited.
    fn identifier(&self) -> Option<String>;

    fn force_exit(&self);

    /// [transfer-none] `g_subprocess_get_stdout_pipe` — borrowed; `None` unless the
    /// process was spawned with a stdout pipe.
    fn stdout_pipe(&self) -> Option<Obj<InputStream>>;

    /// [transfer-none] `g_subprocess_get_stderr_pipe`
    fn stderr_pipe(&self) -> Option<Obj<InputStream>>;

    /// [transfer-none] `g_subprocess_get_stdin_pipe`
    fn stdin_pipe(&self) -> Option<Obj<OutputStream>>;
}

impl<T: Inherits<Subprocess>> SubprocessExt for Obj<T> {
    fn wait(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_subprocess_wait(
                self.sys_as::<Subprocess>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_subprocess_wait"));
        }
        GlibError::expect_clear(error, "g_subprocess_wait")
    }

    fn wait_check(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_subprocess_wait_check(
                self.sys_as::<Subprocess>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_subprocess_wait_check"));
        }
        GlibError::expect_clear(error, "g_subprocess_wait_check")
    }

    fn exit_status(&self) -> i32 {
        unsafe { gio_sys::g_subprocess_get_exit_status(self.sys_as::<Subprocess>()) }
    }

    fn identifier(&self) -> Option<String> {
        let ptr = unsafe { gio_sys::g_subprocess_get_identifier(self.sys_as::<Subprocess>()) };
        unsafe { opt_string_from_glib_none(ptr) }
    }

    fn force_exit(&self) {
        unsafe { gio_sys::g_subprocess_force_exit(self.sys_as::<Subprocess>()) }
    }

    fn stdout_pipe(&self) -> Option<Obj<InputStream>> {
        let ptr = unsafe { gio_sys::g_subprocess_get_stdout_pipe(self.sys_as::<Subprocess>()) };
        unsafe { Obj::returned_none_opt(ptr) }
    }

    fn stderr_pipe(&self) -> Option<Obj<InputStream>> {
        let ptr = unsafe { gio_sys::g_subprocess_get_stderr_pipe(self.sys_as::<Subprocess>()) };
        unsafe { Obj::returned_none_opt(ptr) }
    }

    fn stdin_pipe(&self) -> Option<Obj<OutputStream>> {
        let ptr = unsafe { gio_sys::g_subprocess_get_stdin_pipe(self.sys_as::<Subprocess>()) };
        unsafe { Obj::returned_none_opt(ptr) }
    }
}
