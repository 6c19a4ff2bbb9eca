/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{force_mut_ptr, from_gboolean, opt_string_from_glib_none, CStrv, ErrorSlot};

use crate::classes::{cancellable_arg, declare_class, Cancellable, Object};
use crate::meta::{arg_string, arg_string_opt, error::GlibError};
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// Application lifecycle: registration, activation, the main run loop.
    Application: Object {
        sys: gio_sys::GApplication,
        native: "GApplication",
        get_type: gio_sys::g_application_get_type,
        inherits: [Object],
    }
}

impl Application {
    /// [transfer-full] `g_application_new`
    ///
    /// The native constructor returns null (without setting an error) when `id` is
    /// present but not a valid application identifier.
    pub fn new(id: Option<&str>, flags: gio_sys::GApplicationFlags) -> Result<Obj<Application>> {
        let c_id = arg_string_opt(id)?;
        let ptr = unsafe {
            gio_sys::g_application_new(
                c_id.as_ref().map_or(std::ptr::null(), |s| s.as_ptr()),
                flags,
            )
        };
        unsafe { Obj::returned_full(ptr, "g_application_new") }
    }

    /// [transfer-none] `g_application_get_default` — the process-wide default
    /// application, if one has been registered. Borrowed; the wrapper adds its own
    /// reference. The wrapper itself holds no such global state.
    pub fn default() -> Option<Obj<Application>> {
        let ptr = unsafe { gio_sys::g_application_get_default() };
        unsafe { Obj::returned_none_opt(ptr) }
    }

    /// `g_application_id_is_valid`
    pub fn id_is_valid(id: &str) -> Result<bool> {
        let c_id = arg_string(id)?;
        Ok(from_gboolean(unsafe {
            gio_sys::g_application_id_is_valid(c_id.as_ptr())
        }))
    }
}

pub trait ApplicationExt {
    /// [transfer-none] string return, copied.
    fn application_id(&self) -> Option<String>;

    fn set_application_id(&self, id: &str) -> Result<()>;

    /// Registers with the session; blocks per the native contract.
    fn register(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()>;

    fn activate(&self);

    fn quit(&self);

    /// Runs the main loop until quit; returns the exit status.
    ///
    /// `args` follows the native convention: the full argv including the program name.
    fn run(&self, args: &[&str]) -> Result<i32>;
}

impl<T: Inherits<Application>> ApplicationExt for Obj<T> {
    fn application_id(&self) -> Option<String> {
        let ptr =
            unsafe { gio_sys::g_application_get_application_id(self.sys_as::<Application>()) };
        unsafe { opt_string_from_glib_none(ptr) }
    }

    fn set_application_id(&self, id: &str) -> Result<()> {
        let c_id = arg_string(id)?;
        unsafe {
            gio_sys::g_application_set_application_id(self.sys_as::<Application>(), c_id.as_ptr())
        };
        Ok(())
    }

    fn register(&self, cancellable: Option<&Obj<Cancellable>>) -> Result<()> {
        let mut error = ErrorSlot::new();
        let ok = unsafe {
            gio_sys::g_application_register(
                self.sys_as::<Application>(),
                cancellable_arg(cancellable),
                error.as_out(),
            )
        };

        if !from_gboolean(ok) {
            return Err(GlibError::from_slot(error, "g_application_register"));
        }
        GlibError::expect_clear(error, "g_application_register")
    }

    fn activate(&self) {
        unsafe { gio_sys::g_application_activate(self.sys_as::<Application>()) }
    }

    fn quit(&self) {
        unsafe { gio_sys::g_application_quit(self.sys_as::<Application>()) }
    }

    fn run(&self, args: &[&str]) -> Result<i32> {
        let argv = CStrv::new(args).map_err(|_| {
            GlibError::invalid_argument("argv entry contains NUL byte".to_owned())
        })?;

        // The native signature is char**; the library does not mutate argv when invoked
        // through this entry point.
        let status = unsafe {
            gio_sys::g_application_run(
                self.sys_as::<Application>(),
                argv.len() as i32,
                force_mut_ptr(argv.as_ptr()).cast(),
            )
        };
        Ok(status)
    }
}
