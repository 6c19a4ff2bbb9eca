/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Argument/result translation support and the error taxonomy.

pub mod error;

use std::ffi::CString;

use crate::meta::error::GlibError;
use crate::Result;

/// Copies a Rust string into a NUL-terminated C string for an argument position.
///
/// Interior NUL bytes are rejected before the native call, as an *invalid argument*.
pub(crate) fn arg_string(s: &str) -> Result<CString> {
    CString::new(s)
        .map_err(|_| GlibError::invalid_argument(format!("string argument contains NUL byte: {s:?}")))
}

/// Like [`arg_string`], for nullable string arguments: `None` becomes a null pointer.
pub(crate) fn arg_string_opt(s: Option<&str>) -> Result<Option<CString>> {
    s.map(arg_string).transpose()
}
