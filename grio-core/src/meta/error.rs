/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use grio_ffi as sys;
use grio_ffi::{ErrorSlot, NativeError};

use crate::Result;

/// An interned error-domain tag of the native library.
///
/// Opaque: two quarks compare equal iff they name the same domain. [`name()`][Self::name]
/// resolves the interned string for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quark(sys::GQuark);

impl Quark {
    /// Interns `name` in the native quark table (idempotent).
    pub fn from_name(name: &str) -> Self {
        let c = std::ffi::CString::new(name).unwrap_or_default();
        Self(unsafe { glib_sys::g_quark_from_string(c.as_ptr()) })
    }

    /// The `g-io-error-quark` domain, the most common failure domain at this layer.
    pub fn io_error() -> Self {
        Self(unsafe { gio_sys::g_io_error_quark() })
    }

    pub(crate) fn from_raw(raw: sys::GQuark) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> sys::GQuark {
        self.0
    }

    /// The interned domain string, e.g. `"g-io-error-quark"`.
    pub fn name(self) -> Option<String> {
        let ptr = unsafe { glib_sys::g_quark_to_string(self.0) };
        unsafe { sys::opt_string_from_glib_none(ptr) }
    }
}

/// A failure surfaced at the wrapper boundary.
///
/// Three kinds exist, mirroring what can go wrong around a native call:
/// * a **native** error set through a `GError**` out-parameter — domain, code and message
///   are copied verbatim and the native error reference is released;
/// * a **null return** where the native contract promises non-null, without an error set —
///   synthetic, names the native function;
/// * an **invalid argument** rejected by the wrapper before the call is made.
///
/// Errors propagate to the caller immediately and unchanged; the wrapper performs no
/// retries, recovery or logging.
#[derive(Debug)]
pub struct GlibError {
    kind: ErrorKind,
    message: String,
}

#[derive(Debug)]
enum ErrorKind {
    Native { domain: Quark, code: i32 },
    NullReturned { function: &'static str },
    InvalidArgument,
}

impl GlibError {
    /// Translates an owned native error, releasing its reference.
    pub(crate) fn from_native(native: NativeError) -> Self {
        Self {
            kind: ErrorKind::Native {
                domain: Quark::from_raw(native.domain()),
                code: native.code(),
            },
            message: native.message(),
            // `native` dropped here; the GError reference is released.
        }
    }

    pub(crate) fn null_returned(function: &'static str) -> Self {
        Self {
            kind: ErrorKind::NullReturned { function },
            message: format!("{function}() returned NULL without setting an error"),
        }
    }

    pub(crate) fn failed_without_error(function: &'static str) -> Self {
        Self {
            kind: ErrorKind::NullReturned { function },
            message: format!("{function}() reported failure without setting an error"),
        }
    }

    pub(crate) fn invalid_argument(message: String) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message,
        }
    }

    /// Drains an error slot after a native call signalled failure.
    ///
    /// If the native function broke its contract and set no error, a synthetic error
    /// naming it is produced instead.
    pub(crate) fn from_slot(mut slot: ErrorSlot, function: &'static str) -> Self {
        match slot.take() {
            Some(native) => Self::from_native(native),
            None => Self::failed_without_error(function),
        }
    }

    /// Checks an error slot after a native call signalled *success*.
    ///
    /// A set slot here is a contract violation by the native function; the error is
    /// surfaced anyway (and its reference released), rather than silently dropped.
    pub(crate) fn expect_clear(mut slot: ErrorSlot, _function: &'static str) -> Result<()> {
        match slot.take() {
            None => Ok(()),
            Some(native) => Err(Self::from_native(native)),
        }
    }

    /// The native error domain, for native failures.
    pub fn domain(&self) -> Option<Quark> {
        match self.kind {
            ErrorKind::Native { domain, .. } => Some(domain),
            _ => None,
        }
    }

    /// The domain-specific error code, for native failures.
    pub fn code(&self) -> Option<i32> {
        match self.kind {
            ErrorKind::Native { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The human-readable message. Always present, for every kind.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is a native failure from `domain` with `code`.
    pub fn matches(&self, domain: Quark, code: i32) -> bool {
        matches!(self.kind, ErrorKind::Native { domain: d, code: c } if d == domain && c == code)
    }

    /// Whether the wrapper rejected an argument before the native call.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// The native function that returned null or failed silently, if that is the cause.
    pub fn failed_function(&self) -> Option<&'static str> {
        match self.kind {
            ErrorKind::NullReturned { function } => Some(function),
            _ => None,
        }
    }
}

impl fmt::Display for GlibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Native { domain, code } => {
                let domain = domain.name().unwrap_or_else(|| format!("domain#{}", domain.raw()));
                write!(f, "{} ({domain}, code {code})", self.message)
            }
            ErrorKind::NullReturned { .. } | ErrorKind::InvalidArgument => {
                write!(f, "{}", self.message)
            }
        }
    }
}

impl Error for GlibError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_return_mentions_function() {
        let err = GlibError::null_returned("g_example_new");
        assert_eq!(err.failed_function(), Some("g_example_new"));
        assert!(err.message().contains("g_example_new"));
        assert!(err.domain().is_none());
        assert!(err.code().is_none());
    }

    #[test]
    fn invalid_argument_kind() {
        let err = GlibError::invalid_argument("bad".into());
        assert!(err.is_invalid_argument());
        assert_eq!(err.message(), "bad");
    }

    #[test]
    fn clear_slot_is_ok() {
        let slot = ErrorSlot::new();
        assert!(GlibError::expect_clear(slot, "g_example_call").is_ok());
    }
}
