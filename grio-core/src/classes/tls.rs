/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::{from_gboolean, ErrorSlot};

use crate::classes::{declare_class, Object};
use crate::meta::error::GlibError;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// An X.509 certificate, optionally with private key.
    TlsCertificate: Object {
        sys: gio_sys::GTlsCertificate,
        native: "GTlsCertificate",
        get_type: gio_sys::g_tls_certificate_get_type,
        inherits: [Object],
    }
}

impl TlsCertificate {
    /// [transfer-full] `g_tls_certificate_new_from_pem`
    ///
    /// Parse failures come back through the error out-parameter
    /// (`g-tls-error-quark` domain), translated verbatim.
    pub fn from_pem(pem: &str) -> Result<Obj<TlsCertificate>> {
        let mut error = ErrorSlot::new();
        let ptr = unsafe {
            gio_sys::g_tls_certificate_new_from_pem(
                pem.as_ptr().cast(),
                pem.len() as isize,
                error.as_out(),
            )
        };

        if ptr.is_null() {
            return Err(GlibError::from_slot(error, "g_tls_certificate_new_from_pem"));
        }
        GlibError::expect_clear(error, "g_tls_certificate_new_from_pem")?;
        unsafe { Obj::returned_full(ptr, "g_tls_certificate_new_from_pem") }
    }
}

pub trait TlsCertificateExt {
    /// [transfer-none] `g_tls_certificate_get_issuer` — borrowed; `None` for
    /// self-signed or unchained certificates.
    fn issuer(&self) -> Option<Obj<TlsCertificate>>;

    /// Compares the certificate data of `self` and `other`.
    fn is_same(&self, other: &Obj<TlsCertificate>) -> bool;
}

impl<T: Inherits<TlsCertificate>> TlsCertificateExt for Obj<T> {
    fn issuer(&self) -> Option<Obj<TlsCertificate>> {
        let ptr = unsafe { gio_sys::g_tls_certificate_get_issuer(self.sys_as::<TlsCertificate>()) };
        unsafe { Obj::returned_none_opt(ptr) }
    }

    fn is_same(&self, other: &Obj<TlsCertificate>) -> bool {
        from_gboolean(unsafe {
            gio_sys::g_tls_certificate_is_same(self.sys_as::<TlsCertificate>(), other.native())
        })
    }
}
