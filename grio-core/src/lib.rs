/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object lifecycle and class surface of grio.
//!
//! The central type is [`Obj<T>`][obj::Obj], a smart pointer that owns exactly one strong
//! reference to a native GObject instance. Construction either *adopts* a reference the
//! caller already owns (transfer-full) or *borrows* by adding a new one (transfer-none);
//! destruction releases exactly one reference. Every wrapped class in [`classes`] is a
//! marker type parameterizing `Obj<T>`, with its methods provided through extension
//! traits bounded on [`Inherits`][obj::Inherits].

pub use grio_ffi as sys;

pub mod classes;
pub mod meta;
pub mod obj;
pub mod registry;

pub use meta::error::{GlibError, Quark};

/// Result type used by all fallible adapters and forwarders.
pub type Result<T, E = GlibError> = std::result::Result<T, E>;
