/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Types and traits related to objects.
//!
//! The most important symbols in this module are:
//! * [`GioClass`], the trait implemented by every wrapped native class.
//! * [`Obj`], the owning smart pointer for native objects.
//! * [`Inherits`], the trait modelling the native inheritance relation.

mod obj;
mod raw;
mod rtti;
mod traits;

pub use obj::Obj;
pub use traits::{GioClass, Inherits, NoBase};

pub(crate) use raw::RawObj;
