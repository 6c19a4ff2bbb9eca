/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use grio_ffi::from_gboolean;

use crate::classes::{declare_class, Object};
use crate::meta::arg_string_opt;
use crate::obj::{Inherits, Obj};
use crate::Result;

declare_class! {
    /// Abstract menu representation.
    MenuModel: Object {
        sys: gio_sys::GMenuModel,
        native: "GMenuModel",
        get_type: gio_sys::g_menu_model_get_type,
        inherits: [Object],
    }
}

declare_class! {
    /// Mutable menu, the concrete [`MenuModel`].
    Menu: MenuModel {
        sys: gio_sys::GMenu,
        native: "GMenu",
        get_type: gio_sys::g_menu_get_type,
        inherits: [MenuModel, Object],
    }
}

declare_class! {
    /// A single menu entry, assembled before insertion into a [`Menu`].
    MenuItem: Object {
        sys: gio_sys::GMenuItem,
        native: "GMenuItem",
        get_type: gio_sys::g_menu_item_get_type,
        inherits: [Object],
    }
}

pub trait MenuModelExt {
    fn n_items(&self) -> i32;
    fn is_mutable(&self) -> bool;
}

impl<T: Inherits<MenuModel>> MenuModelExt for Obj<T> {
    fn n_items(&self) -> i32 {
        unsafe { gio_sys::g_menu_model_get_n_items(self.sys_as::<MenuModel>()) }
    }

    fn is_mutable(&self) -> bool {
        from_gboolean(unsafe { gio_sys::g_menu_model_is_mutable(self.sys_as::<MenuModel>()) })
    }
}

impl Menu {
    /// [transfer-full] `g_menu_new`
    pub fn new() -> Result<Obj<Menu>> {
        let ptr = unsafe { gio_sys::g_menu_new() };
        unsafe { Obj::returned_full(ptr, "g_menu_new") }
    }
}

pub trait MenuExt {
    /// Appends an entry; both label and action are nullable.
    fn append(&self, label: Option<&str>, detailed_action: Option<&str>) -> Result<()>;

    /// Appends a prepared item. The item is passed transfer-none; the menu copies it.
    fn append_item(&self, item: &Obj<MenuItem>);

    fn remove(&self, position: i32);

    /// Makes the menu immutable; observable through [`MenuModelExt::is_mutable`].
    fn freeze(&self);
}

impl<T: Inherits<Menu>> MenuExt for Obj<T> {
    fn append(&self, label: Option<&str>, detailed_action: Option<&str>) -> Result<()> {
        let c_label = arg_string_opt(label)?;
        let c_action = arg_string_opt(detailed_action)?;
        unsafe {
            gio_sys::g_menu_append(
                self.sys_as::<Menu>(),
                c_label.as_ref().map_or(std::ptr::null(), |s| s.as_ptr()),
                c_action.as_ref().map_or(std::ptr::null(), |s| s.as_ptr()),
            )
        };
        Ok(())
    }

    fn append_item(&self, item: &Obj<MenuItem>) {
        unsafe { gio_sys::g_menu_append_item(self.sys_as::<Menu>(), item.native()) }
    }

    fn remove(&self, position: i32) {
        unsafe { gio_sys::g_menu_remove(self.sys_as::<Menu>(), position) }
    }

    fn freeze(&self) {
        unsafe { gio_sys::g_menu_freeze(self.sys_as::<Menu>()) }
    }
}

impl MenuItem {
    /// [transfer-full] `g_menu_item_new`; both arguments nullable.
    pub fn new(label: Option<&str>, detailed_action: Option<&str>) -> Result<Obj<MenuItem>> {
        let c_label = arg_string_opt(label)?;
        let c_action = arg_string_opt(detailed_action)?;
        let ptr = unsafe {
            gio_sys::g_menu_item_new(
                c_label.as_ref().map_or(std::ptr::null(), |s| s.as_ptr()),
                c_action.as_ref().map_or(std::ptr::null(), |s| s.as_ptr()),
            )
        };
        unsafe { Obj::returned_full(ptr, "g_menu_item_new") }
    }
}

pub trait MenuItemExt {
    /// Sets or clears (on `None`) the label.
    fn set_label(&self, label: Option<&str>) -> Result<()>;

    fn set_detailed_action(&self, detailed_action: &str) -> Result<()>;
}

impl<T: Inherits<MenuItem>> MenuItemExt for Obj<T> {
    fn set_label(&self, label: Option<&str>) -> Result<()> {
        let c_label = arg_string_opt(label)?;
        unsafe {
            gio_sys::g_menu_item_set_label(
                self.sys_as::<MenuItem>(),
                c_label.as_ref().map_or(std::ptr::null(), |s| s.as_ptr()),
            )
        };
        Ok(())
    }

    fn set_detailed_action(&self, detailed_action: &str) -> Result<()> {
        let c_action = crate::meta::arg_string(detailed_action)?;
        unsafe {
            gio_sys::g_menu_item_set_detailed_action(self.sys_as::<MenuItem>(), c_action.as_ptr())
        };
        Ok(())
    }
}
