/*
 * Copyright (c) grio contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Smoke tests through the facade crate and its prelude.

use grio::prelude::*;

#[test]
fn loopback_address_round_trips() {
    let addr = InetAddress::loopback(grio::sys::gio::G_SOCKET_FAMILY_IPV4).expect("loopback");
    assert!(addr.is_loopback());
    assert_eq!(addr.family(), grio::sys::gio::G_SOCKET_FAMILY_IPV4);
    assert_eq!(addr.to_address_string().expect("string"), "127.0.0.1");
}

#[test]
fn parsed_address_matches_input() {
    let addr = InetAddress::from_string("192.168.7.1").expect("parse");
    assert_eq!(addr.to_address_string().expect("string"), "192.168.7.1");
}

#[test]
fn unparsable_address_reports_the_constructor() {
    let err = InetAddress::from_string("not an ip").expect_err("must not parse");
    assert_eq!(err.failed_function(), Some("g_inet_address_new_from_string"));
}

#[test]
fn embedded_nul_is_rejected_before_the_call() {
    let err = InetAddress::from_string("127.0\0.1").expect_err("NUL byte");
    assert!(err.is_invalid_argument());
}

#[test]
fn application_id_validation() {
    assert!(Application::id_is_valid("org.example.App").expect("valid id"));
    assert!(!Application::id_is_valid("no dots allowed").expect("invalid id"));
}

#[test]
fn menus_are_assembled_and_frozen() {
    let menu = Menu::new().expect("menu");
    assert_eq!(menu.n_items(), 0);
    assert!(menu.is_mutable());

    menu.append(Some("Open"), Some("app.open")).expect("append");
    let item = MenuItem::new(Some("Quit"), Some("app.quit")).expect("item");
    menu.append_item(&item);
    assert_eq!(menu.n_items(), 2);

    menu.remove(0);
    assert_eq!(menu.n_items(), 1);

    menu.freeze();
    assert!(!menu.is_mutable());

    // A Menu is usable wherever a MenuModel is expected.
    let model: Obj<MenuModel> = menu.upcast();
    assert_eq!(model.n_items(), 1);
}

#[test]
fn broken_pem_is_a_native_error() {
    let err = TlsCertificate::from_pem("definitely not PEM").expect_err("must not parse");
    // Whatever the TLS backend, the failure carries a message for the caller.
    assert!(!err.message().is_empty());
}

#[test]
fn error_display_carries_domain_and_code() {
    let stream = MemoryInputStream::from_data(b"x").expect("stream");
    let token = Cancellable::new().expect("token");
    token.cancel();

    let mut buffer = [0u8; 1];
    let err = stream.read(&mut buffer, Some(&token)).expect_err("cancelled");
    let rendered = err.to_string();
    assert!(rendered.contains("g-io-error-quark"));
}
