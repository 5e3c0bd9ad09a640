// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier helpers shared by the parser and the emitter.

use proc_macro2::{Ident, Span};

/// Build an identifier from a name taken out of source code.
///
/// Keywords become raw identifiers (`type` -> `r#type`). The few keywords
/// that cannot be raw (`self`, `Self`, `super`, `crate`) get a trailing
/// underscore.
pub fn ident(name: &str) -> Ident {
    if let Ok(ident) = syn::parse_str::<Ident>(name) {
        return ident;
    }
    match name {
        "self" | "Self" | "super" | "crate" | "_" => Ident::new(&format!("{name}_"), Span::call_site()),
        _ => Ident::new_raw(name, Span::call_site())
    }
}
