// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level `#[dao(...)]` options parsed with darling.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `table` | type name | Table name, unless a `table_name()` accessor exists |
//! | `skip` | `false` | Exclude the struct from generation |

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, ItemStruct};

/// Options read from `#[dao(...)]`.
///
/// ```rust,ignore
/// #[dao(table = "accounts")]
/// pub struct Account { /* ... */ }
///
/// #[dao(skip)]
/// pub struct Scratch { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(dao), supports(struct_named))]
pub struct DaoOptions {
    /// Struct identifier.
    pub ident: Ident,

    /// Table name override.
    #[darling(default)]
    pub table: Option<String>,

    /// Exclude the struct.
    #[darling(default)]
    pub skip: bool
}

impl DaoOptions {
    /// Parse the options of a struct item.
    ///
    /// # Errors
    ///
    /// Returns darling's error for unknown options or malformed values.
    pub fn from_item(item: &ItemStruct) -> darling::Result<Self> {
        Self::from_derive_input(&DeriveInput::from(item.clone()))
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn defaults_without_attribute() {
        let item: ItemStruct = parse_quote! {
            pub struct User { pub id: i64 }
        };
        let options = DaoOptions::from_item(&item).unwrap();
        assert_eq!(options.ident, "User");
        assert!(options.table.is_none());
        assert!(!options.skip);
    }

    #[test]
    fn table_and_skip() {
        let item: ItemStruct = parse_quote! {
            #[dao(table = "accounts", skip)]
            pub struct Account { pub id: i64 }
        };
        let options = DaoOptions::from_item(&item).unwrap();
        assert_eq!(options.table.as_deref(), Some("accounts"));
        assert!(options.skip);
    }

    #[test]
    fn unknown_option_rejected() {
        let item: ItemStruct = parse_quote! {
            #[dao(schema = "public")]
            pub struct Account { pub id: i64 }
        };
        assert!(DaoOptions::from_item(&item).is_err());
    }
}
