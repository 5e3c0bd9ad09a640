// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # daogen-derive
//!
//! `#[derive(Dao)]` registers the `dao` and `sql` attributes read by the
//! `daogen` generator and checks them at compile time. It expands to
//! nothing; DAOs themselves are produced by `daogen` (CLI or build script).
//!
//! ```rust,ignore
//! use daogen_derive::Dao;
//!
//! #[derive(Dao)]
//! #[dao(table = "users")]
//! pub struct User {
//!     #[sql("id,primary")]
//!     pub id: i64,
//!     #[sql("full_name")]
//!     pub name: String,
//! }
//! ```

mod dao;

use proc_macro::TokenStream;

/// Validate a daogen model.
///
/// # Checks
///
/// | Check | Error |
/// |-------|-------|
/// | struct with named fields | `Unsupported shape` |
/// | no generic parameters | `generic structs cannot be models` |
/// | `#[dao(...)]` holds only `table` and `skip` | `Unknown field` |
/// | every `#[sql]` is a single string literal | `expected a string literal` |
/// | `#[sql]` only on `pub` fields | `ignored on non-public field` |
/// | at least one `pub` field | `no public fields` |
/// | exactly one `primary` marker | `no primary key` / `duplicate primary key` |
///
/// `#[dao(skip)]` turns every check off except the attribute syntax.
#[proc_macro_derive(Dao, attributes(dao, sql))]
pub fn derive_dao(input: TokenStream) -> TokenStream {
    dao::derive(input)
}
