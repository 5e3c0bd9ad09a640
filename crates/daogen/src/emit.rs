// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DAO emitter.
//!
//! [`emit`] renders one [`Model`] for one dialect into the source text of a
//! Rust module. Tokens are assembled with `quote`, checked by re-parsing them
//! as a `syn::File`, and pretty-printed with `prettyplease`. The output is a
//! pure function of its inputs.
//!
//! # Generated Code
//!
//! For a `User` model and the `postgres` dialect:
//!
//! | Item | Description |
//! |------|-------------|
//! | `use daogen_core::dialect::Postgres;` | Dialect marker import |
//! | `pub use app::models::User;` | Re-export of the model (`crate::models::User` inside its own crate) |
//! | `UserColumn` | Column enum with `ALL` and `name()` |
//! | `UserPatch` | Typed partial-update builder |
//! | `UserDao<P>` | DAO bound by `P: Pool<Dialect = Postgres>` |
//!
//! `UserDao` operations, in order: `create`, `update`, `partial_update`,
//! `delete_by_pk`, `find_by_pk`, `create_many`, `update_many`,
//! `delete_many_by_pks`, `find_one`, `find_all`, `find_paginated`, `count`,
//! `with_transaction`.
//!
//! The file has no inner attributes, so it can be pulled in with
//! `include!`.

mod batch;
mod context;
mod crud;
mod patch;
mod query;
mod transaction;

use context::Context;
use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    dialect::DialectDescriptor,
    error::{Error, Result},
    model::Model
};

/// Render the DAO source for `model` in `dialect`.
///
/// # Errors
///
/// [`Error::Render`] when a path of the model or dialect is not valid Rust,
/// when two fields collide on a column enum variant, or when the assembled
/// tokens do not parse as a Rust file.
pub fn emit(model: &Model, dialect: &DialectDescriptor) -> Result<String> {
    let ctx = Context::new(model, dialect)?;
    let tokens = ctx.file();
    let file = syn::parse2::<syn::File>(tokens).map_err(|source| Error::Render {
        model: model.name().to_owned(),
        source
    })?;
    tracing::debug!(model = %model.name(), dialect = %dialect.id(), "emitted");
    Ok(format!("{}\n{}", ctx.header(), prettyplease::unparse(&file)))
}

/// Output file name for `model`, e.g. `order_line_dao.rs` for `OrderLine`.
#[must_use]
pub fn file_name(model: &Model) -> String {
    format!("{}_dao.rs", model.name().to_case(Case::Snake))
}

impl Context<'_> {
    fn header(&self) -> String {
        format!(
            "// Code generated by daogen. DO NOT EDIT.\n// Model: {}::{}\n// Dialect: {}\n",
            self.model.import_path(),
            self.model.name(),
            self.dialect.id()
        )
    }

    fn file(&self) -> TokenStream {
        let Self {
            entity,
            dao,
            import_path,
            marker,
            marker_ident,
            type_imports,
            model,
            dialect,
            ..
        } = self;
        let dao_doc = format!(
            "Data access object for [`{entity}`] rows in `{}` ({}).",
            model.table_name(),
            dialect.id()
        );

        let column_enum = self.column_enum();
        let patch = self.patch_struct();
        let constants = self.constants();
        let helpers = self.helpers();
        let methods = [
            self.create_method(),
            self.update_method(),
            self.partial_update_method(),
            self.delete_by_pk_method(),
            self.find_by_pk_method(),
            self.create_many_method(),
            self.update_many_method(),
            self.delete_many_by_pks_method(),
            self.find_one_method(),
            self.find_all_method(),
            self.find_paginated_method(),
            self.count_method(),
            self.with_transaction_method()
        ];

        quote! {
            use #marker;
            #(use #type_imports;)*

            pub use #import_path::#entity;

            #column_enum

            #patch

            #[doc = #dao_doc]
            #[derive(Debug, Clone)]
            pub struct #dao<P> {
                pool: P
            }

            impl<P> #dao<P>
            where
                P: daogen_core::Pool<Dialect = #marker_ident>
            {
                #constants

                #helpers

                #(#methods)*
            }
        }
    }
}
