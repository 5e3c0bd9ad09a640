// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed partial updates.
//!
//! Instead of an untyped column map, every DAO gets a column enum and a
//! patch builder with one setter per non-primary field:
//!
//! ```rust,ignore
//! let patch = UserPatch::new().set_name("Ada".into()).set_email(None);
//! dao.partial_update(None, &7, patch).await?;
//! // UPDATE users SET name = $1, email = $2 WHERE id = $3
//! ```
//!
//! Setting the same column twice keeps the last value in its original
//! position.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::context::Context;
use crate::utils::ident;

impl Context<'_> {
    /// Generate the `{Name}Column` enum.
    ///
    /// # Generated Code
    ///
    /// ```rust,ignore
    /// pub enum UserColumn { Id, Name, Email }
    ///
    /// impl UserColumn {
    ///     pub const ALL: [Self; 3] = [Self::Id, Self::Name, Self::Email];
    ///     pub const fn name(self) -> &'static str { /* ... */ }
    /// }
    /// ```
    pub fn column_enum(&self) -> TokenStream {
        let Self {
            entity,
            column_enum,
            model,
            variants,
            ..
        } = self;
        let columns = model.fields().iter().map(|f| f.column());
        let count = Literal::usize_unsuffixed(variants.len());
        let doc = format!("Columns of [`{entity}`].");

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum #column_enum {
                #(#variants),*
            }

            impl #column_enum {
                /// Every column in declaration order.
                pub const ALL: [Self; #count] = [#(Self::#variants),*];

                /// SQL column name.
                pub const fn name(self) -> &'static str {
                    match self {
                        #(Self::#variants => #columns),*
                    }
                }
            }
        }
    }

    /// Generate the `{Name}Patch` builder.
    pub fn patch_struct(&self) -> TokenStream {
        let Self {
            dao,
            column_enum,
            patch,
            model,
            ..
        } = self;
        let setters: Vec<_> = model
            .fields()
            .iter()
            .zip(&self.variants)
            .filter(|(f, _)| !f.is_primary())
            .map(|(f, variant)| {
                let setter = ident(&format!("set_{}", f.name()));
                let ty = f.ty();
                let doc = format!("Set column `{}`.", f.column());
                quote! {
                    #[doc = #doc]
                    #[must_use]
                    pub fn #setter(mut self, value: #ty) -> Self {
                        self.set(#column_enum::#variant, daogen_core::Encode::encode(&value));
                        self
                    }
                }
            })
            .collect();
        let set = (!setters.is_empty()).then(|| {
            quote! {
                fn set(&mut self, column: #column_enum, value: daogen_core::Value) {
                    match self.changes.iter_mut().find(|(existing, _)| *existing == column) {
                        Some(entry) => entry.1 = value,
                        None => self.changes.push((column, value))
                    }
                }
            }
        });
        let doc = format!("Column changes applied by [`{dao}::partial_update`].");

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct #patch {
                changes: Vec<(#column_enum, daogen_core::Value)>
            }

            impl #patch {
                /// Empty patch.
                pub fn new() -> Self {
                    Self::default()
                }

                #(#setters)*

                /// Check for a patch without changes.
                pub fn is_empty(&self) -> bool {
                    self.changes.is_empty()
                }

                /// Number of changed columns.
                pub fn len(&self) -> usize {
                    self.changes.len()
                }

                /// Changes in the order they were first set.
                pub fn changes(&self) -> &[(#column_enum, daogen_core::Value)] {
                    &self.changes
                }

                #set
            }
        }
    }

    /// Generate the `partial_update` method.
    ///
    /// The `SET` list is built at run time from the patch; an empty patch
    /// returns without executing anything.
    pub fn partial_update_method(&self) -> TokenStream {
        let Self {
            patch,
            pk_type,
            ..
        } = self;
        if self.update_sql.is_none() {
            return quote! {
                /// Apply a patch to the row with primary key `pk`.
                ///
                /// The model has no non-primary column, so every patch is empty.
                pub async fn partial_update(
                    &self,
                    _tx: Option<&mut P::Tx>,
                    _pk: &#pk_type,
                    _patch: #patch
                ) -> Result<(), P::Error> {
                    Ok(())
                }
            };
        }

        quote! {
            /// Apply a patch to the row with primary key `pk`.
            ///
            /// An empty patch succeeds without executing a statement.
            pub async fn partial_update(
                &self,
                tx: Option<&mut P::Tx>,
                pk: &#pk_type,
                patch: #patch
            ) -> Result<(), P::Error> {
                if patch.is_empty() {
                    return Ok(());
                }
                let (columns, mut args): (Vec<&str>, Vec<daogen_core::Value>) = patch
                    .changes
                    .into_iter()
                    .map(|(column, value)| (column.name(), value))
                    .unzip();
                args.push(daogen_core::Encode::encode(pk));
                let sql = Self::SYNTAX.update(Self::TABLE, &columns, Self::PRIMARY_KEY);
                daogen_core::execute(&self.pool, tx, &sql, args).await?;
                Ok(())
            }
        }
    }
}
