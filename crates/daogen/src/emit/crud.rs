// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Single-row method generators.
//!
//! | Method | SQL |
//! |--------|-----|
//! | [`create`](Context::create_method) | `INSERT INTO t (..) VALUES (..)` |
//! | [`update`](Context::update_method) | `UPDATE t SET .. WHERE pk = ..` |
//! | [`delete_by_pk`](Context::delete_by_pk_method) | `DELETE FROM t WHERE pk = ..` |
//! | [`find_by_pk`](Context::find_by_pk_method) | `SELECT .. FROM t WHERE pk = ..` |
//!
//! Every statement here is rendered at generation time and embedded as a
//! string literal.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::context::Context;
use crate::utils::ident;

impl Context<'_> {
    /// Generate the `TABLE`, `COLUMNS`, `PRIMARY_KEY` and `SYNTAX` constants.
    pub fn constants(&self) -> TokenStream {
        let Self {
            model,
            columns,
            marker_ident,
            ..
        } = self;
        let table = model.table_name();
        let primary = model.primary_field().column();
        let count = Literal::usize_unsuffixed(columns.len());

        quote! {
            /// Table name.
            pub const TABLE: &'static str = #table;

            /// Column names in field order.
            pub const COLUMNS: [&'static str; #count] = [#(#columns),*];

            /// Primary key column.
            pub const PRIMARY_KEY: &'static str = #primary;

            const SYNTAX: daogen_core::Syntax = <#marker_ident as daogen_core::Dialect>::SYNTAX;
        }
    }

    /// Generate `new`, `pool`, `from_row` and `values`.
    ///
    /// # Generated Code
    ///
    /// ```rust,ignore
    /// fn from_row(row: &daogen_core::Row) -> Result<User, P::Error> {
    ///     Ok(User { id: row.get(0)?, name: row.get(1)? })
    /// }
    ///
    /// fn values(entity: &User) -> Vec<daogen_core::Value> {
    ///     vec![daogen_core::Encode::encode(&entity.id), daogen_core::Encode::encode(&entity.name)]
    /// }
    /// ```
    pub fn helpers(&self) -> TokenStream {
        let Self {
            entity,
            model,
            ..
        } = self;
        let fields: Vec<_> = model.fields().iter().map(|f| ident(f.name())).collect();
        let indices: Vec<_> = (0..fields.len()).map(Literal::usize_unsuffixed).collect();

        // structs with private fields cannot be built with a literal
        let from_row = if model.is_exhaustive() {
            quote! {
                Ok(#entity {
                    #(#fields: row.get(#indices)?),*
                })
            }
        } else {
            quote! {
                let mut entity = <#entity as Default>::default();
                #(entity.#fields = row.get(#indices)?;)*
                Ok(entity)
            }
        };

        quote! {
            /// Wrap a pool.
            pub const fn new(pool: P) -> Self {
                Self { pool }
            }

            /// Underlying pool.
            pub const fn pool(&self) -> &P {
                &self.pool
            }

            fn from_row(row: &daogen_core::Row) -> Result<#entity, P::Error> {
                #from_row
            }

            fn values(entity: &#entity) -> Vec<daogen_core::Value> {
                vec![#(daogen_core::Encode::encode(&entity.#fields)),*]
            }
        }
    }

    /// Generate the `create` method.
    pub fn create_method(&self) -> TokenStream {
        let Self {
            entity,
            insert_sql,
            ..
        } = self;

        quote! {
            /// Insert one row.
            pub async fn create(&self, tx: Option<&mut P::Tx>, entity: &#entity) -> Result<(), P::Error> {
                daogen_core::execute(&self.pool, tx, #insert_sql, Self::values(entity)).await?;
                Ok(())
            }
        }
    }

    /// Generate the `update` method.
    ///
    /// Without non-primary fields there is nothing to set and the method
    /// succeeds without executing a statement.
    pub fn update_method(&self) -> TokenStream {
        let Self {
            entity,
            pk_field,
            model,
            ..
        } = self;

        let Some(update_sql) = &self.update_sql else {
            return quote! {
                /// Update every non-primary column of the row.
                ///
                /// The model has no non-primary column, so nothing is executed.
                pub async fn update(&self, _tx: Option<&mut P::Tx>, _entity: &#entity) -> Result<(), P::Error> {
                    Ok(())
                }
            };
        };
        let set_fields = model.value_fields().map(|f| ident(f.name()));

        quote! {
            /// Update every non-primary column of the row, matched by primary key.
            pub async fn update(&self, tx: Option<&mut P::Tx>, entity: &#entity) -> Result<(), P::Error> {
                let args = vec![
                    #(daogen_core::Encode::encode(&entity.#set_fields),)*
                    daogen_core::Encode::encode(&entity.#pk_field)
                ];
                daogen_core::execute(&self.pool, tx, #update_sql, args).await?;
                Ok(())
            }
        }
    }

    /// Generate the `delete_by_pk` method.
    pub fn delete_by_pk_method(&self) -> TokenStream {
        let Self {
            pk_type,
            delete_sql,
            ..
        } = self;

        quote! {
            /// Delete the row with primary key `pk`.
            pub async fn delete_by_pk(&self, tx: Option<&mut P::Tx>, pk: &#pk_type) -> Result<(), P::Error> {
                daogen_core::execute(&self.pool, tx, #delete_sql, vec![daogen_core::Encode::encode(pk)]).await?;
                Ok(())
            }
        }
    }

    /// Generate the `find_by_pk` method.
    pub fn find_by_pk_method(&self) -> TokenStream {
        let Self {
            entity,
            pk_type,
            select_pk_sql,
            ..
        } = self;

        quote! {
            /// Fetch the row with primary key `pk`.
            pub async fn find_by_pk(&self, tx: Option<&mut P::Tx>, pk: &#pk_type) -> Result<Option<#entity>, P::Error> {
                let row = daogen_core::fetch_optional(&self.pool, tx, #select_pk_sql, vec![daogen_core::Encode::encode(pk)]).await?;
                row.as_ref().map(Self::from_row).transpose()
            }
        }
    }
}
