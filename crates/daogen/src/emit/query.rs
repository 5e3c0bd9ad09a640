// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filtered query generators.
//!
//! `find_one`, `find_all`, `find_paginated` and `count` take raw `WHERE` and
//! `ORDER BY` fragments plus positional arguments. Fragments are appended
//! verbatim when non-empty; they are neither parsed nor escaped, and the
//! caller writes placeholders in the dialect's own spelling.

use proc_macro2::TokenStream;
use quote::quote;

use super::context::Context;

/// Doc paragraph attached to every method taking raw fragments.
const RAW_FRAGMENT_DOC: &str = " `where_clause` and `order_by` are inserted into the statement verbatim. \
                                Never build them from untrusted input; bind values through `args`.";

impl Context<'_> {
    /// Generate the `find_one` method.
    pub fn find_one_method(&self) -> TokenStream {
        let Self {
            entity,
            select_sql,
            ..
        } = self;

        quote! {
            /// Fetch the first row matching the filter.
            ///
            #[doc = #RAW_FRAGMENT_DOC]
            pub async fn find_one(
                &self,
                tx: Option<&mut P::Tx>,
                where_clause: &str,
                order_by: &str,
                args: Vec<daogen_core::Value>
            ) -> Result<Option<#entity>, P::Error> {
                let sql = Self::SYNTAX.filter(#select_sql, where_clause, order_by);
                let row = daogen_core::fetch_optional(&self.pool, tx, &sql, args).await?;
                row.as_ref().map(Self::from_row).transpose()
            }
        }
    }

    /// Generate the `find_all` method.
    pub fn find_all_method(&self) -> TokenStream {
        let Self {
            entity,
            select_sql,
            ..
        } = self;

        quote! {
            /// Fetch every row matching the filter.
            ///
            #[doc = #RAW_FRAGMENT_DOC]
            pub async fn find_all(
                &self,
                tx: Option<&mut P::Tx>,
                where_clause: &str,
                order_by: &str,
                args: Vec<daogen_core::Value>
            ) -> Result<Vec<#entity>, P::Error> {
                let sql = Self::SYNTAX.filter(#select_sql, where_clause, order_by);
                let rows = daogen_core::fetch_all(&self.pool, tx, &sql, args).await?;
                rows.iter().map(Self::from_row).collect()
            }
        }
    }

    /// Generate the `find_paginated` method.
    ///
    /// # SQL Pattern
    ///
    /// ```sql
    /// SELECT .. FROM t [WHERE ..] [ORDER BY ..] LIMIT n OFFSET m           -- postgres, mysql, sqlite
    /// SELECT .. FROM t [WHERE ..] ORDER BY .. OFFSET m ROWS FETCH NEXT n ROWS ONLY  -- sqlserver, oracle
    /// ```
    pub fn find_paginated_method(&self) -> TokenStream {
        let Self {
            entity,
            select_sql,
            ..
        } = self;

        quote! {
            /// Fetch one page of rows matching the filter.
            ///
            #[doc = #RAW_FRAGMENT_DOC]
            pub async fn find_paginated(
                &self,
                tx: Option<&mut P::Tx>,
                where_clause: &str,
                order_by: &str,
                limit: u64,
                offset: u64,
                args: Vec<daogen_core::Value>
            ) -> Result<Vec<#entity>, P::Error> {
                let sql = Self::SYNTAX.filter(#select_sql, where_clause, order_by);
                let sql = Self::SYNTAX.paginate(&sql, limit, offset, !order_by.trim().is_empty());
                let rows = daogen_core::fetch_all(&self.pool, tx, &sql, args).await?;
                rows.iter().map(Self::from_row).collect()
            }
        }
    }

    /// Generate the `count` method.
    pub fn count_method(&self) -> TokenStream {
        let count_sql = &self.count_sql;

        quote! {
            /// Count rows matching the filter.
            ///
            /// `where_clause` is inserted into the statement verbatim. Never build
            /// it from untrusted input; bind values through `args`.
            pub async fn count(
                &self,
                tx: Option<&mut P::Tx>,
                where_clause: &str,
                args: Vec<daogen_core::Value>
            ) -> Result<i64, P::Error> {
                let sql = Self::SYNTAX.filter(#count_sql, where_clause, "");
                let row = daogen_core::fetch_optional(&self.pool, tx, &sql, args).await?;
                match row {
                    Some(row) => Ok(row.get(0)?),
                    None => Ok(0)
                }
            }
        }
    }
}
