// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Batch method generators.
//!
//! | Method | Statements | Empty input |
//! |--------|------------|-------------|
//! | `create_many` | one multi-row insert | nothing executed |
//! | `update_many` | one `update` per row, stops at the first error | nothing executed |
//! | `delete_many_by_pks` | one `DELETE .. WHERE pk IN (..)` | nothing executed |
//!
//! Statement text depends on the input length and is rendered at run time
//! by the dialect's `daogen_core::Syntax`.

use proc_macro2::TokenStream;
use quote::quote;

use super::context::Context;

impl Context<'_> {
    /// Generate the `create_many` method.
    ///
    /// # Generated Code
    ///
    /// ```rust,ignore
    /// let Some(sql) = Self::SYNTAX.insert_many(Self::TABLE, &Self::COLUMNS, entities.len()) else {
    ///     return Ok(());
    /// };
    /// let args = entities.iter().flat_map(Self::values).collect();
    /// daogen_core::execute(&self.pool, tx, &sql, args).await?;
    /// ```
    pub fn create_many_method(&self) -> TokenStream {
        let entity = &self.entity;

        quote! {
            /// Insert every entity with a single statement.
            ///
            /// Placeholders are numbered continuously across rows.
            pub async fn create_many(&self, tx: Option<&mut P::Tx>, entities: &[#entity]) -> Result<(), P::Error> {
                let Some(sql) = Self::SYNTAX.insert_many(Self::TABLE, &Self::COLUMNS, entities.len()) else {
                    return Ok(());
                };
                let args = entities.iter().flat_map(Self::values).collect();
                daogen_core::execute(&self.pool, tx, &sql, args).await?;
                Ok(())
            }
        }
    }

    /// Generate the `update_many` method.
    pub fn update_many_method(&self) -> TokenStream {
        let entity = &self.entity;

        quote! {
            /// Update every entity in order, one statement each.
            ///
            /// The first failure aborts the loop and is returned; rows updated
            /// before it stay updated unless `tx` is rolled back.
            pub async fn update_many(&self, mut tx: Option<&mut P::Tx>, entities: &[#entity]) -> Result<(), P::Error> {
                for entity in entities {
                    self.update(tx.as_deref_mut(), entity).await?;
                }
                Ok(())
            }
        }
    }

    /// Generate the `delete_many_by_pks` method.
    pub fn delete_many_by_pks_method(&self) -> TokenStream {
        let pk_type = self.pk_type;

        quote! {
            /// Delete every row whose primary key is in `pks`.
            pub async fn delete_many_by_pks(&self, tx: Option<&mut P::Tx>, pks: &[#pk_type]) -> Result<(), P::Error> {
                let Some(sql) = Self::SYNTAX.delete_in(Self::TABLE, Self::PRIMARY_KEY, pks.len()) else {
                    return Ok(());
                };
                let args = pks.iter().map(daogen_core::Encode::encode).collect();
                daogen_core::execute(&self.pool, tx, &sql, args).await?;
                Ok(())
            }
        }
    }
}
