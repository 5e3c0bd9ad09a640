// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `with_transaction` generator.
//!
//! Every operation takes `tx: Option<&mut P::Tx>`; passing `Some` runs it on
//! that unit of work. The generated `with_transaction` delegates to
//! `daogen_core::with_transaction`, which begins, commits, or rolls back
//! around a body that threads the handle through its calls:
//!
//! ```rust,ignore
//! dao.with_transaction(async |tx| {
//!     dao.create(Some(&mut *tx), &order).await?;
//!     dao.delete_by_pk(Some(&mut *tx), &draft_id).await
//! })
//! .await?;
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::context::Context;

impl Context<'_> {
    /// Generate the `with_transaction` method.
    pub fn with_transaction_method(&self) -> TokenStream {
        quote! {
            /// Run `body` in a new transaction.
            ///
            /// Commits when `body` returns `Ok` and rolls back when it returns
            /// `Err`. A failed rollback is reported together with the body's
            /// error.
            pub async fn with_transaction<T, E, F>(
                &self,
                body: F
            ) -> Result<T, daogen_core::TransactionError<P::Error, E>>
            where
                F: AsyncFnOnce(&mut P::Tx) -> Result<T, E>
            {
                daogen_core::with_transaction(&self.pool, body).await
            }
        }
    }
}
