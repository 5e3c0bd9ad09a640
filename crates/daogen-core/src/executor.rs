// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Driver seam.
//!
//! A database driver integrates with generated DAOs by implementing three
//! traits:
//!
//! - [`Executor`] runs one statement with positional [`Value`] arguments
//! - [`Transaction`] is an executor that can be committed or rolled back
//! - [`Pool`] hands out connections and begins transactions, and fixes the
//!   [`Dialect`] its DAOs render SQL for
//!
//! Generated operations take `tx: Option<&mut P::Tx>` and route through
//! [`execute`], [`fetch_all`] and [`fetch_optional`]: a transaction handle
//! runs the statement inside that unit of work, `None` acquires a fresh
//! connection from the pool.

use std::error::Error as StdError;

use crate::{dialect::Dialect, row::Row, value::DecodeError, value::Value};

/// Runs SQL statements.
#[allow(async_fn_in_trait)]
pub trait Executor: Send {
    /// Driver error type.
    type Error: StdError + From<DecodeError> + Send + Sync + 'static;

    /// Execute a statement, returning the number of affected rows.
    async fn execute(&mut self, sql: &str, args: Vec<Value>) -> Result<u64, Self::Error>;

    /// Run a query and collect every row.
    async fn fetch_all(&mut self, sql: &str, args: Vec<Value>) -> Result<Vec<Row>, Self::Error>;

    /// Run a query and return its first row, if any.
    async fn fetch_optional(
        &mut self,
        sql: &str,
        args: Vec<Value>
    ) -> Result<Option<Row>, Self::Error>;
}

/// An open unit of work.
///
/// Dropping a transaction without calling [`Transaction::commit`] must not
/// commit it.
#[allow(async_fn_in_trait)]
pub trait Transaction: Executor + Sized {
    /// Commit the transaction.
    async fn commit(self) -> Result<(), Self::Error>;

    /// Roll the transaction back.
    async fn rollback(self) -> Result<(), Self::Error>;
}

/// Source of connections and transactions for one dialect.
#[allow(async_fn_in_trait)]
pub trait Pool: Send + Sync {
    /// Dialect the pool speaks.
    type Dialect: Dialect;

    /// Driver error type shared by connections and transactions.
    type Error: StdError + From<DecodeError> + Send + Sync + 'static;

    /// Pooled connection.
    type Connection: Executor<Error = Self::Error>;

    /// Transaction handle.
    type Tx: Transaction<Error = Self::Error>;

    /// Acquire a connection.
    async fn acquire(&self) -> Result<Self::Connection, Self::Error>;

    /// Begin a transaction.
    async fn begin(&self) -> Result<Self::Tx, Self::Error>;
}

/// Execute a statement on `tx`, or on a pooled connection when `tx` is `None`.
///
/// # Errors
///
/// Returns the driver error unchanged.
pub async fn execute<P: Pool>(
    pool: &P,
    tx: Option<&mut P::Tx>,
    sql: &str,
    args: Vec<Value>
) -> Result<u64, P::Error> {
    tracing::trace!(sql, args = args.len(), in_transaction = tx.is_some(), "execute");
    match tx {
        Some(tx) => tx.execute(sql, args).await,
        None => {
            let mut conn = pool.acquire().await?;
            conn.execute(sql, args).await
        }
    }
}

/// Fetch every row on `tx`, or on a pooled connection when `tx` is `None`.
///
/// # Errors
///
/// Returns the driver error unchanged.
pub async fn fetch_all<P: Pool>(
    pool: &P,
    tx: Option<&mut P::Tx>,
    sql: &str,
    args: Vec<Value>
) -> Result<Vec<Row>, P::Error> {
    tracing::trace!(sql, args = args.len(), in_transaction = tx.is_some(), "fetch_all");
    match tx {
        Some(tx) => tx.fetch_all(sql, args).await,
        None => {
            let mut conn = pool.acquire().await?;
            conn.fetch_all(sql, args).await
        }
    }
}

/// Fetch the first row on `tx`, or on a pooled connection when `tx` is `None`.
///
/// # Errors
///
/// Returns the driver error unchanged.
pub async fn fetch_optional<P: Pool>(
    pool: &P,
    tx: Option<&mut P::Tx>,
    sql: &str,
    args: Vec<Value>
) -> Result<Option<Row>, P::Error> {
    tracing::trace!(sql, args = args.len(), in_transaction = tx.is_some(), "fetch_optional");
    match tx {
        Some(tx) => tx.fetch_optional(sql, args).await,
        None => {
            let mut conn = pool.acquire().await?;
            conn.fetch_optional(sql, args).await
        }
    }
}
