// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transaction support for generated DAOs.
//!
//! Generated operations never look up an ambient transaction. The caller
//! passes the handle explicitly, and [`with_transaction`] owns the begin,
//! commit and rollback around a body that receives `&mut P::Tx`.
//!
//! # Outcomes
//!
//! | Body | Finalizer | Result |
//! |------|-----------|--------|
//! | `Ok(v)` | commit ok | `Ok(v)` |
//! | `Ok(_)` | commit fails with `d` | [`TransactionError::Commit`]`(d)` |
//! | `Err(e)` | rollback ok | [`TransactionError::Operation`]`(e)` |
//! | `Err(e)` | rollback fails with `d` | [`TransactionError::Rollback`] `{ operation: e, rollback: d }` |
//!
//! A failed `begin` yields [`TransactionError::Begin`] without running the
//! body.
//!
//! # Example
//!
//! ```rust,ignore
//! use daogen_core::prelude::*;
//!
//! let dao = UserDao::new(pool);
//! dao.with_transaction(async |tx| {
//!     dao.create(Some(&mut *tx), &alice).await?;
//!     dao.create(Some(&mut *tx), &bob).await
//! })
//! .await?;
//! ```

use std::{error::Error as StdError, fmt};

use crate::executor::{Pool, Transaction};

/// Error type for [`with_transaction`].
///
/// `D` is the driver error, `E` is the error returned by the body.
#[derive(Debug)]
pub enum TransactionError<D, E> {
    /// Failed to begin transaction.
    Begin(D),

    /// Failed to commit transaction.
    Commit(D),

    /// Operation within transaction failed and the rollback succeeded.
    Operation(E),

    /// Operation within transaction failed and the rollback failed too.
    Rollback {
        /// Error returned by the body.
        operation: E,
        /// Error returned by the rollback.
        rollback:  D
    }
}

impl<D: fmt::Display, E: fmt::Display> fmt::Display for TransactionError<D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin(e) => write!(f, "failed to begin transaction: {e}"),
            Self::Commit(e) => write!(f, "failed to commit transaction: {e}"),
            Self::Operation(e) => write!(f, "transaction operation failed: {e}"),
            Self::Rollback {
                operation,
                rollback
            } => write!(
                f,
                "transaction operation failed: {operation}; rollback failed: {rollback}"
            )
        }
    }
}

impl<D, E> StdError for TransactionError<D, E>
where
    D: StdError + 'static,
    E: StdError + 'static
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Begin(e) | Self::Commit(e) => Some(e),
            Self::Operation(e) => Some(e),
            Self::Rollback {
                operation, ..
            } => Some(operation)
        }
    }
}

impl<D, E> TransactionError<D, E> {
    /// Check if this is a begin error.
    pub const fn is_begin(&self) -> bool {
        matches!(self, Self::Begin(_))
    }

    /// Check if this is a commit error.
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::Commit(_))
    }

    /// Check if the rollback after a failed operation failed.
    pub const fn is_rollback(&self) -> bool {
        matches!(self, Self::Rollback { .. })
    }

    /// Check if this is an operation error.
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(_))
    }

    /// Error returned by the body, if the body failed.
    pub const fn operation(&self) -> Option<&E> {
        match self {
            Self::Operation(e)
            | Self::Rollback {
                operation: e, ..
            } => Some(e),
            Self::Begin(_) | Self::Commit(_) => None
        }
    }

    /// Error returned by the driver during begin, commit or rollback.
    pub const fn driver(&self) -> Option<&D> {
        match self {
            Self::Begin(e)
            | Self::Commit(e)
            | Self::Rollback {
                rollback: e, ..
            } => Some(e),
            Self::Operation(_) => None
        }
    }
}

impl<E> TransactionError<E, E> {
    /// Get the primary error when body and driver share a type.
    ///
    /// For a failed rollback this is the body's error.
    pub fn into_inner(self) -> E {
        match self {
            Self::Begin(e)
            | Self::Commit(e)
            | Self::Operation(e)
            | Self::Rollback {
                operation: e, ..
            } => e
        }
    }
}

/// Run `body` inside a transaction begun on `pool`.
///
/// Commits when the body returns `Ok`, rolls back when it returns `Err`.
///
/// # Errors
///
/// See the module documentation for the mapping of outcomes to
/// [`TransactionError`] variants.
pub async fn with_transaction<P, T, E, F>(
    pool: &P,
    body: F
) -> Result<T, TransactionError<P::Error, E>>
where
    P: Pool,
    F: AsyncFnOnce(&mut P::Tx) -> Result<T, E>
{
    let mut tx = pool.begin().await.map_err(TransactionError::Begin)?;
    tracing::debug!("transaction started");

    match body(&mut tx).await {
        Ok(value) => {
            tx.commit().await.map_err(TransactionError::Commit)?;
            tracing::debug!("transaction committed");
            Ok(value)
        }
        Err(operation) => match tx.rollback().await {
            Ok(()) => {
                tracing::debug!("transaction rolled back");
                Err(TransactionError::Operation(operation))
            }
            Err(rollback) => {
                tracing::warn!(error = %rollback, "transaction rollback failed");
                Err(TransactionError::Rollback {
                    operation,
                    rollback
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        executor::Executor,
        mock::{Event, MockError, MockPool}
    };

    #[derive(Debug, PartialEq)]
    struct Domain(&'static str);

    impl fmt::Display for Domain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl StdError for Domain {}

    #[tokio::test]
    async fn success_commits() {
        let pool = MockPool::new();
        let result: Result<u64, TransactionError<MockError, MockError>> =
            with_transaction(&pool, async |tx| tx.execute("DELETE FROM users", Vec::new()).await)
                .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(pool.events(), vec![Event::Begin, Event::Commit]);
        assert!(pool.statements()[0].in_transaction);
    }

    #[tokio::test]
    async fn body_error_rolls_back_and_returns_it_unchanged() {
        let pool = MockPool::new();
        let result = with_transaction(&pool, async |_tx| Err::<(), _>(Domain("E1"))).await;

        match result {
            Err(TransactionError::Operation(e)) => assert_eq!(e, Domain("E1")),
            other => panic!("unexpected outcome: {other:?}")
        }
        assert_eq!(pool.events(), vec![Event::Begin, Event::Rollback]);
    }

    #[tokio::test]
    async fn rollback_failure_keeps_both_errors() {
        let pool = MockPool::new();
        pool.fail_rollback("E2");
        let result = with_transaction(&pool, async |_tx| Err::<(), _>(Domain("E1"))).await;

        let err = result.unwrap_err();
        assert!(err.is_rollback());
        assert_eq!(err.operation(), Some(&Domain("E1")));
        assert_eq!(err.driver(), Some(&MockError::new("E2")));
        assert_eq!(
            err.to_string(),
            "transaction operation failed: E1; rollback failed: E2"
        );
    }

    #[tokio::test]
    async fn commit_failure_is_reported() {
        let pool = MockPool::new();
        pool.fail_commit("disk full");
        let result = with_transaction(&pool, async |_tx| Ok::<_, Domain>(5)).await;

        let err = result.unwrap_err();
        assert!(err.is_commit());
        assert_eq!(err.driver(), Some(&MockError::new("disk full")));
    }

    #[tokio::test]
    async fn begin_failure_skips_body() {
        let pool = MockPool::new();
        pool.fail_begin("no connection");
        let mut ran = false;
        let result = with_transaction(&pool, async |_tx| {
            ran = true;
            Ok::<_, Domain>(())
        })
        .await;

        assert!(result.unwrap_err().is_begin());
        assert!(!ran);
        assert!(pool.events().is_empty());
    }

    #[test]
    fn into_inner_prefers_operation_error() {
        let err: TransactionError<&str, &str> = TransactionError::Rollback {
            operation: "op",
            rollback:  "rb"
        };
        assert_eq!(err.into_inner(), "op");
    }
}
