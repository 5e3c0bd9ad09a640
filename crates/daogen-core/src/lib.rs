// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime support for daogen generated data access objects.
//!
//! Every DAO emitted by `daogen` is generic over a [`Pool`] and only talks to
//! the database through the traits in this crate. A driver plugs in by
//! implementing [`Executor`], [`Transaction`] and [`Pool`]; the generated code
//! never names a concrete client type.
//!
//! # Overview
//!
//! - [`Value`], [`Encode`], [`Decode`]: bound parameters and column values
//! - [`Row`]: positional result row
//! - [`Pool`], [`Executor`], [`Transaction`]: driver seam
//! - [`dialect`]: marker types binding a DAO to one SQL dialect
//! - [`Syntax`]: placeholder, pagination and batch insert rendering
//! - [`with_transaction`]: unit-of-work helper with commit/rollback
//!
//! Features `chrono` and `uuid` add [`Encode`]/[`Decode`] for date, time and
//! UUID fields; `mock` adds an in-memory recording driver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use daogen_core::prelude::*;
//!
//! let dao = UserDao::new(pool);
//! dao.create(None, &user).await?;
//!
//! dao.with_transaction(async |tx| {
//!     dao.update(Some(&mut *tx), &user).await?;
//!     dao.delete_by_pk(Some(&mut *tx), &7).await
//! })
//! .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dialect;
mod executor;
#[cfg(any(test, feature = "mock"))]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;
pub mod prelude;
mod row;
mod syntax;
mod transaction;
mod value;

pub use dialect::Dialect;
pub use executor::{Executor, Pool, Transaction, execute, fetch_all, fetch_optional};
pub use row::Row;
pub use syntax::{BatchInsert, Pagination, Placeholder, Syntax};
pub use transaction::{TransactionError, with_transaction};
pub use value::{Decode, DecodeError, Encode, Value};

/// Build a `Vec<Value>` of positional arguments.
///
/// Each expression is encoded through [`Encode`], so mixed argument types can
/// be passed to `find_*` and `count` methods.
///
/// # Example
///
/// ```rust
/// use daogen_core::{Value, args};
///
/// let args = args![18_i64, "active"];
/// assert_eq!(args, vec![Value::Int(18), Value::Text("active".into())]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Encode::encode(&$value)),+]
    };
}
