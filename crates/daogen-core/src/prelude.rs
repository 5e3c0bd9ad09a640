// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use daogen_core::prelude::*;
//! ```

pub use crate::{
    Decode, DecodeError, Dialect, Encode, Executor, Pool, Row, Transaction, TransactionError,
    Value, args,
    dialect::{MySql, Oracle, Postgres, SqlServer, Sqlite},
    with_transaction
};
