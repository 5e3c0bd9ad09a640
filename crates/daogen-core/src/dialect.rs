// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL dialect markers.
//!
//! A generated DAO is bound to exactly one dialect through its
//! `P: Pool<Dialect = Marker>` bound. The marker carries the [`Syntax`] used
//! for statements built at run time, so the SQL a DAO renders dynamically
//! always matches the statements rendered when the DAO was generated.
//!
//! | Marker | Placeholder | Pagination | Batch insert |
//! |--------|-------------|------------|--------------|
//! | [`Postgres`] | `$1` | `LIMIT n OFFSET m` | multi-row `VALUES` |
//! | [`MySql`] | `?` | `LIMIT n OFFSET m` | multi-row `VALUES` |
//! | [`Sqlite`] | `?` | `LIMIT n OFFSET m` | multi-row `VALUES` |
//! | [`SqlServer`] | `@p1` | `OFFSET m ROWS FETCH NEXT n ROWS ONLY` (ordered) | multi-row `VALUES` |
//! | [`Oracle`] | `:1` | `OFFSET m ROWS FETCH NEXT n ROWS ONLY` | `INSERT ALL` |

use crate::syntax::{BatchInsert, Pagination, Placeholder, Syntax};

/// Compile-time description of a SQL dialect.
pub trait Dialect: Send + Sync + 'static {
    /// Canonical dialect id, e.g. `"postgres"`.
    const NAME: &'static str;

    /// Statement syntax of the dialect.
    const SYNTAX: Syntax;
}

/// PostgreSQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Postgres;

impl Dialect for Postgres {
    const NAME: &'static str = "postgres";
    const SYNTAX: Syntax = Syntax {
        placeholder:  Placeholder::Dollar,
        pagination:   Pagination::LimitOffset,
        batch_insert: BatchInsert::MultiRow
    };
}

/// MySQL and MariaDB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MySql;

impl Dialect for MySql {
    const NAME: &'static str = "mysql";
    const SYNTAX: Syntax = Syntax {
        placeholder:  Placeholder::Question,
        pagination:   Pagination::LimitOffset,
        batch_insert: BatchInsert::MultiRow
    };
}

/// SQLite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sqlite;

impl Dialect for Sqlite {
    const NAME: &'static str = "sqlite";
    const SYNTAX: Syntax = Syntax {
        placeholder:  Placeholder::Question,
        pagination:   Pagination::LimitOffset,
        batch_insert: BatchInsert::MultiRow
    };
}

/// Microsoft SQL Server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SqlServer;

impl Dialect for SqlServer {
    const NAME: &'static str = "sqlserver";
    const SYNTAX: Syntax = Syntax {
        placeholder:  Placeholder::AtP,
        pagination:   Pagination::OffsetFetchOrdered,
        batch_insert: BatchInsert::MultiRow
    };
}

/// Oracle Database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Oracle;

impl Dialect for Oracle {
    const NAME: &'static str = "oracle";
    const SYNTAX: Syntax = Syntax {
        placeholder:  Placeholder::Colon,
        pagination:   Pagination::OffsetFetch,
        batch_insert: BatchInsert::InsertAll
    };
}
