// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL statement rendering.
//!
//! [`Syntax`] is the single place where placeholders, pagination clauses and
//! batch inserts are spelled out. The generator renders static statements
//! with it, and generated DAOs call the same methods at run time for dynamic
//! ones (`partial_update`, `create_many`, `delete_many_by_pks`, filters).
//!
//! Placeholder indices are 1-based and continuous across a statement:
//! for a batch insert of `rows × width` values, the value at `(row, i)` is
//! bound to index `row * width + i + 1`.
//!
//! Identifiers are inserted verbatim. Caller-supplied `WHERE` and
//! `ORDER BY` fragments are appended without parsing or escaping.

/// Bind parameter spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `$1, $2, ...` (PostgreSQL).
    Dollar,

    /// `?` repeated (MySQL, SQLite).
    Question,

    /// `@p1, @p2, ...` (SQL Server).
    AtP,

    /// `:1, :2, ...` (Oracle).
    Colon
}

impl Placeholder {
    /// Render the placeholder for a 1-based parameter index.
    #[must_use]
    pub fn render(self, index: usize) -> String {
        match self {
            Self::Dollar => format!("${index}"),
            Self::Question => "?".to_owned(),
            Self::AtP => format!("@p{index}"),
            Self::Colon => format!(":{index}")
        }
    }

    /// Check whether placeholders carry their index.
    #[must_use]
    pub const fn is_numbered(self) -> bool {
        !matches!(self, Self::Question)
    }

    /// Comma-separated placeholders for `count` parameters starting at
    /// index `start`.
    #[must_use]
    pub fn list(self, start: usize, count: usize) -> String {
        (start..start + count)
            .map(|i| self.render(i))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `column = placeholder` pairs starting at index `start`.
    #[must_use]
    pub fn assignments(self, columns: &[&str], start: usize) -> String {
        columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = {}", self.render(start + i)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Pagination clause spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pagination {
    /// ` LIMIT n OFFSET m`.
    LimitOffset,

    /// ` OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
    OffsetFetch,

    /// Like [`Pagination::OffsetFetch`], but the statement must be ordered;
    /// ` ORDER BY (SELECT NULL)` is inserted when the caller gave no order.
    OffsetFetchOrdered
}

/// Multi-row insert strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchInsert {
    /// `INSERT INTO t (..) VALUES (..), (..)`.
    MultiRow,

    /// `INSERT ALL INTO t (..) VALUES (..) INTO t (..) VALUES (..) SELECT 1 FROM DUAL`.
    InsertAll
}

/// Complete statement syntax of one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syntax {
    /// Placeholder spelling.
    pub placeholder:  Placeholder,
    /// Pagination clause.
    pub pagination:   Pagination,
    /// Batch insert strategy.
    pub batch_insert: BatchInsert
}

impl Syntax {
    /// `INSERT INTO table (a, b) VALUES (p1, p2)`.
    #[must_use]
    pub fn insert(&self, table: &str, columns: &[&str]) -> String {
        format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            self.placeholder.list(1, columns.len())
        )
    }

    /// Single statement inserting `rows` rows of `columns`.
    ///
    /// Returns `None` for zero rows; no statement exists for an empty batch.
    #[must_use]
    pub fn insert_many(&self, table: &str, columns: &[&str], rows: usize) -> Option<String> {
        if rows == 0 {
            return None;
        }
        let width = columns.len();
        let column_list = columns.join(", ");
        let tuples = (0..rows).map(|row| format!("({})", self.placeholder.list(row * width + 1, width)));
        let sql = match self.batch_insert {
            BatchInsert::MultiRow => format!(
                "INSERT INTO {table} ({column_list}) VALUES {}",
                tuples.collect::<Vec<_>>().join(", ")
            ),
            BatchInsert::InsertAll => {
                let mut sql = String::from("INSERT ALL");
                for tuple in tuples {
                    sql.push_str(&format!(" INTO {table} ({column_list}) VALUES {tuple}"));
                }
                sql.push_str(" SELECT 1 FROM DUAL");
                sql
            }
        };
        Some(sql)
    }

    /// `UPDATE table SET a = p1, b = p2 WHERE key = p3`.
    #[must_use]
    pub fn update(&self, table: &str, columns: &[&str], key: &str) -> String {
        format!(
            "UPDATE {table} SET {} WHERE {key} = {}",
            self.placeholder.assignments(columns, 1),
            self.placeholder.render(columns.len() + 1)
        )
    }

    /// `DELETE FROM table WHERE key = p1`.
    #[must_use]
    pub fn delete(&self, table: &str, key: &str) -> String {
        format!("DELETE FROM {table} WHERE {key} = {}", self.placeholder.render(1))
    }

    /// `DELETE FROM table WHERE key IN (p1, .., pn)`.
    ///
    /// Returns `None` for an empty key list.
    #[must_use]
    pub fn delete_in(&self, table: &str, key: &str, count: usize) -> Option<String> {
        (count > 0).then(|| {
            format!(
                "DELETE FROM {table} WHERE {key} IN ({})",
                self.placeholder.list(1, count)
            )
        })
    }

    /// `SELECT a, b FROM table`.
    #[must_use]
    pub fn select(&self, table: &str, columns: &[&str]) -> String {
        format!("SELECT {} FROM {table}", columns.join(", "))
    }

    /// `SELECT a, b FROM table WHERE key = p1`.
    #[must_use]
    pub fn select_by(&self, table: &str, columns: &[&str], key: &str) -> String {
        format!(
            "{} WHERE {key} = {}",
            self.select(table, columns),
            self.placeholder.render(1)
        )
    }

    /// `SELECT COUNT(*) FROM table`.
    #[must_use]
    pub fn count(&self, table: &str) -> String {
        format!("SELECT COUNT(*) FROM {table}")
    }

    /// Append raw `WHERE` and `ORDER BY` fragments when non-empty.
    #[must_use]
    pub fn filter(&self, sql: &str, where_clause: &str, order_by: &str) -> String {
        let mut sql = sql.to_owned();
        let where_clause = where_clause.trim();
        if !where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(where_clause);
        }
        let order_by = order_by.trim();
        if !order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        sql
    }

    /// Append the pagination clause.
    ///
    /// `ordered` tells whether `sql` already ends with an `ORDER BY`.
    #[must_use]
    pub fn paginate(&self, sql: &str, limit: u64, offset: u64, ordered: bool) -> String {
        match self.pagination {
            Pagination::LimitOffset => format!("{sql} LIMIT {limit} OFFSET {offset}"),
            Pagination::OffsetFetch => {
                format!("{sql} OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY")
            }
            Pagination::OffsetFetchOrdered => {
                let order = if ordered { "" } else { " ORDER BY (SELECT NULL)" };
                format!("{sql}{order} OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, MySql, Oracle, Postgres, SqlServer};

    const USER_COLUMNS: [&str; 4] = ["id", "name", "email", "age"];

    #[test]
    fn placeholder_render() {
        assert_eq!(Placeholder::Dollar.render(3), "$3");
        assert_eq!(Placeholder::Question.render(3), "?");
        assert_eq!(Placeholder::AtP.render(3), "@p3");
        assert_eq!(Placeholder::Colon.render(3), ":3");
    }

    #[test]
    fn insert_many_numbers_row_major() {
        let sql = Postgres::SYNTAX
            .insert_many("users", &USER_COLUMNS, 3)
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (id, name, email, age) VALUES \
             ($1, $2, $3, $4), ($5, $6, $7, $8), ($9, $10, $11, $12)"
        );
    }

    #[test]
    fn insert_many_question_marks_repeat() {
        let sql = MySql::SYNTAX.insert_many("users", &["id", "name"], 2).unwrap();
        assert_eq!(sql, "INSERT INTO users (id, name) VALUES (?, ?), (?, ?)");
    }

    #[test]
    fn insert_many_oracle_insert_all() {
        let sql = Oracle::SYNTAX.insert_many("users", &["id", "name"], 2).unwrap();
        assert_eq!(
            sql,
            "INSERT ALL INTO users (id, name) VALUES (:1, :2) \
             INTO users (id, name) VALUES (:3, :4) SELECT 1 FROM DUAL"
        );
    }

    #[test]
    fn insert_many_empty_is_none() {
        assert!(Postgres::SYNTAX.insert_many("users", &USER_COLUMNS, 0).is_none());
    }

    #[test]
    fn update_binds_key_last() {
        let sql = SqlServer::SYNTAX.update("users", &["name", "email"], "id");
        assert_eq!(sql, "UPDATE users SET name = @p1, email = @p2 WHERE id = @p3");
    }

    #[test]
    fn delete_in_sizes_list() {
        assert_eq!(
            Postgres::SYNTAX.delete_in("users", "id", 3).as_deref(),
            Some("DELETE FROM users WHERE id IN ($1, $2, $3)")
        );
        assert!(Postgres::SYNTAX.delete_in("users", "id", 0).is_none());
    }

    #[test]
    fn filter_skips_empty_fragments() {
        let syntax = Postgres::SYNTAX;
        assert_eq!(syntax.filter("SELECT id FROM users", "", "  "), "SELECT id FROM users");
        assert_eq!(
            syntax.filter("SELECT id FROM users", "age > $1", "id DESC"),
            "SELECT id FROM users WHERE age > $1 ORDER BY id DESC"
        );
    }

    #[test]
    fn paginate_per_dialect() {
        assert_eq!(
            Postgres::SYNTAX.paginate("SELECT id FROM users", 10, 20, false),
            "SELECT id FROM users LIMIT 10 OFFSET 20"
        );
        assert_eq!(
            Oracle::SYNTAX.paginate("SELECT id FROM users", 10, 20, false),
            "SELECT id FROM users OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
        );
    }

    #[test]
    fn sqlserver_pagination_synthesizes_order() {
        let syntax = SqlServer::SYNTAX;
        assert_eq!(
            syntax.paginate("SELECT id FROM users", 5, 0, false),
            "SELECT id FROM users ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT 5 ROWS ONLY"
        );
        assert_eq!(
            syntax.paginate("SELECT id FROM users ORDER BY id", 5, 0, true),
            "SELECT id FROM users ORDER BY id OFFSET 0 ROWS FETCH NEXT 5 ROWS ONLY"
        );
    }
}
