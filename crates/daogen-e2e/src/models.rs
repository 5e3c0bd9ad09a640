// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, NaiveDate, Utc};
use daogen_derive::Dao;
use uuid::Uuid;

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq, Dao)]
#[dao(table = "users")]
pub struct User {
    #[sql("id,primary")]
    pub id:    i64,
    pub name:  String,
    pub email: Option<String>
}

/// Ledger account with renamed columns.
#[derive(Debug, Clone, PartialEq, Eq, Dao)]
pub struct Account {
    #[sql("account_id,primary")]
    pub id:      i64,
    #[sql("display_name")]
    pub name:    String,
    pub balance: i64,
    pub active:  bool
}

impl Account {
    pub fn table_name() -> &'static str {
        "accounts"
    }
}

/// Login session; `cache` is not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Dao)]
#[dao(table = "sessions")]
pub struct Session {
    #[sql("token,primary")]
    pub token:   String,
    pub user_id: i64,
    cache:       Option<String>
}

impl Session {
    /// Session with a warm cache entry.
    pub fn cached(token: &str, user_id: i64, value: &str) -> Self {
        Self {
            token: token.to_owned(),
            user_id,
            cache: Some(value.to_owned())
        }
    }

    /// Cached value, never loaded from the database.
    pub fn cache(&self) -> Option<&str> {
        self.cache.as_deref()
    }
}

/// Page visit counter keyed by a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Dao)]
#[dao(table = "visits")]
pub struct Visit {
    #[sql("id,primary")]
    pub id:      Uuid,
    pub hits:    u64,
    pub seen_at: DateTime<Utc>,
    pub day:     Option<NaiveDate>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_accessor() {
        assert_eq!(Account::table_name(), "accounts");
    }

    #[test]
    fn session_cache() {
        assert_eq!(Session::cached("t", 1, "warm").cache(), Some("warm"));
        assert_eq!(Session::default().cache(), None);
    }
}
