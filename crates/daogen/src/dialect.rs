// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect registry.
//!
//! A [`DialectDescriptor`] carries everything the emitter needs to target one
//! SQL dialect: the runtime marker type generated DAOs are bound to, the
//! [`Syntax`] for statements rendered at generation time, and the output
//! namespace (sub-directory). [`DialectRegistry::builtin`] holds the five
//! shipped dialects; libraries can [`register`](DialectRegistry::register)
//! more.
//!
//! | Id | Aliases | Marker |
//! |----|---------|--------|
//! | `postgres` | `postgresql`, `pg` | `daogen_core::dialect::Postgres` |
//! | `mysql` | `mariadb` | `daogen_core::dialect::MySql` |
//! | `sqlite` | `sqlite3` | `daogen_core::dialect::Sqlite` |
//! | `sqlserver` | `mssql` | `daogen_core::dialect::SqlServer` |
//! | `oracle` | | `daogen_core::dialect::Oracle` |

mod mysql;
mod oracle;
mod postgres;
mod sqlite;
mod sqlserver;

use daogen_core::{Dialect, Syntax};

use crate::error::{Error, Result};

/// Everything needed to emit DAOs for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectDescriptor {
    id:        String,
    aliases:   Vec<String>,
    marker:    String,
    namespace: String,
    syntax:    Syntax
}

impl DialectDescriptor {
    /// Describe a dialect by its runtime marker type.
    ///
    /// `marker` is the path generated code imports the marker from. The id
    /// and namespace default to `D::NAME`.
    pub fn of<D: Dialect>(marker: &str) -> Self {
        Self {
            id:        D::NAME.to_owned(),
            aliases:   Vec::new(),
            marker:    marker.to_owned(),
            namespace: D::NAME.to_owned(),
            syntax:    D::SYNTAX
        }
    }

    /// Add alternative ids.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| (*a).to_owned()));
        self
    }

    /// Override the output sub-directory.
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        namespace.clone_into(&mut self.namespace);
        self
    }

    /// Canonical id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Alternative ids.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Path of the marker type, e.g. `daogen_core::dialect::Postgres`.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Output sub-directory.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Statement syntax.
    #[must_use]
    pub const fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    fn answers_to(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(id))
    }
}

/// Lookup table from dialect id to descriptor.
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
    dialects: Vec<DialectDescriptor>
}

impl DialectRegistry {
    /// Registry without any dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in dialects.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(postgres::descriptor());
        registry.register(mysql::descriptor());
        registry.register(sqlite::descriptor());
        registry.register(sqlserver::descriptor());
        registry.register(oracle::descriptor());
        registry
    }

    /// Add a dialect, replacing one with the same id.
    pub fn register(&mut self, descriptor: DialectDescriptor) {
        match self.dialects.iter_mut().find(|d| d.id == descriptor.id) {
            Some(existing) => *existing = descriptor,
            None => self.dialects.push(descriptor)
        }
    }

    /// Look up a dialect by id or alias, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDialect`] listing the registered ids.
    pub fn get(&self, id: &str) -> Result<&DialectDescriptor> {
        self.dialects
            .iter()
            .find(|d| d.answers_to(id))
            .ok_or_else(|| Error::UnsupportedDialect {
                id:        id.to_owned(),
                supported: self.ids().map(str::to_owned).collect()
            })
    }

    /// Registered canonical ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dialects.iter().map(DialectDescriptor::id)
    }

    /// Registered descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DialectDescriptor> {
        self.dialects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn builtin_ids() {
        let registry = DialectRegistry::builtin();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, ["postgres", "mysql", "sqlite", "sqlserver", "oracle"]);
    }

    #[test]
    fn aliases_resolve_to_canonical() {
        let registry = DialectRegistry::builtin();
        assert_eq!(registry.get("pg").unwrap().id(), "postgres");
        assert_eq!(registry.get("PostgreSQL").unwrap().id(), "postgres");
        assert_eq!(registry.get("mssql").unwrap().id(), "sqlserver");
        assert_eq!(registry.get("mariadb").unwrap().id(), "mysql");
        assert_eq!(registry.get("sqlite3").unwrap().id(), "sqlite");
    }

    #[test]
    fn unknown_id_is_unsupported() {
        let err = DialectRegistry::builtin().get("db2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedDialect);
        assert!(err.to_string().contains("postgres, mysql, sqlite, sqlserver, oracle"));
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = DialectRegistry::builtin();
        registry.register(postgres::descriptor().with_namespace("pg"));
        assert_eq!(registry.get("postgres").unwrap().namespace(), "pg");
        assert_eq!(registry.ids().count(), 5);
    }
}
