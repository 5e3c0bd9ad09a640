// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite.

use daogen_core::dialect::Sqlite;

use super::DialectDescriptor;

/// SQLite descriptor.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor::of::<Sqlite>("daogen_core::dialect::Sqlite").with_aliases(&["sqlite3"])
}
