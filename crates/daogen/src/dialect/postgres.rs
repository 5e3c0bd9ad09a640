// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL.
//!
//! Numbered `$n` placeholders, `LIMIT n OFFSET m`, multi-row `VALUES`.

use daogen_core::dialect::Postgres;

use super::DialectDescriptor;

/// PostgreSQL descriptor.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor::of::<Postgres>("daogen_core::dialect::Postgres").with_aliases(&["postgresql", "pg"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_placeholders() {
        let d = descriptor();
        assert_eq!(d.namespace(), "postgres");
        assert_eq!(
            d.syntax().update("users", &["name", "email"], "id"),
            "UPDATE users SET name = $1, email = $2 WHERE id = $3"
        );
        assert_eq!(
            d.syntax().paginate("SELECT id FROM users", 10, 20, false),
            "SELECT id FROM users LIMIT 10 OFFSET 20"
        );
    }
}
