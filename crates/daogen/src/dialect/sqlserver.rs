// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Microsoft SQL Server.
//!
//! `@pN` placeholders. `OFFSET .. FETCH` requires an `ORDER BY`, so an
//! unordered page gets `ORDER BY (SELECT NULL)`.

use daogen_core::dialect::SqlServer;

use super::DialectDescriptor;

/// SQL Server descriptor.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor::of::<SqlServer>("daogen_core::dialect::SqlServer").with_aliases(&["mssql"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_placeholders() {
        assert_eq!(
            descriptor().syntax().select_by("users", &["id", "name"], "id"),
            "SELECT id, name FROM users WHERE id = @p1"
        );
    }

    #[test]
    fn pagination_needs_order() {
        let syntax = *descriptor().syntax();
        assert_eq!(
            syntax.paginate("SELECT id FROM users", 5, 0, false),
            "SELECT id FROM users ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT 5 ROWS ONLY"
        );
        assert_eq!(
            syntax.paginate("SELECT id FROM users ORDER BY id", 5, 10, true),
            "SELECT id FROM users ORDER BY id OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY"
        );
    }
}
