// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! MySQL and MariaDB.

use daogen_core::dialect::MySql;

use super::DialectDescriptor;

/// MySQL descriptor.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor::of::<MySql>("daogen_core::dialect::MySql").with_aliases(&["mariadb"])
}
