// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Oracle Database.
//!
//! `:n` placeholders. Batches use `INSERT ALL .. SELECT 1 FROM DUAL`.

use daogen_core::dialect::Oracle;

use super::DialectDescriptor;

/// Oracle descriptor.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor::of::<Oracle>("daogen_core::dialect::Oracle")
}
