// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Models fed to the generator by this crate's build script.
//!
//! The build script writes two trees. `$OUT_DIR/dao/<dialect>/` names the
//! models by package and is compiled by the integration tests.
//! `$OUT_DIR/local/postgres/` names them through `crate::` and is compiled
//! right here as [`dao`]. Both run against `daogen_core::mock::MockPool`.

pub mod models;

/// PostgreSQL DAOs compiled inside the crate that declares the models.
pub mod dao {
    macro_rules! local {
        ($($module:ident => $file:literal),* $(,)?) => {
            $(
                #[allow(missing_docs)]
                pub mod $module {
                    include!(concat!(env!("OUT_DIR"), "/local/postgres/", $file));
                }
            )*
        };
    }

    local! {
        user => "user_dao.rs",
        account => "account_dao.rs",
        session => "session_dao.rs",
        visit => "visit_dao.rs",
    }
}
