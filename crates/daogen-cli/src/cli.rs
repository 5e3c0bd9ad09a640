// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use daogen::CratePaths;

/// Generate data access objects from annotated Rust structs.
#[derive(Debug, Parser)]
#[command(
    name = "daogen",
    version,
    about,
    after_help = "Every flag can also be set through its DAOGEN_* environment variable."
)]
pub struct Cli {
    /// Source file or directory holding the models
    #[arg(short, long, env = "DAOGEN_INPUT", value_name = "PATH")]
    pub input: PathBuf,

    /// Directory the DAO modules are written under
    #[arg(short, long, env = "DAOGEN_OUTPUT", value_name = "PATH")]
    pub output: PathBuf,

    /// SQL dialect: postgres, mysql, sqlite, sqlserver or oracle
    #[arg(short, long, env = "DAOGEN_DRIVER", value_name = "NAME")]
    pub driver: String,

    /// How generated code names the model's crate; auto uses `crate::` when
    /// the output lies inside it
    #[arg(
        long,
        env = "DAOGEN_CRATE_PATHS",
        value_enum,
        default_value_t = CrateMode::Auto,
        value_name = "MODE"
    )]
    pub crate_paths: CrateMode,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8
}

/// `--crate-paths` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CrateMode {
    /// Decide from the output location
    #[default]
    Auto,
    /// Always the package name
    Package,
    /// Always `crate::`
    Crate
}

impl From<CrateMode> for CratePaths {
    fn from(mode: CrateMode) -> Self {
        match mode {
            CrateMode::Auto => Self::Auto,
            CrateMode::Package => Self::Package,
            CrateMode::Crate => Self::Crate
        }
    }
}
