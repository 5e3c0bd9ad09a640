// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `daogen` command line tool.
//!
//! ```bash
//! daogen --input src/models --output src/dao --driver postgres
//! daogen --input src/models --output ../shared/dao --driver sqlite --crate-paths package
//! ```
//!
//! Written paths go to stdout, one per line. Any failure prints the error to
//! stdout and exits with status 1.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use cli::Cli;
use config::Config;
use daogen::DialectRegistry;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "generation failed");
            println!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> daogen::Result<()> {
    let registry = DialectRegistry::builtin();
    let config = Config::from_cli(cli, &registry)?;
    for path in daogen::generate_with(&registry, &config.options)? {
        println!("{}", path.display());
    }
    Ok(())
}
