// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validated run configuration.

use daogen::{DialectRegistry, GenerateOptions, Result};

use crate::cli::Cli;

/// Arguments checked against the dialect registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Options handed to the generator; `driver` is the canonical id.
    pub options: GenerateOptions
}

impl Config {
    /// Validate `cli`.
    ///
    /// # Errors
    ///
    /// `UnsupportedDialect` listing the registered ids when the driver is
    /// neither an id nor an alias.
    pub fn from_cli(cli: &Cli, registry: &DialectRegistry) -> Result<Self> {
        let dialect = registry.get(&cli.driver)?;
        Ok(Self {
            options: GenerateOptions {
                input:       cli.input.clone(),
                output:      cli.output.clone(),
                driver:      dialect.id().to_owned(),
                crate_paths: cli.crate_paths.into()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use daogen::ErrorKind;

    use super::*;

    fn cli(driver: &str) -> Cli {
        Cli::try_parse_from(["daogen", "-i", "in", "-o", "out", "-d", driver]).unwrap()
    }

    #[test]
    fn alias_becomes_canonical_id() {
        let config = Config::from_cli(&cli("MSSQL"), &DialectRegistry::builtin()).unwrap();
        assert_eq!(config.options.driver, "sqlserver");
        assert_eq!(config.options.input, std::path::PathBuf::from("in"));
        assert_eq!(config.options.crate_paths, daogen::CratePaths::Auto);
    }

    #[test]
    fn unknown_driver_lists_supported() {
        let err = Config::from_cli(&cli("cassandra"), &DialectRegistry::builtin()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedDialect);
        assert_eq!(
            err.to_string(),
            "unsupported dialect `cassandra`, expected one of: postgres, mysql, sqlite, sqlserver, oracle"
        );
    }
}
