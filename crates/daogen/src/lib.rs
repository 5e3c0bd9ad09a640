// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Generate dialect-specific data access objects from annotated Rust
//! structs.
//!
//! `daogen` reads Rust sources, turns every eligible `pub` struct into a
//! [`Model`], and writes one DAO module per model for the selected SQL
//! dialect. Generated DAOs are generic over a [`daogen_core::Pool`] and
//! depend on nothing but `daogen-core` at run time.
//!
//! # Pipeline
//!
//! ```text
//! sources ──parse──▶ Model ──emit(dialect)──▶ source text ──write──▶ OUTPUT/<ns>/<name>_dao.rs
//! ```
//!
//! # Annotating Models
//!
//! ```rust,ignore
//! #[dao(table = "accounts")]
//! pub struct User {
//!     #[sql("id,primary")]
//!     pub id: i64,
//!     #[sql("full_name")]
//!     pub name: String,
//!     pub email: Option<String>,
//! }
//! ```
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | `#[sql("col")]` | Column name override (empty keeps the field name) |
//! | `#[sql("col,primary")]` | Column override plus primary key marker |
//! | `#[dao(table = "...")]` | Table name; a `fn table_name() -> &'static str` returning a literal wins |
//! | `#[dao(skip)]` | Never generate a DAO for this struct |
//!
//! The attributes are inert for the compiler once `#[derive(daogen_derive::Dao)]`
//! from `daogen-derive` (or any derive registering `dao` and `sql`) is on
//! the struct.
//!
//! # Generating
//!
//! ```rust,ignore
//! let written = daogen::generate(&daogen::GenerateOptions {
//!     input:       "src/models".into(),
//!     output:      "src/dao".into(),
//!     driver:      "postgres".into(),
//!     crate_paths: daogen::CratePaths::Auto
//! })?;
//! ```
//!
//! Output inside the model's own crate refers to it as `crate::`, so the
//! DAOs above compile as `mod dao` of that crate. Output anywhere else uses
//! the package name; see [`CratePaths`].
//!
//! The same run is available as the `daogen` command line tool.

pub mod dialect;
pub mod emit;
pub mod error;
pub mod model;
pub mod output;
pub mod parse;
mod utils;

use std::path::{Path, PathBuf};

pub use dialect::{DialectDescriptor, DialectRegistry};
pub use emit::emit;
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use model::{Field, Model};
pub use output::GeneratedFile;
pub use parse::parse_models;

/// Inputs of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Source file or directory to scan.
    pub input:       PathBuf,

    /// Root of the generated tree.
    pub output:      PathBuf,

    /// Dialect id or alias.
    pub driver:      String,

    /// How generated code names the model's crate.
    pub crate_paths: CratePaths
}

/// How generated code refers to the crate a model was declared in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CratePaths {
    /// `crate::` when the output directory lies inside the model's crate,
    /// the package name otherwise.
    #[default]
    Auto,

    /// Always the package name, e.g. `my_app::models::User`.
    Package,

    /// Always `crate::`, e.g. `crate::models::User`.
    Crate
}

impl CratePaths {
    fn crate_relative(self, model: &Model, output: &Path) -> bool {
        match self {
            Self::Auto => model.crate_dir().is_some_and(|dir| output.starts_with(dir)),
            Self::Package => false,
            Self::Crate => true
        }
    }
}

/// Run the pipeline with the built-in dialects.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    generate_with(&DialectRegistry::builtin(), options)
}

/// Parse `options.input`, emit every model for `options.driver`, and write
/// the files under `options.output`.
///
/// Returns the written paths in model order. Every model is emitted before
/// anything is written, so a failing run leaves the output untouched except
/// for I/O failures midway.
///
/// # Errors
///
/// - [`Error::UnsupportedDialect`] when `driver` is not registered
/// - [`ValidationError::NoModels`] when the input yields no model
/// - any parse, render or output error
pub fn generate_with(registry: &DialectRegistry, options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    let dialect = registry.get(&options.driver)?;
    tracing::info!(
        input = %options.input.display(),
        output = %options.output.display(),
        dialect = %dialect.id(),
        "generating"
    );

    let models = parse_models(&options.input)?;
    if models.is_empty() {
        return Err(ValidationError::NoModels {
            path: options.input.clone()
        }
        .into());
    }

    let output_dir = output::resolve(&options.output);
    let files = models
        .into_iter()
        .map(|model| {
            let model = if options.crate_paths.crate_relative(&model, &output_dir) {
                tracing::debug!(model = %model.name(), "output inside the model's crate");
                model.crate_relative()
            } else {
                model
            };
            let source = emit(&model, dialect)?;
            Ok(GeneratedFile::new(dialect.namespace(), &emit::file_name(&model), source))
        })
        .collect::<Result<Vec<_>>>()?;

    let written = output::write_all(&options.output, &files)?;
    tracing::info!(files = written.len(), "done");
    Ok(written)
}
