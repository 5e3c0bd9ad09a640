// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator error types.
//!
//! Every failure of a generation run is one [`Error`]. The variants group
//! into the broad classes returned by [`Error::kind`]:
//!
//! | Kind | Variants |
//! |------|----------|
//! | [`ErrorKind::Io`] | `Io`, `MissingInput`, `MissingManifest`, `InvalidManifest` |
//! | [`ErrorKind::Syntax`] | `Syntax` |
//! | [`ErrorKind::Validation`] | `Validation` |
//! | [`ErrorKind::UnsupportedDialect`] | `UnsupportedDialect` |
//! | [`ErrorKind::OutputCollision`] | `OutputCollision` |
//! | [`ErrorKind::Render`] | `Render` |

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias used throughout the generator.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Model invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The struct has no eligible public fields.
    #[error("model `{model}` has no fields")]
    NoFields {
        /// Type name.
        model: String
    },

    /// No field is marked `primary`.
    #[error("model `{model}` has no primary key")]
    NoPrimaryKey {
        /// Type name.
        model: String
    },

    /// The input produced no models at all.
    #[error("no models found in {}", path.display())]
    NoModels {
        /// Input path of the run.
        path: PathBuf
    }
}

/// Error returned by parsing, emitting and writing.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error
    },

    /// The input path does not exist.
    #[error("input path {} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// No `Cargo.toml` with a package name encloses the source file.
    #[error("no Cargo.toml with a package name found above {}", .0.display())]
    MissingManifest(PathBuf),

    /// A `Cargo.toml` could not be parsed.
    #[error("invalid manifest {}: {message}", path.display())]
    InvalidManifest {
        /// Manifest path.
        path:    PathBuf,
        /// Parser message.
        message: String
    },

    /// Source code or an annotation could not be parsed.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Syntax {
        /// Source file.
        path:    PathBuf,
        /// 1-based line.
        line:    usize,
        /// 1-based column.
        column:  usize,
        /// Parser message.
        message: String
    },

    /// A model violates an invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested dialect is not registered.
    #[error("unsupported dialect `{id}`, expected one of: {}", supported.join(", "))]
    UnsupportedDialect {
        /// Requested id.
        id:        String,
        /// Registered ids.
        supported: Vec<String>
    },

    /// A target file already exists.
    #[error("refusing to overwrite existing file {}", .0.display())]
    OutputCollision(PathBuf),

    /// The DAO for a model could not be rendered as valid Rust.
    #[error("cannot render DAO for `{model}`: {source}")]
    Render {
        /// Model being emitted.
        model:  String,
        /// Parser error.
        #[source]
        source: syn::Error
    }
}

/// Broad classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Filesystem or manifest problem.
    Io,
    /// Unparseable source or annotation.
    Syntax,
    /// Invariant violation.
    Validation,
    /// Unknown dialect id.
    UnsupportedDialect,
    /// Refused overwrite.
    OutputCollision,
    /// Internal rendering failure.
    Render
}

impl Error {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io {
                ..
            }
            | Self::MissingInput(_)
            | Self::MissingManifest(_)
            | Self::InvalidManifest {
                ..
            } => ErrorKind::Io,
            Self::Syntax {
                ..
            } => ErrorKind::Syntax,
            Self::Validation(_) => ErrorKind::Validation,
            Self::UnsupportedDialect {
                ..
            } => ErrorKind::UnsupportedDialect,
            Self::OutputCollision(_) => ErrorKind::OutputCollision,
            Self::Render {
                ..
            } => ErrorKind::Render
        }
    }

    /// Build an [`Error::Io`].
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }

    /// Build an [`Error::Syntax`] located at the start of `err`'s span.
    pub fn syntax(path: impl Into<PathBuf>, err: &syn::Error) -> Self {
        let start = err.span().start();
        Self::Syntax {
            path:    path.into(),
            line:    start.line,
            column:  start.column + 1,
            message: err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_display_has_location() {
        let err = Error::Syntax {
            path:    PathBuf::from("src/models.rs"),
            line:    3,
            column:  7,
            message: "expected `;`".into()
        };
        assert_eq!(err.to_string(), "src/models.rs:3:7: expected `;`");
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn unsupported_dialect_lists_ids() {
        let err = Error::UnsupportedDialect {
            id:        "db2".into(),
            supported: vec!["postgres".into(), "mysql".into()]
        };
        assert_eq!(
            err.to_string(),
            "unsupported dialect `db2`, expected one of: postgres, mysql"
        );
    }

    #[test]
    fn validation_is_transparent() {
        let err = Error::from(ValidationError::NoPrimaryKey {
            model: "User".into()
        });
        assert_eq!(err.to_string(), "model `User` has no primary key");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn manifest_problems_are_io() {
        assert_eq!(Error::MissingManifest(PathBuf::from("x.rs")).kind(), ErrorKind::Io);
        assert_eq!(Error::MissingInput(PathBuf::from("x")).kind(), ErrorKind::Io);
    }
}
