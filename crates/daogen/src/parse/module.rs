// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Module identity of parsed declarations.
//!
//! | File (relative to the crate root) | Module path |
//! |-----------------------------------|-------------|
//! | `src/lib.rs`, `src/main.rs` | `my_app` |
//! | `src/models.rs` | `my_app::models` |
//! | `src/models/mod.rs` | `my_app::models` |
//! | `src/models/user.rs` | `my_app::models::user` |
//!
//! Inline `mod` blocks extend the path of their file.

use std::path::{Component, Path};

/// Crate identifier plus module segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    package:  String,
    segments: Vec<String>
}

impl ModulePath {
    /// Module path of a crate root.
    ///
    /// `-` in the package name is mapped to `_`.
    pub fn root(package: &str) -> Self {
        Self {
            package:  package.replace('-', "_"),
            segments: Vec::new()
        }
    }

    /// Module path of `file`, a source file below `crate_dir`.
    ///
    /// A leading `src` directory is dropped; `lib.rs`, `main.rs` and
    /// `mod.rs` contribute no segment.
    pub fn for_file(package: &str, crate_dir: &Path, file: &Path) -> Self {
        let mut path = Self::root(package);
        let relative = file.strip_prefix(crate_dir).unwrap_or(file);
        let parts: Vec<String> = relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None
            })
            .collect();

        let skip = usize::from(parts.first().is_some_and(|first| first == "src"));
        path.segments.extend(parts.into_iter().skip(skip));

        if let Some(stem) = relative.file_stem().map(|s| s.to_string_lossy())
            && !matches!(stem.as_ref(), "lib" | "main" | "mod")
        {
            path.segments.push(stem.into_owned());
        }
        path
    }

    /// Path of the inline child module `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut child = self.clone();
        child.segments.push(name.to_owned());
        child
    }

    /// Crate identifier.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Segments below the crate root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// `package::segment::...`.
    pub fn import_path(&self) -> String {
        std::iter::once(self.package.as_str())
            .chain(self.segments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("::")
    }

    /// Absolute path for the `depth`-th ancestor, `None` above the crate root.
    pub fn ancestor(&self, depth: usize) -> Option<Self> {
        let keep = self.segments.len().checked_sub(depth)?;
        Some(Self {
            package:  self.package.clone(),
            segments: self.segments[..keep].to_vec()
        })
    }
}
