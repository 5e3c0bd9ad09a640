// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Crate lookup through the nearest `Cargo.toml`.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>
}

#[derive(Debug, Deserialize)]
struct Package {
    name: Option<String>
}

/// The crate a source file belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateRoot {
    /// Directory holding `Cargo.toml`.
    pub dir:     PathBuf,
    /// `[package].name` as written in the manifest.
    pub package: String
}

/// Memoizing crate lookup.
///
/// Every file of a directory walk usually shares one manifest, so results
/// are cached per directory.
#[derive(Debug, Default)]
pub struct Manifests {
    cache: HashMap<PathBuf, Option<CrateRoot>>
}

impl Manifests {
    /// Find the crate enclosing `file`.
    ///
    /// Walks up from the file's directory to the nearest `Cargo.toml` that
    /// declares `[package].name`. Manifests without a package (virtual
    /// workspace roots) are passed over.
    ///
    /// # Errors
    ///
    /// [`Error::MissingManifest`] when no ancestor qualifies,
    /// [`Error::InvalidManifest`] for unparseable TOML, [`Error::Io`] when
    /// the file or a manifest cannot be read.
    pub fn locate(&mut self, file: &Path) -> Result<CrateRoot> {
        let file = fs::canonicalize(file).map_err(|e| Error::io(file, e))?;
        for dir in file.ancestors().skip(1) {
            if let Some(cached) = self.cache.get(dir) {
                match cached {
                    Some(root) => return Ok(root.clone()),
                    None => continue
                }
            }
            let found = read_package(dir)?;
            self.cache.insert(dir.to_path_buf(), found.clone());
            if let Some(root) = found {
                return Ok(root);
            }
        }
        Err(Error::MissingManifest(file))
    }
}

fn read_package(dir: &Path) -> Result<Option<CrateRoot>> {
    let path = dir.join("Cargo.toml");
    if !path.is_file() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let manifest: Manifest = toml::from_str(&text).map_err(|e| Error::InvalidManifest {
        path:    path.clone(),
        message: e.message().to_owned()
    })?;
    Ok(manifest
        .package
        .and_then(|package| package.name)
        .map(|package| CrateRoot {
            dir: dir.to_path_buf(),
            package
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_package_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("Cargo.toml"), "[workspace]\nmembers = [\"app\"]\n").unwrap();
        fs::create_dir_all(root.join("app/src")).unwrap();
        fs::write(root.join("app/Cargo.toml"), "[package]\nname = \"my-app\"\n").unwrap();
        fs::write(root.join("app/src/lib.rs"), "").unwrap();

        let found = Manifests::default().locate(&root.join("app/src/lib.rs")).unwrap();
        assert_eq!(found.package, "my-app");
        assert_eq!(found.dir, fs::canonicalize(root.join("app")).unwrap());
    }

    #[test]
    fn workspace_only_manifest_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("Cargo.toml"), "[workspace]\n").unwrap();
        fs::write(root.join("models.rs"), "").unwrap();

        let err = Manifests::default().locate(&root.join("models.rs")).unwrap_err();
        assert!(matches!(err, Error::MissingManifest(_)));
    }

    #[test]
    fn broken_manifest_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("Cargo.toml"), "[package\n").unwrap();
        fs::write(root.join("models.rs"), "").unwrap();

        let err = Manifests::default().locate(&root.join("models.rs")).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest { .. }));
    }
}
