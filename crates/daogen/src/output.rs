// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output writer.
//!
//! Files land at `OUTPUT/<namespace>/<snake_case(Name)>_dao.rs`. Nothing is
//! ever overwritten: every target of the run is checked before the first
//! write, and each file is opened with `create_new`.

use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf}
};

use crate::error::{Error, Result};

/// One emitted source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root, e.g. `postgres/user_dao.rs`.
    pub path:   PathBuf,

    /// File contents.
    pub source: String
}

impl GeneratedFile {
    /// File `name` inside the `namespace` sub-directory.
    pub fn new(namespace: &str, name: &str, source: String) -> Self {
        Self {
            path: Path::new(namespace).join(name),
            source
        }
    }
}

/// Write every file under `output`, returning the written paths.
///
/// # Errors
///
/// [`Error::OutputCollision`] when a target already exists or two files of
/// the run share a target; nothing is written in that case.
/// [`Error::Io`] when a directory or file cannot be created.
pub fn write_all(output: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let targets = plan(output, files)?;

    let mut written = Vec::with_capacity(files.len());
    for (target, file) in targets.into_iter().zip(files) {
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        write_new(&target, &file.source)?;
        tracing::info!(path = %target.display(), "written");
        written.push(target);
    }
    Ok(written)
}

/// Absolute form of `output` with symlinks resolved in the part that
/// already exists, comparable with the canonical crate directories the
/// parser records.
pub fn resolve(output: &Path) -> PathBuf {
    let Ok(absolute) = std::path::absolute(output) else {
        return output.to_path_buf();
    };
    let mut missing = Vec::new();
    let mut current = absolute.as_path();
    loop {
        if let Ok(canonical) = fs::canonicalize(current) {
            return missing
                .iter()
                .rev()
                .fold(canonical, |path, name| path.join(name));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return absolute
        }
    }
}

fn plan(output: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut targets = Vec::with_capacity(files.len());
    for file in files {
        let target = output.join(&file.path);
        if target.exists() || !seen.insert(target.clone()) {
            return Err(Error::OutputCollision(target));
        }
        targets.push(target);
    }
    Ok(targets)
}

fn write_new(path: &Path, source: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::OutputCollision(path.to_path_buf()),
            _ => Error::io(path, e)
        })?;
    file.write_all(source.as_bytes())
        .map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind as Kind;

    fn file(name: &str, source: &str) -> GeneratedFile {
        GeneratedFile::new("postgres", name, source.to_owned())
    }

    #[test]
    fn writes_under_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_all(dir.path(), &[file("user_dao.rs", "// user\n")]).unwrap();
        let expected = dir.path().join("postgres").join("user_dao.rs");
        assert_eq!(written, [expected.clone()]);
        assert_eq!(fs::read_to_string(expected).unwrap(), "// user\n");
    }

    #[test]
    fn existing_file_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), &[file("user_dao.rs", "first")]).unwrap();

        let err = write_all(dir.path(), &[file("user_dao.rs", "second")]).unwrap_err();
        assert_eq!(err.kind(), Kind::OutputCollision);
        let kept = fs::read_to_string(dir.path().join("postgres/user_dao.rs")).unwrap();
        assert_eq!(kept, "first");
    }

    #[test]
    fn collision_detected_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), &[file("user_dao.rs", "first")]).unwrap();

        let err = write_all(
            dir.path(),
            &[file("account_dao.rs", "account"), file("user_dao.rs", "second")]
        )
        .unwrap_err();
        assert_eq!(err.kind(), Kind::OutputCollision);
        assert!(!dir.path().join("postgres/account_dao.rs").exists());
    }

    #[test]
    fn resolve_keeps_missing_tail() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();
        assert_eq!(resolve(&dir.path().join("src/dao")), canonical.join("src/dao"));
        assert_eq!(resolve(dir.path()), canonical);
    }

    #[test]
    fn duplicate_targets_within_run() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_all(dir.path(), &[file("user_dao.rs", "a"), file("user_dao.rs", "b")]).unwrap_err();
        assert_eq!(err.kind(), Kind::OutputCollision);
        assert!(!dir.path().join("postgres").exists());
    }
}
