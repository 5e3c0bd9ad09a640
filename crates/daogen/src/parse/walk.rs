// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source discovery.
//!
//! A directory input is walked recursively. Only `.rs` files are kept, and
//! the following are skipped:
//!
//! | Skipped | Rule |
//! |---------|------|
//! | test and bench trees | any directory named `tests` or `benches` |
//! | test modules | files named `test.rs` or `tests.rs` |
//! | test files | stems ending in `_test` or `_tests` |
//! | build output | directories named `target` |
//! | hidden directories | names starting with `.` |
//!
//! Files are returned sorted by path so runs are reproducible.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Collect the source files under `root`.
///
/// # Errors
///
/// Returns [`Error::Io`] when a directory cannot be read.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            Error::io(path, source)
        })?;
        if entry.file_type().is_file() && is_source(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Check whether a single file is a Rust source that is not a test.
pub fn is_source(path: &Path) -> bool {
    if path.extension().is_none_or(|ext| ext != "rs") {
        return false;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    !matches!(stem, "test" | "tests") && !stem.ends_with("_test") && !stem.ends_with("_tests")
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || matches!(name.as_ref(), "tests" | "benches" | "target")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn skips_tests_hidden_and_target() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        for file in [
            "src/lib.rs",
            "src/models/user.rs",
            "src/models/user_test.rs",
            "src/models/tests.rs",
            "src/notes.txt",
            "tests/it.rs",
            "benches/b.rs",
            "target/debug/build.rs",
            ".git/hooks.rs",
        ] {
            touch(root, file);
        }

        let files: Vec<_> = source_files(root)
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            files,
            [PathBuf::from("src/lib.rs"), PathBuf::from("src/models/user.rs")]
        );
    }

    #[test]
    fn source_filter() {
        assert!(is_source(Path::new("models.rs")));
        assert!(!is_source(Path::new("models.go")));
        assert!(!is_source(Path::new("user_tests.rs")));
        assert!(!is_source(Path::new("test.rs")));
    }
}
