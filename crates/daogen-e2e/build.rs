// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generates DAOs for `src/models.rs`:
//!
//! - `$OUT_DIR/dao/<dialect>/` in every built-in dialect, naming models by
//!   package for the integration tests
//! - `$OUT_DIR/local/postgres/` naming models through `crate::`, compiled
//!   into this crate as `daogen_e2e::dao`

use std::{
    env,
    error::Error,
    fs,
    path::{Path, PathBuf}
};

use daogen::{CratePaths, DialectRegistry, GenerateOptions};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo::rerun-if-changed=src/models.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let registry = DialectRegistry::builtin();

    let shared = fresh(&out_dir.join("dao"))?;
    for id in registry.ids() {
        daogen::generate_with(&registry, &options(&shared, id, CratePaths::Package))?;
    }

    let local = fresh(&out_dir.join("local"))?;
    daogen::generate_with(&registry, &options(&local, "postgres", CratePaths::Crate))?;
    Ok(())
}

// a rebuild reuses OUT_DIR and the generator never overwrites
fn fresh(dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

fn options(output: &Path, driver: &str, crate_paths: CratePaths) -> GenerateOptions {
    GenerateOptions {
        input:  PathBuf::from("src/models.rs"),
        output: output.to_path_buf(),
        driver: driver.to_owned(),
        crate_paths
    }
}
