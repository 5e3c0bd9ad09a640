// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end runs of the generation pipeline on a scratch crate.

use std::{fs, path::Path};

use daogen::{CratePaths, ErrorKind, GenerateOptions, generate};
use tempfile::TempDir;

const MODELS: &str = r#"
use crate::types::Email;

pub struct User {
    #[sql("id,primary")]
    pub id: i64,
    pub name: String,
    pub email: Option<Email>,
}

impl User {
    pub fn table_name() -> &'static str {
        "users"
    }
}

pub struct Unmapped {}
"#;

const ORDERS: &str = r#"
#[dao(table = "orders")]
pub struct OrderLine {
    #[sql("line_id,primary")]
    pub id: i64,
    #[sql("qty")]
    pub quantity: i32,
}
"#;

fn scratch_crate() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("Cargo.toml"), "[package]\nname = \"shop-app\"\nversion = \"0.1.0\"\n").unwrap();
    fs::create_dir_all(root.join("src/billing")).unwrap();
    fs::create_dir_all(root.join("src/tests")).unwrap();
    fs::write(root.join("src/models.rs"), MODELS).unwrap();
    fs::write(root.join("src/billing/orders.rs"), ORDERS).unwrap();
    fs::write(root.join("src/tests/fixtures.rs"), "pub struct Broken { pub x: i32 }").unwrap();
    dir
}

fn options(input: &Path, output: &Path, driver: &str) -> GenerateOptions {
    GenerateOptions {
        input:       input.to_path_buf(),
        output:      output.to_path_buf(),
        driver:      driver.to_owned(),
        crate_paths: CratePaths::Auto
    }
}

#[test]
fn generates_one_file_per_model() {
    let krate = scratch_crate();
    let out = tempfile::tempdir().unwrap();

    let written = generate(&options(&krate.path().join("src"), out.path(), "pg")).unwrap();

    assert_eq!(
        written,
        [
            out.path().join("postgres/order_line_dao.rs"),
            out.path().join("postgres/user_dao.rs")
        ]
    );

    let user = fs::read_to_string(&written[1]).unwrap();
    assert!(user.contains("// Model: shop_app::models::User"));
    assert!(user.contains("pub use shop_app::models::User;"));
    assert!(user.contains("use shop_app::types::Email;"));
    assert!(user.contains("\"INSERT INTO users (id, name, email) VALUES ($1, $2, $3)\""));

    let orders = fs::read_to_string(&written[0]).unwrap();
    assert!(orders.contains("pub use shop_app::billing::orders::OrderLine;"));
    assert!(orders.contains("\"UPDATE orders SET qty = $1 WHERE line_id = $2\""));
}

#[test]
fn output_inside_model_crate_uses_crate_paths() {
    let krate = scratch_crate();
    let out = krate.path().join("src/dao");

    let written = generate(&options(&krate.path().join("src"), &out, "postgres")).unwrap();

    let user = fs::read_to_string(&written[1]).unwrap();
    assert!(user.contains("// Model: crate::models::User"));
    assert!(user.contains("pub use crate::models::User;"));
    assert!(user.contains("use crate::types::Email;"));
    assert!(!user.contains("shop_app"));
    let orders = fs::read_to_string(&written[0]).unwrap();
    assert!(orders.contains("pub use crate::billing::orders::OrderLine;"));
}

#[test]
fn explicit_crate_paths_override_detection() {
    let krate = scratch_crate();
    let input = krate.path().join("src");
    let outside = tempfile::tempdir().unwrap();

    let forced_crate = GenerateOptions {
        crate_paths: CratePaths::Crate,
        ..options(&input, outside.path(), "sqlite")
    };
    let written = generate(&forced_crate).unwrap();
    assert!(fs::read_to_string(&written[1]).unwrap().contains("pub use crate::models::User;"));

    let forced_package = GenerateOptions {
        crate_paths: CratePaths::Package,
        ..options(&input, &krate.path().join("src/dao"), "sqlite")
    };
    let written = generate(&forced_package).unwrap();
    assert!(fs::read_to_string(&written[1]).unwrap().contains("pub use shop_app::models::User;"));
}

#[test]
fn second_run_collides_and_keeps_first_output() {
    let krate = scratch_crate();
    let out = tempfile::tempdir().unwrap();
    let opts = options(&krate.path().join("src"), out.path(), "postgres");

    let written = generate(&opts).unwrap();
    let before = fs::read_to_string(&written[1]).unwrap();

    let err = generate(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutputCollision);
    assert_eq!(fs::read_to_string(&written[1]).unwrap(), before);
}

#[test]
fn dialects_write_to_separate_namespaces() {
    let krate = scratch_crate();
    let out = tempfile::tempdir().unwrap();
    let input = krate.path().join("src");

    generate(&options(&input, out.path(), "postgres")).unwrap();
    generate(&options(&input, out.path(), "mssql")).unwrap();

    let sqlserver = fs::read_to_string(out.path().join("sqlserver/user_dao.rs")).unwrap();
    assert!(sqlserver.contains("\"DELETE FROM users WHERE id = @p1\""));
}

#[test]
fn output_is_identical_across_runs() {
    let krate = scratch_crate();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let input = krate.path().join("src");

    generate(&options(&input, first.path(), "oracle")).unwrap();
    generate(&options(&input, second.path(), "oracle")).unwrap();

    for name in ["order_line_dao.rs", "user_dao.rs"] {
        let a = fs::read_to_string(first.path().join("oracle").join(name)).unwrap();
        let b = fs::read_to_string(second.path().join("oracle").join(name)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn unknown_driver_rejected_before_parsing() {
    let out = tempfile::tempdir().unwrap();
    let err = generate(&options(Path::new("/does/not/exist"), out.path(), "db2")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDialect);
}

#[test]
fn missing_input_is_io_error() {
    let out = tempfile::tempdir().unwrap();
    let err = generate(&options(Path::new("/does/not/exist"), out.path(), "sqlite")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn input_without_models_fails() {
    let krate = tempfile::tempdir().unwrap();
    fs::write(krate.path().join("Cargo.toml"), "[package]\nname = \"empty\"\n").unwrap();
    fs::create_dir(krate.path().join("src")).unwrap();
    fs::write(krate.path().join("src/lib.rs"), "pub fn noop() {}").unwrap();
    let out = tempfile::tempdir().unwrap();

    let err = generate(&options(&krate.path().join("src"), out.path(), "mysql")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(fs::read_dir(out.path()).unwrap().next().is_none());
}

#[test]
fn missing_primary_key_aborts_without_writing() {
    let krate = scratch_crate();
    fs::write(krate.path().join("src/audit.rs"), "pub struct Audit { pub note: String }").unwrap();
    let out = tempfile::tempdir().unwrap();

    let err = generate(&options(&krate.path().join("src"), out.path(), "sqlite")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(!out.path().join("sqlite").exists());
}
