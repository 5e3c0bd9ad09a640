// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model parser.
//!
//! Turns Rust source files into [`Model`]s.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── walk.rs        - source discovery, test files skipped
//! ├── manifest.rs    - nearest Cargo.toml lookup
//! ├── module.rs      - module path of a file and its inline modules
//! ├── options.rs     - #[dao(table, skip)] via darling
//! ├── annotation.rs  - #[sql("column,primary")] per field
//! ├── table_name.rs  - table_name() accessor detection
//! └── imports.rs     - use paths needed by field types
//! ```
//!
//! # Eligibility
//!
//! | Declaration | Outcome |
//! |-------------|---------|
//! | `pub` struct with named fields | model |
//! | struct that is not `pub` | skipped |
//! | generic struct | skipped |
//! | tuple or unit struct | skipped |
//! | `#[dao(skip)]` | skipped |
//! | struct inside `#[cfg(test)] mod` | skipped |
//! | no `pub` field | skipped (`no fields`, logged) |
//! | `pub` fields but no `primary` | error |
//!
//! Only `pub` fields take part; private and restricted fields are ignored.

mod annotation;
mod imports;
mod manifest;
mod module;
mod options;
mod table_name;
mod walk;

use std::{fs, path::Path};

pub use annotation::Annotation;
pub use manifest::{CrateRoot, Manifests};
pub use module::ModulePath;
pub use options::DaoOptions;
use syn::{Attribute, Fields, Item, ItemStruct, Meta, Visibility, ext::IdentExt};
pub use walk::{is_source, source_files};

use crate::{
    error::{Error, Result, ValidationError},
    model::{Field, Model}
};

/// Parse every model under `path`, a file or a directory.
///
/// # Errors
///
/// [`Error::MissingInput`] when `path` does not exist; otherwise any error
/// of [`parse_file`].
pub fn parse_models(path: &Path) -> Result<Vec<Model>> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let files = if path.is_dir() {
        source_files(path)?
    } else if is_source(path) {
        vec![path.to_path_buf()]
    } else {
        tracing::debug!(path = %path.display(), "input is not a Rust source file");
        Vec::new()
    };

    let mut manifests = Manifests::default();
    let mut models = Vec::new();
    for file in files {
        let canonical = fs::canonicalize(&file).map_err(|e| Error::io(&file, e))?;
        let root = manifests.locate(&canonical)?;
        let module = ModulePath::for_file(&root.package, &root.dir, &canonical);
        models.extend(
            parse_file(&file, &module)?
                .into_iter()
                .map(|model| model.with_crate_dir(&root.dir))
        );
    }
    Ok(models)
}

/// Parse one file whose top level is `module`.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::Syntax`] for
/// unparseable source or malformed attributes, [`Error::Validation`] for a
/// struct without a primary key.
pub fn parse_file(path: &Path, module: &ModulePath) -> Result<Vec<Model>> {
    tracing::debug!(path = %path.display(), module = %module.import_path(), "parsing");
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_source(&source, path, module)
}

/// Parse source text. `path` is only used in error messages.
///
/// # Errors
///
/// See [`parse_file`].
pub fn parse_source(source: &str, path: &Path, module: &ModulePath) -> Result<Vec<Model>> {
    let file = syn::parse_file(source).map_err(|e| Error::syntax(path, &e))?;
    let mut models = Vec::new();
    collect(&file.items, module, path, &mut models)?;
    Ok(models)
}

fn collect(items: &[Item], module: &ModulePath, path: &Path, out: &mut Vec<Model>) -> Result<()> {
    for item in items {
        match item {
            Item::Struct(item_struct) if !is_cfg_test(&item_struct.attrs) => {
                if let Some(model) = model_from_struct(item_struct, items, module, path)? {
                    tracing::debug!(model = %model.name(), table = %model.table_name(), "model found");
                    out.push(model);
                }
            }
            Item::Mod(item_mod) if !is_cfg_test(&item_mod.attrs) => {
                if let Some((_, content)) = &item_mod.content {
                    let child = module.child(&item_mod.ident.unraw().to_string());
                    collect(content, &child, path, out)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn model_from_struct(
    item: &ItemStruct,
    scope: &[Item],
    module: &ModulePath,
    path: &Path
) -> Result<Option<Model>> {
    let name = item.ident.unraw().to_string();
    if !matches!(item.vis, Visibility::Public(_)) {
        tracing::debug!(model = %name, "non-public struct skipped");
        return Ok(None);
    }
    if !item.generics.params.is_empty() {
        tracing::debug!(model = %name, "generic struct skipped");
        return Ok(None);
    }
    let Fields::Named(named) = &item.fields else {
        tracing::debug!(model = %name, "struct without named fields skipped");
        return Ok(None);
    };

    let options = DaoOptions::from_item(item).map_err(|e| darling_error(path, e))?;
    if options.skip {
        tracing::debug!(model = %name, "skipped by #[dao(skip)]");
        return Ok(None);
    }

    let mut fields = Vec::new();
    for field in &named.named {
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };
        let field_name = ident.unraw().to_string();
        let annotation =
            Annotation::from_attrs(&field_name, &field.attrs).map_err(|e| Error::syntax(path, &e))?;
        fields.push(Field::new(
            field_name,
            field.ty.clone(),
            annotation.column,
            annotation.is_primary
        ));
    }
    let exhaustive = fields.len() == named.named.len();
    for field in fields.iter().filter(|f| !f.has_builtin_codec()) {
        tracing::warn!(
            model = %name,
            field = %field.name(),
            ty = %field.type_name(),
            "no built-in Encode/Decode for field type, it needs its own impls"
        );
    }

    let table = table_name::find(scope, &name).or(options.table);
    let imports = imports::resolve(fields.iter().map(Field::ty), scope, module);

    match Model::try_new(name, fields, table, module.package(), module.import_path()) {
        Ok(model) => Ok(Some(model.with_imports(imports).with_exhaustive(exhaustive))),
        Err(err @ ValidationError::NoFields {
            ..
        }) => {
            tracing::debug!(error = %err, "struct skipped");
            Ok(None)
        }
        Err(err) => Err(err.into())
    }
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<Meta>()
                .is_ok_and(|meta| meta.path().is_ident("test"))
    })
}

fn darling_error(path: &Path, err: darling::Error) -> Error {
    let start = err.span().start();
    Error::Syntax {
        path:    path.to_path_buf(),
        line:    start.line,
        column:  start.column + 1,
        message: err.to_string()
    }
}
