// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation context for one (model, dialect) pair.
//!
//! Precomputes identifiers and the statements that do not depend on call
//! arguments, so the method generators only assemble tokens.
//!
//! | Field | Example |
//! |-------|---------|
//! | `entity` | `User` |
//! | `dao` | `UserDao` |
//! | `column_enum` | `UserColumn` |
//! | `patch` | `UserPatch` |
//! | `marker` | `daogen_core::dialect::Postgres` |
//! | `variants` | `Id`, `Name`, `Email` |
//! | `insert_sql` | `INSERT INTO users (id, name) VALUES ($1, $2)` |
//! | `update_sql` | `UPDATE users SET name = $1 WHERE id = $2` |

use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span};
use quote::format_ident;
use syn::{Type, UseTree};

use crate::{
    dialect::DialectDescriptor,
    error::{Error, Result},
    model::Model,
    utils::ident
};

/// Precomputed names and SQL for emitting one DAO.
pub struct Context<'a> {
    /// Model being emitted.
    pub model:         &'a Model,

    /// Target dialect.
    pub dialect:       &'a DialectDescriptor,

    /// Model type name.
    pub entity:        Ident,

    /// DAO struct name.
    pub dao:           Ident,

    /// Column enum name.
    pub column_enum:   Ident,

    /// Patch builder name.
    pub patch:         Ident,

    /// Module path the model is re-exported from.
    pub import_path:   syn::Path,

    /// Full path of the dialect marker type.
    pub marker:        syn::Path,

    /// Last segment of `marker`.
    pub marker_ident:  Ident,

    /// `use` trees for the field types.
    pub type_imports:  Vec<UseTree>,

    /// Column enum variants in field order.
    pub variants:      Vec<Ident>,

    /// Primary key field identifier.
    pub pk_field:      Ident,

    /// Primary key field type.
    pub pk_type:       &'a Type,

    /// Column names in field order.
    pub columns:       Vec<&'a str>,

    /// Single-row insert.
    pub insert_sql:    String,

    /// Full-row update, `None` without non-primary fields.
    pub update_sql:    Option<String>,

    /// Delete by primary key.
    pub delete_sql:    String,

    /// Select of every column, no filter.
    pub select_sql:    String,

    /// Select by primary key.
    pub select_pk_sql: String,

    /// Row count, no filter.
    pub count_sql:     String
}

impl<'a> Context<'a> {
    /// Build the context.
    ///
    /// # Errors
    ///
    /// [`Error::Render`] when the model's import path, a type import or the
    /// dialect's marker is not a valid Rust path, or when two field names
    /// map to the same column enum variant.
    pub fn new(model: &'a Model, dialect: &'a DialectDescriptor) -> Result<Self> {
        let render_error = |source| Error::Render {
            model: model.name().to_owned(),
            source
        };
        let import_path = syn::parse_str::<syn::Path>(model.import_path()).map_err(render_error)?;
        let marker = syn::parse_str::<syn::Path>(dialect.marker()).map_err(render_error)?;
        let marker_ident = marker
            .segments
            .last()
            .map(|segment| segment.ident.clone())
            .ok_or_else(|| render_error(syn::Error::new_spanned(&marker, "empty marker path")))?;
        let type_imports = model
            .imports()
            .iter()
            .map(|path| syn::parse_str::<UseTree>(path))
            .collect::<syn::Result<Vec<_>>>()
            .map_err(render_error)?;
        let variants = column_variants(model).map_err(render_error)?;

        let syntax = dialect.syntax();
        let table = model.table_name();
        let primary = model.primary_field();
        let columns: Vec<&str> = model.fields().iter().map(|f| f.column()).collect();
        let value_columns: Vec<&str> = model.value_fields().map(|f| f.column()).collect();
        let update_sql = (!value_columns.is_empty())
            .then(|| syntax.update(table, &value_columns, primary.column()));
        let entity = ident(model.name());

        Ok(Self {
            model,
            dialect,
            dao: format_ident!("{}Dao", entity),
            column_enum: format_ident!("{}Column", entity),
            patch: format_ident!("{}Patch", entity),
            entity,
            import_path,
            marker,
            marker_ident,
            type_imports,
            variants,
            pk_field: ident(primary.name()),
            pk_type: primary.ty(),
            insert_sql: syntax.insert(table, &columns),
            update_sql,
            delete_sql: syntax.delete(table, primary.column()),
            select_sql: syntax.select(table, &columns),
            select_pk_sql: syntax.select_by(table, &columns, primary.column()),
            count_sql: syntax.count(table),
            columns
        })
    }
}

fn column_variants(model: &Model) -> syn::Result<Vec<Ident>> {
    let mut variants: Vec<Ident> = Vec::with_capacity(model.fields().len());
    for field in model.fields() {
        let variant = ident(&field.name().to_case(Case::Pascal));
        if let Some(taken) = variants.iter().position(|v| *v == variant) {
            return Err(syn::Error::new(
                Span::call_site(),
                format!(
                    "fields `{}` and `{}` both map to column variant `{variant}`",
                    model.fields()[taken].name(),
                    field.name()
                )
            ));
        }
        variants.push(variant);
    }
    Ok(variants)
}
