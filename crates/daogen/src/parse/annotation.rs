// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field metadata tag.
//!
//! A field carries at most one `sql` attribute holding a comma-separated
//! tag. The first token overrides the column name, the remaining tokens are
//! markers.
//!
//! | Attribute | Column | Primary |
//! |-----------|--------|---------|
//! | none | field name | no |
//! | `#[sql("user_id")]` | `user_id` | no |
//! | `#[sql("user_id,primary")]` | `user_id` | yes |
//! | `#[sql(",primary")]` | field name | yes |
//! | `#[sql = "id, primary"]` | `id` | yes |
//!
//! Unknown markers are ignored. Markers are case-sensitive.

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

/// Marker flagging the primary key.
const PRIMARY: &str = "primary";

/// Column name and markers of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// SQL column name.
    pub column:     String,
    /// Whether the field is the primary key.
    pub is_primary: bool
}

impl Annotation {
    /// Decompose a tag value for the field `field_name`.
    #[must_use]
    pub fn read(field_name: &str, tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self {
                column:     field_name.to_owned(),
                is_primary: false
            };
        };

        let mut tokens = tag.split(',').map(str::trim);
        let column = match tokens.next() {
            Some(first) if !first.is_empty() => first.to_owned(),
            _ => field_name.to_owned()
        };
        let is_primary = tokens.any(|token| token == PRIMARY);

        Self {
            column,
            is_primary
        }
    }

    /// Find the `sql` attribute among `attrs` and decompose it.
    ///
    /// # Errors
    ///
    /// Returns an error spanning the attribute when its argument is not a
    /// string literal, or when the field carries more than one `sql`
    /// attribute.
    pub fn from_attrs(field_name: &str, attrs: &[Attribute]) -> syn::Result<Self> {
        let mut tag: Option<LitStr> = None;
        for attr in attrs.iter().filter(|a| a.path().is_ident("sql")) {
            if tag.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate `sql` attribute"));
            }
            tag = Some(tag_literal(attr)?);
        }
        Ok(Self::read(field_name, tag.as_ref().map(LitStr::value).as_deref()))
    }
}

fn tag_literal(attr: &Attribute) -> syn::Result<LitStr> {
    match &attr.meta {
        Meta::List(_) => attr.parse_args::<LitStr>(),
        Meta::NameValue(meta) => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit),
                ..
            }) => Ok(lit.clone()),
            other => Err(syn::Error::new_spanned(other, "expected string literal"))
        },
        Meta::Path(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[sql(\"column,primary\")]`"
        ))
    }
}
