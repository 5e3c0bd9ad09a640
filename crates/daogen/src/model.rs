// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Normalized model representation.
//!
//! The parser turns each eligible struct into one [`Model`]; the emitter only
//! ever reads models. Construction goes through [`Model::try_new`], so a
//! `Model` value always satisfies:
//!
//! - at least one field
//! - exactly one field with `is_primary == true`, and `primary_key` names it
//!
//! # Example
//!
//! ```rust,ignore
//! pub struct User {
//!     #[sql("id,primary")]
//!     pub id: i64,
//!     #[sql("full_name")]
//!     pub name: String,
//!     pub email: Option<String>,
//! }
//! ```
//!
//! becomes
//!
//! | Field | Column | Primary |
//! |-------|--------|---------|
//! | `id` | `id` | yes |
//! | `name` | `full_name` | no |
//! | `email` | `email` | no |

use std::path::{Path, PathBuf};

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, ReturnType, Type};

use crate::error::ValidationError;

/// One persisted field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name:       String,
    ty:         Type,
    column:     String,
    is_primary: bool
}

impl Field {
    /// Create a field.
    pub fn new(name: impl Into<String>, ty: Type, column: impl Into<String>, is_primary: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            column: column.into(),
            is_primary
        }
    }

    /// Declared field name, without a raw `r#` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type.
    #[must_use]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// SQL column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Whether this field is the primary key.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Textual rendering of the declared type, e.g. `Option<String>`.
    #[must_use]
    pub fn type_name(&self) -> String {
        render_type(&self.ty)
    }

    /// Whether `daogen-core` ships `Encode` and `Decode` for the declared
    /// type.
    ///
    /// `chrono` and `uuid` types count as built in; they need the matching
    /// `daogen-core` feature. Any other type compiles only with its own
    /// impls, which the orphan rule allows for types of the model's crate.
    #[must_use]
    pub fn has_builtin_codec(&self) -> bool {
        builtin_codec(&self.ty)
    }
}

const BUILTIN_TYPES: &[&str] = &[
    "bool",
    "i8",
    "i16",
    "i32",
    "i64",
    "u8",
    "u16",
    "u32",
    "u64",
    "usize",
    "f32",
    "f64",
    "char",
    "String",
    "Value",
    "NaiveDate",
    "NaiveTime",
    "NaiveDateTime",
    "Uuid"
];

fn builtin_codec(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let Some(last) = type_path.path.segments.last() else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }
    match (last.ident.to_string().as_str(), &last.arguments) {
        ("Option", PathArguments::AngleBracketed(args)) => single_type_arg(args).is_some_and(builtin_codec),
        ("Vec", PathArguments::AngleBracketed(args)) => single_type_arg(args).is_some_and(|t| last_ident_is(t, "u8")),
        ("DateTime", PathArguments::AngleBracketed(args)) => single_type_arg(args).is_some_and(|t| last_ident_is(t, "Utc")),
        (name, PathArguments::None) => BUILTIN_TYPES.contains(&name),
        _ => false
    }
}

fn single_type_arg(args: &syn::AngleBracketedGenericArguments) -> Option<&Type> {
    match args.args.first() {
        Some(GenericArgument::Type(ty)) if args.args.len() == 1 => Some(ty),
        _ => None
    }
}

fn last_ident_is(ty: &Type, name: &str) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path.qself.is_none()
        && type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name && segment.arguments.is_none())
}

/// One data model, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name:        String,
    fields:      Vec<Field>,
    table_name:  String,
    primary_key: String,
    package:     String,
    import_path: String,
    imports:     Vec<String>,
    exhaustive:  bool,
    crate_dir:   Option<PathBuf>
}

impl Model {
    /// Validate fields and build a model.
    ///
    /// `table_name` defaults to `name`. When several fields are marked
    /// primary, the first keeps the marker and later ones are demoted.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoFields`] for an empty field list,
    /// [`ValidationError::NoPrimaryKey`] when no field is primary.
    pub fn try_new(
        name: impl Into<String>,
        mut fields: Vec<Field>,
        table_name: Option<String>,
        package: impl Into<String>,
        import_path: impl Into<String>
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if fields.is_empty() {
            return Err(ValidationError::NoFields {
                model: name
            });
        }

        let mut primary_key: Option<String> = None;
        for field in fields.iter_mut().filter(|f| f.is_primary) {
            match &primary_key {
                None => primary_key = Some(field.name.clone()),
                Some(first) => {
                    tracing::warn!(
                        model = %name,
                        field = %field.name,
                        primary = %first,
                        "duplicate primary marker ignored"
                    );
                    field.is_primary = false;
                }
            }
        }
        let primary_key = primary_key.ok_or_else(|| ValidationError::NoPrimaryKey {
            model: name.clone()
        })?;

        Ok(Self {
            table_name: table_name.unwrap_or_else(|| name.clone()),
            name,
            fields,
            primary_key,
            package: package.into(),
            import_path: import_path.into(),
            imports: Vec::new(),
            exhaustive: true,
            crate_dir: None
        })
    }

    /// Attach `use` paths the field types need, e.g. `chrono::DateTime`.
    #[must_use]
    pub fn with_imports(mut self, imports: Vec<String>) -> Self {
        self.imports = imports;
        self
    }

    /// Mark whether every field of the struct is part of the model.
    ///
    /// A non-exhaustive model has private fields and is built through
    /// `Default` when decoding rows.
    #[must_use]
    pub const fn with_exhaustive(mut self, exhaustive: bool) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    /// Record the directory of the crate the model was declared in.
    #[must_use]
    pub fn with_crate_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.crate_dir = Some(dir.into());
        self
    }

    /// Refer to the declaring crate as `crate` instead of its package name.
    ///
    /// Needed when the generated DAO is compiled inside that same crate,
    /// where `my_app::models::User` does not resolve but
    /// `crate::models::User` does. Imports of other crates are untouched.
    #[must_use]
    pub fn crate_relative(mut self) -> Self {
        self.import_path = rebase(&self.import_path, &self.package);
        self.imports = self
            .imports
            .iter()
            .map(|import| rebase(import, &self.package))
            .collect();
        self
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// SQL table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Name of the primary key field.
    #[must_use]
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// The primary key field.
    #[must_use]
    pub fn primary_field(&self) -> &Field {
        // try_new guarantees exactly one primary field
        self.fields
            .iter()
            .find(|f| f.is_primary)
            .unwrap_or(&self.fields[0])
    }

    /// Non-primary fields in declaration order.
    pub fn value_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_primary)
    }

    /// Crate identifier the model was declared in.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Module path of the model's scope, e.g. `my_app::models`.
    #[must_use]
    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Extra `use` paths for field types.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Whether the struct has no fields besides the model's.
    #[must_use]
    pub const fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }

    /// Directory holding the declaring crate's `Cargo.toml`, when known.
    #[must_use]
    pub fn crate_dir(&self) -> Option<&Path> {
        self.crate_dir.as_deref()
    }
}

fn rebase(path: &str, package: &str) -> String {
    match path.strip_prefix(package) {
        Some("") => "crate".to_owned(),
        Some(rest) if rest.starts_with("::") || rest.starts_with(' ') => format!("crate{rest}"),
        _ => path.to_owned()
    }
}

fn render_type(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => render_path(&type_path.path),
        Type::Reference(reference) => {
            let mut out = String::from("&");
            if let Some(lifetime) = &reference.lifetime {
                out.push_str(&format!("'{} ", lifetime.ident));
            }
            if reference.mutability.is_some() {
                out.push_str("mut ");
            }
            out.push_str(&render_type(&reference.elem));
            out
        }
        Type::Slice(slice) => format!("[{}]", render_type(&slice.elem)),
        Type::Array(array) => format!(
            "[{}; {}]",
            render_type(&array.elem),
            array.len.to_token_stream()
        ),
        Type::Tuple(tuple) => {
            let elems: Vec<_> = tuple.elems.iter().map(render_type).collect();
            if elems.len() == 1 {
                format!("({},)", elems[0])
            } else {
                format!("({})", elems.join(", "))
            }
        }
        Type::Paren(paren) => render_type(&paren.elem),
        Type::Group(group) => render_type(&group.elem),
        other => other.to_token_stream().to_string()
    }
}

fn render_path(path: &syn::Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    let segments: Vec<_> = path
        .segments
        .iter()
        .map(|segment| {
            let mut rendered = segment.ident.to_string();
            match &segment.arguments {
                PathArguments::None => {}
                PathArguments::AngleBracketed(args) => {
                    let args: Vec<_> = args.args.iter().map(render_generic).collect();
                    rendered.push_str(&format!("<{}>", args.join(", ")));
                }
                PathArguments::Parenthesized(args) => {
                    let inputs: Vec<_> = args.inputs.iter().map(render_type).collect();
                    rendered.push_str(&format!("({})", inputs.join(", ")));
                    if let ReturnType::Type(_, output) = &args.output {
                        rendered.push_str(&format!(" -> {}", render_type(output)));
                    }
                }
            }
            rendered
        })
        .collect();
    out.push_str(&segments.join("::"));
    out
}

fn render_generic(arg: &GenericArgument) -> String {
    match arg {
        GenericArgument::Type(ty) => render_type(ty),
        GenericArgument::Lifetime(lifetime) => format!("'{}", lifetime.ident),
        GenericArgument::AssocType(assoc) => format!("{} = {}", assoc.ident, render_type(&assoc.ty)),
        other => other.to_token_stream().to_string()
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn field(name: &str, primary: bool) -> Field {
        Field::new(name, parse_quote!(i64), name, primary)
    }

    #[test]
    fn table_name_defaults_to_type_name() {
        let model = Model::try_new("User", vec![field("id", true)], None, "app", "app").unwrap();
        assert_eq!(model.table_name(), "User");
        assert_eq!(model.primary_key(), "id");
    }

    #[test]
    fn empty_fields_rejected() {
        let err = Model::try_new("Empty", Vec::new(), None, "app", "app").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoFields {
                model: "Empty".into()
            }
        );
    }

    #[test]
    fn missing_primary_rejected() {
        let err = Model::try_new("User", vec![field("id", false)], None, "app", "app").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoPrimaryKey {
                model: "User".into()
            }
        );
    }

    #[test]
    fn first_primary_wins() {
        let model = Model::try_new(
            "Pair",
            vec![field("a", true), field("b", true)],
            None,
            "app",
            "app"
        )
        .unwrap();
        assert_eq!(model.primary_key(), "a");
        assert!(!model.fields()[1].is_primary());
        assert_eq!(model.value_fields().count(), 1);
    }

    #[test]
    fn crate_relative_rewrites_own_paths() {
        let model = Model::try_new("User", vec![field("id", true)], None, "app", "app::models")
            .unwrap()
            .with_imports(vec![
                "app::types::Email".into(),
                "app::Money as Amount".into(),
                "chrono::DateTime".into(),
                "application::Flag".into(),
            ])
            .crate_relative();
        assert_eq!(model.import_path(), "crate::models");
        assert_eq!(
            model.imports(),
            [
                "crate::types::Email",
                "crate::Money as Amount",
                "chrono::DateTime",
                "application::Flag"
            ]
        );

        let root = Model::try_new("User", vec![field("id", true)], None, "app", "app")
            .unwrap()
            .crate_relative();
        assert_eq!(root.import_path(), "crate");
    }

    #[test]
    fn builtin_codecs_recognized() {
        let supported: Vec<Type> = vec![
            parse_quote!(u64),
            parse_quote!(usize),
            parse_quote!(char),
            parse_quote!(Option<String>),
            parse_quote!(Vec<u8>),
            parse_quote!(chrono::DateTime<chrono::Utc>),
            parse_quote!(NaiveDate),
            parse_quote!(uuid::Uuid),
            parse_quote!(Option<Uuid>),
        ];
        for ty in supported {
            let field = Field::new("f", ty, "f", false);
            assert!(field.has_builtin_codec(), "{}", field.type_name());
        }

        let unsupported: Vec<Type> = vec![
            parse_quote!(i128),
            parse_quote!(Vec<String>),
            parse_quote!(DateTime<Local>),
            parse_quote!(Email),
            parse_quote!(Option<Email>),
            parse_quote!((i32, i32)),
        ];
        for ty in unsupported {
            let field = Field::new("f", ty, "f", false);
            assert!(!field.has_builtin_codec(), "{}", field.type_name());
        }
    }

    #[test]
    fn type_names_render_compactly() {
        let cases: Vec<(Type, &str)> = vec![
            (parse_quote!(Option<String>), "Option<String>"),
            (parse_quote!(Vec<u8>), "Vec<u8>"),
            (parse_quote!(HashMap<String, i64>), "HashMap<String, i64>"),
            (parse_quote!(chrono::DateTime<Utc>), "chrono::DateTime<Utc>"),
            (parse_quote!(&'a str), "&'a str"),
            (parse_quote!(&mut [u8]), "&mut [u8]"),
            (parse_quote!([u8; 16]), "[u8; 16]"),
            (parse_quote!((i32, String)), "(i32, String)"),
        ];
        for (ty, expected) in cases {
            let field = Field::new("f", ty, "f", false);
            assert_eq!(field.type_name(), expected);
        }
    }
}
