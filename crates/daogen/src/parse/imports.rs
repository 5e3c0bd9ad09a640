// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolution of names used in field types.
//!
//! Generated DAOs live outside the model's module, so a field typed
//! `DateTime<Utc>` only compiles there if `DateTime` and `Utc` are imported
//! again. For every name a field type starts with, the resolver looks in the
//! model's scope for:
//!
//! 1. a `use` declaration binding the name, rewritten to an absolute path
//!    (`crate::`, `self::`, `super::` and local module prefixes resolved)
//! 2. a public item declared in the scope (`pub struct`, `pub enum`,
//!    `pub type`, `pub mod`, ...)
//!
//! Names found in neither place are assumed to come from the prelude.
//! Glob imports are not expanded.

use syn::{GenericArgument, Item, PathArguments, ReturnType, Type, UseTree, Visibility};

use super::module::ModulePath;

/// One name bound by a `use` declaration.
#[derive(Debug)]
struct Binding {
    name:   String,
    path:   Vec<String>,
    rename: bool
}

/// Compute the `use` paths needed by `types`, in order of first use.
pub fn resolve<'a>(
    types: impl IntoIterator<Item = &'a Type>,
    items: &[Item],
    module: &ModulePath
) -> Vec<String> {
    let mut names = Vec::new();
    for ty in types {
        collect_names(ty, &mut names);
    }

    let bindings = use_bindings(items);
    let mut imports: Vec<String> = Vec::new();
    for name in &names {
        let import = bindings
            .iter()
            .find(|b| &b.name == name)
            .and_then(|b| absolute_use(b, items, module))
            .or_else(|| local_item(items, name).then(|| format!("{}::{name}", module.import_path())));
        if let Some(import) = import
            && !imports.contains(&import)
        {
            imports.push(import);
        }
    }
    imports
}

fn collect_names(ty: &Type, out: &mut Vec<String>) {
    match ty {
        Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                collect_names(&qself.ty, out);
            }
            if let Some(first) = type_path.path.segments.first()
                && type_path.path.leading_colon.is_none()
                && type_path.qself.is_none()
            {
                let name = first.ident.to_string();
                if !out.contains(&name) {
                    out.push(name);
                }
            }
            for segment in &type_path.path.segments {
                match &segment.arguments {
                    PathArguments::AngleBracketed(args) => {
                        for arg in &args.args {
                            match arg {
                                GenericArgument::Type(ty) => collect_names(ty, out),
                                GenericArgument::AssocType(assoc) => collect_names(&assoc.ty, out),
                                _ => {}
                            }
                        }
                    }
                    PathArguments::Parenthesized(args) => {
                        args.inputs.iter().for_each(|ty| collect_names(ty, out));
                        if let ReturnType::Type(_, ty) = &args.output {
                            collect_names(ty, out);
                        }
                    }
                    PathArguments::None => {}
                }
            }
        }
        Type::Reference(reference) => collect_names(&reference.elem, out),
        Type::Slice(slice) => collect_names(&slice.elem, out),
        Type::Array(array) => collect_names(&array.elem, out),
        Type::Tuple(tuple) => tuple.elems.iter().for_each(|ty| collect_names(ty, out)),
        Type::Paren(paren) => collect_names(&paren.elem, out),
        Type::Group(group) => collect_names(&group.elem, out),
        _ => {}
    }
}

fn use_bindings(items: &[Item]) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for item in items {
        if let Item::Use(item_use) = item {
            let mut prefix = Vec::new();
            if item_use.leading_colon.is_some() {
                prefix.push(String::new());
            }
            flatten(&item_use.tree, &mut prefix, &mut bindings);
        }
    }
    bindings
}

fn flatten(tree: &UseTree, prefix: &mut Vec<String>, out: &mut Vec<Binding>) {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            flatten(&path.tree, prefix, out);
            prefix.pop();
        }
        UseTree::Name(name) if name.ident == "self" => {
            if let Some(last) = prefix.last() {
                out.push(Binding {
                    name:   last.clone(),
                    path:   prefix.clone(),
                    rename: false
                });
            }
        }
        UseTree::Name(name) => {
            let mut path = prefix.clone();
            path.push(name.ident.to_string());
            out.push(Binding {
                name: name.ident.to_string(),
                path,
                rename: false
            });
        }
        UseTree::Rename(rename) if rename.rename != "_" => {
            let mut path = prefix.clone();
            path.push(rename.ident.to_string());
            out.push(Binding {
                name: rename.rename.to_string(),
                path,
                rename: true
            });
        }
        UseTree::Group(group) => {
            for tree in &group.items {
                flatten(tree, prefix, out);
            }
        }
        UseTree::Rename(_) | UseTree::Glob(_) => {}
    }
}

fn absolute_use(binding: &Binding, items: &[Item], module: &ModulePath) -> Option<String> {
    let (first, rest) = binding.path.split_first()?;
    let base = match first.as_str() {
        "crate" => Some(ModulePath::root(module.package()).import_path()),
        "self" => Some(module.import_path()),
        "super" => {
            let depth = 1 + rest.iter().take_while(|s| *s == "super").count();
            let rest = &rest[depth - 1..];
            let ancestor = module.ancestor(depth)?.import_path();
            return Some(join(&ancestor, rest, binding));
        }
        // leading `::`
        "" => Some(String::new()),
        name if declares_module(items, name) => Some(format!("{}::{name}", module.import_path())),
        _ => None
    };
    match base {
        Some(base) => Some(join(&base, rest, binding)),
        None => Some(join(first, rest, binding))
    }
}

fn join(base: &str, rest: &[String], binding: &Binding) -> String {
    let mut path = base.to_owned();
    for segment in rest {
        path.push_str("::");
        path.push_str(segment);
    }
    if binding.rename {
        path.push_str(" as ");
        path.push_str(&binding.name);
    }
    path
}

fn declares_module(items: &[Item], name: &str) -> bool {
    items
        .iter()
        .any(|item| matches!(item, Item::Mod(m) if m.ident == name))
}

fn local_item(items: &[Item], name: &str) -> bool {
    items.iter().any(|item| {
        let (ident, vis) = match item {
            Item::Struct(i) => (&i.ident, &i.vis),
            Item::Enum(i) => (&i.ident, &i.vis),
            Item::Type(i) => (&i.ident, &i.vis),
            Item::Union(i) => (&i.ident, &i.vis),
            Item::Trait(i) => (&i.ident, &i.vis),
            Item::Mod(i) => (&i.ident, &i.vis),
            _ => return false
        };
        ident == name && matches!(vis, Visibility::Public(_))
    })
}

#[cfg(test)]
mod tests {
    use syn::{File, parse_quote};

    use super::*;

    fn resolve_in(file: &File, types: &[Type]) -> Vec<String> {
        let module = ModulePath::root("app").child("models");
        resolve(types, &file.items, &module)
    }

    #[test]
    fn prelude_types_need_nothing() {
        let file: File = parse_quote! {};
        let types: Vec<Type> = vec![parse_quote!(Option<String>), parse_quote!(Vec<u8>)];
        assert!(resolve_in(&file, &types).is_empty());
    }

    #[test]
    fn external_use_is_copied() {
        let file: File = parse_quote! {
            use chrono::{DateTime, Utc};
        };
        let types: Vec<Type> = vec![parse_quote!(DateTime<Utc>)];
        assert_eq!(resolve_in(&file, &types), ["chrono::DateTime", "chrono::Utc"]);
    }

    #[test]
    fn crate_self_and_super_are_absolute() {
        let file: File = parse_quote! {
            use crate::types::Email;
            use self::status::Status;
            use super::Money as Amount;
        };
        let types: Vec<Type> = vec![
            parse_quote!(Email),
            parse_quote!(Option<Status>),
            parse_quote!(Amount),
        ];
        assert_eq!(
            resolve_in(&file, &types),
            [
                "app::types::Email",
                "app::models::status::Status",
                "app::Money as Amount"
            ]
        );
    }

    #[test]
    fn public_local_items_are_imported() {
        let file: File = parse_quote! {
            pub enum Role { Admin, Member }
            struct Hidden;
        };
        let types: Vec<Type> = vec![parse_quote!(Role), parse_quote!(Hidden)];
        assert_eq!(resolve_in(&file, &types), ["app::models::Role"]);
    }

    #[test]
    fn qualified_paths_import_their_first_segment() {
        let file: File = parse_quote! {
            pub mod types { pub struct Email; }
        };
        let types: Vec<Type> = vec![parse_quote!(types::Email), parse_quote!(::uuid::Uuid)];
        assert_eq!(resolve_in(&file, &types), ["app::models::types"]);
    }
}
