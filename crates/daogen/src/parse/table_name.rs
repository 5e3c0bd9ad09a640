// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `table_name()` accessor detection.
//!
//! A model overrides its table name by declaring, in the same module scope,
//! an inherent or trait `impl` with a `table_name` method that returns a
//! string literal:
//!
//! ```rust,ignore
//! impl User {
//!     pub fn table_name() -> &'static str {
//!         "users"
//!     }
//! }
//! ```
//!
//! The method may take `self` in any form but no other parameters. The body
//! must be exactly one tail literal or one `return "..."` statement; anything
//! computed is ignored.

use syn::{Block, Expr, ExprLit, FnArg, ImplItem, Item, Lit, Stmt, Type};

/// Find the literal returned by `type_name`'s `table_name()` accessor.
pub fn find(items: &[Item], type_name: &str) -> Option<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(imp) if implements_for(&imp.self_ty, type_name) => Some(imp),
            _ => None
        })
        .flat_map(|imp| imp.items.iter())
        .find_map(|item| match item {
            ImplItem::Fn(method)
                if method.sig.ident == "table_name"
                    && method.sig.inputs.iter().all(|arg| matches!(arg, FnArg::Receiver(_))) =>
            {
                literal_body(&method.block)
            }
            _ => None
        })
}

fn implements_for(self_ty: &Type, type_name: &str) -> bool {
    match self_ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == type_name && segment.arguments.is_none()),
        _ => false
    }
}

fn literal_body(block: &Block) -> Option<String> {
    let [stmt] = block.stmts.as_slice() else {
        return None;
    };
    let expr = match stmt {
        Stmt::Expr(Expr::Return(ret), _) => ret.expr.as_deref()?,
        Stmt::Expr(expr, None) => expr,
        _ => return None
    };
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit),
            ..
        }) => Some(lit.value()),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use syn::{File, parse_quote};

    use super::*;

    fn find_in(file: File, name: &str) -> Option<String> {
        find(&file.items, name)
    }

    #[test]
    fn tail_literal() {
        let file: File = parse_quote! {
            impl User {
                pub fn table_name() -> &'static str { "users" }
            }
        };
        assert_eq!(find_in(file, "User").as_deref(), Some("users"));
    }

    #[test]
    fn return_statement_with_receiver() {
        let file: File = parse_quote! {
            impl TableName for User {
                fn table_name(&self) -> &'static str { return "app_users"; }
            }
        };
        assert_eq!(find_in(file, "User").as_deref(), Some("app_users"));
    }

    #[test]
    fn other_types_ignored() {
        let file: File = parse_quote! {
            impl Account {
                fn table_name() -> &'static str { "accounts" }
            }
        };
        assert!(find_in(file, "User").is_none());
    }

    #[test]
    fn computed_body_ignored() {
        let file: File = parse_quote! {
            impl User {
                fn table_name() -> String { format!("users_{}", 1) }
            }
        };
        assert!(find_in(file, "User").is_none());
    }

    #[test]
    fn parameters_disqualify() {
        let file: File = parse_quote! {
            impl User {
                fn table_name(tenant: &str) -> &'static str { "users" }
            }
        };
        assert!(find_in(file, "User").is_none());
    }
}
