// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Dao)]` implementation.
//!
//! Reuses the generator's own readers (`DaoOptions`, `Annotation`) so the
//! compiler rejects exactly the models `daogen` would reject.

use daogen::parse::{Annotation, DaoOptions};
use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{Data, DeriveInput, Fields, Visibility, parse_macro_input};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match check(&input) {
        Ok(()) => TokenStream::new(),
        Err(err) => err.write_errors().into()
    }
}

fn check(input: &DeriveInput) -> darling::Result<()> {
    let options = DaoOptions::from_derive_input(input)?;
    let Data::Struct(data) = &input.data else {
        return Ok(());
    };
    let Fields::Named(named) = &data.fields else {
        return Ok(());
    };

    let mut errors = darling::Error::accumulator();
    let mut public = 0_usize;
    let mut malformed = false;
    let mut primary = None;
    for field in &named.named {
        let Some(ident) = &field.ident else {
            continue;
        };

        if !matches!(field.vis, Visibility::Public(_)) {
            if let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("sql")) {
                errors.push(
                    darling::Error::custom("`sql` is ignored on non-public field; make it `pub` or remove it")
                        .with_span(attr)
                );
            }
            continue;
        }
        public += 1;

        let annotation = Annotation::from_attrs(&ident.to_string(), &field.attrs).map_err(darling::Error::from);
        let Some(annotation) = errors.handle(annotation) else {
            malformed = true;
            continue;
        };
        if annotation.is_primary && !options.skip {
            match primary {
                None => primary = Some(ident),
                Some(first) => errors.push(
                    darling::Error::custom(format!("duplicate primary key, `{first}` is already primary"))
                        .with_span(ident)
                )
            }
        }
    }

    if !options.skip {
        if !input.generics.params.is_empty() {
            errors.push(darling::Error::custom("generic structs cannot be models").with_span(&input.generics));
        }
        if public == 0 {
            errors.push(darling::Error::custom("no public fields to map").with_span(&input.ident));
        } else if primary.is_none() && !malformed {
            errors.push(
                darling::Error::custom("no primary key; mark one field with #[sql(\"column,primary\")]")
                    .with_span(&input.ident)
            );
        }
    }

    errors.finish()
}
