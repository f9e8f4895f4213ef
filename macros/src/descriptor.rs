// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `#[derive(TypeDescriptor)]` macro.
//!
//! The derived identity is `Node<digest(key), Args>` where `Args` lists the
//! identities of the type parameters in declaration order. Lifetimes carry no
//! identity: `Borrowed<'a>` and `Borrowed<'static>` are the same descriptor.
//!
//! # Keys
//!
//! Without `#[descriptor(key = "...")]` the key is the definition site:
//! crate name, source file, line and column of the derive, then the type
//! name. Two definitions can only share a key by sharing a location, so
//! `a::Id` and `b::Id` get different identities.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Attribute, DeriveInput, GenericParam, Lit, Meta};

use crate::digest::digest_tokens;

/// Parsed `#[descriptor(...)]` attributes.
#[derive(Default)]
struct DescriptorAttrs {
    /// Override for the hashed key
    key: Option<String>,
}

impl DescriptorAttrs {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = DescriptorAttrs::default();

        for attr in attrs {
            if !attr.path().is_ident("descriptor") {
                continue;
            }

            let nested = attr.parse_args_with(
                syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
            )?;
            for meta in nested {
                let Meta::NameValue(nv) = &meta else {
                    return Err(syn::Error::new_spanned(&meta, "expected `key = \"...\"`"));
                };
                let key = nv.path.get_ident().map(|i| i.to_string());
                match (key.as_deref(), &nv.value) {
                    (
                        Some("key"),
                        syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(lit_str),
                            ..
                        }),
                    ) => {
                        if lit_str.value().is_empty() {
                            return Err(syn::Error::new_spanned(lit_str, "key must not be empty"));
                        }
                        result.key = Some(lit_str.value());
                    }
                    (Some("key"), other) => {
                        return Err(syn::Error::new_spanned(other, "key must be a string literal"));
                    }
                    _ => {
                        return Err(syn::Error::new_spanned(
                            &nv.path,
                            "unknown descriptor attribute",
                        ));
                    }
                }
            }
        }

        Ok(result)
    }
}

/// Where a derive was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSite {
    pub crate_name: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl DefinitionSite {
    /// Location of the current derive invocation.
    ///
    /// Only callable while a macro is expanding.
    pub fn call_site() -> Self {
        let span = proc_macro::Span::call_site();
        DefinitionSite {
            crate_name: std::env::var("CARGO_CRATE_NAME").unwrap_or_default(),
            file: span.file(),
            line: span.line(),
            column: span.column(),
        }
    }

    /// Default key for a type named `name` defined here.
    fn key(&self, name: &syn::Ident) -> String {
        format!(
            "{}::{}:{}:{}::{}",
            self.crate_name, self.file, self.line, self.column, name
        )
    }
}

/// Build `Cons<A::Id, Cons<B::Id, .. Nil>>` for the given type parameters.
fn argument_ids(params: &[&syn::Ident]) -> TokenStream2 {
    params.iter().rev().fold(quote!(::tyset::Nil), |tail, param| {
        quote!(::tyset::Cons<<#param as ::tyset::TypeDescriptor>::Id, #tail>)
    })
}

fn expand(input: DeriveInput, site: &DefinitionSite) -> syn::Result<TokenStream2> {
    let attrs = DescriptorAttrs::from_attrs(&input.attrs)?;
    let name = &input.ident;
    let key = attrs.key.unwrap_or_else(|| site.key(name));

    if let syn::Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            name,
            "TypeDescriptor does not support unions",
        ));
    }

    let mut generics = input.generics.clone();
    let mut type_params = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Type(ty) => type_params.push(&ty.ident),
            GenericParam::Lifetime(_) => {}
            GenericParam::Const(c) => {
                return Err(syn::Error::new_spanned(
                    c,
                    "const generic parameters have no type-level identity",
                ));
            }
        }
    }

    let where_clause = generics.make_where_clause();
    for param in &type_params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::tyset::TypeDescriptor));
    }

    let digest = digest_tokens(&key);
    let args = argument_ids(&type_params);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tyset::TypeDescriptor for #name #ty_generics #where_clause {
            type Id = ::tyset::Node<#digest, #args>;
            type Decayed = Self;
        }
    })
}

/// Main entry point for the `#[derive(TypeDescriptor)]` macro.
pub fn derive(input: TokenStream, site: &DefinitionSite) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input, site)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
