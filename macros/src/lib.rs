// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros that give Rust types a build-time identity.
//!
//! The trait solver cannot ask "are these two types the same?" on stable Rust.
//! It can, however, compare two *shapes* it has been handed. These macros hash
//! a type's key into 64 bits and spell the hash out as a tree of `True`/`False`
//! marker types. `tyset` then compares those trees structurally, which is
//! enough to dedup, filter and uniqueness-check type lists without running
//! any code.
//!
//! # How it works
//!
//! 1. **Hashing**: FNV-1a over the key string (the definition site by default)
//! 2. **Encoding**: the 64 bits become a depth-3 tree of `Quad<A, B, C, D>`
//! 3. **Composition**: generic arguments contribute their own identities, so
//!    `Wrapper<i32>` and `Wrapper<u8>` never compare equal
//!
//! # Example
//!
//! ```ignore
//! use tyset::TypeDescriptor;
//!
//! #[derive(TypeDescriptor)]
//! struct Meters(f64);
//!
//! // A fixed key keeps the identity stable when the definition moves
//! #[derive(TypeDescriptor)]
//! #[descriptor(key = "units::imperial::Meters")]
//! struct ImperialMeters(f64);
//! ```

use proc_macro::TokenStream;

mod descriptor;
mod digest;

/// Derive macro implementing `tyset::TypeDescriptor` for a struct or enum.
///
/// # Attributes
///
/// - `#[descriptor(key = "name")]` - Override the key that gets hashed
///   (defaults to the definition site: crate, file, line, column and type
///   name)
///
/// # Generated Output
///
/// - `type Id = Node<digest(key), [Id of each type parameter]>`
/// - `type Decayed = Self`
/// - A `TypeDescriptor` bound on every type parameter
///
/// Const generic parameters are rejected: their values have no type-level
/// spelling.
#[proc_macro_derive(TypeDescriptor, attributes(descriptor))]
pub fn derive_type_descriptor(input: TokenStream) -> TokenStream {
    descriptor::derive(input, &descriptor::DefinitionSite::call_site())
}

/// Expand a string literal into its type-level digest.
///
/// Used in type position by `tyset`'s built-in descriptor table:
///
/// ```ignore
/// type Id = tyset::Node<tyset::digest!("i32"), tyset::Nil>;
/// ```
#[proc_macro]
pub fn digest(input: TokenStream) -> TokenStream {
    let key = syn::parse_macro_input!(input as syn::LitStr);
    digest::digest_tokens(&key.value()).into()
}
