// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! FNV-1a hashing and the type-level encoding of the resulting bits.
//!
//! A digest is 64 bits laid out most significant first as a quad tree:
//! `Quad<Quad<Quad<b, b, b, b>, ..>, ..>` with `True`/`False` leaves. The
//! tree shape keeps structural comparison three levels deep instead of
//! sixty-four.

use proc_macro2::TokenStream;
use quote::quote;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the UTF-8 bytes of `key`.
pub fn fnv1a(key: &str) -> u64 {
    key.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Bits of `hash`, most significant first.
fn bits(hash: u64) -> Vec<bool> {
    (0..64).rev().map(|shift| (hash >> shift) & 1 == 1).collect()
}

fn encode(bits: &[bool]) -> TokenStream {
    if let [bit] = bits {
        return if *bit {
            quote!(::tyset::True)
        } else {
            quote!(::tyset::False)
        };
    }

    let quarter = bits.len() / 4;
    let parts = bits.chunks(quarter).map(encode);
    quote!(::tyset::Quad<#(#parts),*>)
}

/// Type-level spelling of the digest of `key`.
pub fn digest_tokens(key: &str) -> TokenStream {
    encode(&bits(fnv1a(key)))
}
