// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time and debug-mode contracts.
//!
//! The `const _` blocks below are evaluated while this crate compiles: if the
//! built-in descriptor table ever produces two equal identities, or the
//! boolean algebra drifts, the crate does not build.
//!
//! The `check_*` functions are `debug_assert!` contracts called from the
//! container and sequence code. They compile to nothing in release builds.
//!
//! | Contract             | Checked where                              |
//! |----------------------|--------------------------------------------|
//! | `check_position`     | every `index_of`                           |
//! | `check_window`       | every `ValueSeq` slice                     |

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use crate::algebra::{are_unique, contains, contains_decayed};
use crate::bit::{value, Bit, False, True};
use crate::descriptor::{decayed_eq, type_eq};
use crate::list::{len, Merged, Position, TypeSet};
use crate::TypeList;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

// Boolean algebra.
const _: () = {
    assert!(value::<<False as Bit>::Not>());
    assert!(value::<<True as Bit>::And<True>>());
    assert!(!value::<<True as Bit>::And<False>>());
    assert!(value::<<False as Bit>::Or<True>>());
    assert!(!value::<<False as Bit>::Or<False>>());
};

// Built-in descriptors are pairwise distinct.
const _: () = {
    assert!(are_unique::<TypeList![bool, char, i8, i16, i32, i64, i128, isize]>());
    assert!(are_unique::<TypeList![u8, u16, u32, u64, u128, usize, f32, f64]>());
    assert!(are_unique::<TypeList![(), String, &'static str, i8, u8, i64, u64, f64]>());
    assert!(are_unique::<TypeList![Vec<u8>, Box<u8>, Option<u8>, &'static [u8], (u8, u8)]>());
    assert!(are_unique::<TypeList![Result<u8, i8>, Result<i8, u8>, (u8, i8), (i8, u8)]>());
    assert!(are_unique::<TypeList![&'static u8, &'static mut u8, u8, (u8, u8, u8)]>());
    assert!(are_unique::<TypeList![(u8,), Box<u8>, Rc<u8>, Arc<u8>, Cell<u8>, RefCell<u8>]>());
    assert!(are_unique::<TypeList![HashMap<u8, u8>, BTreeMap<u8, u8>, HashSet<u8>, BTreeSet<u8>]>());
    assert!(are_unique::<TypeList![fn() -> u8, fn(u8) -> u8, fn(u8, u8) -> u8, PhantomData<u8>]>());
};

// Decay strips references, nothing else.
const _: () = {
    assert!(decayed_eq::<&'static i32, i32>());
    assert!(decayed_eq::<&'static mut i32, &'static i32>());
    assert!(!decayed_eq::<Option<&'static i32>, Option<i32>>());
    assert!(!type_eq::<&'static i32, i32>());
};

// Membership and length.
const _: () = {
    type S = TypeList![i32, &'static char, f64];
    assert!(contains::<f64, S>());
    assert!(!contains::<char, S>());
    assert!(contains_decayed::<char, S>());
    assert!(len::<Merged<S, S>>() == 2 * len::<S>());
};

// ============================================================================
// DEBUG CONTRACTS
// ============================================================================

/// A type-level position lies inside the set it indexes.
///
/// `Locate` only produces in-range positions, so this cannot fail for indices
/// built by this crate.
#[inline]
pub const fn check_position<S: TypeSet, I: Position>() {
    debug_assert!(I::VALUE < S::LEN, "position outside its type set");
}

/// A slice of `len` elements starting at `start` fits in `total`.
#[inline]
pub const fn check_window(start: usize, len: usize, total: usize) {
    debug_assert!(start <= total, "window starts past the end");
    debug_assert!(len <= total - start, "window runs past the end");
}
