// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stable positional indices over a type set.
//!
//! [`Indexed<S>`] assigns position `i` to the `i`-th type of a distinct set
//! `S`. An [`Index<S, I>`] remembers both the position and the set it was
//! computed against, so it can only be spent on that set.
//!
//! ```
//! use tyset::{Indexed, TypeList};
//!
//! type Ids = Indexed<TypeList![i32, char, f64]>;
//!
//! assert_eq!(Ids::index_of::<i32, _>().value(), 0);
//! assert_eq!(Ids::index_of::<f64, _>().value(), 2);
//! assert_eq!(Ids::get(Ids::index_of::<char, _>()), '\0');
//! ```
//!
//! Absent types and duplicate sets are rejected at build time:
//!
//! ```compile_fail
//! use tyset::{Indexed, TypeList};
//! let _ = Indexed::<TypeList![i32, char]>::index_of::<u8, _>();
//! ```
//!
//! ```compile_fail
//! use tyset::{Indexed, TypeList};
//! let _ = Indexed::<TypeList![i32, char, i32]>::new();
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::algebra::Distinct;
use crate::contracts::check_position;
use crate::list::{At, Locate, Position, TypeAt, TypeSet};

// ============================================================================
// INDEX
// ============================================================================

/// Position `I` within the type set `S`.
///
/// Zero-sized. The numeric value is [`Index::VALUE`].
pub struct Index<S, I> {
    marker: PhantomData<fn() -> (S, I)>,
}

impl<S, I: Position> Index<S, I> {
    /// Zero-based position.
    pub const VALUE: usize = I::VALUE;

    pub(crate) const fn new() -> Self {
        Index {
            marker: PhantomData,
        }
    }

    /// Zero-based position.
    #[inline]
    pub const fn value(self) -> usize {
        I::VALUE
    }
}

impl<S, I> Clone for Index<S, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, I> Copy for Index<S, I> {}

impl<S, I: Position> fmt::Debug for Index<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Index").field(&I::VALUE).finish()
    }
}

impl<S, I, J> PartialEq<Index<S, J>> for Index<S, I>
where
    I: Position,
    J: Position,
{
    fn eq(&self, _: &Index<S, J>) -> bool {
        I::VALUE == J::VALUE
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Index assignment for a distinct type set.
pub struct Indexed<S: Distinct> {
    marker: PhantomData<fn() -> S>,
}

impl<S: Distinct> Indexed<S> {
    /// Number of types in the set.
    pub const LEN: usize = <S as TypeSet>::LEN;

    pub const fn new() -> Self {
        Indexed {
            marker: PhantomData,
        }
    }

    /// Position of `T` in `S`. `I` is inferred; pass `_`.
    #[inline]
    pub const fn index_of<T, I>() -> Index<S, I>
    where
        S: Locate<T, I>,
        I: Position,
    {
        check_position::<S, I>();
        Index::new()
    }

    /// Position of the type of `value` in `S`.
    #[inline]
    pub const fn index_of_val<T, I>(_value: &T) -> Index<S, I>
    where
        S: Locate<T, I>,
        I: Position,
    {
        check_position::<S, I>();
        Index::new()
    }

    /// A fresh default instance of the type at `index`.
    #[inline]
    pub fn get<I>(_index: Index<S, I>) -> TypeAt<S, I>
    where
        S: At<I>,
        TypeAt<S, I>: Default,
    {
        Default::default()
    }
}

impl<S: Distinct> Default for Indexed<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Distinct> fmt::Debug for Indexed<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexed").field("len", &Self::LEN).finish()
    }
}
