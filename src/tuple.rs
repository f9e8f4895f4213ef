// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A heterogeneous container with one slot per type.
//!
//! [`IndexedTuple`] stores a [`ValueOrReference`] for every type of a
//! distinct type set. Elements are reached by [`Index`] or directly by type;
//! both resolve to a field access during compilation.
//!
//! ```
//! use tyset::indexed_tuple;
//!
//! let mut counter = 0_u32;
//! let mut t = indexed_tuple![42_i32, 'K', &mut counter];
//!
//! assert_eq!(*t.get(t.index_of::<i32, _>()), 42);
//! assert_eq!(*t.by_type::<char, _>(), 'K');
//!
//! *t.by_type_mut::<u32, _>() += 1;
//! drop(t);
//! assert_eq!(counter, 1);
//! ```
//!
//! # Invariants
//!
//! - The element types are pairwise distinct; a repeated type does not build.
//! - The shape is fixed at construction. Slots are never added or removed.
//! - Owned elements drop in reverse construction order. Aliased variables
//!   are left untouched.
//! - Elements built from `&x` are read-only, and writing to one does not
//!   build.
//!
//! ```compile_fail
//! use tyset::indexed_tuple;
//! let t = indexed_tuple![1_i32, 'a', 2_i32];
//! ```
//!
//! ```compile_fail
//! use tyset::indexed_tuple;
//! let x = 1_i32;
//! let mut t = indexed_tuple![&x, 'c'];
//! *t.by_type_mut::<i32, _>() = 2;
//! ```
//!
//! ```compile_fail
//! use tyset::indexed_tuple;
//! let x = 1_i32;
//! let mut t = indexed_tuple![&x, 'c'];
//! let i = t.index_of::<i32, _>();
//! *t.get_mut(i) = 2;
//! ```

use core::fmt;

use crate::algebra::Distinct;
use crate::contracts::check_position;
use crate::indexed::Index;
use crate::list::{At, Cons, Locate, Nil, Position, TypeAt, TypeSet};
use crate::slot::{Slot, SlotMut};

/// A list of slots, `Cons<ValueOrReference<'a, H, K>, ...>`, and the types
/// it holds.
pub trait SlotList {
    /// The element types, one per slot.
    type Types: TypeSet;
}

impl SlotList for Nil {
    type Types = Nil;
}

impl<S, T> SlotList for Cons<S, T>
where
    S: Slot,
    T: SlotList,
{
    type Types = Cons<S::Target, T::Types>;
}

/// One owned-or-aliased value for every type in `L::Types`.
///
/// [`ValueOrReference`]: crate::ValueOrReference
pub struct IndexedTuple<L: SlotList> {
    slots: L,
}

impl<L> IndexedTuple<L>
where
    L: SlotList,
    L::Types: Distinct,
{
    /// Number of slots.
    pub const LEN: usize = <L::Types as TypeSet>::LEN;

    /// Wrap an already built slot list. Usually called through
    /// [`indexed_tuple!`](crate::indexed_tuple).
    #[inline]
    pub fn new(slots: L) -> Self {
        IndexedTuple { slots }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        Self::LEN
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Position of `T` among the element types. `I` is inferred; pass `_`.
    #[inline]
    pub fn index_of<T, I>(&self) -> Index<L::Types, I>
    where
        L::Types: Locate<T, I>,
        I: Position,
    {
        check_position::<L::Types, I>();
        Index::new()
    }

    /// Position of the type of `value` among the element types.
    #[inline]
    pub fn index_of_val<T, I>(&self, _value: &T) -> Index<L::Types, I>
    where
        L::Types: Locate<T, I>,
        I: Position,
    {
        self.index_of::<T, I>()
    }

    /// The current value at `index`.
    #[inline]
    pub fn get<'a, I, T>(&'a self, index: Index<L::Types, I>) -> &'a T
    where
        L: At<I>,
        TypeAt<L, I>: 'a,
        TypeAt<L, I>: Slot<Target = T>,
    {
        self.slot(index).get()
    }

    /// Write access to the value at `index`.
    ///
    /// Only slots that own their value or alias `&mut T` allow this.
    #[inline]
    pub fn get_mut<'a, I, T>(&'a mut self, _index: Index<L::Types, I>) -> &'a mut T
    where
        L: At<I>,
        TypeAt<L, I>: 'a,
        TypeAt<L, I>: SlotMut<Target = T>,
    {
        self.slots.at_mut().get_mut()
    }

    /// The slot itself, for inspecting whether it owns its value.
    #[inline]
    pub fn slot<I>(&self, _index: Index<L::Types, I>) -> &TypeAt<L, I>
    where
        L: At<I>,
    {
        self.slots.at()
    }

    /// The value of type `T`.
    #[inline]
    pub fn by_type<'a, T, I>(&'a self) -> &'a T
    where
        L::Types: Locate<T, I>,
        L: At<I>,
        TypeAt<L, I>: 'a,
        TypeAt<L, I>: Slot<Target = T>,
        I: Position,
    {
        self.slots.at().get()
    }

    /// Write access to the value of type `T`.
    #[inline]
    pub fn by_type_mut<'a, T, I>(&'a mut self) -> &'a mut T
    where
        L::Types: Locate<T, I>,
        L: At<I>,
        TypeAt<L, I>: 'a,
        TypeAt<L, I>: SlotMut<Target = T>,
        I: Position,
    {
        self.slots.at_mut().get_mut()
    }

    /// The underlying slot list.
    #[inline]
    pub fn into_slots(self) -> L {
        self.slots
    }
}

impl<L> fmt::Debug for IndexedTuple<L>
where
    L: SlotList + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedTuple")
            .field("slots", &self.slots)
            .finish()
    }
}

/// Build an [`IndexedTuple`] from one initializer per element.
///
/// `&mut x` aliases `x` with write access and `&x` aliases it read-only; any
/// other expression is moved in. To store a reference as an owned element,
/// parenthesize it: `(&x)` or `(&&x)`. A bare `&&x` is rejected because it
/// lexes as a single `&&` token.
///
/// ```compile_fail
/// use tyset::indexed_tuple;
/// let x = 1_i32;
/// let t = indexed_tuple![&&x, 'c'];
/// ```
#[macro_export]
macro_rules! indexed_tuple {
    ($($init:tt)*) => {
        $crate::IndexedTuple::new($crate::slots![$($init)*])
    };
}

/// Build the slot list behind [`indexed_tuple!`].
#[doc(hidden)]
#[macro_export]
macro_rules! slots {
    () => { $crate::Nil };
    (&& $($rest:tt)*) => {
        ::core::compile_error!(
            "`&&x` is ambiguous in `indexed_tuple!`: write `&x` to alias `x`, or `(&&x)` to own a `&&T`"
        )
    };
    (&mut $e:expr $(, $($tail:tt)*)?) => {
        $crate::Cons {
            head: $crate::ValueOrReference::reference_mut(&mut $e),
            tail: $crate::slots![$($($tail)*)?],
        }
    };
    (& $e:expr $(, $($tail:tt)*)?) => {
        $crate::Cons {
            head: $crate::ValueOrReference::reference(&$e),
            tail: $crate::slots![$($($tail)*)?],
        }
    };
    ($e:expr $(, $($tail:tt)*)?) => {
        $crate::Cons {
            head: $crate::ValueOrReference::value($e),
            tail: $crate::slots![$($($tail)*)?],
        }
    };
}
