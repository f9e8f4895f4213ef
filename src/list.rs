// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heterogeneous lists, used both as type sets and as value storage.
//!
//! `Cons<H, T>` / `Nil` serve two roles:
//!
//! - as a **type** (`TypeList![i32, char, f64]`) they are a closed, ordered set
//!   of types and are never instantiated;
//! - as a **value** (`hlist![slot0, slot1]`) they hold one element per type,
//!   which is how the indexed container stores its slots.
//!
//! Positions are type-level too: [`Here`] is index 0 and `There<I>` is `I + 1`.
//! Selecting an element by position or by type is trait resolution, so it
//! compiles to a plain field access.

use core::marker::PhantomData;

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// A head element followed by the rest of the list.
///
/// `tail` is declared before `head` so that dropping a list drops its
/// elements last-to-first, the reverse of the order a list literal
/// evaluates them in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cons<H, T> {
    pub tail: T,
    pub head: H,
}

/// Spell a type-level list: `TypeList![i32, char]` is
/// `Cons<i32, Cons<char, Nil>>`.
#[macro_export]
macro_rules! TypeList {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::TypeList![$($tail),*]>
    };
}

/// Build a value-level list: `hlist![1, 'a']`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons {
            head: $head,
            tail: $crate::hlist![$($tail),*],
        }
    };
}

/// A closed list of types.
pub trait TypeSet {
    /// Number of elements, duplicates included.
    const LEN: usize;
}

impl TypeSet for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeSet> TypeSet for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Number of elements in `S`.
pub const fn len<S: TypeSet>() -> usize {
    S::LEN
}

// ============================================================================
// CONCATENATION
// ============================================================================

/// Append `Rhs` after `Self`, keeping duplicates.
pub trait Concat<Rhs> {
    type Output;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Concat<Rhs> for Nil {
    type Output = Rhs;

    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Concat<Rhs>, Rhs> Concat<Rhs> for Cons<H, T> {
    type Output = Cons<H, T::Output>;

    fn concat(self, rhs: Rhs) -> Self::Output {
        Cons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

/// `A` followed by `B`.
pub type Merged<A, B> = <A as Concat<B>>::Output;

// ============================================================================
// FIRST ELEMENT
// ============================================================================

/// The first element of a non-empty list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no first element",
    label = "the type set is empty"
)]
pub trait First {
    type Output;
}

impl<H, T> First for Cons<H, T> {
    type Output = H;
}

/// First element of `S`; naming it for an empty set fails to compile.
pub type FirstOf<S> = <S as First>::Output;

// ============================================================================
// POSITIONS
// ============================================================================

/// Position 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Here;

/// Position `I + 1`.
pub struct There<I>(PhantomData<I>);

/// A type-level position with its numeric value.
pub trait Position {
    const VALUE: usize;
}

impl Position for Here {
    const VALUE: usize = 0;
}

impl<I: Position> Position for There<I> {
    const VALUE: usize = I::VALUE + 1;
}

/// Element at position `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element at position `{I}`",
    label = "index out of range for this list"
)]
pub trait At<I> {
    type Output;

    fn at(&self) -> &Self::Output;
    fn at_mut(&mut self) -> &mut Self::Output;
    fn into_at(self) -> Self::Output;
}

impl<H, T> At<Here> for Cons<H, T> {
    type Output = H;

    fn at(&self) -> &H {
        &self.head
    }

    fn at_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn into_at(self) -> H {
        self.head
    }
}

impl<H, T: At<I>, I> At<There<I>> for Cons<H, T> {
    type Output = T::Output;

    fn at(&self) -> &T::Output {
        self.tail.at()
    }

    fn at_mut(&mut self) -> &mut T::Output {
        self.tail.at_mut()
    }

    fn into_at(self) -> T::Output {
        self.tail.into_at()
    }
}

/// Type at position `I` of `S`.
pub type TypeAt<S, I> = <S as At<I>>::Output;

/// `T` occurs in `Self` at position `I`, by exact type.
///
/// `I` is inferred: call sites write `_` and the solver finds the position.
/// If `T` occurred twice the position would be ambiguous, which is one more
/// reason containers insist on distinct element types.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not a member of `{Self}`",
    label = "type not found in this type set",
    note = "lookup is by exact type; `&T` and `T` are different members"
)]
pub trait Locate<T, I> {}

impl<T, Tail> Locate<T, Here> for Cons<T, Tail> {}

impl<H, Tail, T, I> Locate<T, There<I>> for Cons<H, Tail> where Tail: Locate<T, I> {}
