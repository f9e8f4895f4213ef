// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-level booleans.
//!
//! Every build-time question in this crate ("is `T` in `S`?", "are these
//! identities equal?") is answered by the trait solver with one of two marker
//! types. `Bit::VALUE` reads the answer back as a `bool` for `const` contexts.
//!
//! | Operation      | `True`        | `False`       |
//! |----------------|---------------|---------------|
//! | `Not`          | `False`       | `True`        |
//! | `And<R>`       | `R`           | `False`       |
//! | `Or<R>`        | `True`        | `R`           |
//! | `If<T, E>`     | `T`           | `E`           |

/// Type-level `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Type-level `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::True {}
    impl Sealed for super::False {}
}

/// A type-level boolean. Implemented by [`True`] and [`False`] only.
pub trait Bit: sealed::Sealed {
    /// The answer as a value.
    const VALUE: bool;

    type Not: Bit;
    type And<R: Bit>: Bit;
    type Or<R: Bit>: Bit;

    /// `Then` when `True`, `Else` when `False`.
    ///
    /// Both arms are named types, so both must already be resolvable. For
    /// recursive selection where only the taken arm may be resolved, dispatch
    /// through a helper trait implemented on `True` and `False` instead.
    type If<Then, Else>;
}

impl Bit for True {
    const VALUE: bool = true;
    type Not = False;
    type And<R: Bit> = R;
    type Or<R: Bit> = True;
    type If<Then, Else> = Then;
}

impl Bit for False {
    const VALUE: bool = false;
    type Not = True;
    type And<R: Bit> = False;
    type Or<R: Bit> = R;
    type If<Then, Else> = Else;
}

/// `VALUE` of a type-level boolean, usable in `const` items.
pub const fn value<B: Bit>() -> bool {
    B::VALUE
}
