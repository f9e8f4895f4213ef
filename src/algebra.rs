// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Set algebra over type lists.
//!
//! Everything here is evaluated by the trait solver while the crate using it
//! compiles. Results are either new type lists or type-level booleans.
//!
//! | Operation            | Type-level form          | `const` reader          |
//! |----------------------|--------------------------|-------------------------|
//! | membership           | `Contains<T>`            | [`contains`]            |
//! | decayed membership   | `ContainsDecayed<T>`     | [`contains_decayed`]    |
//! | pairwise distinct    | `AreUnique`              | [`are_unique`]          |
//! | dedup                | [`Uniqued<S>`]           |                         |
//! | filter               | [`Filtered<P, S>`]       |                         |
//! | merge                | [`Merged<A, B>`]         | [`len`]                 |
//! | first                | [`FirstOf<S>`]           |                         |
//!
//! [`Merged<A, B>`]: crate::Merged
//! [`FirstOf<S>`]: crate::FirstOf
//! [`len`]: crate::len
//!
//! # Recursion
//!
//! Operations that branch (dedup, filter) resolve the condition first and
//! then dispatch through a step trait implemented on `True` and `False`.
//! Only the taken branch is ever resolved, so cost stays linear in the list
//! length instead of doubling per element.

use core::marker::PhantomData;

use crate::bit::{Bit, False, True};
use crate::descriptor::{DecayedEq, TypeDescriptor, TypeEq};
use crate::list::{Concat, Cons, Nil, TypeSet};

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Whether `T` is an element of `Self`, by exact type.
pub trait Contains<T: ?Sized> {
    type Output: Bit;
}

impl<T: ?Sized> Contains<T> for Nil {
    type Output = False;
}

impl<H, Tail, T> Contains<T> for Cons<H, Tail>
where
    T: ?Sized,
    H: TypeEq<T>,
    Tail: Contains<T>,
{
    type Output = <<H as TypeEq<T>>::Output as Bit>::Or<<Tail as Contains<T>>::Output>;
}

/// Whether the decayed `T` matches the decayed form of some element.
pub trait ContainsDecayed<T: ?Sized> {
    type Output: Bit;
}

impl<T: ?Sized> ContainsDecayed<T> for Nil {
    type Output = False;
}

impl<H, Tail, T> ContainsDecayed<T> for Cons<H, Tail>
where
    T: ?Sized,
    H: DecayedEq<T>,
    Tail: ContainsDecayed<T>,
{
    type Output = <<H as DecayedEq<T>>::Output as Bit>::Or<<Tail as ContainsDecayed<T>>::Output>;
}

/// `true` when `T` is an element of `S`.
pub const fn contains<T: ?Sized, S: Contains<T>>() -> bool {
    <S::Output as Bit>::VALUE
}

/// `true` when `T`, with references stripped, matches a stripped element of `S`.
pub const fn contains_decayed<T: ?Sized, S: ContainsDecayed<T>>() -> bool {
    <S::Output as Bit>::VALUE
}

// ============================================================================
// UNIQUENESS
// ============================================================================

/// Whether all elements are pairwise distinct (exact equality).
pub trait AreUnique {
    type Output: Bit;
}

impl AreUnique for Nil {
    type Output = True;
}

impl<H, Tail> AreUnique for Cons<H, Tail>
where
    Tail: Contains<H> + AreUnique,
{
    type Output = <<<Tail as Contains<H>>::Output as Bit>::Not as Bit>::And<
        <Tail as AreUnique>::Output,
    >;
}

/// `true` when no element of `S` occurs twice.
pub const fn are_unique<S: AreUnique>() -> bool {
    <S::Output as Bit>::VALUE
}

/// A type set whose elements are pairwise distinct.
///
/// Registries and containers require this of their element set, so building
/// one over a list with a repeated type is a compile error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` contains the same type more than once",
    label = "element types must be pairwise distinct",
    note = "dedup the list first with `Uniqued<..>`"
)]
pub trait Distinct: TypeSet {}

impl<S> Distinct for S where S: TypeSet + AreUnique<Output = True> {}

// ============================================================================
// DEDUP
// ============================================================================

/// Each distinct element once, in first-occurrence order.
pub trait Unique {
    type Output: TypeSet;
}

impl<S: Dedup<Nil>> Unique for S {
    type Output = <S as Dedup<Nil>>::Output;
}

/// `S` with repeated elements removed.
pub type Uniqued<S> = <S as Unique>::Output;

/// Left-to-right scan of `Self`, appending to `Acc` each element not yet in it.
#[doc(hidden)]
pub trait Dedup<Acc> {
    type Output: TypeSet;
}

impl<Acc: TypeSet> Dedup<Acc> for Nil {
    type Output = Acc;
}

impl<H, Tail, Acc> Dedup<Acc> for Cons<H, Tail>
where
    Acc: Contains<H>,
    <Acc as Contains<H>>::Output: DedupStep<H, Tail, Acc>,
{
    type Output = <<Acc as Contains<H>>::Output as DedupStep<H, Tail, Acc>>::Output;
}

/// One dedup step, dispatched on whether `H` was already seen.
#[doc(hidden)]
pub trait DedupStep<H, Tail, Acc> {
    type Output: TypeSet;
}

impl<H, Tail, Acc> DedupStep<H, Tail, Acc> for True
where
    Tail: Dedup<Acc>,
{
    type Output = <Tail as Dedup<Acc>>::Output;
}

impl<H, Tail, Acc> DedupStep<H, Tail, Acc> for False
where
    Acc: Concat<Cons<H, Nil>>,
    Tail: Dedup<<Acc as Concat<Cons<H, Nil>>>::Output>,
{
    type Output = <Tail as Dedup<<Acc as Concat<Cons<H, Nil>>>::Output>>::Output;
}

// ============================================================================
// FILTER
// ============================================================================

/// A build-time test on a type.
///
/// Implement on a marker type. The answer is a type-level boolean:
///
/// ```
/// use tyset::{Predicate, True, False};
///
/// struct IsSigned;
/// impl Predicate<i32> for IsSigned { type Output = True; }
/// impl Predicate<u32> for IsSigned { type Output = False; }
/// ```
pub trait Predicate<T: ?Sized> {
    type Output: Bit;
}

/// Elements of `Self` satisfying `P`, order preserved.
pub trait Filter<P> {
    type Output: TypeSet;
}

/// Elements of `S` satisfying `P`.
pub type Filtered<P, S> = <S as Filter<P>>::Output;

impl<P> Filter<P> for Nil {
    type Output = Nil;
}

impl<P, H, Tail> Filter<P> for Cons<H, Tail>
where
    P: Predicate<H>,
    <P as Predicate<H>>::Output: FilterStep<P, H, Tail>,
{
    type Output = <<P as Predicate<H>>::Output as FilterStep<P, H, Tail>>::Output;
}

/// One filter step, dispatched on the predicate's answer for `H`.
#[doc(hidden)]
pub trait FilterStep<P, H, Tail> {
    type Output: TypeSet;
}

impl<P, H, Tail: Filter<P>> FilterStep<P, H, Tail> for True {
    type Output = Cons<H, <Tail as Filter<P>>::Output>;
}

impl<P, H, Tail: Filter<P>> FilterStep<P, H, Tail> for False {
    type Output = <Tail as Filter<P>>::Output;
}

/// Evaluate `P` on the decayed form of the tested type.
pub struct Decayed<P>(PhantomData<P>);

impl<P, T> Predicate<T> for Decayed<P>
where
    T: TypeDescriptor + ?Sized,
    P: Predicate<T::Decayed>,
{
    type Output = <P as Predicate<T::Decayed>>::Output;
}

/// Holds when the tested type is an element of `S`.
pub struct AnyOf<S>(PhantomData<S>);

impl<S, T> Predicate<T> for AnyOf<S>
where
    T: ?Sized,
    S: Contains<T>,
{
    type Output = <S as Contains<T>>::Output;
}

/// Holds when `P` does not.
pub struct Negate<P>(PhantomData<P>);

impl<P, T> Predicate<T> for Negate<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    type Output = <<P as Predicate<T>>::Output as Bit>::Not;
}

/// `true` when `P` holds for `T`.
pub const fn holds<P: Predicate<T>, T: ?Sized>() -> bool {
    <P::Output as Bit>::VALUE
}
