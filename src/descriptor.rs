// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time type identity.
//!
//! A [`TypeDescriptor`] names a type's identity as another type: a
//! [`Node`] holding a 64-bit digest of the type's key plus the identities of
//! its generic arguments. [`Same`] compares two identities structurally, so
//! type equality becomes ordinary trait resolution.
//!
//! # Identity layout
//!
//! ```text
//! Vec<Option<i32>>
//!   Node<digest("Vec"), [Node<digest("Option"), [Node<digest("i32"), []>]>]>
//! ```
//!
//! # Decay
//!
//! `&T` and `&mut T` decay to `T::Decayed`; everything else decays to itself.
//! Decayed equality therefore treats `i32`, `&i32` and `&mut &i32` as one
//! entity while exact equality keeps them apart.
//!
//! # Limits
//!
//! Derived identities are keyed by definition site (crate, file, line,
//! column and name), so same-named types from different modules stay apart.
//! An explicit `#[descriptor(key = "...")]` replaces the site and is then the
//! caller's to keep unique. Fixed-size arrays have no descriptor: their length
//! is a const generic with no type-level spelling.

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::bit::{Bit, False, True};
use crate::list::{Cons, Nil};
use crate::digest;

/// Four-way node of a digest tree. Leaves are [`True`] / [`False`].
pub struct Quad<A, B, C, D>(PhantomData<(A, B, C, D)>);

/// Identity of a type: its digest and the identities of its arguments.
pub struct Node<Digest, Args>(PhantomData<(Digest, Args)>);

/// Structural equality of identity trees.
pub trait Same<Rhs> {
    type Output: Bit;
}

impl Same<True> for True {
    type Output = True;
}

impl Same<False> for True {
    type Output = False;
}

impl Same<True> for False {
    type Output = False;
}

impl Same<False> for False {
    type Output = True;
}

impl<A, B, C, D, E, F, G, H> Same<Quad<E, F, G, H>> for Quad<A, B, C, D>
where
    A: Same<E>,
    B: Same<F>,
    C: Same<G>,
    D: Same<H>,
{
    type Output = <<A as Same<E>>::Output as Bit>::And<
        <<B as Same<F>>::Output as Bit>::And<
            <<C as Same<G>>::Output as Bit>::And<<D as Same<H>>::Output>,
        >,
    >;
}

impl Same<Nil> for Nil {
    type Output = True;
}

impl<H, T> Same<Cons<H, T>> for Nil {
    type Output = False;
}

impl<H, T> Same<Nil> for Cons<H, T> {
    type Output = False;
}

impl<H1, T1, H2, T2> Same<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: Same<H2>,
    T1: Same<T2>,
{
    type Output = <<H1 as Same<H2>>::Output as Bit>::And<<T1 as Same<T2>>::Output>;
}

impl<D1, A1, D2, A2> Same<Node<D2, A2>> for Node<D1, A1>
where
    D1: Same<D2>,
    A1: Same<A2>,
{
    type Output = <<D1 as Same<D2>>::Output as Bit>::And<<A1 as Same<A2>>::Output>;
}

/// A type with a build-time identity.
///
/// Implement with `#[derive(TypeDescriptor)]`. The built-in table covers the
/// primitives, `str`, `String`, references, slices, the smart pointers and
/// cells (`Box`, `Rc`, `Arc`, `Cell`, `RefCell`, `PhantomData`), the std
/// collections, `Option`, `Result`, `fn` pointers of up to four arguments and
/// tuples of up to twelve elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no build-time identity",
    label = "not a TypeDescriptor",
    note = "add `#[derive(TypeDescriptor)]` to the type definition"
)]
pub trait TypeDescriptor {
    /// Identity tree compared by [`Same`].
    type Id;
    /// The type with reference-ness stripped.
    type Decayed: TypeDescriptor + ?Sized;
}

/// Exact type equality as a type-level boolean.
pub trait TypeEq<U: ?Sized> {
    type Output: Bit;
}

impl<T, U> TypeEq<U> for T
where
    T: TypeDescriptor + ?Sized,
    U: TypeDescriptor + ?Sized,
    T::Id: Same<U::Id>,
{
    type Output = <T::Id as Same<U::Id>>::Output;
}

/// Equality after decay on both sides.
pub trait DecayedEq<U: ?Sized> {
    type Output: Bit;
}

impl<T, U> DecayedEq<U> for T
where
    T: TypeDescriptor + ?Sized,
    U: TypeDescriptor + ?Sized,
    T::Decayed: TypeEq<U::Decayed>,
{
    type Output = <T::Decayed as TypeEq<U::Decayed>>::Output;
}

/// Descriptor identity of `T`.
pub type IdOf<T> = <T as TypeDescriptor>::Id;

/// Decayed form of `T`.
pub type DecayedOf<T> = <T as TypeDescriptor>::Decayed;

/// `true` when `T` and `U` are the same type.
pub const fn type_eq<T, U>() -> bool
where
    T: TypeEq<U> + ?Sized,
    U: ?Sized,
{
    <T::Output as Bit>::VALUE
}

/// `true` when `T` and `U` are the same type once references are stripped.
pub const fn decayed_eq<T, U>() -> bool
where
    T: DecayedEq<U> + ?Sized,
    U: ?Sized,
{
    <T::Output as Bit>::VALUE
}

// ============================================================================
// BUILT-IN DESCRIPTORS
// ============================================================================

macro_rules! leaf_descriptors {
    ($($ty:ty => $key:literal),* $(,)?) => {
        $(
            impl TypeDescriptor for $ty {
                type Id = Node<digest!($key), Nil>;
                type Decayed = Self;
            }
        )*
    };
}

leaf_descriptors! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    () => "()",
    str => "str",
    String => "String",
}

impl<'a, T: TypeDescriptor + ?Sized> TypeDescriptor for &'a T {
    type Id = Node<digest!("&"), Cons<T::Id, Nil>>;
    type Decayed = T::Decayed;
}

impl<'a, T: TypeDescriptor + ?Sized> TypeDescriptor for &'a mut T {
    type Id = Node<digest!("&mut"), Cons<T::Id, Nil>>;
    type Decayed = T::Decayed;
}

impl<T: TypeDescriptor> TypeDescriptor for [T] {
    type Id = Node<digest!("[]"), Cons<T::Id, Nil>>;
    type Decayed = Self;
}

macro_rules! generic_descriptors {
    ($($name:ident<$($param:ident),+> => $key:literal),* $(,)?) => {
        $(
            impl<$($param: TypeDescriptor),+> TypeDescriptor for $name<$($param),+> {
                type Id = Node<digest!($key), generic_descriptors!(@args $($param),+)>;
                type Decayed = Self;
            }
        )*
    };
    (@args $head:ident $(, $tail:ident)*) => {
        Cons<<$head as TypeDescriptor>::Id, generic_descriptors!(@args $($tail),*)>
    };
    (@args) => { Nil };
}

generic_descriptors! {
    Vec<T> => "Vec",
    VecDeque<T> => "VecDeque",
    Option<T> => "Option",
    Result<T, E> => "Result",
    HashMap<K, V> => "HashMap",
    BTreeMap<K, V> => "BTreeMap",
    HashSet<T> => "HashSet",
    BTreeSet<T> => "BTreeSet",
}

// Wrappers that accept unsized contents, such as `Box<str>` or `Rc<[u8]>`.
macro_rules! pointer_descriptors {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            impl<T: TypeDescriptor + ?Sized> TypeDescriptor for $name<T> {
                type Id = Node<digest!($key), Cons<T::Id, Nil>>;
                type Decayed = Self;
            }
        )*
    };
}

pointer_descriptors! {
    Box => "Box",
    Rc => "Rc",
    Arc => "Arc",
    Cell => "Cell",
    RefCell => "RefCell",
    PhantomData => "PhantomData",
}

macro_rules! tuple_descriptors {
    ($(($($param:ident),+) => $key:literal),* $(,)?) => {
        $(
            impl<$($param: TypeDescriptor),+> TypeDescriptor for ($($param,)+) {
                type Id = Node<digest!($key), generic_descriptors!(@args $($param),+)>;
                type Decayed = Self;
            }
        )*
    };
}

tuple_descriptors! {
    (A) => "(1)",
    (A, B) => "(2)",
    (A, B, C) => "(3)",
    (A, B, C, D) => "(4)",
    (A, B, C, D, E) => "(5)",
    (A, B, C, D, E, F) => "(6)",
    (A, B, C, D, E, F, G) => "(7)",
    (A, B, C, D, E, F, G, H) => "(8)",
    (A, B, C, D, E, F, G, H, I) => "(9)",
    (A, B, C, D, E, F, G, H, I, J) => "(10)",
    (A, B, C, D, E, F, G, H, I, J, K) => "(11)",
    (A, B, C, D, E, F, G, H, I, J, K, L) => "(12)",
}

// The return type comes first in the argument list. Signatures with
// higher-ranked lifetimes (`fn(&str)`) are a different type and not covered.
macro_rules! fn_descriptors {
    ($(($($param:ident),*) => $key:literal),* $(,)?) => {
        $(
            impl<Ret: TypeDescriptor $(, $param: TypeDescriptor)*> TypeDescriptor
                for fn($($param),*) -> Ret
            {
                type Id = Node<digest!($key), generic_descriptors!(@args Ret $(, $param)*)>;
                type Decayed = Self;
            }
        )*
    };
}

fn_descriptors! {
    () => "fn/0",
    (A) => "fn/1",
    (A, B) => "fn/2",
    (A, B, C) => "fn/3",
    (A, B, C, D) => "fn/4",
}
