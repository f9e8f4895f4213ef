// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closed type sets and the containers built on them, resolved at build time.
//!
//! A type set is an ordered list of types (`TypeList![i32, char, f64]`). The
//! trait solver dedups, merges and filters such lists, answers membership
//! questions, and assigns each type a stable position. On top of that sit a
//! typed index registry, a container holding one owned-or-aliased value per
//! type, and fixed-length sequences of constants.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────┐   ┌──────────────┐
//! │  bit.rs  │──▶│ descriptor.rs│──▶│ list.rs  │──▶│  algebra.rs  │
//! │ True/    │   │ TypeDescriptor│  │ Cons/Nil │   │ Unique,      │
//! │ False    │   │ identity     │   │ At,Locate│   │ Filter, ...  │
//! └──────────┘   └──────────────┘   └──────────┘   └──────────────┘
//!                                         │               │
//!                      ┌──────────┐       ▼               ▼
//!                      │ slot.rs  │──▶┌─────────────────────────────┐
//!                      │ Value-   │   │ indexed.rs     tuple.rs     │
//!                      │ OrRef    │   │ Index, Indexed IndexedTuple │
//!                      └──────────┘   └─────────────────────────────┘
//!
//!   seq.rs (ValueSeq) stands alone.
//! ```
//!
//! | Module       | Provides                                                   |
//! |--------------|------------------------------------------------------------|
//! | `bit`        | `True`, `False`, `Bit`                                     |
//! | `descriptor` | `TypeDescriptor`, exact and decayed type equality          |
//! | `list`       | `TypeList!`, `hlist!`, `Merged`, `FirstOf`, positions      |
//! | `algebra`    | `Uniqued`, `Filtered`, `contains`, `are_unique`, `Distinct`|
//! | `slot`       | `ValueOrReference`, `Owned`, `Shared`, `Exclusive`         |
//! | `indexed`    | `Index`, `Indexed`                                         |
//! | `tuple`      | `IndexedTuple`, `indexed_tuple!`                           |
//! | `seq`        | `ValueSeq`, `seq!`                                         |
//!
//! # Usage
//!
//! ```
//! use tyset::{are_unique, indexed_tuple, TypeDescriptor, TypeList, Uniqued};
//!
//! #[derive(TypeDescriptor)]
//! struct Meters(f64);
//!
//! type Units = Uniqued<TypeList![Meters, i32, Meters]>;
//! const _: () = assert!(are_unique::<Units>());
//!
//! let t = indexed_tuple![Meters(3.5), 7_i32];
//! assert_eq!(t.by_type::<Meters, _>().0, 3.5);
//! ```
//!
//! Everything that can go wrong with a type set goes wrong while compiling:
//!
//! ```compile_fail
//! use tyset::{FirstOf, Nil};
//! fn first() -> FirstOf<Nil> { unimplemented!() }
//! ```
//!
//! ```compile_fail
//! use tyset::indexed_tuple;
//! let t = indexed_tuple![1_i32, 'a'];
//! let _ = t.by_type::<u8, _>();
//! ```

// Lets `#[derive(TypeDescriptor)]` output, which names `::tyset`, expand here.
extern crate self as tyset;

// Module declarations
mod algebra;
mod bit;
pub mod contracts;
mod descriptor;
mod indexed;
mod list;
mod seq;
mod slot;
mod tuple;
mod util;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use algebra::{
    are_unique, contains, contains_decayed, holds, AnyOf, AreUnique, Contains, ContainsDecayed,
    Decayed, Dedup, DedupStep, Distinct, Filter, FilterStep, Filtered, Negate, Predicate, Unique,
    Uniqued,
};
pub use bit::{value, Bit, False, True};
pub use descriptor::{
    decayed_eq, type_eq, DecayedEq, DecayedOf, IdOf, Node, Quad, Same, TypeDescriptor, TypeEq,
};
pub use indexed::{Index, Indexed};
pub use list::{
    len, At, Concat, Cons, First, FirstOf, Here, Locate, Merged, Nil, Position, There, TypeAt,
    TypeSet,
};
pub use seq::{Constant, ValueSeq};
pub use slot::{Exclusive, Owned, Shared, Slot, SlotKind, SlotMut, ValueOrReference, Writable};
pub use tuple::{IndexedTuple, SlotList};
pub use tyset_macros::{digest, TypeDescriptor};
pub use util::is_same_object;
