// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Storage that either owns a value or aliases one.
//!
//! A [`ValueOrReference`] is the per-element storage of the indexed
//! container. Readers see a `T` whichever way it is stored. The storage kind
//! is the third type parameter, so what a slot allows is known while
//! compiling:
//!
//! | Built with                        | Kind          | `get` | `get_mut` | `into_inner` |
//! |-----------------------------------|---------------|-------|-----------|--------------|
//! | `ValueOrReference::value`         | [`Owned`]     | yes   | yes       | yes          |
//! | `ValueOrReference::reference`     | [`Shared`]    | yes   | no        | no           |
//! | `ValueOrReference::reference_mut` | [`Exclusive`] | yes   | yes       | no           |
//!
//! Writing through a shared alias does not build:
//!
//! ```compile_fail
//! use tyset::ValueOrReference;
//!
//! let x = 1_i32;
//! let mut slot = ValueOrReference::reference(&x);
//! *slot.get_mut() = 2;
//! ```
//!
//! Neither does taking an aliased value away from its owner:
//!
//! ```compile_fail
//! use tyset::ValueOrReference;
//!
//! let mut x = 1_i32;
//! let slot = ValueOrReference::reference_mut(&mut x);
//! let _ = slot.into_inner();
//! ```
//!
//! # Invariants
//!
//! - An alias slot never copies its referent and is never reseated.
//! - Dropping an alias slot leaves the referent alone; dropping an owning
//!   slot drops its value.
//! - The slot borrows its referent for `'a`, so it cannot outlive it.

use std::fmt;
use std::ops::Deref;

// ============================================================================
// KINDS
// ============================================================================

/// The slot owns its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Owned;

/// The slot aliases a value read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Shared;

/// The slot aliases a value with write access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exclusive;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Owned {}
    impl Sealed for super::Shared {}
    impl Sealed for super::Exclusive {}
}

/// How a slot holds its value. Implemented by [`Owned`], [`Shared`] and
/// [`Exclusive`] only.
pub trait SlotKind: sealed::Sealed {
    /// What the slot actually stores.
    type Storage<'a, T: 'a>;

    const HOLDS_REFERENCE: bool;
    const MUTABLE: bool;

    fn get<'s, 'a, T: 'a>(storage: &'s Self::Storage<'a, T>) -> &'s T;
}

/// Kinds that allow writes.
#[diagnostic::on_unimplemented(
    message = "slots of kind `{Self}` are read-only",
    label = "this slot aliases a shared reference",
    note = "build the slot from a value or from `&mut x` to write through it"
)]
pub trait Writable: SlotKind {
    fn get_mut<'s, 'a, T: 'a>(storage: &'s mut Self::Storage<'a, T>) -> &'s mut T;
}

impl SlotKind for Owned {
    type Storage<'a, T: 'a> = T;

    const HOLDS_REFERENCE: bool = false;
    const MUTABLE: bool = true;

    #[inline]
    fn get<'s, 'a, T: 'a>(storage: &'s T) -> &'s T {
        storage
    }
}

impl Writable for Owned {
    #[inline]
    fn get_mut<'s, 'a, T: 'a>(storage: &'s mut T) -> &'s mut T {
        storage
    }
}

impl SlotKind for Shared {
    type Storage<'a, T: 'a> = &'a T;

    const HOLDS_REFERENCE: bool = true;
    const MUTABLE: bool = false;

    #[inline]
    fn get<'s, 'a, T: 'a>(storage: &'s &'a T) -> &'s T {
        storage
    }
}

impl SlotKind for Exclusive {
    type Storage<'a, T: 'a> = &'a mut T;

    const HOLDS_REFERENCE: bool = true;
    const MUTABLE: bool = true;

    #[inline]
    fn get<'s, 'a, T: 'a>(storage: &'s &'a mut T) -> &'s T {
        storage
    }
}

impl Writable for Exclusive {
    #[inline]
    fn get_mut<'s, 'a, T: 'a>(storage: &'s mut &'a mut T) -> &'s mut T {
        storage
    }
}

// ============================================================================
// SLOT
// ============================================================================

/// One value of type `T`, owned or aliased according to `K`.
pub struct ValueOrReference<'a, T: 'a, K: SlotKind = Owned> {
    storage: K::Storage<'a, T>,
}

impl<'a, T> ValueOrReference<'a, T, Owned> {
    /// Take ownership of `value`.
    #[inline]
    pub const fn value(value: T) -> Self {
        ValueOrReference { storage: value }
    }

    /// Move the owned value out, consuming the slot.
    #[inline]
    pub fn into_inner(self) -> T {
        self.storage
    }
}

impl<'a, T> ValueOrReference<'a, T, Shared> {
    /// Alias `referent` read-only.
    #[inline]
    pub const fn reference(referent: &'a T) -> Self {
        ValueOrReference { storage: referent }
    }
}

impl<'a, T> ValueOrReference<'a, T, Exclusive> {
    /// Alias `referent` with write access.
    #[inline]
    pub fn reference_mut(referent: &'a mut T) -> Self {
        ValueOrReference { storage: referent }
    }
}

impl<'a, T, K: SlotKind> ValueOrReference<'a, T, K> {
    /// The stored or aliased value.
    #[inline]
    pub fn get(&self) -> &T {
        K::get(&self.storage)
    }

    /// `true` for slots built from `&T` or `&mut T`.
    #[inline]
    pub const fn holds_reference(&self) -> bool {
        K::HOLDS_REFERENCE
    }

    /// `true` unless the slot aliases a shared reference.
    #[inline]
    pub const fn is_mutable(&self) -> bool {
        K::MUTABLE
    }
}

impl<'a, T, K: Writable> ValueOrReference<'a, T, K> {
    /// Write access to the stored or aliased value.
    ///
    /// Writes through an [`Exclusive`] slot land in the aliased variable.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        K::get_mut(&mut self.storage)
    }
}

impl<T> From<T> for ValueOrReference<'_, T, Owned> {
    fn from(value: T) -> Self {
        ValueOrReference::value(value)
    }
}

impl<T, K: SlotKind> Deref for ValueOrReference<'_, T, K> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<'b, T, K, K2> PartialEq<ValueOrReference<'b, T, K2>> for ValueOrReference<'_, T, K>
where
    T: PartialEq,
    K: SlotKind,
    K2: SlotKind,
{
    /// Slots compare by the value they expose, whatever their kind.
    fn eq(&self, other: &ValueOrReference<'b, T, K2>) -> bool {
        self.get() == other.get()
    }
}

impl<T: fmt::Debug, K: SlotKind + fmt::Debug + Default> fmt::Debug for ValueOrReference<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueOrReference")
            .field(&K::default())
            .field(self.get())
            .finish()
    }
}

impl<T: fmt::Display, K: SlotKind> fmt::Display for ValueOrReference<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

// ============================================================================
// SLOT INTERFACE
// ============================================================================

/// Read access common to every slot, whatever its kind.
///
/// The container names its slots through this trait, so one bound covers
/// owned and aliased elements alike.
pub trait Slot {
    /// The element type.
    type Target;
    /// How the element is held.
    type Kind: SlotKind;

    fn get(&self) -> &Self::Target;
}

/// Write access, for slots whose kind is [`Writable`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is read-only",
    label = "cannot write through a shared alias",
    note = "build the slot from a value or from `&mut x` to write through it"
)]
pub trait SlotMut: Slot {
    fn get_mut(&mut self) -> &mut Self::Target;
}

impl<'a, T, K: SlotKind> Slot for ValueOrReference<'a, T, K> {
    type Target = T;
    type Kind = K;

    #[inline]
    fn get(&self) -> &T {
        K::get(&self.storage)
    }
}

impl<'a, T, K: Writable> SlotMut for ValueOrReference<'a, T, K> {
    #[inline]
    fn get_mut(&mut self) -> &mut T {
        K::get_mut(&mut self.storage)
    }
}
