//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use core::cell::RefCell;
use core::marker::PhantomData;

use crate::TypeDescriptor;

/// Implemented only for `T` itself.
pub trait Identical<T: ?Sized> {}

impl<T: ?Sized> Identical<T> for T {}

/// Compiles only when `A` and `B` are the same type.
pub fn assert_same_type<A, B>()
where
    A: Identical<B> + ?Sized,
    B: ?Sized,
{
}

/// Records drops into a shared log, in the order they happen.
///
/// `M` only distinguishes recorders at the type level, so several of them can
/// live in one type set: `DropRecorder<u8>`, `DropRecorder<u16>`, ...
#[derive(TypeDescriptor)]
pub struct DropRecorder<'log, M> {
    pub label: &'static str,
    pub log: &'log RefCell<Vec<&'static str>>,
    marker: PhantomData<M>,
}

impl<'log, M> DropRecorder<'log, M> {
    pub fn new(label: &'static str, log: &'log RefCell<Vec<&'static str>>) -> Self {
        Self {
            label,
            log,
            marker: PhantomData,
        }
    }
}

impl<M> Drop for DropRecorder<'_, M> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.label);
    }
}
