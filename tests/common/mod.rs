//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::cell::RefCell;
use std::marker::PhantomData;

use tyset::{False, Predicate, True, TypeDescriptor};

// Re-export canonical test utilities from tyset::testing
pub use tyset::testing::{assert_same_type, DropRecorder};

// ============================================================================
// USER TYPES
// ============================================================================

#[derive(TypeDescriptor, Debug, Default, Clone, Copy, PartialEq)]
pub struct Meters(pub f64);

#[derive(TypeDescriptor, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(pub u32);

#[derive(TypeDescriptor, Debug, Default, Clone, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

/// Same name as `Meters`, told apart by an explicit key.
pub mod legacy {
    use tyset::TypeDescriptor;

    #[derive(TypeDescriptor, Debug, Default)]
    #[descriptor(key = "legacy::Meters")]
    pub struct Meters(pub f32);
}

/// Generic wrapper whose argument is part of its identity.
#[derive(TypeDescriptor, Debug, Default)]
pub struct Tagged<M> {
    marker: PhantomData<M>,
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Holds for the built-in integer types.
pub struct IsInteger;

macro_rules! is_integer {
    ($($ty:ty => $answer:ty),* $(,)?) => {
        $(
            impl Predicate<$ty> for IsInteger {
                type Output = $answer;
            }
        )*
    };
}

is_integer! {
    i8 => True, i16 => True, i32 => True, i64 => True,
    u8 => True, u16 => True, u32 => True, u64 => True,
    f32 => False, f64 => False, char => False, bool => False,
    String => False, Meters => False, Seconds => False,
}

// ============================================================================
// DROP LOG
// ============================================================================

pub type DropLog = RefCell<Vec<&'static str>>;

pub fn drop_log() -> DropLog {
    RefCell::new(Vec::new())
}
