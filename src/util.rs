// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small helpers with no better home.

/// `true` when `a` and `b` point at the same storage location.
///
/// Value equality is irrelevant: two equal integers in different variables
/// are different objects, and an alias slot is the same object as the
/// variable it was built from.
///
/// ```
/// use tyset::is_same_object;
///
/// let x = 5;
/// let y = 5;
/// assert!(is_same_object(&x, &x));
/// assert!(!is_same_object(&x, &y));
/// ```
#[inline]
pub fn is_same_object<T: ?Sized>(a: &T, b: &T) -> bool {
    core::ptr::eq(a, b)
}
