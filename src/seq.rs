// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-length sequences of constants.
//!
//! A [`ValueSeq<T, N>`] is an immutable array of `N` constants. Every
//! transformation returns a new sequence whose length is part of its type, so
//! out-of-range positions and impossible slices fail the build rather than
//! the run.
//!
//! | Operation            | Result length | Build-time requirement |
//! |----------------------|---------------|------------------------|
//! | `at::<I>()`          | -             | `I < N`                |
//! | `first()`, `last()`  | -             | `N > 0`                |
//! | `drop::<K, R>()`     | `R`           | `K <= N`, `R == N - K` |
//! | `crop::<K, R>()`     | `R`           | `K <= N`, `R == N - K` |
//! | `take::<R>()`        | `R`           | `R <= N`               |
//! | `concat::<M, R>(..)` | `R`           | `R == N + M`           |
//!
//! ```
//! use tyset::{seq, ValueSeq};
//!
//! const DIGITS: ValueSeq<i32, 3> = seq![0, 1, 2];
//! const TAIL: ValueSeq<i32, 2> = DIGITS.drop::<1, 2>();
//!
//! assert_eq!(TAIL, seq![1, 2]);
//! assert_eq!(DIGITS.to_string(), "0, 1, 2");
//! assert_eq!(DIGITS.reduce_with(|a, b| a + b, 0), 3);
//! ```
//!
//! ```compile_fail
//! use tyset::{seq, ValueSeq};
//! const DIGITS: ValueSeq<i32, 3> = seq![0, 1, 2];
//! const OUT: i32 = DIGITS.at::<3>();
//! ```
//!
//! ```compile_fail
//! use tyset::{seq, ValueSeq};
//! const DIGITS: ValueSeq<i32, 3> = seq![0, 1, 2];
//! const WRONG: ValueSeq<i32, 1> = DIGITS.drop::<1, 1>();
//! ```
//!
//! ```compile_fail
//! use tyset::{seq, ValueSeq};
//! const EMPTY: ValueSeq<u8, 0> = seq![];
//! const NONE: u8 = EMPTY.first();
//! ```
//!
//! ```compile_fail
//! use tyset::{seq, ValueSeq};
//! const EMPTY: ValueSeq<u8, 0> = seq![];
//! const NONE: u8 = EMPTY.last();
//! ```
//!
//! ```compile_fail
//! use tyset::{seq, ValueSeq};
//! const DIGITS: ValueSeq<i32, 3> = seq![0, 1, 2];
//! const MORE: ValueSeq<i32, 4> = DIGITS.take::<4>();
//! ```
//!
//! ```compile_fail
//! use tyset::{seq, ValueSeq};
//! const DIGITS: ValueSeq<i32, 3> = seq![0, 1, 2];
//! const SHORT: ValueSeq<i32, 5> = DIGITS.concat(&DIGITS);
//! ```
//!
//! Elements share one type. Floats are allowed, and render with their
//! shortest `Display` form:
//!
//! ```
//! use tyset::{seq, ValueSeq};
//!
//! const WEIGHTS: ValueSeq<f64, 2> = seq![0.5, 1.25];
//! assert_eq!(WEIGHTS.to_string(), "0.5, 1.25");
//! ```

use core::fmt;

use crate::contracts::check_window;

/// A value that can live in a [`ValueSeq`].
pub trait Constant: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// Filler for freshly allocated sequences; never observable.
    const ZERO: Self;
}

macro_rules! constants {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Constant for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

constants! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
    bool => false,
    char => '\0',
}

/// An immutable sequence of `N` constants.
#[derive(Clone, Copy, Debug, Eq)]
pub struct ValueSeq<T: Constant, const N: usize> {
    values: [T; N],
}

/// Build a [`ValueSeq`] from its elements: `seq![0, 1, 2]`.
#[macro_export]
macro_rules! seq {
    ($($value:expr),* $(,)?) => {
        $crate::ValueSeq::new([$($value),*])
    };
}

impl<T: Constant, const N: usize> ValueSeq<T, N> {
    /// Number of elements.
    pub const LEN: usize = N;

    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        ValueSeq { values }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Element `I`. `I >= N` does not build.
    #[inline]
    pub const fn at<const I: usize>(&self) -> T {
        const { assert!(I < N, "position out of range") };
        self.values[I]
    }

    /// Element `i`, or `None` past the end.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.values.get(i).copied()
    }

    /// First element. Empty sequences do not build.
    #[inline]
    pub const fn first(&self) -> T {
        const { assert!(N > 0, "empty sequence has no first element") };
        self.values[0]
    }

    /// Last element. Empty sequences do not build.
    #[inline]
    pub const fn last(&self) -> T {
        const { assert!(N > 0, "empty sequence has no last element") };
        self.values[N - 1]
    }

    /// The sequence without its first `K` elements.
    #[inline]
    pub const fn drop<const K: usize, const R: usize>(&self) -> ValueSeq<T, R> {
        const {
            assert!(K <= N, "cannot drop more elements than the sequence holds");
            assert!(R == N - K, "result length must be N - K");
        };
        self.window::<R>(K)
    }

    /// The sequence without its last `K` elements.
    #[inline]
    pub const fn crop<const K: usize, const R: usize>(&self) -> ValueSeq<T, R> {
        const {
            assert!(K <= N, "cannot crop more elements than the sequence holds");
            assert!(R == N - K, "result length must be N - K");
        };
        self.window::<R>(0)
    }

    /// The first `R` elements.
    #[inline]
    pub const fn take<const R: usize>(&self) -> ValueSeq<T, R> {
        const { assert!(R <= N, "cannot take more elements than the sequence holds") };
        self.window::<R>(0)
    }

    /// `R` consecutive elements starting at `start`. Callers check the range.
    const fn window<const R: usize>(&self, start: usize) -> ValueSeq<T, R> {
        check_window(start, R, N);
        let mut out = [T::ZERO; R];
        let mut i = 0;
        while i < R {
            out[i] = self.values[start + i];
            i += 1;
        }
        ValueSeq { values: out }
    }

    /// This sequence followed by `other`.
    #[inline]
    pub const fn concat<const M: usize, const R: usize>(
        &self,
        other: &ValueSeq<T, M>,
    ) -> ValueSeq<T, R> {
        const { assert!(R == N + M, "result length must be N + M") };
        let mut out = [T::ZERO; R];
        let mut i = 0;
        while i < N {
            out[i] = self.values[i];
            i += 1;
        }
        let mut j = 0;
        while j < M {
            out[N + j] = other.values[j];
            j += 1;
        }
        ValueSeq { values: out }
    }

    /// Strict left fold: `op(op(op(initial, v0), v1), ...)`.
    pub fn reduce_with<F>(&self, op: F, initial: T) -> T
    where
        F: Fn(T, T) -> T,
    {
        self.values.iter().fold(initial, |acc, &v| op(acc, v))
    }

    /// Same length and pairwise equal. Sequences of different lengths are
    /// never equal.
    pub fn equals<const M: usize>(&self, other: &ValueSeq<T, M>) -> bool {
        N == M && self.values.iter().zip(other.values.iter()).all(|(a, b)| a == b)
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.values
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, T>> {
        self.values.iter().copied()
    }
}

impl<T: Constant, const N: usize, const M: usize> PartialEq<ValueSeq<T, M>> for ValueSeq<T, N> {
    fn eq(&self, other: &ValueSeq<T, M>) -> bool {
        self.equals(other)
    }
}

impl<T: Constant, const N: usize> fmt::Display for ValueSeq<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<T: Constant, const N: usize> From<[T; N]> for ValueSeq<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

impl<'s, T: Constant, const N: usize> IntoIterator for &'s ValueSeq<T, N> {
    type Item = T;
    type IntoIter = core::iter::Copied<core::slice::Iter<'s, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// SERDE
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Constant, ValueSeq};
    use core::fmt;
    use serde::de::{Error, Expected};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    struct ExactLen(usize);

    impl Expected for ExactLen {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} elements", self.0)
        }
    }

    impl<T: Constant + Serialize, const N: usize> Serialize for ValueSeq<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.values.iter())
        }
    }

    impl<'de, T: Constant + Deserialize<'de>, const N: usize> Deserialize<'de> for ValueSeq<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let values = Vec::<T>::deserialize(deserializer)?;
            let len = values.len();
            let values: [T; N] = values
                .try_into()
                .map_err(|_| D::Error::invalid_length(len, &ExactLen(N)))?;
            Ok(ValueSeq::new(values))
        }
    }
}
