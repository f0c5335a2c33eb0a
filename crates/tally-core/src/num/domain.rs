// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Domain
//!
//! The capability set a type must provide to be driven by the bounded
//! stepper: ordering, by-value addition and subtraction, a zero constant and
//! a queryable finite range.
//!
//! ## Range
//!
//! The range comes from `num_traits::Bounded`. For integers this is
//! `[T::MIN, T::MAX]`; for floating-point types it is `[T::MIN, T::MAX]` as
//! well, i.e. the most negative *finite* value, not the smallest positive
//! value and never an infinity.
//!
//! `NumericDomain` is a trait alias: any type meeting the bounds gets it
//! through the blanket implementation.

use crate::num::constants::Zero;
use num_traits::Bounded;
use std::ops::{Add, Sub};

/// A trait alias for numeric types the bounded stepper can operate on.
/// These are usually all primitive integers (`i8` to `i128`, `u8` to `u128`,
/// `isize`, `usize`) and the floating-point types `f32` and `f64`.
pub trait NumericDomain:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Bounded
    + Zero
    + std::fmt::Debug
{
    /// Returns the largest finite value representable by `Self`.
    #[inline(always)]
    fn highest() -> Self {
        <Self as Bounded>::max_value()
    }

    /// Returns the most negative finite value representable by `Self`.
    ///
    /// This is `0` for unsigned integers and `-MAX` for floating-point types.
    #[inline(always)]
    fn lowest() -> Self {
        <Self as Bounded>::min_value()
    }
}

impl<T> NumericDomain for T where
    T: Copy
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Bounded
        + Zero
        + std::fmt::Debug
{
}
