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

//! # Range-Checked Step Primitive
//!
//! A single step of a bounded run. Each function decides from the operands
//! alone whether `value + step` (or `value - step`) stays within the
//! representable range of `T`, and only then performs the operation. The
//! bound is rearranged so the comparison itself never overflows:
//!
//! | operation | step sign | unsafe when                 | boundary |
//! |-----------|-----------|-----------------------------|----------|
//! | add       | `> 0`     | `value > highest - step`    | `Max`    |
//! | add       | `< 0`     | `value < lowest - step`     | `Min`    |
//! | sub       | `> 0`     | `value < lowest + step`     | `Min`    |
//! | sub       | `< 0`     | `value > highest + step`    | `Max`    |
//!
//! A zero step is always safe. So is a step that does not compare with zero
//! at all (a floating-point NaN); it is applied as-is.
//!
//! For floating-point types a sum that passed the check can still round one
//! ulp past the finite range (`fl(MAX - step)` may round up). The computed
//! value is therefore compared once more against the boundary the step moves
//! towards, and only that one, so an infinite start moving away from its edge
//! is still applied. For integers that comparison is always false.

use crate::num::domain::NumericDomain;
use crate::step::result::{Boundary, Direction};
use std::cmp::Ordering;

/// Adds `step` to `value` if the sum stays within the range of `T`.
///
/// Returns the boundary that would be crossed otherwise.
///
/// # Examples
///
/// ```rust
/// # use tally_core::step::primitive::check_add;
/// # use tally_core::step::result::Boundary;
/// assert_eq!(check_add::<i8>(100, 27), Ok(127));
/// assert_eq!(check_add::<i8>(100, 28), Err(Boundary::Max));
/// assert_eq!(check_add::<i8>(-100, -29), Err(Boundary::Min));
/// ```
#[inline(always)]
pub fn check_add<T>(value: T, step: T) -> Result<T, Boundary>
where
    T: NumericDomain,
{
    match step.partial_cmp(&T::ZERO) {
        Some(Ordering::Greater) if value > T::highest() - step => Err(Boundary::Max),
        Some(Ordering::Less) if value < T::lowest() - step => Err(Boundary::Min),
        Some(Ordering::Greater) => settle(value + step, Boundary::Max),
        Some(Ordering::Less) => settle(value + step, Boundary::Min),
        Some(Ordering::Equal) | None => Ok(value + step),
    }
}

/// Subtracts `step` from `value` if the difference stays within the range of `T`.
///
/// Returns the boundary that would be crossed otherwise.
///
/// # Examples
///
/// ```rust
/// # use tally_core::step::primitive::check_sub;
/// # use tally_core::step::result::Boundary;
/// assert_eq!(check_sub::<u8>(51, 51), Ok(0));
/// assert_eq!(check_sub::<u8>(0, 51), Err(Boundary::Min));
/// assert_eq!(check_sub::<i8>(120, -8), Err(Boundary::Max));
/// ```
#[inline(always)]
pub fn check_sub<T>(value: T, step: T) -> Result<T, Boundary>
where
    T: NumericDomain,
{
    match step.partial_cmp(&T::ZERO) {
        Some(Ordering::Greater) if value < T::lowest() + step => Err(Boundary::Min),
        Some(Ordering::Less) if value > T::highest() + step => Err(Boundary::Max),
        Some(Ordering::Greater) => settle(value - step, Boundary::Min),
        Some(Ordering::Less) => settle(value - step, Boundary::Max),
        Some(Ordering::Equal) | None => Ok(value - step),
    }
}

/// Accepts a value computed from operands that already passed the bound check,
/// unless rounding carried it past `towards`.
#[inline(always)]
fn settle<T>(next: T, towards: Boundary) -> Result<T, Boundary>
where
    T: NumericDomain,
{
    match towards {
        Boundary::Max if next > T::highest() => Err(Boundary::Max),
        Boundary::Min if next < T::lowest() => Err(Boundary::Min),
        _ => Ok(next),
    }
}

/// Applies one step in the given direction if it stays within the range of `T`.
#[inline(always)]
pub fn check_step<T>(value: T, step: T, direction: Direction) -> Result<T, Boundary>
where
    T: NumericDomain,
{
    match direction {
        Direction::Accumulate => check_add(value, step),
        Direction::Deplete => check_sub(value, step),
    }
}
