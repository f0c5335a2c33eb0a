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

//! # Tally Core
//!
//! Generic repeated arithmetic that never leaves the representable range of
//! the numeric type in use. A run applies a fixed step to a starting value a
//! fixed number of times and stops, without overflowing, before the first
//! step that would exceed the type's maximum or fall below its minimum.
//!
//! The same algorithm serves signed and unsigned integers of every width as
//! well as `f32`/`f64`, using each type's own finite range.
//!
//! ## Modules
//!
//! - `num`: The `NumericDomain` capability set (ordering, addition,
//!   subtraction, zero, finite `highest`/`lowest`) and the `Zero`
//!   associated-constant trait.
//! - `step`: The range-checked step primitive, the `Stepper` state machine,
//!   `accumulate`/`deplete`, and the `StepResult` outcome type.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{accumulate, deplete};
//!
//! let r = accumulate::<i8>(0, 25, 6);
//! assert!(!r.completed);
//! assert_eq!(r.value, 125);
//!
//! let r = deplete::<u8>(255, 51, 5);
//! assert!(r.completed);
//! assert_eq!(r.value, 0);
//! ```

pub mod num;
pub mod step;

pub use num::domain::NumericDomain;
pub use step::result::{Boundary, Direction, RangeExhausted, StepResult};
pub use step::stepper::{Stepper, StepperState, accumulate, deplete, run};
