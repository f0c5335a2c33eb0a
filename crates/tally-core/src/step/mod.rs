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

//! # Bounded Stepping
//!
//! Repeated addition or subtraction of a fixed step over a fixed number of
//! iterations, stopping before any step that would leave the representable
//! range of the numeric domain.
//!
//! ## Submodules
//!
//! - `primitive`: The range-checked single step (`check_add`, `check_sub`,
//!   `check_step`) reporting the `Boundary` a rejected step would cross.
//! - `stepper`: The `Stepper` state machine / iterator and the `accumulate`,
//!   `deplete` and `run` entry points.
//! - `result`: `StepResult`, `Direction`, `Boundary` and the opt-in
//!   `RangeExhausted` error.
//!
//! Range exhaustion is not an error of the stepper: the run simply reports
//! `completed == false` together with the last value that was in range.

pub mod primitive;
pub mod result;
pub mod stepper;
