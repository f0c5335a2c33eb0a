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

use thiserror::Error;

/// The mode of a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Repeated addition of the step.
    Accumulate,
    /// Repeated subtraction of the step.
    Deplete,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Accumulate => write!(f, "accumulate"),
            Direction::Deplete => write!(f, "deplete"),
        }
    }
}

/// The edge of a numeric domain's representable range that a step would cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The largest finite value of the domain.
    Max,
    /// The most negative finite value of the domain.
    Min,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Max => write!(f, "maximum"),
            Boundary::Min => write!(f, "minimum"),
        }
    }
}

/// The outcome of a bounded run.
///
/// A run either applies every requested step (`completed == true`) or stops
/// before the first step that would leave the representable range of `T`.
/// In both cases `value` is a value of `T` that was actually reached: the
/// final result, or the last value that was still in range.
///
/// # Invariants
///
/// - `completed` is `true` if and only if `boundary` is `None`.
/// - `steps_applied == steps_requested` if and only if `completed`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::step::stepper::accumulate;
/// let r = accumulate::<i8>(0, 25, 6);
/// assert!(!r.completed);
/// assert_eq!(r.value, 125);
/// assert_eq!(r.steps_applied, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepResult<T> {
    /// The final value, or the last in-range value if the run stopped early.
    pub value: T,
    /// Whether all requested steps were applied.
    pub completed: bool,
    /// Number of steps actually applied.
    pub steps_applied: u64,
    /// Number of steps the caller asked for.
    pub steps_requested: u64,
    /// The range edge that stopped the run, if any.
    pub boundary: Option<Boundary>,
}

impl<T> StepResult<T> {
    /// Creates the result of a run that applied all `steps` steps.
    #[inline]
    pub fn complete(value: T, steps: u64) -> Self {
        Self {
            value,
            completed: true,
            steps_applied: steps,
            steps_requested: steps,
            boundary: None,
        }
    }

    /// Creates the result of a run that stopped at `boundary` after
    /// `steps_applied` of `steps_requested` steps.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `steps_applied >= steps_requested`.
    #[inline]
    pub fn exhausted(
        value: T,
        steps_applied: u64,
        steps_requested: u64,
        boundary: Boundary,
    ) -> Self {
        debug_assert!(
            steps_applied < steps_requested,
            "called `StepResult::exhausted` with steps_applied ({}) >= steps_requested ({})",
            steps_applied,
            steps_requested
        );
        Self {
            value,
            completed: false,
            steps_applied,
            steps_requested,
            boundary: Some(boundary),
        }
    }

    /// Returns `true` if the run stopped before applying every step.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        !self.completed
    }

    /// Converts the result into a `Result`, for callers who prefer `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::step::stepper::deplete;
    /// # use tally_core::step::result::Boundary;
    /// assert_eq!(deplete::<u8>(255, 51, 5).into_result(), Ok(0));
    ///
    /// let err = deplete::<u8>(255, 51, 6).into_result().unwrap_err();
    /// assert_eq!(err.last_safe, 0);
    /// assert_eq!(err.boundary, Boundary::Min);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, RangeExhausted<T>> {
        match self.boundary {
            None => Ok(self.value),
            Some(boundary) => Err(RangeExhausted {
                last_safe: self.value,
                steps_applied: self.steps_applied,
                steps_requested: self.steps_requested,
                boundary,
            }),
        }
    }
}

impl<T> std::fmt::Display for StepResult<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.boundary {
            None => write!(
                f,
                "Completed(value={}, steps={})",
                self.value, self.steps_applied
            ),
            Some(boundary) => write!(
                f,
                "Exhausted(value={}, steps={}/{}, boundary={})",
                self.value, self.steps_applied, self.steps_requested, boundary
            ),
        }
    }
}

/// Error form of a run that stopped on range exhaustion.
///
/// Only produced by [`StepResult::into_result`]; the stepper itself never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error(
    "range exhausted at the {boundary} after {steps_applied} of {steps_requested} steps (last safe value: {last_safe:?})"
)]
pub struct RangeExhausted<T> {
    /// The last value that was still inside the representable range.
    pub last_safe: T,
    /// Number of steps applied before stopping.
    pub steps_applied: u64,
    /// Number of steps the caller asked for.
    pub steps_requested: u64,
    /// The range edge the next step would have crossed.
    pub boundary: Boundary,
}
