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

//! # Trials
//!
//! A trial exercises one numeric domain in one direction with two runs: one
//! sized to stay inside the range and one a single step longer, sized to hit
//! the boundary.
//!
//! - Overflow: `start = 0`, `accumulate(start, max / steps, steps)` and
//!   `accumulate(start, max / steps, steps + 1)`.
//! - Underflow: `start = max`, `deplete(start, max / steps, steps)` and
//!   `deplete(start, max / steps, steps + 1)`.

use crate::error::ReportError;
use crate::render::ReportValue;
use num_traits::FromPrimitive;
use std::ops::Div;
use tally_core::{Direction, NumericDomain, StepResult, run};

/// A numeric domain the harness can run and print.
pub trait TrialDomain: NumericDomain + Div<Output = Self> + FromPrimitive + ReportValue {}

impl<T> TrialDomain for T where
    T: NumericDomain + Div<Output = T> + FromPrimitive + ReportValue
{
}

/// The direction a trial pushes towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrialKind {
    /// Repeated addition from zero towards the maximum.
    Overflow,
    /// Repeated subtraction from the maximum towards the minimum.
    Underflow,
}

impl TrialKind {
    /// The stepper direction used by this kind of trial.
    #[inline]
    pub fn direction(&self) -> Direction {
        match self {
            TrialKind::Overflow => Direction::Accumulate,
            TrialKind::Underflow => Direction::Deplete,
        }
    }
}

impl std::fmt::Display for TrialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrialKind::Overflow => write!(f, "Overflow"),
            TrialKind::Underflow => write!(f, "Underflow"),
        }
    }
}

/// One run of a trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRun<T> {
    pub steps: u64,
    pub result: StepResult<T>,
}

/// Both runs of a trial together with their inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialReport<T> {
    pub type_name: &'static str,
    pub kind: TrialKind,
    pub start: T,
    pub increment: T,
    /// The run expected to stay in range.
    pub within: TrialRun<T>,
    /// The run one step longer, expected to reach the boundary.
    pub beyond: TrialRun<T>,
}

/// Runs both halves of a trial for the numeric domain `T`.
///
/// # Errors
///
/// Returns `ReportError::ZeroSteps` if `steps == 0`,
/// `ReportError::StepCountOverflow` if `steps + 1` does not fit a `u64`, and
/// `ReportError::UnrepresentableSteps` if `steps` has no value in `T`.
pub fn trial<T>(kind: TrialKind, steps: u64) -> Result<TrialReport<T>, ReportError>
where
    T: TrialDomain,
{
    let type_name = std::any::type_name::<T>();

    if steps == 0 {
        return Err(ReportError::ZeroSteps);
    }
    let beyond_steps = steps
        .checked_add(1)
        .ok_or(ReportError::StepCountOverflow(steps))?;
    let divisor =
        T::from_u64(steps).ok_or(ReportError::UnrepresentableSteps { steps, type_name })?;

    let increment = T::highest() / divisor;
    let start = match kind {
        TrialKind::Overflow => T::ZERO,
        TrialKind::Underflow => T::highest(),
    };

    let direction = kind.direction();
    let within = TrialRun {
        steps,
        result: run(direction, start, increment, steps),
    };
    let beyond = TrialRun {
        steps: beyond_steps,
        result: run(direction, start, increment, beyond_steps),
    };

    tracing::debug!(
        type_name,
        %kind,
        within = within.result.completed,
        beyond = beyond.result.completed,
        "trial finished"
    );

    Ok(TrialReport {
        type_name,
        kind,
        start,
        increment,
        within,
        beyond,
    })
}
