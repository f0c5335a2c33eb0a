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

//! # Bounded Stepper
//!
//! Repeated addition (`accumulate`) or subtraction (`deplete`) of a fixed
//! step, stopping before the first step that would leave the representable
//! range of `T`.
//!
//! The run is a small state machine:
//!
//! ```text
//!            safe step
//!           ┌────────┐
//!           ▼        │
//!        Running ────┘
//!        │      │
//!  unsafe│      │count steps applied
//!        ▼      ▼
//! StoppedUnsafe  CompletedAll
//! ```
//!
//! `Stepper` exposes that machine directly as a fused iterator over the
//! values reached; `accumulate` and `deplete` drive it to a terminal state
//! and report the outcome as a `StepResult`.

use crate::num::domain::NumericDomain;
use crate::step::primitive::check_step;
use crate::step::result::{Boundary, Direction, StepResult};
use std::iter::FusedIterator;

/// The state of a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepperState {
    /// Steps remain and none has been rejected so far.
    Running,
    /// The next step would have crossed the given boundary.
    StoppedUnsafe(Boundary),
    /// Every requested step was applied.
    CompletedAll,
}

impl StepperState {
    /// Returns `true` for `StoppedUnsafe` and `CompletedAll`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepperState::Running)
    }
}

impl std::fmt::Display for StepperState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepperState::Running => write!(f, "Running"),
            StepperState::StoppedUnsafe(boundary) => write!(f, "StoppedUnsafe({})", boundary),
            StepperState::CompletedAll => write!(f, "CompletedAll"),
        }
    }
}

/// A bounded run in progress.
///
/// Each call to [`Stepper::advance`] performs one transition of the state
/// machine. As an iterator it yields every value that was safely reached,
/// in order, and then stops for good.
///
/// # Examples
///
/// ```rust
/// # use tally_core::step::stepper::{Stepper, StepperState};
/// # use tally_core::step::result::Boundary;
/// let mut stepper = Stepper::accumulating(0i8, 50, 4);
/// let reached: Vec<_> = stepper.by_ref().collect();
/// assert_eq!(reached, vec![50, 100]);
/// assert_eq!(stepper.state(), StepperState::StoppedUnsafe(Boundary::Max));
///
/// let result = stepper.finish();
/// assert_eq!(result.value, 100);
/// assert!(!result.completed);
/// ```
#[derive(Debug, Clone)]
pub struct Stepper<T> {
    value: T,
    step: T,
    direction: Direction,
    steps_requested: u64,
    steps_applied: u64,
    state: StepperState,
}

impl<T> Stepper<T>
where
    T: NumericDomain,
{
    /// Creates a stepper that applies `step` to `start` up to `count` times.
    #[inline]
    pub fn new(direction: Direction, start: T, step: T, count: u64) -> Self {
        Self {
            value: start,
            step,
            direction,
            steps_requested: count,
            steps_applied: 0,
            state: StepperState::Running,
        }
    }

    /// Creates a stepper for repeated addition.
    #[inline]
    pub fn accumulating(start: T, step: T, count: u64) -> Self {
        Self::new(Direction::Accumulate, start, step, count)
    }

    /// Creates a stepper for repeated subtraction.
    #[inline]
    pub fn depleting(start: T, step: T, count: u64) -> Self {
        Self::new(Direction::Deplete, start, step, count)
    }

    /// Returns the current value. This is always a value that was reached
    /// without leaving the range of `T`.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the step applied on every transition.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the direction of the run.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> StepperState {
        self.state
    }

    /// Returns the number of steps applied so far.
    #[inline]
    pub fn steps_applied(&self) -> u64 {
        self.steps_applied
    }

    /// Returns the number of steps requested.
    #[inline]
    pub fn steps_requested(&self) -> u64 {
        self.steps_requested
    }

    /// Returns the number of steps that may still be applied.
    #[inline]
    pub fn steps_remaining(&self) -> u64 {
        match self.state {
            StepperState::Running => self.steps_requested - self.steps_applied,
            _ => 0,
        }
    }

    /// Performs one transition and returns the resulting state.
    ///
    /// Calling this on a stepper in a terminal state is a no-op.
    pub fn advance(&mut self) -> StepperState {
        if self.state.is_terminal() {
            return self.state;
        }

        if self.steps_applied == self.steps_requested {
            self.state = StepperState::CompletedAll;
            tracing::trace!(
                direction = %self.direction,
                steps = self.steps_applied,
                "bounded run completed"
            );
            return self.state;
        }

        match check_step(self.value, self.step, self.direction) {
            Ok(next) => {
                self.value = next;
                self.steps_applied += 1;
            }
            Err(boundary) => {
                self.state = StepperState::StoppedUnsafe(boundary);
                tracing::debug!(
                    direction = %self.direction,
                    %boundary,
                    steps_applied = self.steps_applied,
                    steps_requested = self.steps_requested,
                    "bounded run stopped before leaving the representable range"
                );
            }
        }
        self.state
    }

    /// Drives the run to a terminal state and returns its outcome.
    pub fn finish(mut self) -> StepResult<T> {
        while !self.state.is_terminal() {
            self.advance();
        }

        match self.state {
            StepperState::StoppedUnsafe(boundary) => StepResult::exhausted(
                self.value,
                self.steps_applied,
                self.steps_requested,
                boundary,
            ),
            _ => StepResult::complete(self.value, self.steps_applied),
        }
    }
}

impl<T> Iterator for Stepper<T>
where
    T: NumericDomain,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            StepperState::Running => Some(self.value),
            _ => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // A step may still be rejected, so only the upper bound is known.
        (0, usize::try_from(self.steps_remaining()).ok())
    }
}

impl<T> FusedIterator for Stepper<T> where T: NumericDomain {}

/// Adds `step` to `start` `count` times, stopping before the first addition
/// that would leave the representable range of `T`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::step::stepper::accumulate;
/// let r = accumulate::<i8>(0, 25, 5);
/// assert!(r.completed);
/// assert_eq!(r.value, 125);
///
/// let r = accumulate::<i8>(0, 25, 6);
/// assert!(!r.completed);
/// assert_eq!(r.value, 125);
/// ```
#[inline]
pub fn accumulate<T>(start: T, step: T, count: u64) -> StepResult<T>
where
    T: NumericDomain,
{
    Stepper::accumulating(start, step, count).finish()
}

/// Subtracts `step` from `start` `count` times, stopping before the first
/// subtraction that would leave the representable range of `T`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::step::stepper::deplete;
/// let r = deplete::<u8>(255, 51, 5);
/// assert!(r.completed);
/// assert_eq!(r.value, 0);
///
/// let r = deplete::<u8>(255, 51, 6);
/// assert!(!r.completed);
/// assert_eq!(r.value, 0);
/// ```
#[inline]
pub fn deplete<T>(start: T, step: T, count: u64) -> StepResult<T>
where
    T: NumericDomain,
{
    Stepper::depleting(start, step, count).finish()
}

/// Runs `accumulate` or `deplete` depending on `direction`.
#[inline]
pub fn run<T>(direction: Direction, start: T, step: T, count: u64) -> StepResult<T>
where
    T: NumericDomain,
{
    Stepper::new(direction, start, step, count).finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_i8_scenario() {
        let r = accumulate::<i8>(0, 25, 5);
        assert_eq!(r, StepResult::complete(125, 5));

        let r = accumulate::<i8>(0, 25, 6);
        assert_eq!(r, StepResult::exhausted(125, 5, 6, Boundary::Max));
    }

    #[test]
    fn test_deplete_u8_scenario() {
        let r = deplete::<u8>(255, 51, 5);
        assert_eq!(r, StepResult::complete(0, 5));

        let r = deplete::<u8>(255, 51, 6);
        assert_eq!(r, StepResult::exhausted(0, 5, 6, Boundary::Min));
    }

    #[test]
    fn test_zero_count_returns_start() {
        assert_eq!(accumulate::<i32>(7, 3, 0), StepResult::complete(7, 0));
        assert_eq!(
            deplete::<u16>(u16::MAX, 1, 0),
            StepResult::complete(u16::MAX, 0)
        );
        // Even a start at the edge completes when nothing is applied.
        assert_eq!(
            accumulate::<i8>(i8::MAX, 1, 0),
            StepResult::complete(i8::MAX, 0)
        );
    }

    #[test]
    fn test_zero_step_completes_for_any_count() {
        assert_eq!(
            accumulate::<i64>(i64::MIN, 0, 1_000),
            StepResult::complete(i64::MIN, 1_000)
        );
        assert_eq!(deplete::<u8>(0, 0, 1_000), StepResult::complete(0, 1_000));
        assert_eq!(
            accumulate::<f64>(f64::MAX, 0.0, 10),
            StepResult::complete(f64::MAX, 10)
        );
    }

    #[test]
    fn test_start_at_max_stops_immediately() {
        let r = accumulate::<i16>(i16::MAX, 1, 3);
        assert_eq!(r, StepResult::exhausted(i16::MAX, 0, 3, Boundary::Max));

        let r = accumulate::<u32>(u32::MAX, 7, 1);
        assert_eq!(r, StepResult::exhausted(u32::MAX, 0, 1, Boundary::Max));

        let r = deplete::<i64>(i64::MAX, -1, 1);
        assert_eq!(r, StepResult::exhausted(i64::MAX, 0, 1, Boundary::Max));
    }

    #[test]
    fn test_start_at_min_stops_immediately() {
        let r = deplete::<u64>(0, 1, 1);
        assert_eq!(r, StepResult::exhausted(0, 0, 1, Boundary::Min));

        let r = accumulate::<i8>(i8::MIN, -1, 2);
        assert_eq!(r, StepResult::exhausted(i8::MIN, 0, 2, Boundary::Min));
    }

    #[test]
    fn test_accumulate_negative_step() {
        let r = accumulate::<i8>(0, -32, 4);
        assert_eq!(r, StepResult::complete(-128, 4));

        let r = accumulate::<i8>(0, -32, 5);
        assert_eq!(r, StepResult::exhausted(-128, 4, 5, Boundary::Min));
    }

    #[test]
    fn test_deplete_negative_step_moves_up() {
        let r = deplete::<i8>(-128, -51, 5);
        assert_eq!(r, StepResult::complete(127, 5));

        let r = deplete::<i8>(-128, -51, 6);
        assert_eq!(r, StepResult::exhausted(127, 5, 6, Boundary::Max));
    }

    #[test]
    fn test_wide_integers() {
        let step = i128::MAX / 5;
        let r = accumulate::<i128>(0, step, 6);
        assert_eq!(r.value, step * 5);
        assert_eq!(r.boundary, Some(Boundary::Max));

        let step = usize::MAX / 5;
        let r = deplete::<usize>(usize::MAX, step, 5);
        assert!(r.completed);
        assert_eq!(r.value, usize::MAX - step * 5);
    }

    #[test]
    fn test_float_completes_exactly() {
        let r = accumulate::<f64>(0.0, 0.5, 8);
        assert_eq!(r, StepResult::complete(4.0, 8));

        let r = deplete::<f32>(1.0, 0.25, 4);
        assert_eq!(r, StepResult::complete(0.0, 4));
    }

    #[test]
    fn test_float_stops_before_infinity() {
        let step = f64::MAX / 2.0;
        let r = accumulate::<f64>(0.0, step, 3);
        assert!(!r.completed);
        assert!(r.value.is_finite());
        assert_eq!(r.value, f64::MAX);
        assert_eq!(r.steps_applied, 2);

        let step = f32::MAX / 2.0;
        let r = deplete::<f32>(0.0, step, 3);
        assert!(!r.completed);
        assert_eq!(r.value, f32::MIN);
        assert_eq!(r.boundary, Some(Boundary::Min));
    }

    #[test]
    fn test_infinite_start_completes_when_moving_away_from_its_edge() {
        let inf = f64::INFINITY;
        assert_eq!(accumulate(-inf, 1.0, 3), StepResult::complete(-inf, 3));
        assert_eq!(accumulate(inf, -1.0, 3), StepResult::complete(inf, 3));
        assert_eq!(deplete(-inf, -1.0, 3), StepResult::complete(-inf, 3));
        assert_eq!(deplete(inf, 1.0, 3), StepResult::complete(inf, 3));
    }

    #[test]
    fn test_infinite_start_stops_when_moving_towards_its_edge() {
        let inf = f64::INFINITY;
        assert_eq!(
            accumulate(inf, 1.0, 3),
            StepResult::exhausted(inf, 0, 3, Boundary::Max)
        );
        assert_eq!(
            deplete(-inf, 1.0, 3),
            StepResult::exhausted(-inf, 0, 3, Boundary::Min)
        );
    }

    #[test]
    fn test_idempotent() {
        let a = accumulate::<i32>(-5, 1_000_000_000, 4);
        let b = accumulate::<i32>(-5, 1_000_000_000, 4);
        assert_eq!(a, b);
        let a = deplete::<f64>(1.0e308, -1.0e307, 20);
        let b = deplete::<f64>(1.0e308, -1.0e307, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_dispatch() {
        assert_eq!(
            run::<i8>(Direction::Accumulate, 0, 25, 6),
            accumulate::<i8>(0, 25, 6)
        );
        assert_eq!(
            run::<u8>(Direction::Deplete, 255, 51, 6),
            deplete::<u8>(255, 51, 6)
        );
    }

    #[test]
    fn test_stepper_yields_reached_values() {
        let values: Vec<u8> = Stepper::depleting(255, 51, 10).collect();
        assert_eq!(values, vec![204, 153, 102, 51, 0]);
    }

    #[test]
    fn test_stepper_state_transitions() {
        let mut s = Stepper::accumulating(0i8, 100, 2);
        assert_eq!(s.state(), StepperState::Running);
        assert_eq!(s.steps_remaining(), 2);

        assert_eq!(s.advance(), StepperState::Running);
        assert_eq!(s.value(), 100);
        assert_eq!(s.steps_applied(), 1);

        assert_eq!(s.advance(), StepperState::StoppedUnsafe(Boundary::Max));
        assert_eq!(s.value(), 100);
        assert_eq!(s.steps_remaining(), 0);

        // Terminal states are sticky.
        assert_eq!(s.advance(), StepperState::StoppedUnsafe(Boundary::Max));
        assert_eq!(s.steps_applied(), 1);
    }

    #[test]
    fn test_stepper_completes_after_last_step() {
        let mut s = Stepper::accumulating(0u8, 1, 1);
        assert_eq!(s.advance(), StepperState::Running);
        assert_eq!(s.advance(), StepperState::CompletedAll);
        assert!(s.state().is_terminal());
    }

    #[test]
    fn test_stepper_is_fused() {
        let mut s = Stepper::accumulating(0i8, 100, 5);
        assert_eq!(s.next(), Some(100));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn test_stepper_finish_after_partial_iteration() {
        let mut s = Stepper::accumulating(0i32, 1, 10);
        s.by_ref().take(3).for_each(drop);
        assert_eq!(s.steps_applied(), 3);
        assert_eq!(s.finish(), StepResult::complete(10, 10));
    }

    #[test]
    fn test_stepper_size_hint() {
        let s = Stepper::accumulating(0i32, 1, 4);
        assert_eq!(s.size_hint(), (0, Some(4)));
        let s = Stepper::accumulating(0i32, 1, 0);
        assert_eq!(s.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_stepper_accessors() {
        let s = Stepper::depleting(10i64, 3, 2);
        assert_eq!(s.value(), 10);
        assert_eq!(s.step(), 3);
        assert_eq!(s.direction(), Direction::Deplete);
        assert_eq!(s.steps_requested(), 2);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(StepperState::Running.to_string(), "Running");
        assert_eq!(
            StepperState::StoppedUnsafe(Boundary::Min).to_string(),
            "StoppedUnsafe(minimum)"
        );
        assert_eq!(StepperState::CompletedAll.to_string(), "CompletedAll");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Replays an `i16` run in `i32`, where no step can overflow.
        fn model_i16(direction: Direction, start: i16, step: i16, count: u64) -> StepResult<i16> {
            let mut value = i32::from(start);
            for applied in 0..count {
                let next = match direction {
                    Direction::Accumulate => value + i32::from(step),
                    Direction::Deplete => value - i32::from(step),
                };
                if next > i32::from(i16::MAX) {
                    return StepResult::exhausted(value as i16, applied, count, Boundary::Max);
                }
                if next < i32::from(i16::MIN) {
                    return StepResult::exhausted(value as i16, applied, count, Boundary::Min);
                }
                value = next;
            }
            StepResult::complete(value as i16, count)
        }

        /// Replays a `u8` run in `i32`.
        fn model_u8(direction: Direction, start: u8, step: u8, count: u64) -> StepResult<u8> {
            let mut value = i32::from(start);
            for applied in 0..count {
                let next = match direction {
                    Direction::Accumulate => value + i32::from(step),
                    Direction::Deplete => value - i32::from(step),
                };
                if next > i32::from(u8::MAX) {
                    return StepResult::exhausted(value as u8, applied, count, Boundary::Max);
                }
                if next < 0 {
                    return StepResult::exhausted(value as u8, applied, count, Boundary::Min);
                }
                value = next;
            }
            StepResult::complete(value as u8, count)
        }

        fn any_direction() -> impl Strategy<Value = Direction> {
            prop_oneof![Just(Direction::Accumulate), Just(Direction::Deplete)]
        }

        proptest! {
            #[test]
            fn prop_i16_matches_widened_model(
                direction in any_direction(),
                start in any::<i16>(),
                step in any::<i16>(),
                count in 0u64..64,
            ) {
                prop_assert_eq!(
                    run(direction, start, step, count),
                    model_i16(direction, start, step, count)
                );
            }

            #[test]
            fn prop_u8_matches_widened_model(
                direction in any_direction(),
                start in any::<u8>(),
                step in any::<u8>(),
                count in 0u64..300,
            ) {
                prop_assert_eq!(
                    run(direction, start, step, count),
                    model_u8(direction, start, step, count)
                );
            }

            #[test]
            fn prop_zero_step_is_identity(
                direction in any_direction(),
                start in any::<i64>(),
                count in 0u64..256,
            ) {
                prop_assert_eq!(
                    run(direction, start, 0, count),
                    StepResult::complete(start, count)
                );
            }

            #[test]
            fn prop_completed_iff_all_steps_applied(
                direction in any_direction(),
                start in any::<i32>(),
                step in any::<i32>(),
                count in 0u64..16,
            ) {
                let r = run(direction, start, step, count);
                prop_assert_eq!(r.completed, r.steps_applied == count);
                prop_assert_eq!(r.completed, r.boundary.is_none());
                prop_assert!(r.steps_applied <= count);
            }

            #[test]
            fn prop_stepper_yields_steps_applied_items(
                direction in any_direction(),
                start in any::<i8>(),
                step in any::<i8>(),
                count in 0u64..32,
            ) {
                let mut stepper = Stepper::new(direction, start, step, count);
                let yielded = stepper.by_ref().count() as u64;
                let r = stepper.finish();
                prop_assert_eq!(yielded, r.steps_applied);
            }

            #[test]
            fn prop_float_value_stays_finite(
                direction in any_direction(),
                start in -1.0e300f64..1.0e300,
                step in -1.0e308f64..1.0e308,
                count in 0u64..64,
            ) {
                let r = run(direction, start, step, count);
                prop_assert!(r.value.is_finite());
            }
        }
    }
}
