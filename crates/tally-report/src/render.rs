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

//! # Rendering
//!
//! Console layout of trials and suites. Integers print in plain decimal;
//! floating-point values print in scientific notation so `f64::MAX` stays
//! readable.

use crate::config::ReportConfig;
use crate::trial::{TrialKind, TrialReport, TrialRun};
use std::fmt;
use std::io::Write;

/// How a numeric value is shown in the report.
pub trait ReportValue: Copy {
    /// Writes the value into `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_report_value_decimal {
    ($($t:ty),* $(,)?) => {
        $(
            impl ReportValue for $t {
                #[inline]
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

macro_rules! impl_report_value_scientific {
    ($($t:ty),* $(,)?) => {
        $(
            impl ReportValue for $t {
                #[inline]
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{:e}", self)
                }
            }
        )*
    };
}

impl_report_value_decimal!(i8, i16, i32, i64, i128, isize);
impl_report_value_decimal!(u8, u16, u32, u64, u128, usize);
impl_report_value_scientific!(f32, f64);

/// Adapter that formats a `ReportValue` through `Display`.
struct Shown<T>(T);

impl<T> fmt::Display for Shown<T>
where
    T: ReportValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl<T> TrialReport<T>
where
    T: ReportValue,
{
    fn fmt_run(&self, f: &mut fmt::Formatter<'_>, run: &TrialRun<T>, label: &str) -> fmt::Result {
        let (verb, flag) = match self.kind {
            TrialKind::Overflow => ("Adding", "Overflow"),
            TrialKind::Underflow => ("Subtracting", "Underflow"),
        };
        write!(
            f,
            "\t{} Numbers {} Overflow ({}, {}, {}) = {}: {} Result: {}",
            verb,
            label,
            Shown(self.start),
            Shown(self.increment),
            run.steps,
            flag,
            !run.result.completed,
            Shown(run.result.value)
        )
    }
}

impl<T> fmt::Display for TrialReport<T>
where
    T: ReportValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Test of Type = {}", self.kind, self.type_name)?;
        self.fmt_run(f, &self.within, "Without")?;
        writeln!(f)?;
        self.fmt_run(f, &self.beyond, "With")
    }
}

/// Writes the banner and title that open a suite.
pub fn write_suite_header<W>(
    out: &mut W,
    config: &ReportConfig,
    kind: TrialKind,
) -> std::io::Result<()>
where
    W: Write,
{
    let banner = config.banner();
    writeln!(out)?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "*** Running {} Tests ***", kind)?;
    writeln!(out, "{}", banner)
}

/// Writes the line that opens a full report.
pub fn write_report_header<W>(out: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    writeln!(out, "Starting Numeric Underflow / Overflow Tests!")
}

/// Writes the line that closes a full report.
pub fn write_report_footer<W>(out: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "All Numeric Underflow / Overflow Tests Complete!")
}
