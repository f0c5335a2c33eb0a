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

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::trial::{TrialKind, trial};
use crate::render::{write_report_footer, write_report_header, write_suite_header};
use std::io::Write;

macro_rules! trial_each {
    ($out:expr, $kind:expr, $steps:expr; $($t:ty),* $(,)?) => {
        $(
            writeln!($out, "{}", trial::<$t>($kind, $steps)?)?;
        )*
    };
}

/// Trials every primitive numeric domain in one direction and writes the
/// suite to `out`.
///
/// Domains are exercised in the order signed integers, unsigned integers,
/// floating-point types, narrowest first.
///
/// # Errors
///
/// Fails if a trial cannot be built for the configured step count or if
/// writing to `out` fails.
pub fn run_suite<W>(
    out: &mut W,
    config: &ReportConfig,
    kind: TrialKind,
) -> Result<(), ReportError>
where
    W: Write,
{
    let _span = tracing::info_span!("suite", %kind, steps = config.steps).entered();
    tracing::info!("running suite");

    write_suite_header(out, config, kind)?;
    let steps = config.steps;

    trial_each!(out, kind, steps; i8, i16, i32, i64, i128, isize);
    trial_each!(out, kind, steps; u8, u16, u32, u64, u128, usize);
    trial_each!(out, kind, steps; f32, f64);

    Ok(())
}

/// Writes the full report: the overflow suite followed by the underflow suite.
///
/// # Errors
///
/// See [`run_suite`].
pub fn write_report<W>(out: &mut W, config: &ReportConfig) -> Result<(), ReportError>
where
    W: Write,
{
    write_report_header(out)?;
    run_suite(out, config, TrialKind::Overflow)?;
    run_suite(out, config, TrialKind::Underflow)?;
    write_report_footer(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: [&str; 14] = [
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
        "f32", "f64",
    ];

    fn render_suite(kind: TrialKind) -> String {
        let mut buf = Vec::new();
        run_suite(&mut buf, &ReportConfig::default(), kind).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_overflow_suite_covers_every_domain_in_order() {
        let text = render_suite(TrialKind::Overflow);
        let titles: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("Overflow Test of Type = "))
            .collect();
        assert_eq!(titles, TYPES);
    }

    #[test]
    fn test_overflow_suite_reports_boundary_on_second_run() {
        let text = render_suite(TrialKind::Overflow);
        let with: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("With Overflow"))
            .collect();
        assert_eq!(with.len(), TYPES.len());
        assert!(with.iter().all(|l| l.contains("Overflow: true")));
    }

    #[test]
    fn test_underflow_suite_unsigned_hits_zero() {
        let text = render_suite(TrialKind::Underflow);
        assert!(text.contains(
            "\tSubtracting Numbers With Overflow (255, 51, 6) = Underflow: true Result: 0"
        ));
        assert!(text.contains(
            "\tSubtracting Numbers With Overflow (65535, 13107, 6) = Underflow: true Result: 0"
        ));
    }

    #[test]
    fn test_full_report_frame() {
        let mut buf = Vec::new();
        write_report(&mut buf, &ReportConfig::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Starting Numeric Underflow / Overflow Tests!\n"));
        assert!(text.ends_with("All Numeric Underflow / Overflow Tests Complete!\n"));
        let overflow = text.find("*** Running Overflow Tests ***").unwrap();
        let underflow = text.find("*** Running Underflow Tests ***").unwrap();
        assert!(overflow < underflow);
    }

    #[test]
    fn test_invalid_steps_propagate() {
        let config = ReportConfig::builder().steps(0).build();
        let mut buf = Vec::new();
        assert!(matches!(
            run_suite(&mut buf, &config, TrialKind::Overflow),
            Err(ReportError::ZeroSteps)
        ));
    }
}
