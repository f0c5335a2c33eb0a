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

/// Settings for a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of steps in the run that is expected to stay in range.
    /// The increment of every trial is `max / steps`, and a second run with
    /// `steps + 1` steps is expected to hit the boundary.
    pub steps: u64,
    /// Width of the `*` banner framing each suite.
    pub banner_width: usize,
}

impl ReportConfig {
    /// Returns a builder initialised with the default settings.
    #[inline]
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::new()
    }

    /// Returns the banner line framing each suite.
    #[inline]
    pub fn banner(&self) -> String {
        "*".repeat(self.banner_width)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfigBuilder::new().build()
    }
}

impl std::fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ReportConfig(steps: {}, banner_width: {})",
            self.steps, self.banner_width
        )
    }
}

/// Builder for `ReportConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfigBuilder {
    steps: u64,
    banner_width: usize,
}

impl Default for ReportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfigBuilder {
    /// Creates a new `ReportConfigBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            steps: 5,
            banner_width: 50,
        }
    }

    /// Sets the number of in-range steps per trial.
    #[inline]
    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the banner width.
    #[inline]
    pub fn banner_width(mut self, banner_width: usize) -> Self {
        self.banner_width = banner_width;
        self
    }

    /// Builds the `ReportConfig` instance.
    #[inline]
    pub fn build(self) -> ReportConfig {
        ReportConfig {
            steps: self.steps,
            banner_width: self.banner_width,
        }
    }
}
