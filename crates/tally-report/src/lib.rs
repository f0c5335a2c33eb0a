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

//! # Tally Report
//!
//! Console report of bounded runs across every primitive numeric type. For
//! each type an overflow trial accumulates towards the maximum and an
//! underflow trial depletes towards the minimum; each trial shows a run that
//! stays in range and a run one step longer that stops at the boundary.
//!
//! ## Modules
//!
//! - `config`: `ReportConfig` and its builder (step count, banner width).
//! - `trial`: Per-type trials built on `tally_core::run`.
//! - `render`: Text layout of trials, suite banners and the report frame.
//! - `suite`: Sequencing of all numeric domains into suites and the full report.
//! - `error`: `ReportError`.

pub mod config;
pub mod error;
pub mod render;
pub mod suite;
pub mod trial;
