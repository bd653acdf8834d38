//! # Footprint Report
//!
//! Output adapters for a computed [`Footprint`](fp_estimator::Footprint):
//!
//! * [`write_report`]: the per-category breakdown, the total and the feedback line.
//! * [`chart::BarChart`]: the chart model, drawn by [`chart::terminal`] on a text
//!   stream or by [`chart::svg`] as a standalone SVG document.
//!
//! Every writer takes a generic [`std::io::Write`] so the output can be captured in tests.

pub mod chart;
mod error;
mod text;

pub use crate::error::{ReportError, ReportErrorExt};
pub use crate::text::{BANNER, feedback_message, write_report};
