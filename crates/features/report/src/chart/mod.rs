//! Bar chart model shared by the terminal and SVG renderers.

pub mod svg;
pub mod terminal;

use fp_estimator::Footprint;

pub const TITLE: &str = "CO₂ Footprint by Category";
pub const Y_LABEL: &str = "kg of CO₂ per year";

/// Desired number of y-axis intervals; the actual count depends on the rounding.
const TARGET_TICKS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A titled chart with one bar per category, in category order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    #[must_use]
    pub fn from_footprint(footprint: &Footprint) -> Self {
        let bars = footprint
            .emissions()
            .iter()
            .map(|(category, value)| Bar { label: category.to_string(), value })
            .collect();

        Self { title: TITLE.to_owned(), y_label: Y_LABEL.to_owned(), bars }
    }

    /// Y-axis scale covering the tallest bar.
    #[must_use]
    pub fn scale(&self) -> Scale {
        Scale::fit(self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max))
    }
}

/// A y-axis running from zero to `max` in `step` increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    max: f64,
    step: f64,
}

impl Scale {
    /// Picks a 1/2/5 × 10ⁿ step and rounds the top up to a whole number of steps.
    /// Non-positive or non-finite maxima fall back to a unit scale.
    #[must_use]
    pub fn fit(max_value: f64) -> Self {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Self { max: 1.0, step: 0.2 };
        }

        let raw = max_value / TARGET_TICKS;
        let magnitude = 10f64.powf(raw.log10().floor());
        let nice = match raw / magnitude {
            r if r <= 1.0 => 1.0,
            r if r <= 2.0 => 2.0,
            r if r <= 5.0 => 5.0,
            _ => 10.0,
        };
        let step = nice * magnitude;

        Self { max: (max_value / step).ceil() * step, step }
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Number of intervals between zero and the top.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn intervals(&self) -> usize {
        ((self.max / self.step).round() as usize).max(1)
    }

    #[must_use]
    pub fn tick(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    /// Position of `value` along the axis, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        if value.is_finite() { (value / self.max).clamp(0.0, 1.0) } else { 0.0 }
    }

    /// Formats a tick with just enough decimals for the step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn label(&self, index: usize) -> String {
        let decimals = (-self.step.log10().floor()).max(0.0) as usize;
        format!("{:.*}", decimals, self.tick(index))
    }
}
