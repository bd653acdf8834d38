//! # Footprint Estimator
//!
//! Pure computation of a yearly CO₂ footprint from [`ActivityInputs`].
//! Every category is `rate × periods_per_year × factor`; the total is the sum of
//! the categories and is classified into a [`FeedbackBand`]. No I/O happens here.
//!
//! ## Example
//! ```rust
//! use fp_estimator::{ActivityInputs, FeedbackBand, estimate};
//!
//! let footprint = estimate(&ActivityInputs { km_car_per_week: 100.0, ..Default::default() });
//! assert_eq!(footprint.total(), 624.0);
//! assert_eq!(footprint.band(), FeedbackBand::BelowAverage);
//! ```

use fp_domain::constants::{ABOVE_AVERAGE_KG, AROUND_AVERAGE_KG};
pub use fp_domain::{ActivityInputs, Category, CategoryEmissions, FeedbackBand};
use tracing::trace;

/// The result of one estimation: per-category emissions, their total and its band.
///
/// The total is derived from the emissions when the value is built and cannot be
/// changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    emissions: CategoryEmissions,
    total: f64,
    band: FeedbackBand,
}

impl Footprint {
    #[must_use]
    pub fn from_emissions(emissions: CategoryEmissions) -> Self {
        let total = emissions.sum();
        Self { emissions, total, band: classify(total) }
    }

    #[must_use]
    pub const fn emissions(&self) -> &CategoryEmissions {
        &self.emissions
    }

    /// Yearly kg CO₂ over all categories.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub const fn band(&self) -> FeedbackBand {
        self.band
    }
}

/// Yearly kg CO₂ of a single category.
#[must_use]
pub fn category_emission(category: Category, inputs: &ActivityInputs) -> f64 {
    inputs.rate(category) * category.periods_per_year() * category.factor()
}

/// Computes the footprint of `inputs` with the fixed emission factors.
#[must_use]
pub fn estimate(inputs: &ActivityInputs) -> Footprint {
    let footprint =
        Footprint::from_emissions(CategoryEmissions::from_fn(|c| category_emission(c, inputs)));
    trace!(total = footprint.total, band = %footprint.band, "Footprint estimated");
    footprint
}

/// Classifies a yearly total. The around-average band starts at 5000 kg inclusive
/// and runs up to 10000 kg inclusive, so both boundaries are "around average".
///
/// A `NaN` total compares false everywhere and lands in [`FeedbackBand::BelowAverage`].
#[must_use]
pub fn classify(total: f64) -> FeedbackBand {
    if total > ABOVE_AVERAGE_KG {
        FeedbackBand::AboveAverage
    } else if total >= AROUND_AVERAGE_KG {
        FeedbackBand::AroundAverage
    } else {
        FeedbackBand::BelowAverage
    }
}
