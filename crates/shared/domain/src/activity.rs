use crate::category::Category;
use serde::{Deserialize, Serialize};

/// The five lifestyle answers collected for a single run.
///
/// Values are expected to be non-negative but are not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInputs {
    pub km_car_per_week: f64,
    pub km_bus_per_week: f64,
    pub km_plane_per_year: f64,
    pub electricity_kwh_per_month: f64,
    pub meat_meals_per_week: i64,
}

impl ActivityInputs {
    /// The raw input rate feeding `category`.
    #[must_use]
    pub const fn rate(&self, category: Category) -> f64 {
        match category {
            Category::Car => self.km_car_per_week,
            Category::Bus => self.km_bus_per_week,
            Category::Plane => self.km_plane_per_year,
            Category::Electricity => self.electricity_kwh_per_month,
            Category::Food => self.meat_meals_per_week as f64,
        }
    }
}
