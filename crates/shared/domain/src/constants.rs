//! Emission factors (kg CO₂ per unit of activity) and annualization multipliers.

/// kg CO₂ per km driven by car.
pub const CO2_CAR_PER_KM: f64 = 0.12;
/// kg CO₂ per km travelled by bus.
pub const CO2_BUS_PER_KM: f64 = 0.05;
/// kg CO₂ per km flown.
pub const CO2_PLANE_PER_KM: f64 = 0.25;
/// kg CO₂ per kWh of electricity.
pub const CO2_ELECTRICITY_PER_KWH: f64 = 0.233;
/// kg CO₂ per meal containing meat.
pub const CO2_MEAT_PER_MEAL: f64 = 5.0;

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Totals strictly above this are "above average".
pub const ABOVE_AVERAGE_KG: f64 = 10_000.0;
/// Totals from this value up to [`ABOVE_AVERAGE_KG`] (both inclusive) are "around average".
pub const AROUND_AVERAGE_KG: f64 = 5_000.0;
