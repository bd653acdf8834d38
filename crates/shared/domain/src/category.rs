use crate::constants::{
    CO2_BUS_PER_KM, CO2_CAR_PER_KM, CO2_ELECTRICITY_PER_KWH, CO2_MEAT_PER_MEAL, CO2_PLANE_PER_KM,
    MONTHS_PER_YEAR, WEEKS_PER_YEAR,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

/// Activity categories tracked by the footprint, in display and chart order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Car,
    Bus,
    Plane,
    Electricity,
    #[strum(to_string = "Food (meat)")]
    Food,
}

impl Category {
    /// kg CO₂ emitted per unit of activity.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Car => CO2_CAR_PER_KM,
            Self::Bus => CO2_BUS_PER_KM,
            Self::Plane => CO2_PLANE_PER_KM,
            Self::Electricity => CO2_ELECTRICITY_PER_KWH,
            Self::Food => CO2_MEAT_PER_MEAL,
        }
    }

    /// Multiplier turning the input rate into a yearly amount.
    ///
    /// Car, bus and meals are weekly, electricity is monthly, flights are already yearly.
    #[must_use]
    pub const fn periods_per_year(self) -> f64 {
        match self {
            Self::Car | Self::Bus | Self::Food => WEEKS_PER_YEAR,
            Self::Electricity => MONTHS_PER_YEAR,
            Self::Plane => 1.0,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Qualitative classification of a yearly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackBand {
    #[strum(to_string = "above average")]
    AboveAverage,
    #[strum(to_string = "around average")]
    AroundAverage,
    #[strum(to_string = "below average")]
    BelowAverage,
}
