//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or heavy logic, just data, constants and simple helpers.

pub mod activity;
pub mod category;
pub mod config;
pub mod constants;
pub mod emissions;

pub use activity::ActivityInputs;
pub use category::{Category, FeedbackBand};
pub use emissions::CategoryEmissions;
pub use strum::IntoEnumIterator;
