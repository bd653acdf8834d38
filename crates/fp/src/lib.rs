//! Facade crate for the footprint features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use fp_domain as domain;
pub use fp_kernel as kernel;

/// Feature slices.
pub mod features {
    pub use fp_estimator as estimator;
    pub use fp_report as report;
}

pub use features::estimator::{Footprint, estimate};
