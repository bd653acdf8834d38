//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and hosts the configuration loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use fp_kernel::config::load_config;
//! use fp_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap();
//! ```
pub mod config;

pub use fp_domain as domain;
