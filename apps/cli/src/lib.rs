//! # Footprint CLI
//!
//! Interactive adapters around the footprint estimator: [`Prompter`] turns terminal
//! answers into activity inputs and [`Session`] strings the whole run together.
//!
//! ## Example
//! ```rust
//! use fp_cli::Session;
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! let footprint = Session::default().run(Cursor::new("100\n0\n0\n0\n0\n"), &mut out).unwrap();
//! assert_eq!(footprint.total(), 624.0);
//! ```

pub mod args;
mod error;
pub mod prompt;
mod session;

pub use crate::args::Cli;
pub use crate::error::{InputError, InputErrorExt};
pub use crate::prompt::Prompter;
pub use crate::session::Session;
