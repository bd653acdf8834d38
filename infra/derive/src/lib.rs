#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the workspace infrastructure.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fp-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The generated code refers to `::thiserror`, so consuming crates must depend on it directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Injected Items
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already derived.
/// * **`format_context`**: a module-local helper rendering an optional context as ` (context)`,
///   meant to be used inside `#[error(...)]` strings.
/// * **`<Name>Ext`**: a trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant that wraps a `source`.
/// * **`From<Source>`**: for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **`From<&'static str>` / `From<String>`**: when an `Internal { message, context }`
///   variant exists.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. Variants with a source must carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use fp_derive::fp_error;
/// use std::borrow::Cow;
///
/// #[fp_error]
/// pub enum ParseError {
///     #[error("Bad number{}: {source}", format_context(.context))]
///     Number { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<f64, ParseError> {
///     raw.trim().parse::<f64>().context(format!("while reading '{raw}'"))
/// }
/// ```
#[proc_macro_attribute]
pub fn fp_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
