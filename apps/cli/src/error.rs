use std::borrow::Cow;

/// Failures while collecting the interactive answers.
///
/// None of them is recovered from: the session stops before any report is written.
#[fp_derive::fp_error]
pub enum InputError {
    /// An answer that should be a number is not one.
    #[error("Invalid number{}: {source}", format_context(.context))]
    InvalidNumber { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },

    /// The meal count is not a whole number.
    #[error("Invalid whole number{}: {source}", format_context(.context))]
    InvalidCount { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    /// Reading the terminal or writing a prompt failed.
    #[error("Terminal I/O error{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Standard input ended before every question was answered.
    #[error("Input closed{}: {message}", format_context(.context))]
    Closed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
