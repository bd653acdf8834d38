use std::borrow::Cow;

/// A specialized [`ReportError`] enum of this crate.
#[fp_derive::fp_error]
pub enum ReportError {
    /// Writing the report or a chart failed.
    #[error("Report output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The requested chart dimensions cannot hold the plot.
    #[error("Chart layout error{}: {message}", format_context(.context))]
    Layout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
