use crate::error::{ReportError, ReportErrorExt};
use fp_domain::FeedbackBand;
use fp_estimator::Footprint;
use std::fmt;
use std::io::Write;

/// Greeting printed before the first prompt.
pub const BANNER: &str = "🌍 Personal CO₂ Footprint Calculator\n";

/// The advice line shown for a band.
#[must_use]
pub const fn feedback_message(band: FeedbackBand) -> &'static str {
    match band {
        FeedbackBand::AboveAverage => {
            "⚠️ Above average emissions. Try reducing car use and meat consumption."
        },
        FeedbackBand::AroundAverage => "🙂 Around the average, but there’s room for improvement.",
        FeedbackBand::BelowAverage => "✅ Great! Your footprint is lower than average.",
    }
}

/// A kg amount with one decimal. `NaN` prints as `nan`, infinities as `inf`/`-inf`.
struct Kg(f64);

impl fmt::Display for Kg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() { f.write_str("nan") } else { write!(f, "{:.1}", self.0) }
    }
}

/// Writes the per-category breakdown, the total and the feedback line.
///
/// Values are printed in kg with one decimal, categories in display order.
///
/// # Errors
/// Returns [`ReportError::Io`] if the writer fails.
pub fn write_report(out: &mut impl Write, footprint: &Footprint) -> Result<(), ReportError> {
    writeln!(out, "\n📊 Estimated annual CO₂ emissions:").context("report header")?;
    for (category, kg) in footprint.emissions().iter() {
        writeln!(out, " - {category}: {} kg CO₂", Kg(kg)).context("report line")?;
    }
    writeln!(out, "\n🌱 Total annual footprint: {} kg CO₂", Kg(footprint.total()))
        .context("report total")?;
    writeln!(out, "{}", feedback_message(footprint.band())).context("report feedback")?;
    out.flush().context("report flush")
}
