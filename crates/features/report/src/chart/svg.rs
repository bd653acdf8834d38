//! Standalone SVG rendering of a [`BarChart`].
//!
//! The document uses a fixed `viewBox`, so it scales to any display size. Margins are
//! derived from the label lengths (tight layout), the y grid is dashed at 70% opacity
//! and drawn beneath the bars.

use super::BarChart;
use crate::error::{ReportError, ReportErrorExt};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const MIN_WIDTH: u32 = 200;
pub const MIN_HEIGHT: u32 = 150;

const BAR_COLOR: &str = "#1f77b4";
const GRID_COLOR: &str = "#b0b0b0";
const TEXT_COLOR: &str = "#222222";
const FONT: &str = "DejaVu Sans, Arial, sans-serif";
const TITLE_SIZE: f64 = 16.0;
const LABEL_SIZE: f64 = 12.0;
/// Rough advance of one glyph at [`LABEL_SIZE`].
const CHAR_WIDTH: f64 = 7.0;
const PAD: f64 = 10.0;
/// Share of each category slot covered by its bar.
const BAR_FILL: f64 = 0.8;

/// Renders `chart` as an SVG document of `width` × `height` pixels.
///
/// # Errors
/// Returns [`ReportError::Layout`] if the size is below [`MIN_WIDTH`] × [`MIN_HEIGHT`].
pub fn render(chart: &BarChart, width: u32, height: u32) -> Result<String, ReportError> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(ReportError::Layout {
            message: format!("{width}x{height} is smaller than {MIN_WIDTH}x{MIN_HEIGHT}").into(),
            context: Some("svg size".into()),
        });
    }

    let mut svg = String::new();
    draw(chart, width, height, &mut svg).map_err(|_| ReportError::Layout {
        message: "failed to format the SVG document".into(),
        context: Some("svg".into()),
    })?;

    Ok(svg)
}

#[allow(clippy::cast_precision_loss)]
fn draw(chart: &BarChart, width: u32, height: u32, svg: &mut impl fmt::Write) -> fmt::Result {
    let scale = chart.scale();
    let intervals = scale.intervals();
    let tick_labels: Vec<String> = (0..=intervals).map(|i| scale.label(i)).collect();
    let widest_tick = tick_labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);

    let (w, h) = (f64::from(width), f64::from(height));
    let left = PAD + LABEL_SIZE + PAD + widest_tick as f64 * CHAR_WIDTH + PAD;
    let right = w - PAD * 2.0;
    let top = PAD + TITLE_SIZE + PAD;
    let bottom = h - (PAD + LABEL_SIZE + PAD);
    let plot_h = bottom - top;
    let slot = (right - left) / chart.bars.len().max(1) as f64;

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" font-family="{FONT}">"#
    )?;
    writeln!(svg, "<title>{}</title>", escape(&chart.title))?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{TITLE_SIZE}" fill="{TEXT_COLOR}">{}</text>"#,
        (left + right) / 2.0,
        PAD + TITLE_SIZE,
        escape(&chart.title)
    )?;
    writeln!(
        svg,
        r#"<text transform="translate({:.1} {:.1}) rotate(-90)" text-anchor="middle" font-size="{LABEL_SIZE}" fill="{TEXT_COLOR}">{}</text>"#,
        PAD + LABEL_SIZE,
        top + plot_h / 2.0,
        escape(&chart.y_label)
    )?;

    for (i, label) in tick_labels.iter().enumerate() {
        let y = bottom - plot_h * scale.fraction(scale.tick(i));
        if i > 0 {
            writeln!(
                svg,
                r#"<line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="{GRID_COLOR}" stroke-dasharray="4 3" stroke-opacity="0.7"/>"#
            )?;
        }
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="{LABEL_SIZE}" fill="{TEXT_COLOR}">{label}</text>"#,
            left - PAD / 2.0,
            y + LABEL_SIZE / 3.0
        )?;
    }

    for (i, bar) in chart.bars.iter().enumerate() {
        let bar_h = plot_h * scale.fraction(bar.value);
        let x = (slot * (1.0 - BAR_FILL)).mul_add(0.5, slot.mul_add(i as f64, left));
        let center = slot.mul_add(i as f64 + 0.5, left);
        let label = escape(&bar.label);
        writeln!(
            svg,
            r#"<rect x="{x:.1}" y="{:.1}" width="{:.1}" height="{bar_h:.1}" fill="{BAR_COLOR}"><title>{label}: {:.1} kg</title></rect>"#,
            bottom - bar_h,
            slot * BAR_FILL,
            bar.value
        )?;
        writeln!(
            svg,
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="{LABEL_SIZE}" fill="{TEXT_COLOR}">{label}</text>"#,
            bottom + PAD + LABEL_SIZE
        )?;
    }

    writeln!(
        svg,
        r#"<path d="M{left:.1} {top:.1} V{bottom:.1} H{right:.1}" fill="none" stroke="{TEXT_COLOR}"/>"#
    )?;
    svg.write_str("</svg>\n")
}

/// Renders `chart` and writes it to `path`.
///
/// # Errors
/// Returns [`ReportError::Layout`] for undersized charts and [`ReportError::Io`] if the
/// file cannot be written.
pub fn write(chart: &BarChart, path: &Path, width: u32, height: u32) -> Result<(), ReportError> {
    let document = render(chart, width, height)?;
    fs::write(path, document).context(format!("writing {}", path.display()))?;
    debug!(path = %path.display(), width, height, "SVG chart written");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
