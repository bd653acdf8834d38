//! Vertical bar chart drawn with Unicode block characters.
//!
//! ```text
//!         CO₂ Footprint by Category
//! kg of CO₂ per year
//! 800 ┤┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈
//!     │    ▆▆▆▆▆
//! 600 ┤┈┈┈┈█████┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈
//!   0 ┼──────────────────────────────────────────────────────────────────
//!          Car          Bus         Plane     Electricity  Food (meat)
//! ```

use super::BarChart;
use crate::error::{ReportError, ReportErrorExt};
use std::io::Write;

const BAR_WIDTH: usize = 5;
const COLUMN_GAP: usize = 2;
const FULL: char = '█';
/// Eighth blocks for the partially filled top cell; index 0 means empty.
const EIGHTHS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const GRID: char = '┈';
const EMPTY: char = ' ';

/// Draws `chart` using roughly `height` rows for the plot area.
///
/// The row count is rounded to a whole number of rows per y tick so every tick
/// lands on its own grid line.
///
/// # Errors
/// Returns [`ReportError::Io`] if the writer fails.
pub fn render(chart: &BarChart, height: usize, out: &mut impl Write) -> Result<(), ReportError> {
    let scale = chart.scale();
    let intervals = scale.intervals();
    let rows_per_tick = (height / intervals).max(1);
    let rows = intervals * rows_per_tick;

    let labels: Vec<String> = (0..=intervals).map(|i| scale.label(i)).collect();
    let axis_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
    let column = chart
        .bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(BAR_WIDTH)
        + COLUMN_GAP;
    let plot_width = column * chart.bars.len();

    #[allow(clippy::cast_precision_loss)]
    let heights: Vec<f64> =
        chart.bars.iter().map(|bar| scale.fraction(bar.value) * rows as f64).collect();

    writeln!(out, "{:^width$}", chart.title, width = axis_width + 2 + plot_width)
        .context("chart title")?;
    writeln!(out, "{}", chart.y_label).context("chart axis label")?;

    for row in (1..=rows).rev() {
        let on_tick = row % rows_per_tick == 0;
        let (label, axis, filler) = if on_tick {
            (labels[row / rows_per_tick].as_str(), '┤', GRID)
        } else {
            ("", '│', EMPTY)
        };

        let mut line = format!("{label:>axis_width$} {axis}");
        for &bar_height in &heights {
            let lead = (column - BAR_WIDTH) / 2;
            let cell = cell(bar_height, row).unwrap_or(filler);
            line.extend(std::iter::repeat_n(filler, lead));
            line.extend(std::iter::repeat_n(cell, BAR_WIDTH));
            line.extend(std::iter::repeat_n(filler, column - BAR_WIDTH - lead));
        }
        writeln!(out, "{}", line.trim_end()).context("chart row")?;
    }

    writeln!(out, "{:>axis_width$} ┼{}", labels[0], "─".repeat(plot_width))
        .context("chart x-axis")?;

    let mut names = " ".repeat(axis_width + 2);
    for bar in &chart.bars {
        names.push_str(&format!("{:^column$}", bar.label));
    }
    writeln!(out, "{}", names.trim_end()).context("chart categories")?;

    out.flush().context("chart flush")
}

/// The glyph of a bar `bar_height` rows tall at 1-based `row`, if any.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell(bar_height: f64, row: usize) -> Option<char> {
    let below = (row - 1) as f64;
    if bar_height >= row as f64 {
        return Some(FULL);
    }
    if bar_height <= below {
        return None;
    }
    let eighths = ((bar_height - below) * 8.0).floor() as usize;
    match eighths {
        0 => None,
        n => EIGHTHS.get(n).copied(),
    }
}
