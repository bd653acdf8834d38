use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub chart: ChartConfig,
}

/// Diagnostics output. Logs always go to stderr; `dir` adds rolling files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
    pub json: bool,
}

/// Bar chart rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Draw the chart on the terminal after the report.
    pub enabled: bool,
    /// Plot height in terminal rows (rounded to whole grid intervals).
    pub height: usize,
    /// Also write the chart as an SVG document to this path.
    pub svg: Option<PathBuf>,
    pub svg_width: u32,
    pub svg_height: u32,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), dir: None, json: false }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { enabled: true, height: 10, svg: None, svg_width: 800, svg_height: 500 }
    }
}
