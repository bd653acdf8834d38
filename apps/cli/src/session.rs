use crate::prompt::Prompter;
use anyhow::Context;
use fp::domain::config::AppConfig;
use fp::features::report::chart::{BarChart, svg, terminal};
use fp::features::report::{BANNER, write_report};
use fp::{Footprint, estimate};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// One interactive run: banner, questions, report, chart.
#[derive(Debug, Default)]
pub struct Session {
    config: AppConfig,
}

impl Session {
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs the whole sequence against `input` and `out`.
    ///
    /// All answers are collected before anything is reported, so a bad answer leaves
    /// nothing but the prompts on `out`.
    ///
    /// # Errors
    /// Returns an error if an answer cannot be converted (see
    /// [`InputError`](crate::InputError)), or if writing the report or a chart fails.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut out: W) -> anyhow::Result<Footprint> {
        writeln!(out, "{BANNER}").context("Failed to write banner")?;

        let inputs = Prompter::new(input, &mut out).read_inputs()?;
        debug!(?inputs, "Answers collected");

        let footprint = estimate(&inputs);
        info!(total_kg = footprint.total(), band = %footprint.band(), "Footprint estimated");

        write_report(&mut out, &footprint)?;

        let chart = BarChart::from_footprint(&footprint);
        let chart_cfg = &self.config.chart;

        if chart_cfg.enabled {
            writeln!(out).context("Failed to write chart spacing")?;
            terminal::render(&chart, chart_cfg.height, &mut out)?;
        }

        if let Some(path) = &chart_cfg.svg {
            svg::write(&chart, path, chart_cfg.svg_width, chart_cfg.svg_height)
                .with_context(|| format!("Failed to save chart to {}", path.display()))?;
            writeln!(out, "\n📈 Chart saved to {}", path.display())
                .context("Failed to write chart notice")?;
            info!(path = %path.display(), "SVG chart saved");
        }

        Ok(footprint)
    }
}
