//! # CLI Argument Definitions
//!
//! Every flag is optional; without any, the calculator runs the plain interactive session.

use clap::Parser;
use fp::domain::config::AppConfig;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "footprint")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate your yearly CO₂ footprint from five lifestyle answers")]
pub struct Cli {
    /// Configuration file (defaults to an optional `footprint.*` in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write the bar chart as an SVG document
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Do not draw the bar chart in the terminal
    #[arg(long)]
    pub no_chart: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overlays the command-line flags on top of the loaded configuration.
    #[must_use]
    pub fn apply(&self, mut cfg: AppConfig) -> AppConfig {
        if let Some(svg) = &self.svg {
            cfg.chart.svg = Some(svg.clone());
        }
        if self.no_chart {
            cfg.chart.enabled = false;
        }
        if self.verbose {
            "debug".clone_into(&mut cfg.log.level);
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["footprint"]);
        let cfg = cli.apply(AppConfig::default());
        assert!(cfg.chart.enabled);
        assert!(cfg.chart.svg.is_none());
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["footprint", "--svg", "out.svg", "--no-chart", "-v"]);
        let cfg = cli.apply(AppConfig::default());
        assert!(!cfg.chart.enabled);
        assert_eq!(cfg.chart.svg, Some(PathBuf::from("out.svg")));
        assert_eq!(cfg.log.level, "debug");
    }
}
