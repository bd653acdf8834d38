use anyhow::Context;
use clap::Parser;
use fp::domain::config::AppConfig;
use fp::kernel::config::load_config;
use fp_cli::{Cli, Session};
use fp_logger::{LevelFilter, Logger};
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = cli.apply(
        load_config::<AppConfig>(cli.config.as_deref())
            .context("Critical: Configuration is malformed")?,
    );

    let _log = init_logger(&cfg)?;

    Session::new(cfg).run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}

fn init_logger(cfg: &AppConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter = cfg
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", cfg.log.level))?;

    let builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(level)
        .ansi(io::stderr().is_terminal());

    let logger = match &cfg.log.dir {
        Some(dir) => builder.path(dir).json(cfg.log.json).init(),
        None => builder.init(),
    };

    logger.context("Failed to initialize logging")
}
