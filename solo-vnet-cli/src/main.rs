mod commands;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing::level_filters::LevelFilter;
use solo_vnet_schemas::cli_models::Opts;
use crate::commands::parse_command;

fn main() {
    std::process::exit(match run_app() {
        Ok(_) => 0,
        Err(err) => {
            tracing::error!("ERROR: {}", err);
            err.chain().skip(1).for_each(|cause| tracing::error!("because: {}", cause));
            1
        }
    });
}

fn log_level(s: &str) -> anyhow::Result<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(anyhow!("Unknown Log LevelFilter {}", s)),
    }
}

/// Parse the CLI arguments, set up logging and run the command
fn run_app() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();
    let mut e = None;
    // Determine and set log level
    let level = match &opts.verbosity {
        None => LevelFilter::INFO,
        Some(x) => match log_level(x) {
            Ok(l) => l,
            Err(err) => {
                e = Some(err);
                LevelFilter::INFO
            }
        },
    };

    let stdout_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(stdout_log.with_filter(level))
        .init();
    if let Some(e) = e {
        tracing::warn!("{}", e);
    }

    parse_command(opts)
}
