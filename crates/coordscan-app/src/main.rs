use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use coordscan_config::Config;
use coordscan_core::{Catalog, RunReport};
use tracing_subscriber::EnvFilter;

pub mod cli;

use self::cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            print_report(&report);
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<RunReport> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };
    cli.apply(&mut config);

    if config.sampler.enabled && !config.sampler.dry_run {
        tracing::warn!(
            "Color sampling enabled for '{}': character portraits will be overwritten",
            config.sampler.game
        );
    }

    let catalog = Catalog::load(&config.paths.catalog)
        .with_context(|| format!("Failed to load catalog {}", config.paths.catalog.display()))?;

    Ok(coordscan_core::run(&config, &catalog))
}

fn print_report(report: &RunReport) {
    for (combo, colors) in &report.colors {
        match serde_json::to_string(colors) {
            Ok(json) => println!("{combo} character colors: {json}"),
            Err(e) => tracing::error!("Failed to serialize colors for {combo}: {e}"),
        }
    }
    print!("{report}");
}
