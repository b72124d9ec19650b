//! CovidStat - COVID-19 case counts for a single country.
//!
//! Fetches the latest confirmed and active counts once at startup and shows
//! them as a two-row summary.

use anyhow::Context;
use clap::Parser;

use covidstat::CovidStat;
use covidstat::args::Args;
use covidstat_common::{AppConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging)?;

    tracing::info!(country = %config.source.country, "Starting CovidStat");

    // Run the Iced application
    iced::application(
        move || CovidStat::boot(config.clone()),
        CovidStat::update,
        CovidStat::view,
    )
    .title(CovidStat::title)
    .theme(CovidStat::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
