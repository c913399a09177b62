//! printwrapped - Year in Review card CLI
//!
//! Renders the SVG card for a year of print statistics, or lists the
//! years with data, without going through the host application.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use printwrapped_core::{
    logging, Assets, Config, ListYears, RenderSummary, StatsArchive, WrappedHost, YearsResponse,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "printwrapped")]
#[command(about = "Year in Review cards for your print history")]
#[command(version)]
struct Args {
    /// Year to render (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// Statistics directory (default: from config)
    #[arg(long)]
    stats_dir: Option<PathBuf>,

    /// List available years as JSON instead of rendering
    #[arg(long)]
    list: bool,

    /// Write the card to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = logging::init(&config.logging).ok();

    let archive = match &args.stats_dir {
        Some(dir) => StatsArchive::new(dir.clone()),
        None => StatsArchive::from_config(&config),
    };
    let host = WrappedHost::new(archive, Assets::load(&config));

    if args.list {
        let YearsResponse { mut years } = host.list_years();
        years.sort_unstable();
        println!("{}", serde_json::to_string(&YearsResponse { years })?);
        return Ok(());
    }

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let card = host
        .render_summary(year)
        .with_context(|| format!("no statistics recorded for {}", year))?;

    match &args.out {
        Some(path) => std::fs::write(path, card.body)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", card.body),
    }

    Ok(())
}
