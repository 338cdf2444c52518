use clap::Parser;
use std::io;
use std::path::PathBuf;
use anyhow::{Context, Result};
use log::{info, LevelFilter};

use synsum::{summarize_reports, Scope};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Yosys synthesis reports (`stat` / `ltp` output) to summarize
    #[arg(value_name = "REPORT", required = true)]
    reports: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Unknown-gate warnings stay visible under a quieter RUST_LOG; only an
    // explicit `synsum::parser=...` directive overrides this floor
    env_logger::Builder::new()
        .filter_module("synsum::parser", LevelFilter::Warn)
        .parse_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = summarize_reports(&cli.reports, Scope::PerFile, &mut out)
        .context("Failed to summarize synthesis reports")?;

    info!("Summarized {} report(s)", count);
    Ok(())
}
