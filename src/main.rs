#![forbid(unsafe_code)]

mod animation;
mod color;
mod constants;
mod content;
mod diagram;
mod document;
mod gui;
mod palette;
mod prefs;
mod schedule;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

/// Desktop portfolio viewer
#[derive(Parser, Debug)]
#[command(name = "folio-view", version, about)]
struct Args {
    /// Preference file path (defaults to the platform config dir)
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Skip entrance animations
    #[arg(long)]
    reduced_motion: bool,
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    info!(reduced_motion = args.reduced_motion, "Starting folio-view");

    let problems = content::validate();
    if !problems.is_empty() {
        warn!(count = problems.len(), "Page content has validation issues, rendering anyway");
    }

    gui::run_gui(args.storage, args.reduced_motion)
}
