use anyhow::Result;
use clap::Parser;

mod app;
mod board;
mod cli;
mod clipboard;
mod config;
mod domain;
mod format;
mod logging;
mod tui;

use cli::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => config::default_log_path()?,
    };
    logging::init(&log_path, cli.log_level)?;

    let app = app::AppContext::new()?;
    cli::commands::dispatch(&app, cli)
}
