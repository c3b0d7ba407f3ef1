use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "noteboard")]
#[command(about = "A scratch board for short notes", version, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Notes to start the board with
    pub(crate) notes: Vec<String>,

    /// Where diagnostics are written (defaults to ~/.noteboard/noteboard.log)
    #[arg(long = "log-file")]
    pub(crate) log_file: Option<PathBuf>,

    #[arg(long = "log-level", default_value = "info")]
    pub(crate) log_level: LevelFilter,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub(crate) version: Option<bool>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    Version,
}
