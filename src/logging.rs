use anyhow::{Context, Result};
use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing::level_filters::LevelFilter;

/// Routes `tracing` output to a file. The terminal belongs to the TUI, so
/// nothing is written to stdout or stderr.
pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    Ok(())
}
