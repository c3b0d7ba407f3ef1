use anyhow::Result;
use std::{env, fs, path::PathBuf};

/// How long a note shows its "copied" badge after a successful copy.
pub(crate) const COPIED_INDICATOR_MS: u64 = 2000;
pub(crate) const TUI_POLL_MS: u64 = 200;

const APP_DIR: &str = ".noteboard";
const LOG_FILE: &str = "noteboard.log";

pub(crate) fn app_dir() -> Result<PathBuf> {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let dir = PathBuf::from(home).join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub(crate) fn default_log_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(LOG_FILE))
}
