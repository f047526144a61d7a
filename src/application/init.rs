//! Initialize settings use case

use crate::error::{Result, WixError};
use crate::infrastructure::settings::SETTINGS_FILE;
use crate::infrastructure::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a starter `wixdom.toml` into `dir`, returning its path.
pub fn init(dir: &Path, force: bool) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(SETTINGS_FILE);
    if path.exists() && !force {
        return Err(WixError::AlreadyInitialized(path));
    }

    Settings::starter().save(&path)?;
    info!(path = %path.display(), "settings written");

    Ok(path)
}
