//! Check use case - validate without emitting

use super::build::document_from_settings;
use crate::domain::{validate, Defect};
use crate::error::Result;
use crate::infrastructure::Settings;
use std::path::Path;
use tracing::info;

/// Load settings, build the tree and return every defect found
pub fn check(settings_path: &Path) -> Result<Vec<Defect>> {
    let settings = Settings::load(settings_path)?;
    let doc = document_from_settings(&settings);
    let defects = validate(&doc);

    info!(count = defects.len(), "validation finished");
    Ok(defects)
}
