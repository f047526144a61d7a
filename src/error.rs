//! Error types for wixdom

use crate::domain::Defect;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wixdom
#[derive(Debug, Error)]
pub enum WixError {
    #[error("Settings file not found: {0}")]
    SettingsNotFound(PathBuf),

    #[error("Settings file already exists: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Document is invalid: {} defect(s)", .0.len())]
    InvalidDocument(Vec<Defect>),

    #[error("{0} defect(s) found")]
    DefectsFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WixError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WixError::InvalidDocument(_) | WixError::DefectsFound(_) => 2,
            WixError::SettingsNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WixError::SettingsNotFound(path) => {
                format!(
                    "Settings file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'wixdom init' to create a starter wixdom.toml\n\
                    • Pass the file explicitly with --settings <FILE>\n\
                    • Set WIXDOM_SETTINGS environment variable to your settings file",
                    path.display()
                )
            }
            WixError::AlreadyInitialized(path) => {
                format!(
                    "Settings file already exists: {}\n\n\
                    Use 'wixdom init --force' to overwrite it",
                    path.display()
                )
            }
            WixError::InvalidDocument(defects) => {
                let mut msg = format!("Document is invalid: {} defect(s)\n", defects.len());
                for defect in defects {
                    msg.push_str(&format!("  • {}\n", defect));
                }
                msg.push_str(
                    "\nFix the settings file, or run 'wixdom build --no-validate' to emit anyway",
                );
                msg
            }
            WixError::Config(msg) => {
                if msg.contains("Invalid identifier") {
                    format!(
                        "{}\n\n\
                        Expected a GUID such as 0C8C3E4A-1B2C-4D5E-8F90-A1B2C3D4E5F6\n\
                        Generate one with: wixdom guid",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WixError
pub type Result<T> = std::result::Result<T, WixError>;
