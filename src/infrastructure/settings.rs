//! Settings file management
//!
//! A `wixdom.toml` describes one product. It stands in for hard-coded
//! defaults: everything the builder needs is read from here and passed in.

use crate::domain::Identifier;
use crate::error::{Result, WixError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "wixdom.toml";
pub const SETTINGS_ENV: &str = "WIXDOM_SETTINGS";
pub const DEFAULT_LANGUAGE: &str = "1033";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub product: ProductSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageSettings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw: Vec<RawSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSettings {
    /// Left out to get a fresh identifier on every build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_version: Option<String>,
}

/// A raw markup fragment and the element it goes under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSettings {
    pub markup: String,

    #[serde(default)]
    pub target: RawTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawTarget {
    Document,
    #[default]
    Product,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for ProductSettings {
    fn default() -> Self {
        ProductSettings {
            id: None,
            language: default_language(),
            manufacturer: None,
            name: None,
            upgrade_code: None,
            version: None,
        }
    }
}

impl Settings {
    /// Starter settings with a pinned product id and upgrade code
    pub fn starter() -> Self {
        Settings {
            product: ProductSettings {
                id: Some(Identifier::new()),
                manufacturer: Some("Example Corp".to_string()),
                name: Some("Example Product".to_string()),
                upgrade_code: Some(Identifier::new().to_string()),
                version: Some("1.0.0".to_string()),
                ..ProductSettings::default()
            },
            package: Some(PackageSettings {
                compressed: Some(true),
                installer_version: Some("200".to_string()),
            }),
            raw: Vec::new(),
        }
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WixError::SettingsNotFound(path.to_path_buf())
            } else {
                WixError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            WixError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Find the settings file.
    ///
    /// Checks `WIXDOM_SETTINGS` first, then walks up from the current
    /// directory looking for `wixdom.toml`.
    pub fn discover() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(SETTINGS_ENV) {
            let path = PathBuf::from(path);
            if path.is_file() {
                return Ok(path);
            }
            return Err(WixError::Config(format!(
                "{} is set to '{}' but no such file exists. \
                Run 'wixdom init' or unset {}.",
                SETTINGS_ENV,
                path.display(),
                SETTINGS_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `wixdom.toml` is found
    pub fn discover_from(start: &Path) -> Result<PathBuf> {
        let mut current = start;
        loop {
            let candidate = current.join(SETTINGS_FILE);
            if candidate.is_file() {
                return Ok(candidate);
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return Err(WixError::SettingsNotFound(start.join(SETTINGS_FILE))),
            }
        }
    }
}
