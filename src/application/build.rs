//! Build use case
//!
//! Settings file → document tree → validation → emitted markup.

use crate::domain::{validate, Document, Package, Product, RawMarkup};
use crate::error::{Result, WixError};
use crate::infrastructure::{OutputTarget, RawTarget, Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default output file name, placed next to the settings file
pub const DEFAULT_OUTPUT: &str = "product.wxs";

/// Assemble a document from settings.
///
/// A missing product id is replaced by a fresh one. Raw fragments are
/// attached in file order under their target element.
pub fn document_from_settings(settings: &Settings) -> Document {
    let ps = &settings.product;
    let mut product = Product::new()
        .with_id(ps.id.unwrap_or_default())
        .with_language(ps.language.clone());
    product.manufacturer = ps.manufacturer.clone();
    product.name = ps.name.clone();
    product.upgrade_code = ps.upgrade_code.clone();
    product.version = ps.version.clone();

    let mut doc = Document::new();
    let mut product = doc.attach_product(product);

    if let Some(pkg) = &settings.package {
        let mut package = Package::new();
        package.compressed = pkg.compressed;
        package.installer_version = pkg.installer_version.clone();
        product.attach_package(package);
    }

    let mut document_raw = Vec::new();
    for raw in &settings.raw {
        match raw.target {
            RawTarget::Product => {
                product.attach_raw(RawMarkup::new(raw.markup.clone()));
            }
            RawTarget::Document => document_raw.push(RawMarkup::new(raw.markup.clone())),
        }
    }
    for raw in document_raw {
        doc.attach_raw(raw);
    }

    doc
}

/// Options for a build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Output path; `-` for stdout, None for `product.wxs` beside the settings
    pub output: Option<PathBuf>,

    /// Refuse to emit when validation finds defects
    pub validate: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            output: None,
            validate: true,
        }
    }
}

/// Service for building markup from a settings file
pub struct BuildService {
    settings_path: PathBuf,
}

impl BuildService {
    pub fn new(settings_path: PathBuf) -> Self {
        BuildService { settings_path }
    }

    /// Execute the build, returning where the document went.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file is missing or malformed
    /// - Validation is enabled and the document has defects (nothing is written)
    /// - Writing the output fails
    pub fn execute(&self, options: BuildOptions) -> Result<OutputTarget> {
        let settings = Settings::load(&self.settings_path)?;
        debug!(path = %self.settings_path.display(), "settings loaded");

        let doc = document_from_settings(&settings);

        let defects = validate(&doc);
        if !defects.is_empty() {
            if options.validate {
                return Err(WixError::InvalidDocument(defects));
            }
            warn!(count = defects.len(), "emitting document with defects");
        }

        let target = match options.output {
            Some(path) => OutputTarget::from_arg(&path),
            None => OutputTarget::File(default_output_for(&self.settings_path)),
        };

        target.write(&doc)?;
        info!(output = ?target, "document emitted");

        Ok(target)
    }
}

fn default_output_for(settings_path: &Path) -> PathBuf {
    settings_path
        .parent()
        .map(|dir| dir.join(DEFAULT_OUTPUT))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{emit_to_string, Tag, TagKind};
    use crate::infrastructure::{PackageSettings, ProductSettings, RawSettings};
    use tempfile::TempDir;

    fn settings() -> Settings {
        Settings {
            product: ProductSettings {
                id: Some("0c8c3e4a-1b2c-4d5e-8f90-a1b2c3d4e5f6".parse().unwrap()),
                ..ProductSettings::default()
            },
            package: Some(PackageSettings::default()),
            raw: vec![
                RawSettings {
                    markup: "<test />".to_string(),
                    target: RawTarget::Product,
                },
                RawSettings {
                    markup: "<!-- end -->".to_string(),
                    target: RawTarget::Document,
                },
            ],
        }
    }

    #[test]
    fn test_document_from_settings() {
        let doc = document_from_settings(&settings());

        let product = doc.product().unwrap();
        assert_eq!(product.language, "1033");
        assert_eq!(product.parent(), Some(doc.id()));
        assert_eq!(product.packages().len(), 1);
        assert_eq!(product.body().raw()[0].markup(), "<test />");

        let kinds: Vec<TagKind> = doc.body().entries().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![TagKind::Product, TagKind::RawMarkup]);
    }

    #[test]
    fn test_document_from_settings_emits_expected_shape() {
        let out = emit_to_string(&document_from_settings(&settings()));
        assert!(out.ends_with(
            "<package ></package><test /></product ><!-- end --></Wix>"
        ));
    }

    #[test]
    fn test_missing_id_gets_fresh_identifier() {
        let mut s = settings();
        s.product.id = None;
        let doc = document_from_settings(&s);
        let id = doc.product().and_then(|p| p.id).unwrap();
        assert!(!id.is_nil());
    }

    #[test]
    fn test_build_refuses_invalid_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wixdom.toml");
        let mut s = settings();
        s.product.language = String::new();
        s.save(&path).unwrap();

        let result = BuildService::new(path).execute(BuildOptions::default());
        match result.unwrap_err() {
            WixError::InvalidDocument(defects) => assert_eq!(defects.len(), 1),
            other => panic!("Expected InvalidDocument, got {:?}", other),
        }
        assert!(!temp.path().join(DEFAULT_OUTPUT).exists());
    }

    #[test]
    fn test_build_without_validation_writes_anyway() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wixdom.toml");
        let mut s = settings();
        s.product.language = String::new();
        s.save(&path).unwrap();

        let target = BuildService::new(path)
            .execute(BuildOptions {
                output: None,
                validate: false,
            })
            .unwrap();
        assert_eq!(target, OutputTarget::File(temp.path().join(DEFAULT_OUTPUT)));
        assert!(temp.path().join(DEFAULT_OUTPUT).exists());
    }

    #[test]
    fn test_default_output_for() {
        assert_eq!(
            default_output_for(Path::new("/x/y/wixdom.toml")),
            PathBuf::from("/x/y/product.wxs")
        );
    }
}
