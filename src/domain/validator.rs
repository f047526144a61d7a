//! Structural validation
//!
//! Walks the tree in pre-order and records every defect it finds. Nothing
//! here fails: the caller decides what a non-empty defect list means.

use super::document::{Document, Package, Product, RawMarkup};
use super::tag::{NodeId, NodeRef, Tag, TagKind};
use std::fmt;

/// A single structural problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    pub kind: TagKind,
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub parent_kind: Option<TagKind>,
    pub message: String,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} (parent: ", self.kind, self.node)?;
        match (self.parent_kind, self.parent) {
            (Some(kind), Some(id)) => write!(f, "{}#{}", kind, id)?,
            _ => f.write_str("none")?,
        }
        write!(f, "): {}", self.message)
    }
}

/// Validate a document, returning all defects in traversal order.
///
/// # Examples
///
/// ```
/// use wixdom::domain::{validate, Document, Tag, TagKind};
///
/// let doc = Document::new();
/// let defects = validate(&doc);
///
/// assert_eq!(defects.len(), 1);
/// assert_eq!(defects[0].kind, TagKind::Document);
/// assert_eq!(defects[0].node, doc.id());
/// assert!(defects[0].parent.is_none());
/// ```
pub fn validate(doc: &Document) -> Vec<Defect> {
    let mut validator = Validator::default();
    validator.visit(doc.as_node(), None);
    validator.defects
}

/// Kind and id of the node whose children are being walked
type ParentContext = Option<(TagKind, NodeId)>;

#[derive(Default)]
struct Validator {
    defects: Vec<Defect>,
}

impl Validator {
    fn visit(&mut self, node: NodeRef<'_>, parent: ParentContext) {
        match node {
            NodeRef::Document(doc) => {
                self.check_document(doc, parent);
                let context = Some((Document::KIND, doc.id()));
                for child in doc.body().entries() {
                    self.visit(child, context);
                }
            }
            NodeRef::Product(product) => {
                self.check_product(product, parent);
                let context = Some((Product::KIND, product.id()));
                for child in product.body().entries() {
                    self.visit(child, context);
                }
            }
            NodeRef::Package(package) => self.check_package(package, parent),
            NodeRef::RawMarkup(raw) => self.check_raw(raw, parent),
        }
    }

    /// Parent id and kind both come from the walk, so they always agree
    fn report<T: Tag>(&mut self, node: &T, parent: ParentContext, message: String) {
        self.defects.push(Defect {
            kind: T::KIND,
            node: node.id(),
            parent: parent.map(|(_, id)| id),
            parent_kind: parent.map(|(kind, _)| kind),
            message,
        });
    }

    fn check_document(&mut self, doc: &Document, parent: ParentContext) {
        match doc.products().len() {
            0 => self.report(doc, parent, "Missing product".to_string()),
            1 => {}
            n => self.report(doc, parent, format!("Multiple products: {}", n)),
        }
    }

    fn check_product(&mut self, product: &Product, parent: ParentContext) {
        if product.id.map_or(true, |id| id.is_nil()) {
            self.report(product, parent, "Missing product identifier".to_string());
        }

        if product.language.trim().is_empty() {
            self.report(product, parent, "Missing product language".to_string());
        }

        let packages = product.packages().len();
        if packages > 1 {
            self.report(product, parent, format!("Multiple packages: {}", packages));
        }
    }

    fn check_package(&mut self, package: &Package, parent: ParentContext) {
        if let Some(version) = &package.installer_version {
            if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit()) {
                self.report(
                    package,
                    parent,
                    format!("Installer version must be numeric: '{}'", version),
                );
            }
        }
    }

    fn check_raw(&mut self, _raw: &RawMarkup, _parent: ParentContext) {}
}
