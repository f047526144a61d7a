//! Document tree - the builder surface over the tag model
//!
//! Each composite exposes one `attach_*` operation per child kind it accepts
//! and nothing else, so an illegal composition does not type-check:
//!
//! ```compile_fail
//! use wixdom::domain::{Document, Package};
//!
//! let mut doc = Document::new();
//! doc.attach_package(Package::new());
//! ```
//!
//! ```compile_fail
//! use wixdom::domain::{Package, RawMarkup};
//!
//! let mut package = Package::new();
//! package.attach_raw(RawMarkup::new("<x />"));
//! ```
//!
//! Once attached, a node is only reachable through a [`ProductMut`] or
//! [`PackageMut`] handle or a shared reference. Neither lets the node be moved
//! out, so it can never be attached to a second parent:
//!
//! ```compile_fail
//! use wixdom::domain::{Document, Product};
//!
//! let mut first = Document::new();
//! first.attach_product(Product::new());
//! let taken = std::mem::take(first.product_mut().unwrap());
//! ```
//!
//! ```compile_fail
//! use wixdom::domain::{Document, Product};
//!
//! let mut first = Document::new();
//! let mut second = Document::new();
//! first.attach_product(Product::new());
//! second.attach_product(Product::new());
//! std::mem::swap(
//!     &mut *first.product_mut().unwrap(),
//!     &mut *second.product_mut().unwrap(),
//! );
//! ```

use super::identifier::Identifier;
use super::tag::{Body, ChildTag, Header, NodeRef, Tag, TagKind};
use std::ops::Deref;

/// Root of an installer package descriptor
#[derive(Debug)]
pub struct Document {
    header: Header,
    body: Body<Product>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            header: Header::new(),
            body: Body::default(),
        }
    }

    /// Attach a product and return it for further configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use wixdom::domain::{Document, Identifier, Package, Product, Tag};
    ///
    /// let mut doc = Document::new();
    /// let mut product = doc.attach_product(
    ///     Product::new()
    ///         .with_id(Identifier::new())
    ///         .with_language("1033"),
    /// );
    /// product.attach_package(Package::new());
    ///
    /// assert_eq!(doc.products().len(), 1);
    /// assert_eq!(doc.products()[0].parent(), Some(doc.id()));
    /// ```
    pub fn attach_product(&mut self, mut product: Product) -> ProductMut<'_> {
        product.header.adopt(self.header.id());
        ProductMut {
            product: self.body.push_child(product),
        }
    }

    /// Attach a raw markup fragment directly under the root element
    pub fn attach_raw(&mut self, mut raw: RawMarkup) -> &RawMarkup {
        raw.header.adopt(self.header.id());
        self.body.push_raw(raw)
    }

    pub fn products(&self) -> &[Product] {
        self.body.children()
    }

    /// The first attached product, if any
    pub fn product(&self) -> Option<&Product> {
        self.body.children().first()
    }

    pub fn product_mut(&mut self) -> Option<ProductMut<'_>> {
        self.body
            .children_mut()
            .first_mut()
            .map(|product| ProductMut { product })
    }

    pub fn body(&self) -> &Body<Product> {
        &self.body
    }

    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Document(self)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Tag for Document {
    const KIND: TagKind = TagKind::Document;

    fn header(&self) -> &Header {
        &self.header
    }
}

/// The installable unit
#[derive(Debug)]
pub struct Product {
    header: Header,
    body: Body<Package>,
    pub id: Option<Identifier>,
    pub language: String,
    pub manufacturer: Option<String>,
    pub name: Option<String>,
    pub upgrade_code: Option<String>,
    pub version: Option<String>,
}

impl Product {
    /// A product with no attributes set
    pub fn new() -> Self {
        Product {
            header: Header::new(),
            body: Body::default(),
            id: None,
            language: String::new(),
            manufacturer: None,
            name: None,
            upgrade_code: None,
            version: None,
        }
    }

    pub fn with_id(mut self, id: Identifier) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_upgrade_code(mut self, upgrade_code: impl Into<String>) -> Self {
        self.upgrade_code = Some(upgrade_code.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn attach_package(&mut self, mut package: Package) -> PackageMut<'_> {
        package.header.adopt(self.header.id());
        PackageMut {
            package: self.body.push_child(package),
        }
    }

    pub fn attach_raw(&mut self, mut raw: RawMarkup) -> &RawMarkup {
        raw.header.adopt(self.header.id());
        self.body.push_raw(raw)
    }

    pub fn packages(&self) -> &[Package] {
        self.body.children()
    }

    pub fn package(&self) -> Option<&Package> {
        self.body.children().first()
    }

    pub fn body(&self) -> &Body<Package> {
        &self.body
    }

    /// Attributes that are set, in the order they are written to markup
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(id) = self.id {
            attrs.push(("Id", id.to_string()));
        }
        if !self.language.is_empty() {
            attrs.push(("Language", self.language.clone()));
        }
        let optional = [
            ("Manufacturer", &self.manufacturer),
            ("Name", &self.name),
            ("UpgradeCode", &self.upgrade_code),
            ("Version", &self.version),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                attrs.push((key, value.clone()));
            }
        }
        attrs
    }
}

impl Tag for Product {
    const KIND: TagKind = TagKind::Product;

    fn header(&self) -> &Header {
        &self.header
    }
}

impl ChildTag for Product {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Product(self)
    }
}

/// Packaging metadata. A leaf: it has no attach operations.
#[derive(Debug)]
pub struct Package {
    header: Header,
    pub compressed: Option<bool>,
    pub installer_version: Option<String>,
}

impl Package {
    pub fn new() -> Self {
        Package {
            header: Header::new(),
            compressed: None,
            installer_version: None,
        }
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = Some(compressed);
        self
    }

    pub fn with_installer_version(mut self, version: impl Into<String>) -> Self {
        self.installer_version = Some(version.into());
        self
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(compressed) = self.compressed {
            let flag = if compressed { "yes" } else { "no" };
            attrs.push(("Compressed", flag.to_string()));
        }
        if let Some(version) = &self.installer_version {
            attrs.push(("InstallerVersion", version.clone()));
        }
        attrs
    }
}

impl Tag for Package {
    const KIND: TagKind = TagKind::Package;

    fn header(&self) -> &Header {
        &self.header
    }
}

impl ChildTag for Package {
    fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Package(self)
    }
}

/// Mutable access to an attached product.
///
/// Exposes attribute setters and the product's own attach operations; reads
/// go through `Deref`.
#[derive(Debug)]
pub struct ProductMut<'a> {
    product: &'a mut Product,
}

impl<'a> ProductMut<'a> {
    pub fn set_id(&mut self, id: Identifier) -> &mut Self {
        self.product.id = Some(id);
        self
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.product.language = language.into();
        self
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) -> &mut Self {
        self.product.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.product.name = Some(name.into());
        self
    }

    pub fn set_upgrade_code(&mut self, upgrade_code: impl Into<String>) -> &mut Self {
        self.product.upgrade_code = Some(upgrade_code.into());
        self
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.product.version = Some(version.into());
        self
    }

    pub fn attach_package(&mut self, package: Package) -> PackageMut<'_> {
        self.product.attach_package(package)
    }

    pub fn attach_raw(&mut self, raw: RawMarkup) -> &RawMarkup {
        self.product.attach_raw(raw)
    }
}

impl Deref for ProductMut<'_> {
    type Target = Product;

    fn deref(&self) -> &Product {
        self.product
    }
}

/// Mutable access to an attached package
#[derive(Debug)]
pub struct PackageMut<'a> {
    package: &'a mut Package,
}

impl<'a> PackageMut<'a> {
    pub fn set_compressed(&mut self, compressed: bool) -> &mut Self {
        self.package.compressed = Some(compressed);
        self
    }

    pub fn set_installer_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.package.installer_version = Some(version.into());
        self
    }
}

impl Deref for PackageMut<'_> {
    type Target = Package;

    fn deref(&self) -> &Package {
        self.package
    }
}

/// Pre-formatted markup written out verbatim
#[derive(Debug)]
pub struct RawMarkup {
    header: Header,
    markup: String,
}

impl RawMarkup {
    pub fn new(markup: impl Into<String>) -> Self {
        RawMarkup {
            header: Header::new(),
            markup: markup.into(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Tag for RawMarkup {
    const KIND: TagKind = TagKind::RawMarkup;

    fn header(&self) -> &Header {
        &self.header
    }
}
