//! Markup emission
//!
//! Renders a document to any [`Write`] sink in one pre-order pass. Attribute
//! values and raw fragments are written as stored; nothing is escaped.

use super::document::{Document, Package, Product, RawMarkup};
use super::tag::NodeRef;
use std::io::{self, Write};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
pub const WIX_NAMESPACE: &str = "http://schemas.microsoft.com/wix/2006/wi";

/// Write `doc` to `sink` as a complete markup document.
///
/// The first write error aborts the traversal and is returned as is.
///
/// # Examples
///
/// ```
/// use wixdom::domain::{emit, Document, Package, Product, RawMarkup};
///
/// let mut doc = Document::new();
/// let mut product = doc.attach_product(Product::new());
/// product.attach_package(Package::new());
/// product.attach_raw(RawMarkup::new("<test />"));
///
/// let mut out = Vec::new();
/// emit(&doc, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     r#"<?xml version="1.0" encoding="utf-8"?><Wix xmlns="http://schemas.microsoft.com/wix/2006/wi"><product ><package ></package><test /></product ></Wix>"#
/// );
/// ```
pub fn emit<W: Write>(doc: &Document, sink: W) -> io::Result<()> {
    let mut emitter = Emitter { sink };
    emitter.node(doc.as_node())?;
    emitter.sink.flush()
}

/// Render `doc` into a string
pub fn emit_to_string(doc: &Document) -> String {
    let mut out = Vec::new();
    // Writes into a Vec cannot fail
    let _ = emit(doc, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

struct Emitter<W> {
    sink: W,
}

impl<W: Write> Emitter<W> {
    fn node(&mut self, node: NodeRef<'_>) -> io::Result<()> {
        match node {
            NodeRef::Document(doc) => self.document(doc),
            NodeRef::Product(product) => self.product(product),
            NodeRef::Package(package) => self.package(package),
            NodeRef::RawMarkup(raw) => self.raw(raw),
        }
    }

    fn document(&mut self, doc: &Document) -> io::Result<()> {
        self.sink.write_all(XML_DECLARATION.as_bytes())?;
        write!(self.sink, r#"<Wix xmlns="{}">"#, WIX_NAMESPACE)?;
        for child in doc.body().entries() {
            self.node(child)?;
        }
        self.sink.write_all(b"</Wix>")
    }

    fn product(&mut self, product: &Product) -> io::Result<()> {
        self.open_tag("product", &product.attributes())?;
        for child in product.body().entries() {
            self.node(child)?;
        }
        self.sink.write_all(b"</product >")
    }

    fn package(&mut self, package: &Package) -> io::Result<()> {
        self.open_tag("package", &package.attributes())?;
        self.sink.write_all(b"</package>")
    }

    fn raw(&mut self, raw: &RawMarkup) -> io::Result<()> {
        self.sink.write_all(raw.markup().as_bytes())
    }

    fn open_tag(&mut self, name: &str, attrs: &[(&str, String)]) -> io::Result<()> {
        write!(self.sink, "<{}", name)?;
        for (key, value) in attrs {
            write!(self.sink, r#" {}="{}""#, key, value)?;
        }
        self.sink.write_all(b" >")
    }
}
