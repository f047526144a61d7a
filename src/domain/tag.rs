//! Tag model - the closed set of node kinds and how composites hold children
//!
//! Every node kind is listed in [`TagKind`] and has a borrowed view in
//! [`NodeRef`]. Traversals (emission, validation) match on `NodeRef` without a
//! wildcard arm, so adding a kind fails to compile until every traversal
//! handles it.
//!
//! Composites store their typed children and their raw markup fragments in two
//! separate sequences, plus a slot list recording the interleaving so both can
//! be replayed in attachment order.

use super::document::{Document, Package, Product, RawMarkup};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Closed set of node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Document,
    Product,
    Package,
    RawMarkup,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::Document => "document",
            TagKind::Product => "product",
            TagKind::Package => "package",
            TagKind::RawMarkup => "raw",
        };
        f.write_str(name)
    }
}

/// Identity of a node, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        NodeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity and parent back-reference shared by every node.
///
/// The parent is an id, never an owning reference. It is written once when
/// the node is attached.
#[derive(Debug, PartialEq, Eq)]
pub struct Header {
    id: NodeId,
    parent: Option<NodeId>,
}

impl Header {
    pub(crate) fn new() -> Self {
        Header {
            id: NodeId::next(),
            parent: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn adopt(&mut self, parent: NodeId) {
        debug_assert!(self.parent.is_none(), "node attached twice");
        self.parent = Some(parent);
    }
}

/// Common accessors for every node kind
pub trait Tag {
    const KIND: TagKind;

    fn header(&self) -> &Header;

    fn id(&self) -> NodeId {
        self.header().id()
    }

    fn parent(&self) -> Option<NodeId> {
        self.header().parent()
    }
}

/// Borrowed view of any node in a tree
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Document(&'a Document),
    Product(&'a Product),
    Package(&'a Package),
    RawMarkup(&'a RawMarkup),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> TagKind {
        match self {
            NodeRef::Document(_) => Document::KIND,
            NodeRef::Product(_) => Product::KIND,
            NodeRef::Package(_) => Package::KIND,
            NodeRef::RawMarkup(_) => RawMarkup::KIND,
        }
    }

    pub fn header(&self) -> &'a Header {
        match *self {
            NodeRef::Document(node) => node.header(),
            NodeRef::Product(node) => node.header(),
            NodeRef::Package(node) => node.header(),
            NodeRef::RawMarkup(node) => node.header(),
        }
    }
}

/// Kinds that can be typed children of a composite
pub trait ChildTag {
    fn as_node(&self) -> NodeRef<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Child(usize),
    Raw(usize),
}

/// Content of a composite node: typed children, raw fragments, and their
/// interleaving.
#[derive(Debug)]
pub struct Body<C> {
    children: Vec<C>,
    raw: Vec<RawMarkup>,
    order: Vec<Slot>,
}

impl<C> Default for Body<C> {
    fn default() -> Self {
        Body {
            children: Vec::new(),
            raw: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl<C> Body<C> {
    pub(crate) fn push_child(&mut self, child: C) -> &mut C {
        let index = self.children.len();
        self.children.push(child);
        self.order.push(Slot::Child(index));
        &mut self.children[index]
    }

    pub(crate) fn push_raw(&mut self, raw: RawMarkup) -> &mut RawMarkup {
        let index = self.raw.len();
        self.raw.push(raw);
        self.order.push(Slot::Raw(index));
        &mut self.raw[index]
    }

    /// Typed children in insertion order
    pub fn children(&self) -> &[C] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    /// Raw markup fragments in insertion order
    pub fn raw(&self) -> &[RawMarkup] {
        &self.raw
    }
}

impl<C: ChildTag> Body<C> {
    /// Children and raw fragments interleaved in attachment order
    pub fn entries(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.order.iter().map(move |slot| match *slot {
            Slot::Child(i) => self.children[i].as_node(),
            Slot::Raw(i) => NodeRef::RawMarkup(&self.raw[i]),
        })
    }
}
