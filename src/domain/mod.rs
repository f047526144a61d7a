//! Domain layer - document model, validation and emission

pub mod document;
pub mod emitter;
pub mod identifier;
pub mod tag;
pub mod validator;

pub use document::{Document, Package, Product, RawMarkup};
pub use emitter::{emit, emit_to_string};
pub use identifier::Identifier;
pub use tag::{NodeId, NodeRef, Tag, TagKind};
pub use validator::{validate, Defect};
