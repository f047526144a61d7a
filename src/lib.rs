//! wixdom - typed document model for installer package descriptors
//!
//! Build a [`domain::Document`] through attach operations that only accept
//! legal children, check it with [`domain::validate`], and render it with
//! [`domain::emit`].

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WixError;
