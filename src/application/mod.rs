//! Application layer - Use cases and orchestration

pub mod build;
pub mod check;
pub mod init;

pub use build::{document_from_settings, BuildOptions, BuildService};
pub use check::check;
pub use init::init;
