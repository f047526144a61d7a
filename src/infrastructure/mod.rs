//! Infrastructure layer - settings files and output sinks

pub mod output;
pub mod settings;

pub use output::OutputTarget;
pub use settings::{PackageSettings, ProductSettings, RawSettings, RawTarget, Settings};
