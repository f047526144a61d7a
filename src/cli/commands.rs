//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wixdom")]
#[command(about = "Build installer package descriptors from a typed document model", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter wixdom.toml
    Init {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the document described by the settings file
    Check {
        /// Settings file (default: discover wixdom.toml)
        #[arg(short, long, value_name = "FILE")]
        settings: Option<PathBuf>,
    },

    /// Validate and emit the document
    Build {
        /// Settings file (default: discover wixdom.toml)
        #[arg(short, long, value_name = "FILE")]
        settings: Option<PathBuf>,

        /// Output file, or - for stdout (default: product.wxs next to the settings)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit even when validation finds defects
        #[arg(long)]
        no_validate: bool,
    },

    /// Print a fresh identifier
    Guid,
}
