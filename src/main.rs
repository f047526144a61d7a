use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wixdom::application::{self, BuildOptions, BuildService};
use wixdom::cli::{format_defect_list, Cli, Commands};
use wixdom::domain::Identifier;
use wixdom::error::WixError;
use wixdom::infrastructure::{OutputTarget, Settings};

fn main() {
    // Logs go to stderr so `build -o -` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WixError> {
    match cli.command {
        Commands::Init { path, force } => {
            let written = application::init(&path, force)?;
            println!("Initialized wixdom settings at {}", written.display());
            Ok(())
        }
        Commands::Check { settings } => {
            let path = resolve_settings(settings)?;
            let defects = application::check(&path)?;
            println!("{}", format_defect_list(&defects).trim_end());
            if defects.is_empty() {
                Ok(())
            } else {
                // The list is already on stdout
                Err(WixError::DefectsFound(defects.len()))
            }
        }
        Commands::Build {
            settings,
            output,
            no_validate,
        } => {
            let path = resolve_settings(settings)?;
            let service = BuildService::new(path);
            let target = service.execute(BuildOptions {
                output,
                validate: !no_validate,
            })?;
            if let OutputTarget::File(file) = target {
                println!("Wrote {}", file.display());
            }
            Ok(())
        }
        Commands::Guid => {
            println!("{}", Identifier::new().braced());
            Ok(())
        }
    }
}

fn resolve_settings(explicit: Option<PathBuf>) -> Result<PathBuf, WixError> {
    match explicit {
        Some(path) => Ok(path),
        None => Settings::discover(),
    }
}
