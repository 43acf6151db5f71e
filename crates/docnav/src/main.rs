//! docnav CLI - documentation navigation toolkit.
//!
//! Provides commands for:
//! - `validate`: Check every project's sidebar against its documents
//! - `build`: Validate, then write the site manifest
//! - `pages`: Print a project's reading order

mod commands;
mod error;
mod output;
mod project;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, PagesArgs, ValidateArgs};
use output::Output;

/// docnav - documentation navigation toolkit.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every project's sidebar.
    Validate(ValidateArgs),
    /// Validate and write the site manifest.
    Build(BuildArgs),
    /// Print the page order of one project.
    Pages(PagesArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Validate(args) => args.verbose,
            Self::Build(args) => args.verbose,
            Self::Pages(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Build(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
