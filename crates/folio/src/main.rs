//! Folio CLI - blog renderer.
//!
//! Provides commands for:
//! - `render`: Render a local markdown file to HTML
//! - `logs`: List posts from the blog manifest
//! - `read`: Render a post from the content directory
//! - `grep`: Search posts by keyword

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GlobalArgs, GrepArgs, ReadArgs, RenderArgs};
use output::Output;

/// Folio - markdown blog renderer.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a markdown file to HTML on stdout.
    Render(RenderArgs),
    /// List all posts in the manifest.
    Logs,
    /// Render a post from the manifest by id.
    Read(ReadArgs),
    /// Search posts by keyword.
    Grep(GrepArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&cli.global),
        Commands::Logs => commands::logs::execute(&cli.global),
        Commands::Read(args) => args.execute(&cli.global),
        Commands::Grep(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
