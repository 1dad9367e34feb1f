//! PW CLI - messenger wiki navigation.
//!
//! Provides commands for:
//! - `render`: Render the sidebar navigation for a page
//! - `metrics`: Print highlight geometry of the active group
//! - `tree`: Print the navigation tree
//! - `icon`: Print the decorative network icon

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{IconArgs, MetricsArgs, RenderArgs, TreeArgs};
use output::Output;

/// PW - messenger wiki navigation.
#[derive(Parser)]
#[command(name = "pw", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs on stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sidebar navigation for a page.
    Render(RenderArgs),
    /// Print highlight geometry for the active group.
    Metrics(MetricsArgs),
    /// Print the navigation tree as JSON.
    Tree(TreeArgs),
    /// Print the network icon as SVG.
    Icon(IconArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Metrics(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Icon(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
