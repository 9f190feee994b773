//! formorder CLI
//!
//! Command-line interface for inspecting and computing field layouts

use clap::{Parser, Subcommand};
use formorder_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "formorder")]
#[command(about = "formorder - Canonical ordering of form field settings", long_about = None)]
struct Cli {
    /// Log operations to stderr in human-readable form
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log operations to stderr as JSON
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Built-in field type layouts
    Layout(commands::layout::LayoutArgs),
    /// Validate and build a YAML layout file
    Check(commands::check::CheckArgs),
    /// Reorder a JSON descriptor set by a key order
    Reorder(commands::reorder::ReorderArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    } else if cli.log_json {
        init(Profile::Production);
    }

    let result = match cli.command {
        Commands::Layout(args) => commands::layout::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Reorder(args) => commands::reorder::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
