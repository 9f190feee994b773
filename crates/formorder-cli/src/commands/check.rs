//! Check command
//!
//! Usage: formorder check <LAYOUT_FILE> [--format keys|json] [--output <FILE>]

use clap::Args;
use formorder_core::layout_file::parse_layout_file;
use formorder_core::ExError;
use std::path::PathBuf;

use super::output::{emit, render, OutputFormat};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to a YAML layout file
    pub layout_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Keys)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file = parse_layout_file(&args.layout_file).map_err(ExError::from)?;
    let layout = file.build().map_err(ExError::from)?;

    emit(
        &render(layout.descriptors(), args.format)?,
        args.output.as_deref(),
    )
}
