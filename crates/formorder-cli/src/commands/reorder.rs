//! Reorder command
//!
//! Usage: formorder reorder --base <JSON_FILE> [--order <KEY>]... [--placement append|anchor]

use clap::{Args, ValueEnum};
use formorder_core::layout_file::parse_descriptors_file;
use formorder_core::ops::rearrange_with;
use formorder_core::{CanonicalOrder, ExError, Placement};
use std::path::PathBuf;

use super::output::{emit, render, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlacementArg {
    /// Unlisted settings go after the listed ones
    Append,
    /// Unlisted settings keep their original position
    Anchor,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Append => Placement::Append,
            PlacementArg::Anchor => Placement::Anchor,
        }
    }
}

#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// JSON file holding an array of descriptors
    #[arg(short, long)]
    pub base: PathBuf,

    /// Canonical key order, one key per flag (keys are taken verbatim)
    #[arg(long)]
    pub order: Vec<String>,

    /// Placement of settings not listed in the order
    #[arg(short, long, value_enum, default_value_t = PlacementArg::Append)]
    pub placement: PlacementArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute reorder command
pub fn execute(args: ReorderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let base = parse_descriptors_file(&args.base).map_err(ExError::from)?;
    let order = CanonicalOrder::new(args.order).map_err(ExError::from)?;
    let ordered = rearrange_with(&order, &base, args.placement.into()).map_err(ExError::from)?;

    emit(&render(&ordered, args.format)?, args.output.as_deref())
}
