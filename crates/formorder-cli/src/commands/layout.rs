//! Layout command
//!
//! Usage: formorder layout list
//!        formorder layout show <FIELD_TYPE> [--format keys|json]

use clap::{Args, Subcommand};
use formorder_core::{ExError, LayoutRegistry};

use super::output::{emit, render, OutputFormat};

#[derive(Debug, Args)]
pub struct LayoutArgs {
    #[command(subcommand)]
    pub command: LayoutCommand,
}

#[derive(Debug, Subcommand)]
pub enum LayoutCommand {
    /// List built-in field types
    List,
    /// Print the ordered settings of a built-in field type
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Field type name (see `formorder layout list`)
    pub field_type: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Keys)]
    pub format: OutputFormat,
}

/// Execute layout command
pub fn execute(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = LayoutRegistry::builtin().map_err(ExError::from)?;

    match args.command {
        LayoutCommand::List => execute_list(&registry),
        LayoutCommand::Show(show_args) => execute_show(&registry, show_args),
    }
}

fn execute_list(registry: &LayoutRegistry) -> Result<(), Box<dyn std::error::Error>> {
    for field_type in registry.field_types() {
        println!("{}", field_type);
    }
    Ok(())
}

fn execute_show(
    registry: &LayoutRegistry,
    args: ShowArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = registry.get(&args.field_type).map_err(ExError::from)?;
    emit(&render(layout.descriptors(), args.format)?, None)
}
