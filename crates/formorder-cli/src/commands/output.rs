//! Shared output handling for commands that print descriptor lists

use clap::ValueEnum;
use formorder_core::Descriptor;
use std::path::Path;

/// How a descriptor list is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One top-level key per line
    Keys,
    /// Pretty-printed JSON array of descriptors
    Json,
}

/// Render descriptors in the requested format
pub fn render(
    descriptors: &[Descriptor],
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Keys => Ok(descriptors
            .iter()
            .map(|d| format!("{}\n", d.key))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(descriptors)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write rendered output to a file, or stdout when no path is given
pub fn emit(rendered: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        std::fs::write(output_path, rendered)?;
        eprintln!("✓ Written to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }
    Ok(())
}
