//! Layout file parser with validation
//!
//! Parses YAML and validates schema version, field type, key uniqueness and
//! the base set reference before anything is rearranged.

use std::fs;
use std::path::Path;

use crate::errors::{FormOrderError, Result};
use crate::layout_file::format_v0::{BaseSource, LayoutFileV0};
use crate::model::Descriptor;
use crate::ops::validate_unique_keys;

/// Parse a layout file from a path
///
/// # Errors
/// Returns `Io` when the file cannot be read, otherwise as `parse_layout_str`.
pub fn parse_layout_file(path: &Path) -> Result<LayoutFileV0> {
    parse_layout_str(&read(path)?)
}

/// Parse a layout from a YAML string
///
/// # Errors
/// Returns `Parse` for malformed YAML and `UnsupportedSchemaVersion`,
/// `InvalidLayout`, `DuplicateOrderKey` or `DuplicateBaseKey` for documents
/// that fail validation.
pub fn parse_layout_str(content: &str) -> Result<LayoutFileV0> {
    let layout: LayoutFileV0 = serde_yaml::from_str(content).map_err(|e| FormOrderError::Parse {
        message: format!("YAML parse error: {}", e),
    })?;

    validate_layout(&layout)?;

    Ok(layout)
}

/// Parse a JSON array of descriptors
///
/// # Errors
/// Returns `Parse` for malformed JSON and `DuplicateBaseKey` for repeated keys.
pub fn parse_descriptors_json(content: &str) -> Result<Vec<Descriptor>> {
    let descriptors: Vec<Descriptor> =
        serde_json::from_str(content).map_err(|e| FormOrderError::Parse {
            message: format!("JSON parse error: {}", e),
        })?;

    validate_unique_keys(&descriptors)?;

    Ok(descriptors)
}

/// Parse a JSON descriptor array from a path
///
/// # Errors
/// Returns `Io` when the file cannot be read, otherwise as
/// `parse_descriptors_json`.
pub fn parse_descriptors_file(path: &Path) -> Result<Vec<Descriptor>> {
    parse_descriptors_json(&read(path)?)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FormOrderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn validate_layout(layout: &LayoutFileV0) -> Result<()> {
    if layout.schema_version != 0 {
        return Err(FormOrderError::UnsupportedSchemaVersion {
            version: layout.schema_version,
        });
    }

    if layout.field_type.trim().is_empty() {
        return Err(FormOrderError::InvalidLayout {
            reason: "field_type cannot be empty".to_string(),
        });
    }

    layout.canonical_order()?;

    match &layout.base {
        BaseSource::Named(_) => {
            layout.base_descriptors()?;
        }
        BaseSource::Inline(descriptors) => validate_unique_keys(descriptors)?,
    }

    Ok(())
}
