//! Built-in descriptor sets and field-type layouts
//!
//! `common` holds the shared base set; each field-type module declares its
//! canonical order and builds its layout from that base.

pub mod common;
pub mod simple_email_advanced;

use crate::errors::Result;
use crate::layout::FieldLayout;

/// Every built-in field-type layout
///
/// # Errors
/// Propagates the first layout that fails to build.
pub fn builtin_layouts() -> Result<Vec<FieldLayout>> {
    Ok(vec![simple_email_advanced::validation_layout()?])
}
