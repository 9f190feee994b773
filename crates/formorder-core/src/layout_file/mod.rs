//! Layout files
//!
//! YAML documents that declare a field type's canonical order and, optionally,
//! its own base descriptor set. JSON descriptor arrays can be loaded on their
//! own for ad-hoc reordering.

pub mod format_v0;
pub mod parser;

pub use format_v0::{BaseSource, LayoutFileV0, BUILTIN_BASE};
pub use parser::{
    parse_descriptors_file, parse_descriptors_json, parse_layout_file, parse_layout_str,
};
