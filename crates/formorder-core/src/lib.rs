//! formorder core - field ordering engine for form-builder edit forms
//!
//! This crate provides:
//! - Descriptor and canonical order models
//! - The ordering engine that rearranges descriptors by canonical key order
//! - Placement policies for descriptors the order does not rank
//! - Built-in descriptor sets and field-type layouts
//! - An immutable layout registry for consumers
//! - YAML layout files and JSON descriptor loading
//! - Structured error and logging facilities

pub mod catalog;
pub mod errors;
pub mod layout;
pub mod layout_file;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;

// Re-exported for the logging macros
pub use formorder_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, FormOrderError, Result};
pub use formorder_core_types::FieldKey;
pub use layout::{FieldLayout, LayoutRegistry};
pub use model::{CanonicalOrder, Descriptor};
pub use ops::{rearrange, rearrange_components, rearrange_with};
pub use policy::Placement;
