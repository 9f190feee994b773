//! Layout file format v0
//!
//! ```yaml
//! schema_version: 0
//! field_type: simpleemailadvanced
//! placement: append
//! order:
//!   - validate.required
//!   - kickbox
//! base: builtin
//! ```

use formorder_core_types::FieldKey;
use serde::{Deserialize, Serialize};

use crate::catalog::common;
use crate::errors::{FormOrderError, Result};
use crate::layout::FieldLayout;
use crate::model::{CanonicalOrder, Descriptor};
use crate::policy::Placement;

/// Name of the shared advanced validation base set
pub const BUILTIN_BASE: &str = "builtin";

/// Top-level layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFileV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Field type the layout is registered under
    pub field_type: String,

    /// Placement of descriptors the order does not list
    #[serde(default)]
    pub placement: Placement,

    /// Canonical key order
    #[serde(default)]
    pub order: Vec<FieldKey>,

    /// Descriptor set to reorder
    #[serde(default)]
    pub base: BaseSource,
}

/// Where a layout's base descriptors come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseSource {
    /// A named built-in set (only `builtin` is defined)
    Named(String),
    /// Descriptors written inline
    Inline(Vec<Descriptor>),
}

impl Default for BaseSource {
    fn default() -> Self {
        BaseSource::Named(BUILTIN_BASE.to_string())
    }
}

impl LayoutFileV0 {
    /// Canonical order declared by the file
    ///
    /// # Errors
    /// Returns `DuplicateOrderKey` if `order` repeats a key.
    pub fn canonical_order(&self) -> Result<CanonicalOrder> {
        CanonicalOrder::new(self.order.iter().cloned())
    }

    /// Resolve the base descriptor set
    ///
    /// # Errors
    /// Returns `InvalidLayout` for an unknown named base.
    pub fn base_descriptors(&self) -> Result<Vec<Descriptor>> {
        match &self.base {
            BaseSource::Named(name) if name == BUILTIN_BASE => Ok(common::advanced_validation()),
            BaseSource::Named(name) => Err(FormOrderError::InvalidLayout {
                reason: format!("Unknown base set '{}'. Expected '{}'", name, BUILTIN_BASE),
            }),
            BaseSource::Inline(descriptors) => Ok(descriptors.clone()),
        }
    }

    /// Compute the layout this file describes
    ///
    /// # Errors
    /// Propagates order, base and rearrange errors.
    pub fn build(&self) -> Result<FieldLayout> {
        FieldLayout::build(
            self.field_type.as_str(),
            &self.canonical_order()?,
            &self.base_descriptors()?,
            self.placement,
        )
    }
}
