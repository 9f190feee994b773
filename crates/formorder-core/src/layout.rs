//! Computed field layouts and the registry that serves them
//!
//! A `FieldLayout` is the ordered descriptor list for one field type,
//! computed once from a canonical order and a base set. A `LayoutRegistry`
//! owns the layouts of every known field type and is handed to consumers
//! explicitly; layouts never change after construction.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog;
use crate::errors::{FormOrderError, Result};
use crate::model::{find_in, CanonicalOrder, Descriptor};
use crate::ops::rearrange_with;
use crate::policy::Placement;
use crate::{log_op_end, log_op_error, log_op_start};

/// Ordered validation descriptors for one field type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    field_type: String,
    descriptors: Arc<[Descriptor]>,
}

impl FieldLayout {
    /// Rearrange `base` by `order` and freeze the result for `field_type`
    ///
    /// # Errors
    /// Returns `DuplicateBaseKey` if `base` repeats a key.
    pub fn build(
        field_type: impl Into<String>,
        order: &CanonicalOrder,
        base: &[Descriptor],
        placement: Placement,
    ) -> Result<Self> {
        let descriptors = rearrange_with(order, base, placement)?;
        Ok(Self {
            field_type: field_type.into(),
            descriptors: descriptors.into(),
        })
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// Descriptors in render order
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }

    /// Top-level keys in render order
    pub fn keys(&self) -> Vec<&str> {
        crate::model::keys(&self.descriptors)
    }

    /// Top-level descriptor with `key`
    pub fn get(&self, key: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.key.as_str() == key)
    }

    /// Find a descriptor by key, including nested children
    pub fn find(&self, key: &str) -> Option<Descriptor> {
        find_in(&self.descriptors, key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldLayout {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Immutable map from field type to its computed layout
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: BTreeMap<String, FieldLayout>,
}

impl LayoutRegistry {
    /// Build a registry from computed layouts
    ///
    /// # Errors
    /// Returns `DuplicateFieldType` if two layouts share a field type.
    pub fn new(layouts: impl IntoIterator<Item = FieldLayout>) -> Result<Self> {
        let start = Instant::now();
        log_op_start!("registry_build");

        let mut map = BTreeMap::new();
        for layout in layouts {
            let field_type = layout.field_type.clone();
            if map.insert(field_type.clone(), layout).is_some() {
                let err = FormOrderError::DuplicateFieldType { field_type };
                log_op_error!(
                    "registry_build",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                return Err(err);
            }
        }

        log_op_end!(
            "registry_build",
            duration_ms = start.elapsed().as_millis() as u64,
            layout_count = map.len()
        );
        Ok(Self { layouts: map })
    }

    /// Registry of every built-in field type layout
    ///
    /// # Errors
    /// Propagates any error from computing a built-in layout; a failure here
    /// is a bug in the catalog.
    pub fn builtin() -> Result<Self> {
        Self::new(catalog::builtin_layouts()?)
    }

    /// Layout for `field_type`
    ///
    /// # Errors
    /// Returns `UnknownFieldType` when nothing is registered under that name.
    pub fn get(&self, field_type: &str) -> Result<&FieldLayout> {
        self.layouts
            .get(field_type)
            .ok_or_else(|| FormOrderError::UnknownFieldType {
                field_type: field_type.to_string(),
            })
    }

    /// Registered field types, sorted
    pub fn field_types(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
