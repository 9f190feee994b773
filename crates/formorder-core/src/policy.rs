//! Placement policy for descriptors the canonical order does not rank
//!
//! The canonical order of a field type rarely lists every key of the shared
//! base set. `Placement` decides where those unranked descriptors land.

use serde::{Deserialize, Serialize};

/// Where unranked descriptors are placed in a rearranged collection
///
/// # Example
/// ```
/// use formorder_core::model::{CanonicalOrder, Descriptor};
/// use formorder_core::ops::rearrange_with;
/// use formorder_core::policy::Placement;
///
/// let order = CanonicalOrder::new(["c", "a"]).unwrap();
/// let base = vec![Descriptor::new("a"), Descriptor::new("b"), Descriptor::new("c")];
///
/// let appended = rearrange_with(&order, &base, Placement::Append).unwrap();
/// let keys: Vec<_> = appended.iter().map(|d| d.key.as_str()).collect();
/// assert_eq!(keys, vec!["c", "a", "b"]);
///
/// let anchored = rearrange_with(&order, &base, Placement::Anchor).unwrap();
/// let keys: Vec<_> = anchored.iter().map(|d| d.key.as_str()).collect();
/// assert_eq!(keys, vec!["c", "b", "a"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Unranked descriptors follow every ranked one, in original relative order
    #[default]
    Append,
    /// Unranked descriptors keep their original index; ranked descriptors
    /// fill the remaining slots in rank order
    Anchor,
}

impl Placement {
    /// Stable lowercase name, as written in layout files
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Append => "append",
            Placement::Anchor => "anchor",
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_append() {
        assert_eq!(Placement::default(), Placement::Append);
    }

    #[test]
    fn test_placement_deserializes_lowercase() {
        let p: Placement = serde_json::from_str("\"anchor\"").unwrap();
        assert_eq!(p, Placement::Anchor);
        assert_eq!(p.to_string(), "anchor");
    }
}
