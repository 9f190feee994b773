//! Field key type
//!
//! A `FieldKey` names one configurable setting of a form field, for example
//! `validate.required` or `kickbox`. Keys are opaque: no structure is implied
//! by dots or dashes inside them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Opaque identifier of a field descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    /// Create a key from any string-like value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets HashMap<FieldKey, _> be queried with &str.
impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_field_key_display() {
        let key = FieldKey::new("validate.required");
        assert_eq!(key.to_string(), "validate.required");
        assert_eq!(key.as_str(), "validate.required");
    }

    #[test]
    fn test_field_key_serializes_as_plain_string() {
        let key = FieldKey::from("kickbox");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"kickbox\"");

        let back: FieldKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_field_key_map_lookup_by_str() {
        let mut ranks: HashMap<FieldKey, usize> = HashMap::new();
        ranks.insert(FieldKey::from("errors"), 3);
        assert_eq!(ranks.get("errors"), Some(&3));
        assert_eq!(ranks.get("unique"), None);
    }
}
