use formorder_core_types::FieldKey;
use std::collections::HashMap;

use crate::errors::{FormOrderError, Result};

/// CanonicalOrder - the desired display order of keys for one field type
///
/// Keys are opaque: any string, including the empty string, is a key.
/// The order need not enumerate every key of the descriptor set it is applied
/// to. Keys are unique; construction rejects a repeated key instead of
/// guessing which position was meant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalOrder {
    keys: Vec<FieldKey>,
    ranks: HashMap<FieldKey, usize>,
}

impl CanonicalOrder {
    /// Build a canonical order from keys in display order
    ///
    /// # Errors
    /// Returns `DuplicateOrderKey` naming the first key that appears twice.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<FieldKey>,
    {
        let keys: Vec<FieldKey> = keys.into_iter().map(Into::into).collect();
        let mut ranks = HashMap::with_capacity(keys.len());

        for (rank, key) in keys.iter().enumerate() {
            if ranks.insert(key.clone(), rank).is_some() {
                return Err(FormOrderError::DuplicateOrderKey { key: key.clone() });
            }
        }

        Ok(Self { keys, ranks })
    }

    /// An order that ranks nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Position of `key` in the order, if listed
    pub fn rank(&self, key: &str) -> Option<usize> {
        self.ranks.get(key).copied()
    }

    /// Check whether `key` is listed
    pub fn contains(&self, key: &str) -> bool {
        self.ranks.contains_key(key)
    }

    /// Keys in display order
    pub fn keys(&self) -> &[FieldKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
