use formorder_core_types::FieldKey;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor - one configurable field of a form field's edit form
///
/// A descriptor is identified by its `key`. Everything else (the component
/// `type`, the `label`, nested `components`, `input`, `tooltip` and so on) is
/// an opaque JSON payload flattened next to the key. The payload is kept
/// exactly as read, including nulls, empty arrays and children without keys,
/// so form-builder JSON round-trips without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Unique key within the owning collection
    pub key: FieldKey,

    /// Opaque attributes
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

const ATTR_TYPE: &str = "type";
const ATTR_LABEL: &str = "label";
const ATTR_COMPONENTS: &str = "components";

impl Descriptor {
    /// Create a descriptor with only a key
    pub fn new(key: impl Into<FieldKey>) -> Self {
        Self {
            key: key.into(),
            attributes: Map::new(),
        }
    }

    /// Set the component type
    pub fn with_type(self, component_type: impl Into<String>) -> Self {
        self.with_attr(ATTR_TYPE, Value::String(component_type.into()))
    }

    /// Set the label
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.with_attr(ATTR_LABEL, Value::String(label.into()))
    }

    /// Append a nested child descriptor to `components`
    pub fn with_component(mut self, child: Descriptor) -> Self {
        let slot = self
            .attributes
            .entry(ATTR_COMPONENTS)
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot {
            Value::Array(children) => children.push(child.into_value()),
            other => *other = Value::Array(vec![child.into_value()]),
        }
        self
    }

    /// Set an opaque attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Get an opaque attribute by name
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Component type, when `type` is a string
    pub fn component_type(&self) -> Option<&str> {
        self.attr(ATTR_TYPE).and_then(Value::as_str)
    }

    /// Label, when `label` is a string
    pub fn label(&self) -> Option<&str> {
        self.attr(ATTR_LABEL).and_then(Value::as_str)
    }

    /// Raw nested children; empty when `components` is absent or not an array
    pub fn components(&self) -> &[Value] {
        self.attr(ATTR_COMPONENTS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find a descriptor by key, checking this descriptor and then its
    /// children depth-first
    ///
    /// Children without a string `key` are searched through but never
    /// returned.
    pub fn find(&self, key: &str) -> Option<Descriptor> {
        if self.key.as_str() == key {
            return Some(self.clone());
        }
        find_in_values(self.components(), key)
    }

    /// The descriptor as a JSON object, key first
    pub fn into_value(self) -> Value {
        let mut object = Map::with_capacity(self.attributes.len() + 1);
        object.insert("key".to_string(), Value::String(self.key.into_string()));
        object.extend(self.attributes);
        Value::Object(object)
    }
}

fn find_in_values(children: &[Value], key: &str) -> Option<Descriptor> {
    children.iter().find_map(|child| {
        let object = child.as_object()?;
        let mut attributes = object.clone();
        match attributes.remove("key") {
            Some(Value::String(child_key)) => Descriptor {
                key: FieldKey::new(child_key),
                attributes,
            }
            .find(key),
            _ => object
                .get(ATTR_COMPONENTS)
                .and_then(Value::as_array)
                .and_then(|nested| find_in_values(nested, key)),
        }
    })
}

/// Find a descriptor by key anywhere in a collection, depth-first in
/// collection order
pub fn find_in(descriptors: &[Descriptor], key: &str) -> Option<Descriptor> {
    descriptors.iter().find_map(|d| d.find(key))
}

/// Top-level keys of a collection, in collection order
pub fn keys(descriptors: &[Descriptor]) -> Vec<&str> {
    descriptors.iter().map(|d| d.key.as_str()).collect()
}
