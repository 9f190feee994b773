use formorder_core::Descriptor;

/// Build a descriptor set of bare descriptors from keys
#[allow(dead_code)]
pub fn descriptors(keys: &[&str]) -> Vec<Descriptor> {
    keys.iter().map(|k| Descriptor::new(*k)).collect()
}

/// Top-level keys of a descriptor slice as owned strings
#[allow(dead_code)]
pub fn keys_of(descriptors: &[Descriptor]) -> Vec<String> {
    descriptors.iter().map(|d| d.key.to_string()).collect()
}
