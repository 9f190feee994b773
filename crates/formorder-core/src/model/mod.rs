pub mod canonical_order;
pub mod descriptor;

pub use canonical_order::CanonicalOrder;
pub use descriptor::{find_in, keys, Descriptor};
