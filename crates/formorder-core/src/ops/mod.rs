pub mod rearrange;

pub use rearrange::{rearrange, rearrange_components, rearrange_with, validate_unique_keys};
