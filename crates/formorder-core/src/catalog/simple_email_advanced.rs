//! Validation tab layout for the SimpleEmailAdvanced field type

use crate::catalog::common;
use crate::errors::Result;
use crate::layout::FieldLayout;
use crate::model::CanonicalOrder;
use crate::policy::Placement;

/// Field type name the layout is registered under
pub const FIELD_TYPE: &str = "simpleemailadvanced";

/// Display order of the validation settings
pub const CANONICAL_ORDER: &[&str] = &[
    "validate.isUseForCopy",
    "validateOn",
    "validate.required",
    "unique",
    "kickbox",
    "validate.minLength",
    "validate.maxLength",
    "validate.pattern",
    "errorLabel",
    "validate.customMessage",
    "errors",
    "custom-validation-js",
    "json-validation-json",
];

/// Canonical order as a validated value
///
/// # Errors
/// Returns `DuplicateOrderKey` if `CANONICAL_ORDER` repeats a key.
pub fn canonical_order() -> Result<CanonicalOrder> {
    CanonicalOrder::new(CANONICAL_ORDER.iter().copied())
}

/// Shared advanced validation settings, ordered for email fields
///
/// # Errors
/// Fails only if the order or the common base set repeats a key.
pub fn validation_layout() -> Result<FieldLayout> {
    FieldLayout::build(
        FIELD_TYPE,
        &canonical_order()?,
        &common::advanced_validation(),
        Placement::Append,
    )
}
