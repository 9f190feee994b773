#![allow(clippy::unwrap_used, clippy::expect_used)]

use formorder_core::catalog::{common, simple_email_advanced};
use formorder_core::errors::FormOrderError;
use formorder_core::LayoutRegistry;

#[test]
fn test_simple_email_advanced_renders_canonical_order_first() {
    let layout = simple_email_advanced::validation_layout().unwrap();

    let keys = layout.keys();
    let n = simple_email_advanced::CANONICAL_ORDER.len();
    assert_eq!(&keys[..n], simple_email_advanced::CANONICAL_ORDER);
}

#[test]
fn test_simple_email_advanced_appends_shared_extras() {
    let layout = simple_email_advanced::validation_layout().unwrap();

    let keys = layout.keys();
    let n = simple_email_advanced::CANONICAL_ORDER.len();
    assert_eq!(&keys[n..], &["validate.minWords", "validate.maxWords"]);
}

#[test]
fn test_layout_is_permutation_of_common_set() {
    let layout = simple_email_advanced::validation_layout().unwrap();
    let base = common::advanced_validation();

    assert_eq!(layout.len(), base.len());
    for descriptor in &base {
        let placed = layout.iter().find(|d| d.key == descriptor.key).unwrap();
        assert_eq!(placed, descriptor);
    }
}

#[test]
fn test_nested_settings_reachable_from_layout() {
    let layout = simple_email_advanced::validation_layout().unwrap();
    assert!(layout.get("kickbox.enabled").is_none());
    let kickbox = layout.find("kickbox.enabled").unwrap();
    assert_eq!(kickbox.component_type(), Some("checkbox"));
}

#[test]
fn test_builtin_registry_serves_email_layout() {
    let registry = LayoutRegistry::builtin().unwrap();

    assert_eq!(
        registry.field_types().collect::<Vec<_>>(),
        vec![simple_email_advanced::FIELD_TYPE]
    );
    let layout = registry.get(simple_email_advanced::FIELD_TYPE).unwrap();
    assert_eq!(layout.keys()[0], "validate.isUseForCopy");
}

#[test]
fn test_builtin_registry_unknown_type() {
    let registry = LayoutRegistry::builtin().unwrap();
    let err = registry.get("simplephonenumber").unwrap_err();
    assert_eq!(
        err,
        FormOrderError::UnknownFieldType {
            field_type: "simplephonenumber".to_string()
        }
    );
}

#[test]
fn test_registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LayoutRegistry>();
}
