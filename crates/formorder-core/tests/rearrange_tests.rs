#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{descriptors, keys_of};
use formorder_core::errors::{ExError, ExErrorKind, FormOrderError};
use formorder_core::ops::{rearrange, rearrange_components, rearrange_with};
use formorder_core::{CanonicalOrder, Descriptor, FieldKey, Placement};
use serde_json::json;

#[test]
fn test_ranked_keys_move_ahead_of_unranked() {
    let order = CanonicalOrder::new(["b", "a"]).unwrap();
    let out = rearrange(&order, &descriptors(&["a", "b", "c"])).unwrap();
    assert_eq!(keys_of(&out), vec!["b", "a", "c"]);
}

#[test]
fn test_order_key_missing_from_base_is_skipped() {
    let order = CanonicalOrder::new(["x"]).unwrap();
    let out = rearrange(&order, &descriptors(&["a", "b"])).unwrap();
    assert_eq!(keys_of(&out), vec!["a", "b"]);
}

#[test]
fn test_empty_order_passes_base_through() {
    let base = descriptors(&["c", "a", "b"]);
    let order = CanonicalOrder::empty();

    assert_eq!(rearrange_with(&order, &base, Placement::Append).unwrap(), base);
    assert_eq!(rearrange_with(&order, &base, Placement::Anchor).unwrap(), base);
}

#[test]
fn test_unranked_keep_relative_order_when_appended() {
    let order = CanonicalOrder::new(["d", "b"]).unwrap();
    let out = rearrange(&order, &descriptors(&["e", "b", "a", "d", "c"])).unwrap();
    assert_eq!(keys_of(&out), vec!["d", "b", "e", "a", "c"]);
}

#[test]
fn test_anchor_keeps_unranked_positions() {
    let order = CanonicalOrder::new(["d", "b"]).unwrap();
    let out =
        rearrange_with(&order, &descriptors(&["e", "b", "a", "d", "c"]), Placement::Anchor)
            .unwrap();
    // e, a, c stay at indices 0, 2, 4; d and b fill 1 and 3 in rank order
    assert_eq!(keys_of(&out), vec!["e", "d", "a", "b", "c"]);
}

#[test]
fn test_rearrange_components_one_call_form() {
    let out = rearrange_components(&["c", "x", "a"], &descriptors(&["a", "b", "c"])).unwrap();
    assert_eq!(keys_of(&out), vec!["c", "a", "b"]);
}

#[test]
fn test_duplicate_base_key_rejected() {
    let order = CanonicalOrder::new(["a"]).unwrap();
    let err = rearrange(&order, &descriptors(&["a", "b", "a"])).unwrap_err();
    assert_eq!(
        err,
        FormOrderError::DuplicateBaseKey {
            key: FieldKey::from("a")
        }
    );

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex.key(), Some("a"));
}

#[test]
fn test_duplicate_base_key_rejected_even_when_unranked() {
    let err = rearrange(&CanonicalOrder::empty(), &descriptors(&["z", "z"])).unwrap_err();
    assert!(matches!(err, FormOrderError::DuplicateBaseKey { .. }));
}

#[test]
fn test_duplicate_order_key_rejected() {
    let err = rearrange_components(&["a", "b", "b"], &descriptors(&["a", "b"])).unwrap_err();
    assert_eq!(
        err,
        FormOrderError::DuplicateOrderKey {
            key: FieldKey::from("b")
        }
    );
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_descriptor_payload_untouched() {
    let base = vec![
        Descriptor::new("a")
            .with_type("checkbox")
            .with_label("A")
            .with_attr("input", json!(true)),
        Descriptor::new("panel")
            .with_type("panel")
            .with_component(Descriptor::new("panel.child").with_attr("weight", json!(5))),
    ];
    let order = CanonicalOrder::new(["panel", "a"]).unwrap();

    let out = rearrange(&order, &base).unwrap();

    assert_eq!(out[0], base[1]);
    assert_eq!(out[1], base[0]);
    assert_eq!(
        out[0].find("panel.child").and_then(|d| d.attr("weight").cloned()),
        Some(json!(5))
    );
}

#[test]
fn test_input_is_not_modified() {
    let base = descriptors(&["a", "b", "c"]);
    let before = base.clone();
    let order = CanonicalOrder::new(["c", "b", "a"]).unwrap();

    let _ = rearrange(&order, &base).unwrap();

    assert_eq!(base, before);
}

#[test]
fn test_reapplying_is_stable() {
    let order = CanonicalOrder::new(["c", "q", "a"]).unwrap();
    let base = descriptors(&["a", "b", "c", "d"]);

    for placement in [Placement::Append, Placement::Anchor] {
        let once = rearrange_with(&order, &base, placement).unwrap();
        let twice = rearrange_with(&order, &once, placement).unwrap();
        assert_eq!(once, twice, "placement {} not idempotent", placement);
    }
}
