//! Ordering engine
//!
//! Rearranges a descriptor collection to follow a canonical key order. The
//! result is always a permutation of the input: descriptors are cloned into
//! their new positions, never added, dropped or modified.

use std::collections::HashSet;
use std::time::Instant;

use crate::errors::{FormOrderError, Result};
use crate::model::{CanonicalOrder, Descriptor};
use crate::policy::Placement;
use crate::{log_op_end, log_op_error, log_op_start};

/// Check that no two top-level descriptors share a key
///
/// # Errors
/// Returns `DuplicateBaseKey` naming the first repeated key.
pub fn validate_unique_keys(base: &[Descriptor]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(base.len());
    for descriptor in base {
        if !seen.insert(descriptor.key.as_str()) {
            return Err(FormOrderError::DuplicateBaseKey {
                key: descriptor.key.clone(),
            });
        }
    }
    Ok(())
}

/// Rearrange `base` to follow `order`, appending unranked descriptors
///
/// # Errors
/// Returns `DuplicateBaseKey` if `base` repeats a key.
pub fn rearrange(order: &CanonicalOrder, base: &[Descriptor]) -> Result<Vec<Descriptor>> {
    rearrange_with(order, base, Placement::Append)
}

/// Rearrange `base` to follow `order` under the given placement policy
///
/// Descriptors whose key appears in `order` are emitted in rank order.
/// Descriptors whose key does not appear are placed per `placement`.
/// Keys listed in `order` but absent from `base` are skipped.
///
/// # Errors
/// Returns `DuplicateBaseKey` if `base` repeats a key.
pub fn rearrange_with(
    order: &CanonicalOrder,
    base: &[Descriptor],
    placement: Placement,
) -> Result<Vec<Descriptor>> {
    let start = Instant::now();
    log_op_start!(
        "rearrange",
        base_len = base.len(),
        order_len = order.len(),
        placement = placement.as_str()
    );

    match plan(order, base, placement) {
        Ok(plan) => {
            log_op_end!(
                "rearrange",
                duration_ms = start.elapsed().as_millis() as u64,
                ranked_len = plan.ranked,
                unranked_len = plan.unranked,
                skipped_len = order.len() - plan.ranked
            );
            Ok(plan.descriptors.into_iter().cloned().collect())
        }
        Err(err) => {
            log_op_error!(
                "rearrange",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Build a canonical order from raw keys and rearrange `base` with it
///
/// This is the one-call form a field-type module uses:
///
/// ```
/// use formorder_core::model::Descriptor;
/// use formorder_core::ops::rearrange_components;
///
/// let base = vec![Descriptor::new("a"), Descriptor::new("b"), Descriptor::new("c")];
/// let ordered = rearrange_components(&["b", "a"], &base).unwrap();
/// let keys: Vec<_> = ordered.iter().map(|d| d.key.as_str()).collect();
/// assert_eq!(keys, vec!["b", "a", "c"]);
/// ```
///
/// # Errors
/// Returns `DuplicateOrderKey` or `DuplicateBaseKey` on repeated keys.
pub fn rearrange_components(keys: &[&str], base: &[Descriptor]) -> Result<Vec<Descriptor>> {
    let order = CanonicalOrder::new(keys.iter().copied())?;
    rearrange(&order, base)
}

struct Plan<'a> {
    descriptors: Vec<&'a Descriptor>,
    ranked: usize,
    unranked: usize,
}

fn plan<'a>(
    order: &CanonicalOrder,
    base: &'a [Descriptor],
    placement: Placement,
) -> Result<Plan<'a>> {
    validate_unique_keys(base)?;

    // Bucket by rank: ranks are unique, so each slot holds at most one entry.
    let mut by_rank: Vec<Option<&Descriptor>> = vec![None; order.len()];
    let mut anchors: Vec<Option<&Descriptor>> = Vec::with_capacity(base.len());
    let mut ranked = 0;

    for descriptor in base {
        match order.rank(descriptor.key.as_str()) {
            Some(rank) => {
                by_rank[rank] = Some(descriptor);
                anchors.push(None);
                ranked += 1;
            }
            None => anchors.push(Some(descriptor)),
        }
    }

    let unranked = base.len() - ranked;
    let mut ranked_iter = by_rank.into_iter().flatten();

    let descriptors = match placement {
        Placement::Append => ranked_iter
            .by_ref()
            .chain(anchors.into_iter().flatten())
            .collect(),
        Placement::Anchor => {
            let mut out = Vec::with_capacity(base.len());
            for slot in anchors {
                match slot {
                    Some(anchored) => out.push(anchored),
                    None => {
                        let next = ranked_iter.next().ok_or_else(|| FormOrderError::Internal {
                            message: "ranked descriptor count disagrees with free slots"
                                .to_string(),
                        })?;
                        out.push(next);
                    }
                }
            }
            out
        }
    };

    Ok(Plan {
        descriptors,
        ranked,
        unranked,
    })
}
