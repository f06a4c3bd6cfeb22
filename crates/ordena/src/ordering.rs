//! Record-level ordering
//!
//! Multi-key comparator over import records: group rank first, depth
//! tie-breaks inside the two relative groups, then syntactic kind priority,
//! then identifier order with the raw specifier as the final key.

use std::cmp::Ordering;

use crate::binding_order;
use crate::classifier::{self, SourceGroup};
use crate::types::{ImportKind, ImportRecord};

/// Compare two records for their position within one import block
pub fn compare_records(a: &ImportRecord, b: &ImportRecord) -> Ordering {
    let group_a = classifier::classify(&a.source);
    let group_b = classifier::classify(&b.source);

    group_a
        .rank()
        .cmp(&group_b.rank())
        .then_with(|| depth_order(&group_a, &group_b))
        .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
        .then_with(|| binding_order::compare_names(lead_name(a), lead_name(b)))
        .then_with(|| binding_order::compare_sources(&a.source, &b.source))
}

/// The identifier key for one record: the binding that will lead the
/// statement after regeneration
///
/// Named imports key on their minimal bound name, the one the generator's
/// re-sort puts first, rather than the first name as currently written.
/// Keying on the written order would let a single reorder pass change its
/// own sort key and take two passes to stabilize. Side-effect imports (and
/// degenerate empty lists) fall back to the specifier.
fn lead_name(record: &ImportRecord) -> &str {
    let candidates = match record.kind {
        ImportKind::Named => record.bindings.as_slice(),
        _ => &record.bindings[..record.bindings.len().min(1)],
    };
    candidates
        .iter()
        .map(|binding| binding.imported.as_str())
        .min_by(|a, b| binding_order::compare_names(a, b))
        .unwrap_or(record.source.as_str())
}

/// Depth tie-break inside the relative groups
///
/// Deeper parent-relative paths come first; current-directory paths go
/// shallowest-first with the bare `./` form ahead of named depth-zero
/// files. Every other pairing is decided by rank alone.
fn depth_order(a: &SourceGroup, b: &SourceGroup) -> Ordering {
    match (a, b) {
        (
            SourceGroup::ParentRelative { depth: depth_a },
            SourceGroup::ParentRelative { depth: depth_b },
        ) => depth_b.cmp(depth_a),
        (
            SourceGroup::CurrentDir {
                depth: depth_a,
                bare: bare_a,
            },
            SourceGroup::CurrentDir {
                depth: depth_b,
                bare: bare_b,
            },
        ) => depth_a.cmp(depth_b).then_with(|| bare_b.cmp(bare_a)),
        _ => Ordering::Equal,
    }
}
