//! Path and ancestry resolution over the catalog.
//!
//! Everything here is derived on demand — no precomputed path or
//! descendant caches. At the current data volume (hundreds of nodes,
//! depth ≤ 6) linear scans are in contract.
//!
//! Known tolerance: a `parent_id` pointing at a unit missing from the
//! catalog silently stops the ascent, so `path_to` returns a shorter
//! path instead of failing. Integrity validation reports such data at
//! load time; runtime behavior stays fail-soft.

use std::collections::BTreeSet;

use crate::catalog::UnitCatalog;
use crate::domain::{Unit, FULL_NAME_SEPARATOR};

/// Root-to-node path for `unit_id`. Empty for an unknown id.
///
/// Ascends via `parent_id` and stops at a root, at an unresolved
/// parent, or when a malformed parent cycle would revisit a node.
pub fn path_to<'c>(catalog: &'c UnitCatalog, unit_id: &str) -> Vec<&'c Unit> {
    let mut path: Vec<&Unit> = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    let mut current = catalog.get(unit_id);
    while let Some(unit) = current {
        if !seen.insert(unit.id.as_str()) {
            // Parent cycle in malformed data. Stop ascending.
            tracing::warn!(unit_id = %unit.id, "parent cycle while resolving path");
            break;
        }
        path.push(unit);
        current = unit.parent_id.as_deref().and_then(|pid| catalog.get(pid));
    }

    path.reverse();
    path
}

/// Path names joined with `" > "`, e.g. `"A > B > C"`.
/// Empty string for an unknown id.
pub fn full_name(catalog: &UnitCatalog, unit_id: &str) -> String {
    path_to(catalog, unit_id)
        .iter()
        .map(|u| u.name.as_str())
        .collect::<Vec<_>>()
        .join(FULL_NAME_SEPARATOR)
}

/// All transitive children of `unit_id`, excluding the unit itself.
///
/// Explicit work-list traversal, not language recursion, so depth is
/// bounded by memory rather than the call stack. Order is traversal
/// order; callers must treat the result as a set.
pub fn descendants<'c>(catalog: &'c UnitCatalog, unit_id: &str) -> Vec<&'c Unit> {
    let mut result: Vec<&Unit> = Vec::new();
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    visited.insert(unit_id);

    let mut stack: Vec<&str> = vec![unit_id];
    while let Some(parent) = stack.pop() {
        for child in catalog.children(Some(parent)) {
            if visited.insert(child.id.as_str()) {
                result.push(child);
                stack.push(child.id.as_str());
            }
        }
    }

    result
}

/// Whether `unit_id` has at least one direct child. Decides if a
/// selector offers a further drill-down level.
pub fn has_children(catalog: &UnitCatalog, unit_id: &str) -> bool {
    !catalog.children(Some(unit_id)).is_empty()
}
