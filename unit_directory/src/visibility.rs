//! Role-scoped visibility over the catalog.
//!
//! Computes which units a principal (role + home unit) may browse or
//! select. Advisory and UI-level only — this is not a security
//! boundary; real authorization lives outside this crate.
//!
//! Fail-closed rule: a home unit missing from the catalog yields an
//! empty accessible set for subtree/fixed policies. Never a silent
//! fallback to full access.

use std::collections::BTreeSet;

use crate::catalog::UnitCatalog;
use crate::domain::{Role, Unit, VisibilityPolicy};
use crate::resolver::descendants;

/// What a selector is allowed to offer for a given principal.
#[derive(Debug, Clone)]
pub struct SelectableUnits {
    /// Top-level entries the selector starts from. Forest roots for
    /// full access, the home unit as a synthetic root otherwise.
    pub roots_to_show: Vec<Unit>,
    /// When true the selection is locked to the single entry in
    /// `roots_to_show`; renderers must short-circuit to a read-only
    /// display instead of a disabled dropdown.
    pub is_fixed_selection: bool,
}

/// The set of unit ids the principal may browse or select.
pub fn accessible_unit_ids(
    catalog: &UnitCatalog,
    role: Role,
    home_unit_id: &str,
) -> BTreeSet<String> {
    match role.policy() {
        VisibilityPolicy::Full => catalog.iter().map(|u| u.id.clone()).collect(),
        VisibilityPolicy::Subtree => match catalog.get(home_unit_id) {
            Some(home) => {
                let mut ids: BTreeSet<String> = descendants(catalog, home_unit_id)
                    .iter()
                    .map(|u| u.id.clone())
                    .collect();
                ids.insert(home.id.clone());
                ids
            }
            None => {
                tracing::warn!(
                    home_unit_id,
                    "home unit not in catalog; subtree access fails closed"
                );
                BTreeSet::new()
            }
        },
        VisibilityPolicy::Fixed => match catalog.get(home_unit_id) {
            Some(home) => BTreeSet::from([home.id.clone()]),
            None => {
                tracing::warn!(
                    home_unit_id,
                    "home unit not in catalog; fixed access fails closed"
                );
                BTreeSet::new()
            }
        },
    }
}

/// Entry points and lock flag for a selector bound to this principal.
pub fn selectable_units(
    catalog: &UnitCatalog,
    role: Role,
    home_unit_id: &str,
) -> SelectableUnits {
    match role.policy() {
        VisibilityPolicy::Full => SelectableUnits {
            roots_to_show: catalog.roots().into_iter().cloned().collect(),
            is_fixed_selection: false,
        },
        VisibilityPolicy::Subtree => SelectableUnits {
            roots_to_show: catalog.get(home_unit_id).cloned().into_iter().collect(),
            is_fixed_selection: false,
        },
        VisibilityPolicy::Fixed => SelectableUnits {
            roots_to_show: catalog.get(home_unit_id).cloned().into_iter().collect(),
            is_fixed_selection: true,
        },
    }
}
