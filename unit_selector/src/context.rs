//! Principal context and resolved access scope.
//!
//! The host application's session layer supplies role and home unit
//! as opaque inputs; this crate never reads or writes authentication
//! state itself. Scope is explicit passed-in state with a defined
//! lifecycle — one resolve per selector instance, no ambient storage.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use unit_directory::catalog::UnitCatalog;
use unit_directory::domain::{Role, Unit};
use unit_directory::visibility::{accessible_unit_ids, selectable_units};

/// Who is browsing: role plus the unit they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrincipalContext {
    pub role: Role,
    pub home_unit_id: String,
}

/// The visibility filter resolved against a catalog, held for the
/// lifetime of one selector instance.
#[derive(Debug, Clone)]
pub struct AccessScope {
    /// Every unit id the principal may browse or select.
    pub accessible: BTreeSet<String>,
    /// Ids offered at level 0: forest roots for full access, the home
    /// unit as a synthetic root otherwise. Empty when the home unit is
    /// missing from the catalog (fail closed).
    pub roots: Vec<String>,
    /// Locked single-unit selection; renderers short-circuit to a
    /// read-only display.
    pub is_fixed: bool,
}

impl AccessScope {
    pub fn resolve(catalog: &UnitCatalog, ctx: &PrincipalContext) -> Self {
        let accessible = accessible_unit_ids(catalog, ctx.role, &ctx.home_unit_id);
        let selectable = selectable_units(catalog, ctx.role, &ctx.home_unit_id);
        let roots = selectable
            .roots_to_show
            .iter()
            .map(|u| u.id.clone())
            .filter(|id| accessible.contains(id))
            .collect();
        Self {
            accessible,
            roots,
            is_fixed: selectable.is_fixed_selection,
        }
    }

    pub fn contains(&self, unit_id: &str) -> bool {
        self.accessible.contains(unit_id)
    }

    /// Direct children of `parent_id` restricted to the accessible
    /// set. Drill-down decisions use this, never the raw store.
    pub fn visible_children<'c>(
        &self,
        catalog: &'c UnitCatalog,
        parent_id: &str,
    ) -> Vec<&'c Unit> {
        catalog
            .children(Some(parent_id))
            .into_iter()
            .filter(|u| self.accessible.contains(&u.id))
            .collect()
    }

    pub fn has_visible_children(&self, catalog: &UnitCatalog, unit_id: &str) -> bool {
        !self.visible_children(catalog, unit_id).is_empty()
    }
}
