//! The unit catalog — read-only lookups over the static forest.
//!
//! Loaded once at process start, never mutated afterwards. Screens
//! that edit units operate on their own copies, not on this store.
//!
//! `children` preserves the insertion order of the underlying data;
//! it is deliberately NOT sorted by name or echelon.

use std::collections::BTreeMap;

use crate::domain::Unit;

/// Immutable collection of unit records forming a forest.
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    // id → position in `units`. First occurrence wins; duplicate ids
    // are surfaced by integrity validation, not honored here.
    index: BTreeMap<String, usize>,
}

impl UnitCatalog {
    /// Build a catalog from an ordered unit list.
    pub fn from_units(units: Vec<Unit>) -> Self {
        let mut index = BTreeMap::new();
        for (pos, unit) in units.iter().enumerate() {
            index.entry(unit.id.clone()).or_insert(pos);
        }
        Self { units, index }
    }

    /// Parse a catalog from a JSON array of unit records.
    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        let units: Vec<Unit> = serde_json::from_str(data)?;
        Ok(Self::from_units(units))
    }

    /// Exact lookup by identifier. `None` for unknown ids — callers
    /// check for emptiness rather than catch errors.
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.index.get(id).map(|&pos| &self.units[pos])
    }

    /// Direct children of `parent_id`, or forest roots when `None`.
    /// Insertion order of the underlying data.
    pub fn children(&self, parent_id: Option<&str>) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|u| u.parent_id.as_deref() == parent_id)
            .collect()
    }

    /// Forest roots: exactly the units with no parent.
    pub fn roots(&self) -> Vec<&Unit> {
        self.children(None)
    }

    /// All units in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
