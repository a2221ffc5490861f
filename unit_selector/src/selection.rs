//! Per-selector selection state.
//!
//! The path is an ordered root-to-current-node id sequence. Each
//! element's parent (except the first) must equal the previous
//! element; the first element is one of the scope's entry roots.

use unit_directory::catalog::UnitCatalog;

/// Where the selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected.
    Empty,
    /// A valid prefix is chosen and further visible children exist.
    Partial,
    /// The chosen leaf has no visible children, or the selection is
    /// locked.
    Complete,
}

/// What a transition emits to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selected {
    /// The "all units" sentinel — nothing narrowed.
    All,
    /// A single chosen unit id.
    Unit(String),
}

/// Ordered chosen-id sequence for one selector instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub path: Vec<String>,
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The current deepest chosen unit, if any.
    pub fn leaf(&self) -> Option<&str> {
        self.path.last().map(|s| s.as_str())
    }

    /// What the current state emits: the leaf, or the sentinel.
    pub fn emitted(&self) -> Selected {
        match self.leaf() {
            Some(id) => Selected::Unit(id.to_string()),
            None => Selected::All,
        }
    }

    /// Structural check used by tests and debug assertions: every
    /// consecutive pair is a parent/child edge in the catalog, and
    /// the first element is one of the scope's entry roots.
    pub fn is_valid_prefix(&self, catalog: &UnitCatalog, entry_roots: &[String]) -> bool {
        for pair in self.path.windows(2) {
            let Some(child) = catalog.get(&pair[1]) else {
                return false;
            };
            if child.parent_id.as_deref() != Some(pair[0].as_str()) {
                return false;
            }
        }
        match self.path.first() {
            Some(first) => {
                catalog.get(first).is_some() && entry_roots.iter().any(|r| r == first)
            }
            None => true,
        }
    }
}
