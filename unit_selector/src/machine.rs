//! The selection state machine.
//!
//! One machine serves every visual variant — cascading dropdowns,
//! tree, chips, popover are pure renderings over this state. All
//! transition logic lives here; views never re-derive it.
//!
//! Failure semantics: no transition surfaces an error. An event that
//! cannot apply (out-of-scope id, unresolved sync value) degrades to
//! the nearest valid state and re-emits the current selection.

use unit_directory::catalog::UnitCatalog;
use unit_directory::domain::Unit;
use unit_directory::resolver::path_to;

use crate::context::{AccessScope, PrincipalContext};
use crate::selection::{Selected, SelectionPhase, SelectionState};

// ── Events & transitions ───────────────────────────────────────────

/// Inputs to the machine. Callers construct these from UI gestures or
/// from external `value` changes (programmatic set, search results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Truncate to `level`, then choose `unit_id` there.
    SelectAtLevel { level: usize, unit_id: String },
    /// Truncate at `level`; level 0 clears everything.
    ClearFrom { level: usize },
    /// Recompute the whole sequence from an externally-supplied
    /// value. `None` (or an unresolvable id) means nothing selected.
    SyncValue { value: Option<String> },
}

/// Outcome of one applied event, emitted to the caller immediately —
/// selection is never deferred to a confirm step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub emitted: Selected,
    pub phase: SelectionPhase,
}

// ── The machine ────────────────────────────────────────────────────

/// Selection state machine bound to one catalog and one principal.
///
/// Multiple instances may coexist; each holds only its own path and
/// shares the read-only catalog with no coordination.
pub struct CascadeSelector<'c> {
    catalog: &'c UnitCatalog,
    scope: AccessScope,
    state: SelectionState,
}

impl<'c> CascadeSelector<'c> {
    /// Bind a selector to a catalog and principal. Fixed-access
    /// principals start (and stay) locked on their home unit.
    pub fn new(catalog: &'c UnitCatalog, ctx: &PrincipalContext) -> Self {
        let scope = AccessScope::resolve(catalog, ctx);
        let state = if scope.is_fixed {
            SelectionState {
                path: scope.roots.clone(),
            }
        } else {
            SelectionState::default()
        };
        Self {
            catalog,
            scope,
            state,
        }
    }

    pub fn scope(&self) -> &AccessScope {
        &self.scope
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &'c UnitCatalog {
        self.catalog
    }

    /// The options a dropdown at `level` would offer: entry roots at
    /// level 0, visible children of the previous choice below that.
    pub fn options_at(&self, level: usize) -> Vec<&'c Unit> {
        if level == 0 {
            return self
                .scope
                .roots
                .iter()
                .filter_map(|id| self.catalog.get(id))
                .collect();
        }
        match self.state.path.get(level - 1) {
            Some(parent) => self.scope.visible_children(self.catalog, parent),
            None => Vec::new(),
        }
    }

    /// Apply one event and emit the resulting selection.
    pub fn apply(&mut self, event: SelectorEvent) -> Transition {
        if self.scope.is_fixed {
            // Locked display: every event short-circuits.
            return self.transition();
        }

        match event {
            SelectorEvent::SelectAtLevel { level, unit_id } => {
                self.select_at_level(level, &unit_id)
            }
            SelectorEvent::ClearFrom { level } => {
                self.state.path.truncate(level);
                self.transition()
            }
            SelectorEvent::SyncValue { value } => {
                self.state.path = self.resync_path(value.as_deref());
                self.transition()
            }
        }
    }

    fn select_at_level(&mut self, level: usize, unit_id: &str) -> Transition {
        let level = level.min(self.state.path.len());
        let offered = self.options_at(level);
        if !offered.iter().any(|u| u.id == unit_id) {
            tracing::debug!(level, unit_id, "selection rejected: not an offered option");
            return self.transition();
        }
        self.state.path.truncate(level);
        self.state.path.push(unit_id.to_string());
        self.transition()
    }

    /// Rebuild the sequence from scratch for an external value. The
    /// previous path contributes nothing — resyncs are idempotent and
    /// leave no stale entries behind.
    fn resync_path(&self, value: Option<&str>) -> Vec<String> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Vec::new();
        };

        let full_path: Vec<String> = path_to(self.catalog, value)
            .iter()
            .map(|u| u.id.clone())
            .collect();
        if full_path.is_empty() {
            tracing::debug!(value, "sync value does not resolve; treating as no selection");
            return Vec::new();
        }

        // The principal's view starts at one of the scope roots: for
        // subtree access the home unit is a synthetic root, so trim
        // ancestors above it.
        let Some(start) = full_path
            .iter()
            .position(|id| self.scope.roots.iter().any(|r| r == id))
        else {
            tracing::debug!(value, "sync value outside the accessible scope");
            return Vec::new();
        };
        let trimmed: Vec<String> = full_path[start..].to_vec();

        if trimmed.iter().all(|id| self.scope.contains(id)) {
            trimmed
        } else {
            tracing::debug!(value, "sync path crosses inaccessible units");
            Vec::new()
        }
    }

    fn transition(&self) -> Transition {
        Transition {
            emitted: self.state.emitted(),
            phase: self.phase(),
        }
    }

    /// Phase rule: empty path → Empty; leaf with visible children →
    /// Partial; otherwise Complete.
    pub fn phase(&self) -> SelectionPhase {
        match self.state.leaf() {
            None => SelectionPhase::Empty,
            Some(_) if self.scope.is_fixed => SelectionPhase::Complete,
            Some(leaf) => {
                if self.scope.has_visible_children(self.catalog, leaf) {
                    SelectionPhase::Partial
                } else {
                    SelectionPhase::Complete
                }
            }
        }
    }
}
