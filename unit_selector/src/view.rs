//! Pure render functions over the selection machine.
//!
//! No selection logic lives here. A view is a projection of the
//! machine's current state; re-rendering after an external value
//! change is idempotent because the machine recomputes from scratch.

use unit_directory::resolver::full_name;

use crate::machine::CascadeSelector;

/// One selectable entry in a dropdown level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOption {
    pub id: String,
    pub name: String,
}

/// One staged dropdown: its options and the current choice, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeLevel {
    pub level: usize,
    pub options: Vec<UnitOption>,
    pub selected: Option<String>,
}

/// The staged cascading selector, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeView {
    pub levels: Vec<CascadeLevel>,
    /// Present for fixed-access principals: the full hierarchical
    /// name to show as a locked, non-interactive display. When set,
    /// `levels` is empty.
    pub locked_label: Option<String>,
}

/// Render the staged cascading variant.
///
/// One dropdown per chosen level, plus one further empty dropdown
/// while the current leaf still has visible children.
pub fn render_cascade(selector: &CascadeSelector<'_>) -> CascadeView {
    if selector.scope().is_fixed {
        let label = selector
            .state()
            .leaf()
            .map(|id| full_name(selector.catalog(), id));
        return CascadeView {
            levels: Vec::new(),
            locked_label: label,
        };
    }

    let path = &selector.state().path;
    let mut levels = Vec::new();

    for level in 0..=path.len() {
        let options: Vec<UnitOption> = selector
            .options_at(level)
            .iter()
            .map(|u| UnitOption {
                id: u.id.clone(),
                name: u.name.clone(),
            })
            .collect();
        let selected = path.get(level).cloned();

        // The trailing drill-down level only renders while there is
        // something to offer.
        if selected.is_none() && options.is_empty() {
            break;
        }
        levels.push(CascadeLevel {
            level,
            options,
            selected,
        });
    }

    CascadeView {
        levels,
        locked_label: None,
    }
}

/// Render the breadcrumb-chip variant: one label per chosen level.
/// Demonstrates a second visual style as a projection of the same
/// machine state.
pub fn render_breadcrumb(selector: &CascadeSelector<'_>) -> Vec<String> {
    selector
        .state()
        .path
        .iter()
        .filter_map(|id| selector.catalog().get(id))
        .map(|u| u.name.clone())
        .collect()
}
