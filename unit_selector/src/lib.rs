#![forbid(unsafe_code)]

//! Unit selector — the selection state machine and render views over
//! the `unit_directory` catalog.
//!
//! Filter panels, search bars, and forms bind a selector to a
//! principal context, feed it events, and receive a single unit id
//! (or the "all units" sentinel) back. No domain lookups live here —
//! path resolution and visibility are delegated to `unit_directory`.

pub mod context;
pub mod machine;
pub mod selection;
pub mod view;

pub use context::{AccessScope, PrincipalContext};
pub use machine::{CascadeSelector, SelectorEvent, Transition};
pub use selection::{Selected, SelectionPhase, SelectionState};
pub use view::{render_breadcrumb, render_cascade, CascadeLevel, CascadeView, UnitOption};
