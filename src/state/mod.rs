//! State management modules for the timeline viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Document state (records, source, computed layout)
//! - Selection state (hovered item, details window)
//! - Theme state (theme manager, dark mode)
//! - Layout state (scrolling, axis sizing)

mod document_state;
mod selection;
mod theme_state;
mod layout_state;

pub use document_state::{DocumentSource, DocumentState};
pub use selection::{ItemRef, SelectionState};
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
