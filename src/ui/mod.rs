//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the timeline viewer:
//! - Header panel (open document, sample, dark mode, error line)
//! - Timeline panel (year axis and the two tracks)
//! - Details window (modal with the full record)
//! - Status bar (document source and item counts)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod timeline_panel;
pub mod details_window;
pub mod status_bar;
pub mod panel_manager;
