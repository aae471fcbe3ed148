//! Centralized application state for the timeline viewer.
//!
//! Composes focused state components that each manage one aspect of the
//! viewer, plus the layout engine that turns documents into geometry.

use rtimeline::{LayoutConfig, LayoutEngine};
use crate::state::{DocumentState, SelectionState, ThemeState, LayoutState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded document and its layout
    pub document: DocumentState,

    /// Hover and details window state
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Canvas layout state
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Layout engine used for every loaded document
    pub engine: LayoutEngine,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_theme_and_config(rtimeline::theme::LIGHT_THEME.to_string(), LayoutConfig::default())
    }

    /// Creates a new AppState with a theme loaded from storage and a layout configuration.
    pub fn with_theme_and_config(theme_name: String, config: LayoutConfig) -> Self {
        Self {
            document: DocumentState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::new(),
            engine: LayoutEngine::new(config),
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets document-related state before loading a new document.
    pub fn reset_document_state(&mut self) {
        self.document.clear();
        self.selection.clear();
        self.error_message = None;
    }
}
