//! Status bar UI rendering
//!
//! Shows where the document came from, item counts and the hovered item.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_document_source, format_track_summary};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let (Some(source), Some(layout)) = (state.document.source(), state.document.layout()) else {
            ui.label(RichText::new("No timeline loaded").strong());
            return;
        };

        let source_label = ui.label(RichText::new(format_document_source(source)).strong());
        if let Some(path) = state.document.file_path() {
            source_label.on_hover_text(path.display().to_string());
        }

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format_track_summary(layout)).strong());

        let hovered = state
            .selection
            .hovered_item()
            .and_then(|item| layout.item(item.kind, item.index));
        if let Some(item) = hovered {
            ui.label(RichText::new("|").strong());
            ui.label(format!("{} ({})", item.title(), item.date_range));
        }
    });
}
