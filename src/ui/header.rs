//! Header panel UI rendering
//!
//! Handles the top bar with document controls and the dark mode toggle.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a document in the file dialog
    OpenFileRequested(PathBuf),
    /// User clicked "Sample"
    OpenSampleRequested,
    /// User flipped the dark mode checkbox
    DarkModeToggled(bool),
}

/// Renders the application header with document controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Timeline").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Timeline Documents", &["json", "br"])
                .add_filter("JSON", &["json"])
                .add_filter("Brotli-compressed JSON", &["br"]);

            if let Some(dir) = state.document.file_path().and_then(|p| p.parent()) {
                dialog = dialog.set_directory(dir);
            } else if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("📋 Sample").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        // Push dark mode toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut dark = state.theme.is_dark_mode();
            if ui.checkbox(&mut dark, "🌙 Dark mode").changed() {
                interaction = Some(HeaderInteraction::DarkModeToggled(dark));
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(state.theme.colors().error, err);
    }

    interaction
}
