//! Details window UI rendering
//!
//! Modal showing the full record of the activated item. The close button
//! takes keyboard focus when the window opens; Escape and a click outside
//! the window close it.

use eframe::egui;
use egui::{RichText, ScrollArea};
use rtimeline::{PositionedItem, ThemeColors};
use crate::app::AppState;

/// Result of user interaction with the details window
pub enum DetailsInteraction {
    /// The window was dismissed
    Closed,
}

/// Renders the details window for the opened item, if any
///
/// # Arguments
/// * `ctx` - egui context the modal is shown in
/// * `state` - Mutable reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_details_window(
    ctx: &egui::Context,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<DetailsInteraction> {
    let opened = state.selection.opened_item()?;

    let Some(item) = state.document.layout().and_then(|layout| layout.item(opened.kind, opened.index)) else {
        // The document changed under the window
        return Some(DetailsInteraction::Closed);
    };

    let focus_close_button = state.selection.take_close_button_focus();
    let mut close_clicked = false;

    let modal = egui::Modal::new(egui::Id::new("details_window")).show(ctx, |ui| {
        ui.set_width(420.0);

        render_details(ui, item, theme_colors);

        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let close_button = ui.button("Close");
            if focus_close_button {
                close_button.request_focus();
            }
            if close_button.clicked() {
                close_clicked = true;
            }
        });
    });

    if close_clicked || modal.should_close() {
        Some(DetailsInteraction::Closed)
    } else {
        None
    }
}

fn render_details(ui: &mut egui::Ui, item: &PositionedItem, theme_colors: &ThemeColors) {
    ui.label(RichText::new(item.title()).heading().color(theme_colors.text_strong));
    ui.colored_label(theme_colors.track_color(item.kind), item.kind.title());
    ui.separator();

    egui::Grid::new("details_fields").num_columns(2).spacing([12.0, 4.0]).show(ui, |ui| {
        ui.label(RichText::new("Company").strong());
        ui.label(item.organization());
        ui.end_row();

        ui.label(RichText::new("Duration").strong());
        ui.label(&item.date_range);
        ui.end_row();

        if let Some(score) = item.score() {
            ui.label(RichText::new("GPA").strong());
            ui.label(score);
            ui.end_row();
        }
    });

    ui.add_space(6.0);
    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .max_height(240.0)
        .show(ui, |ui| {
            if item.detail().is_empty() {
                ui.colored_label(theme_colors.text_dim, "(no details)");
            } else {
                ui.label(item.detail());
            }
        });
}
