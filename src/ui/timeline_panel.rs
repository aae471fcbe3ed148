//! Timeline panel UI rendering
//!
//! Handles the central panel: a horizontally scrollable canvas with the year
//! axis on top and one band per track. Every item is a focusable, clickable
//! box; click, Enter or Space activates it and Tab moves between items in
//! track input order.

use crate::app::AppState;
use crate::domain::canvas_operations::CanvasSpan;
use crate::io::AsyncLoader;
use crate::rendering::{item_renderer, time_axis_renderer};
use crate::state::ItemRef;
use egui::{RichText, ScrollArea};
use rtimeline::{PositionedItem, ThemeColors};

/// Result of timeline panel interactions that need to be handled by the application.
pub enum TimelinePanelInteraction {
    /// An item was clicked or activated from the keyboard
    ItemActivated(ItemRef),
}

/// Renders the complete timeline panel with time axis and tracks.
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Option<TimelinePanelInteraction> {
    // Check if loading is in progress
    if loader.is_loading() {
        render_loading_indicator(ui, theme_colors, loader);
        ctx.request_repaint_after(std::time::Duration::from_secs_f32(0.1));
        return None;
    }

    let Some(layout) = state.document.layout() else {
        ui.label("No timeline loaded - open a timeline document or load the sample");
        return None;
    };

    let config = state.engine.config();
    let span = CanvasSpan::from_layout(layout, config);
    let axis_height = state.layout.axis_height();
    let track_gap = state.layout.track_gap();

    let mut scroll_area = ScrollArea::horizontal()
        .id_salt("timeline_scroll_area")
        .auto_shrink([false, false]);

    // Latest entries are on the right
    if state.layout.take_scroll_to_end() {
        scroll_area = scroll_area.horizontal_scroll_offset(span.width());
    }

    let mut interaction = None;
    let mut hovered = None;

    scroll_area.show(ui, |ui| {
        let (axis_rect, _) =
            ui.allocate_exact_size(egui::vec2(span.width(), axis_height), egui::Sense::hover());
        time_axis_renderer::render_time_axis(ui, axis_rect, &span, config);

        for track in layout.tracks() {
            ui.add_space(track_gap);
            ui.label(RichText::new(track.kind.title()).strong());

            let height = config.track_height.max(track.bottom_extent() + config.top_margin) as f32;
            let (track_rect, _) =
                ui.allocate_exact_size(egui::vec2(span.width(), height), egui::Sense::hover());
            ui.painter().rect_filled(track_rect, 4.0, theme_colors.track_background);

            // Input order, so Tab visits items the way they were written
            for item in &track.items {
                let item_ref = ItemRef::new(item.kind, item.index);
                let rect = item_rect(item, &span, track_rect);

                let response = ui.interact(
                    rect,
                    ui.id().with(("timeline_item", item.type_tag(), item.index)),
                    egui::Sense::click(),
                );

                let is_hovered = response.hovered();
                if is_hovered {
                    hovered = Some(item_ref);
                }

                item_renderer::render_item(
                    ui.painter(),
                    rect,
                    item,
                    config,
                    theme_colors,
                    is_hovered,
                    response.has_focus(),
                );

                if response.gained_focus() {
                    response.scroll_to_me(None);
                }

                if response.clicked() {
                    interaction = Some(TimelinePanelInteraction::ItemActivated(item_ref));
                }

                response.on_hover_text(format!("{}\n{}", item.title(), item.date_range));
            }
        }
    });

    state.selection.set_hovered(hovered);

    interaction
}

/// Screen rectangle of an item inside its track band.
fn item_rect(item: &PositionedItem, span: &CanvasSpan, track_rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            span.offset_to_x(item.offset, track_rect.left()),
            track_rect.top() + item.top as f32,
        ),
        egui::vec2(item.width as f32, item.height as f32),
    )
}

/// Renders a loading indicator when a document is being loaded.
fn render_loading_indicator(ui: &mut egui::Ui, theme_colors: &ThemeColors, loader: &AsyncLoader) {
    let canvas_rect = ui.available_rect_before_wrap();
    let center_pos = canvas_rect.center();
    let color = theme_colors.text_dim;

    ui.painter().text(
        center_pos,
        egui::Align2::CENTER_CENTER,
        "Loading...",
        egui::FontId::proportional(48.0),
        color,
    );

    if let Some(path) = loader.pending_path() {
        ui.painter().text(
            egui::pos2(center_pos.x, center_pos.y + 60.0),
            egui::Align2::CENTER_CENTER,
            path.display().to_string(),
            egui::FontId::proportional(18.0),
            color,
        );
    }
}
