//! Time axis rendering logic
//!
//! Draws year boundaries with labels and quarter ticks above the tracks.

use eframe::egui;
use rtimeline::LayoutConfig;

use crate::domain::canvas_operations::{self, CanvasSpan};

/// Renders the year axis
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `axis_rect` - The rectangular area to draw the axis in
/// * `span` - Horizontal span of the canvas
/// * `config` - Layout configuration (origin year, pixels per year)
pub fn render_time_axis(ui: &mut egui::Ui, axis_rect: egui::Rect, span: &CanvasSpan, config: &LayoutConfig) {
    let painter = ui.painter();
    painter.rect_filled(axis_rect, 0.0, ui.visuals().extreme_bg_color);

    let text_color = ui.visuals().text_color();
    let quarter = config.pixels_per_year / 4.0;

    for (year, offset) in canvas_operations::year_ticks(span, config) {
        let x = span.offset_to_x(offset, axis_rect.left());

        painter.line_segment(
            [egui::pos2(x, axis_rect.top()), egui::pos2(x, axis_rect.bottom())],
            egui::Stroke::new(1.5, text_color),
        );

        painter.text(
            egui::pos2(x + 4.0, axis_rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            year.to_string(),
            egui::FontId::proportional(12.0),
            text_color,
        );

        // Quarter ticks until the next year
        for q in 1..4 {
            let minor = offset + quarter * q as f64;
            if minor > span.end_offset {
                break;
            }
            let minor_x = span.offset_to_x(minor, axis_rect.left());
            painter.line_segment(
                [egui::pos2(minor_x, axis_rect.bottom() - 5.0), egui::pos2(minor_x, axis_rect.bottom())],
                egui::Stroke::new(1.0, text_color.gamma_multiply(0.5)),
            );
        }
    }
}
