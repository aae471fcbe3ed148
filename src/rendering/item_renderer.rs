//! Timeline item rendering logic
//!
//! Draws one positioned item: a rounded box in its track color with the
//! title and organization clipped to the box.

use eframe::egui;
use rtimeline::{LayoutConfig, PositionedItem, ThemeColors};

use crate::presentation::color_mapping;
use crate::rendering::text_utils::truncate_text_to_fit;

const CORNER_RADIUS: f32 = 4.0;
const TEXT_INSET: egui::Vec2 = egui::vec2(6.0, 6.0);
const LINE_GAP: f32 = 3.0;

/// Renders a timeline item into `rect`
///
/// # Arguments
/// * `painter` - Painter of the timeline canvas
/// * `rect` - Screen rectangle of the item
/// * `item` - The laid-out item
/// * `config` - Layout configuration (label font sizes)
/// * `colors` - Color palette for the current theme
/// * `hovered` - Whether the pointer is over the item
/// * `focused` - Whether the item has keyboard focus
pub fn render_item(
    painter: &egui::Painter,
    rect: egui::Rect,
    item: &PositionedItem,
    config: &LayoutConfig,
    colors: &ThemeColors,
    hovered: bool,
    focused: bool,
) {
    painter.rect_filled(rect, CORNER_RADIUS, color_mapping::item_fill(item.kind, hovered, colors));

    if let Some(stroke) = color_mapping::item_outline(focused, colors) {
        painter.rect_stroke(rect, CORNER_RADIUS, stroke, egui::StrokeKind::Outside);
    }

    let text_painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let text_width = rect.width() - 2.0 * TEXT_INSET.x;

    let title_font = egui::FontId::proportional(config.title_font_size as f32);
    let title = truncate_text_to_fit(item.title(), text_width, &title_font, &text_painter);
    let title_pos = rect.left_top() + TEXT_INSET;
    text_painter.text(title_pos, egui::Align2::LEFT_TOP, title, title_font.clone(), colors.item_text);

    let org_top = title_pos.y + title_font.size + LINE_GAP;
    let org_font = egui::FontId::proportional(config.organization_font_size as f32);
    if org_top + org_font.size <= rect.bottom() {
        let organization = truncate_text_to_fit(item.organization(), text_width, &org_font, &text_painter);
        text_painter.text(
            egui::pos2(title_pos.x, org_top),
            egui::Align2::LEFT_TOP,
            organization,
            org_font,
            color_mapping::secondary_text(colors),
        );
    }
}
