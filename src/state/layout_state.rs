//! UI layout state management.
//!
//! This module encapsulates state about how the timeline canvas is shown,
//! as opposed to where items are placed (which the layout engine decides).

/// State related to UI layout and scrolling.
///
/// Responsibilities:
/// - Scrolling the canvas to the latest entries after a load
/// - Sizing the axis header
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Scroll the canvas to its right end on the next frame
    scroll_to_end_pending: bool,
    /// Height of the year axis above the tracks
    axis_height: f32,
    /// Vertical space between the two tracks
    track_gap: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            scroll_to_end_pending: false,
            axis_height: 24.0,
            track_gap: 12.0,
        }
    }

    pub fn axis_height(&self) -> f32 {
        self.axis_height
    }

    pub fn track_gap(&self) -> f32 {
        self.track_gap
    }

    /// Requests a scroll to the right end of the canvas.
    pub fn request_scroll_to_end(&mut self) {
        self.scroll_to_end_pending = true;
    }

    /// Returns true once after a scroll to the end was requested.
    pub fn take_scroll_to_end(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_end_pending)
    }
}
