//! Item focus, hover and activation state.
//!
//! Items are addressed by track and input index, which stay valid for as
//! long as the same document is loaded.

use rtimeline::TrackKind;

/// Identifies one laid-out item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub kind: TrackKind,
    pub index: usize,
}

impl ItemRef {
    pub fn new(kind: TrackKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// State related to user selection and hover.
///
/// Responsibilities:
/// - Tracking the hovered item
/// - Tracking the item whose details are shown
/// - Moving keyboard focus to the details window when it opens
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Item under the pointer
    hovered_item: Option<ItemRef>,
    /// Item whose details window is open
    opened_item: Option<ItemRef>,
    /// Set when the details window opens; consumed by the window's close button
    focus_close_button: bool,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            hovered_item: None,
            opened_item: None,
            focus_close_button: false,
        }
    }

    /// Clears all selection and hover state.
    pub fn clear(&mut self) {
        self.hovered_item = None;
        self.opened_item = None;
        self.focus_close_button = false;
    }

    // ===== Queries =====

    pub fn hovered_item(&self) -> Option<ItemRef> {
        self.hovered_item
    }

    /// Returns the item whose details are shown, if any.
    pub fn opened_item(&self) -> Option<ItemRef> {
        self.opened_item
    }

    pub fn is_details_open(&self) -> bool {
        self.opened_item.is_some()
    }

    // ===== Mutations =====

    pub fn set_hovered(&mut self, item: Option<ItemRef>) {
        self.hovered_item = item;
    }

    /// Opens the details window for `item`.
    pub fn open_details(&mut self, item: ItemRef) {
        self.opened_item = Some(item);
        self.focus_close_button = true;
    }

    /// Closes the details window.
    pub fn close_details(&mut self) {
        self.opened_item = None;
        self.focus_close_button = false;
    }

    /// Returns true once after the details window opened.
    pub fn take_close_button_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_close_button)
    }
}
