//! Application-level coordination and workflow management.
//!
//! Handles document loading, error reporting, and item activation, and
//! keeps the subsystems consistent with each other.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::{DocumentSource, ItemRef};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing document loading workflows
/// - Handling loading completion
/// - Opening and closing item details
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous document loading.
    ///
    /// Clears the previous document immediately so the loading indicator shows.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_document_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                state.document.load_document(data, DocumentSource::File(path), &state.engine);
                state.selection.clear();
                state.error_message = None;
                state.layout.request_scroll_to_end();
                true
            }
            LoadResult::Error(error_msg) => {
                log::warn!("Timeline load failed: {}", error_msg);
                state.error_message = Some(format!("Error loading timeline: {}", error_msg));
                state.document.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Loads the built-in sample timeline.
    pub fn open_sample(state: &mut AppState, loader: &mut AsyncLoader) {
        match loader.load_sample() {
            Ok(data) => {
                state.reset_document_state();
                state.document.load_document(data, DocumentSource::Sample, &state.engine);
                state.layout.request_scroll_to_end();
            }
            Err(e) => {
                state.error_message = Some(format!("Error loading sample timeline: {}", e));
            }
        }
    }

    /// Handles activation of a timeline item (click, Enter or Space).
    ///
    /// Opens the details window for the item if it exists in the current layout.
    pub fn handle_item_activated(state: &mut AppState, item: ItemRef) {
        let exists = state
            .document
            .layout()
            .and_then(|layout| layout.item(item.kind, item.index))
            .is_some();

        if exists {
            state.selection.open_details(item);
        } else {
            log::warn!("Ignoring activation of unknown {} item {}", item.kind, item.index);
        }
    }

    /// Closes the details window.
    pub fn close_details(state: &mut AppState) {
        state.selection.close_details();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtimeline::TrackKind;

    #[test]
    fn test_open_sample_lays_out_both_tracks() {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();

        ApplicationCoordinator::open_sample(&mut state, &mut loader);

        let layout = state.document.layout().expect("sample should be laid out");
        assert_eq!(layout.education.items.len(), 4);
        assert_eq!(layout.experience.items.len(), 6);
        assert!(state.layout.take_scroll_to_end());
    }

    #[test]
    fn test_activation_opens_details_only_for_known_items() {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();

        ApplicationCoordinator::handle_item_activated(&mut state, ItemRef::new(TrackKind::Education, 0));
        assert!(!state.selection.is_details_open());

        ApplicationCoordinator::open_sample(&mut state, &mut loader);
        ApplicationCoordinator::handle_item_activated(&mut state, ItemRef::new(TrackKind::Education, 99));
        assert!(!state.selection.is_details_open());

        let item = ItemRef::new(TrackKind::Experience, 3);
        ApplicationCoordinator::handle_item_activated(&mut state, item);
        assert_eq!(state.selection.opened_item(), Some(item));

        ApplicationCoordinator::close_details(&mut state);
        assert!(!state.selection.is_details_open());
    }
}
