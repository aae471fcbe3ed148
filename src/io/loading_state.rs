//! Asynchronous loading state.

/// Holds the state of an async loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the loader thread can clear it.
pub struct LoadingState {
    /// True while a document is being read
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            in_progress: false,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
