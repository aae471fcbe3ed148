//! Asynchronous timeline document loading.
//!
//! This module loads timeline documents in background threads, keeping the
//! GUI responsive while files are read and decompressed.

use eframe::egui;
use rtimeline::{JsonTimelineReader, SampleTimelineReader, TimelineData, TimelineReader};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use crate::io::LoadingState;

/// Result of a completed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded records
        data: TimelineData,
        /// Path of the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of timeline documents.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<TimelineData, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Path of the file being loaded, if any.
    pub fn pending_path(&self) -> Option<&PathBuf> {
        self.pending_load_path.as_ref()
    }

    /// Starts loading a timeline document asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the document to load
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        log::info!("Loading timeline from {}", path_string);

        thread::spawn(move || {
            let reader = JsonTimelineReader::new();
            let result = reader.read(&path_string).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Returns the built-in sample timeline.
    ///
    /// The sample is in memory, so no background thread is involved.
    pub fn load_sample(&mut self) -> Result<TimelineData, String> {
        SampleTimelineReader::new().read("").map_err(|e| e.to_string())
    }

    /// Checks if background loading has completed and returns the result if available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - No result available (still loading or no operation active)
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();

        match (result, path) {
            (Ok(data), Some(path)) => LoadResult::Success { data, path },
            (Ok(_), None) => LoadResult::Error("Loaded document has no source path".to_string()),
            (Err(error_msg), _) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert!(loader.pending_path().is_none());
    }

    #[test]
    fn test_sample_loading() {
        let mut loader = AsyncLoader::new();
        let data = loader.load_sample().expect("sample timeline should load");
        assert_eq!(data.total_records(), 10);
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }
}
