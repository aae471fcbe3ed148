//! Loaded timeline document and its computed layout.
//!
//! This module encapsulates all state related to the loaded document:
//! where it came from and the layout computed from its records. Positioned
//! items carry their records, so the raw document is not kept.

use rtimeline::{LayoutEngine, TimelineData, TimelineLayout};
use std::path::PathBuf;

/// Where the current document came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// A timeline file on disk
    File(PathBuf),
    /// The built-in sample timeline
    Sample,
}

/// State related to the loaded timeline document.
///
/// Responsibilities:
/// - Tracking the document source
/// - Owning the layout of the current document
#[derive(Default)]
pub struct DocumentState {
    /// Source of the current document
    source: Option<DocumentSource>,
    /// Layout of the current document
    layout: Option<TimelineLayout>,
}

impl DocumentState {
    /// Creates a new document state with nothing loaded.
    pub fn new() -> Self {
        Self {
            source: None,
            layout: None,
        }
    }

    /// Loads a document and lays it out.
    ///
    /// # Arguments
    /// * `data` - The records to show
    /// * `source` - Where the records came from
    /// * `engine` - Layout engine to run over the records
    pub fn load_document(&mut self, data: TimelineData, source: DocumentSource, engine: &LayoutEngine) {
        self.layout = Some(engine.layout(&data));
        self.source = Some(source);
    }

    /// Clears all document state.
    pub fn clear(&mut self) {
        self.source = None;
        self.layout = None;
    }

    /// Returns the computed layout, if a document is loaded.
    pub fn layout(&self) -> Option<&TimelineLayout> {
        self.layout.as_ref()
    }

    /// Returns the source of the loaded document, if any.
    pub fn source(&self) -> Option<&DocumentSource> {
        self.source.as_ref()
    }

    /// Returns the file path of the loaded document, if it came from disk.
    pub fn file_path(&self) -> Option<&PathBuf> {
        match &self.source {
            Some(DocumentSource::File(path)) => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_computes_layout() {
        let mut state = DocumentState::new();
        let engine = LayoutEngine::default();
        state.load_document(rtimeline::sample_timeline().clone(), DocumentSource::Sample, &engine);

        let layout = state.layout().unwrap();
        assert_eq!(layout.education.items.len(), 4);
        assert_eq!(layout.experience.items.len(), 6);
        assert_eq!(state.source(), Some(&DocumentSource::Sample));
        assert!(state.file_path().is_none());

        state.clear();
        assert!(state.layout().is_none());
        assert!(state.source().is_none());
    }
}
