//! Copy and paste of layouts.
//!
//! The system clipboard and drag-and-drop are supplied by the application
//! through [`ClipboardSource`] and [`ClipboardSink`]. Pasting tries, in
//! order: a single dropped file, the tagged layout format, and plain text.
//! A source that fails to read or decode is skipped.

use std::collections::HashMap;
use std::path::PathBuf;

use layout_model::PlacedObject;

use crate::error::Result;
use crate::io::{load_layout_bytes, load_layout_file, save_objects};

/// Clipboard format name under which layouts are copied.
pub const CLIPBOARD_FORMAT: &str = "AnnoDesigner.Layout";

/// Read side of the clipboard (and drag-and-drop).
pub trait ClipboardSource {
    /// Paths of files dropped onto the clipboard.
    fn dropped_files(&self) -> Vec<PathBuf>;

    /// Bytes stored under a named format.
    fn data(&self, format: &str) -> Option<Vec<u8>>;

    /// Plain text content.
    fn text(&self) -> Option<String>;
}

/// Write side of the clipboard.
pub trait ClipboardSink {
    fn set_data(&mut self, format: &str, data: Vec<u8>);
}

/// Copy objects to the clipboard as a complete layout.
pub fn copy_to_clipboard<S>(objects: &[PlacedObject], sink: &mut S) -> Result<()>
where
    S: ClipboardSink + ?Sized,
{
    let mut bytes = Vec::new();
    save_objects(objects, &mut bytes)?;
    sink.set_data(CLIPBOARD_FORMAT, bytes);
    tracing::debug!(objects = objects.len(), "Copied layout to clipboard");
    Ok(())
}

/// Paste objects from the clipboard.
///
/// Clipboard content is loaded with `force_load`, since there is nobody to
/// confirm a version mismatch. Returns an empty list when no source holds a
/// layout.
pub fn paste_from_clipboard<S>(source: &S) -> Vec<PlacedObject>
where
    S: ClipboardSource + ?Sized,
{
    let files = source.dropped_files();
    if let [path] = files.as_slice() {
        match load_layout_file(path, true) {
            Ok(layout) => return layout.objects,
            Err(error) => {
                tracing::debug!(%error, path = %path.display(), "Dropped file is not a layout");
            }
        }
    }

    if let Some(bytes) = source.data(CLIPBOARD_FORMAT) {
        match load_layout_bytes(&bytes, true) {
            Ok(layout) => return layout.objects,
            Err(error) => {
                tracing::debug!(%error, "Clipboard layout data could not be decoded");
            }
        }
    }

    if let Some(text) = source.text() {
        match load_layout_bytes(text.as_bytes(), true) {
            Ok(layout) => return layout.objects,
            Err(error) => {
                tracing::debug!(%error, "Clipboard text is not a layout");
            }
        }
    }

    Vec::new()
}

/// In-process clipboard for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    files: Vec<PathBuf>,
    data: HashMap<String, Vec<u8>>,
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dropped_files(&mut self, files: Vec<PathBuf>) {
        self.files = files;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.files.clear();
        self.data.clear();
        self.text = None;
    }
}

impl ClipboardSource for MemoryClipboard {
    fn dropped_files(&self) -> Vec<PathBuf> {
        self.files.clone()
    }

    fn data(&self, format: &str) -> Option<Vec<u8>> {
        self.data.get(format).cloned()
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_data(&mut self, format: &str, data: Vec<u8>) {
        self.data.insert(format.to_string(), data);
    }
}
