//! Persistent storage for building layouts.
//!
//! This crate saves and loads layout files (`.ad`) and moves layouts through
//! the clipboard.
//!
//! # Features
//!
//! - **Version gate** - files from another format revision are refused until
//!   the caller forces the load
//! - **Every generation readable** - bare object arrays from the first
//!   designer releases load transparently
//! - **Atomic writes** to prevent data corruption
//! - **Clipboard paste** from a dropped file, the tagged clipboard format, or
//!   plain text
//!
//! # File Format
//!
//! ```text
//! Generation 1:  [ {object}, {object}, ... ]
//! Generation 2+: { "FileVersion": n, "LayoutVersion": "a.b.c.d",
//!                  "Modified": "<RFC 3339>", "Objects": [ ... ] }
//! ```
//!
//! The envelope (`FileVersion`, `LayoutVersion`, `Modified`) is probed
//! before the objects are decoded. Saving always writes the current
//! generation, so loading and re-saving a file migrates it.
//!
//! # Example
//!
//! ```ignore
//! use layout_persistence::{load_layout_file, save_layout_file, LayoutError};
//!
//! let mut layout = match load_layout_file(Path::new("city.ad"), false) {
//!     Err(error) if error.is_recoverable() => {
//!         // Ask the user, then force the load.
//!         load_layout_file(Path::new("city.ad"), true)?
//!     }
//!     other => other?,
//! };
//!
//! save_layout_file(&mut layout, Path::new("city.ad"))?;
//! ```
//!
//! # Architecture
//!
//! - `io/` - envelope probe, shape decoding, load and save
//! - `clipboard.rs` - copy/paste through clipboard collaborator traits
//! - `error.rs` - error types with user-friendly messages

mod clipboard;
mod error;
mod io;

pub use clipboard::{
    CLIPBOARD_FORMAT, ClipboardSink, ClipboardSource, MemoryClipboard, copy_to_clipboard,
    paste_from_clipboard,
};
pub use error::{LayoutError, Result};
pub use io::{
    DecodedLayout, LAYOUT_FILE_EXTENSION, LayoutShape, decode_layout, detect_shape,
    layout_to_bytes, load_layout, load_layout_bytes, load_layout_file, load_layout_file_async,
    probe_envelope, save_layout, save_layout_file, save_layout_file_async, save_objects,
};
